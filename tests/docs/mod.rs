//! Documentation testing module.
//!
//! This module contains tests to verify:
//! - CLI help text completeness
//! - Error messages match documentation

mod help;
