//! Errors surfaced by help rendering.

use thiserror::Error;

/// Lookup failures while resolving a command or class.
///
/// These never escape [`crate::help::Help`]: they are rendered as a single
/// line on the error sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelpError {
    /// The token did not resolve to a registered command. Carries the class
    /// name that was actually looked up.
    #[error("Command `{0}` not found")]
    CommandNotFound(String),

    /// The class path did not resolve to a reflected class.
    #[error("Class `{0}` not found")]
    ClassNotFound(String),
}

pub type HelpResult<T> = Result<T, HelpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_not_found_message_uses_backticks() {
        let err = HelpError::CommandNotFound("TestWithDashes".into());
        assert_eq!(err.to_string(), "Command `TestWithDashes` not found");
    }

    #[test]
    fn class_not_found_message_keeps_namespace() {
        let err = HelpError::ClassNotFound("lithium\\util\\Nope".into());
        assert_eq!(err.to_string(), "Class `lithium\\util\\Nope` not found");
    }
}
