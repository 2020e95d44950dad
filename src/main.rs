use std::process::ExitCode;

use anyhow::Result;

fn main() -> Result<ExitCode> {
    // Load .env early; ignore if missing.
    dotenvy::dotenv().ok();

    li3_console::run()
}
