//! Script mode
//!
//! The fail-fast batch executor: every executed line is echoed behind the
//! prompt, and the first command error halts execution with the offending
//! 1-based line number. `exit` stops the script successfully.

use std::fs;
use std::path::Path;

use log::info;
use owo_colors::OwoColorize;

use crate::commands::{CommandResult, tokenize};
use crate::error::{FatalError, ScriptError};
use crate::runner::dispatch_line;
use crate::runner::prompt::generate_prompt;
use crate::session::Session;

/// Reads and executes a startup script.
pub fn run_script(session: &mut Session, script_path: &Path) -> Result<(), FatalError> {
    if !script_path.exists() {
        return Err(FatalError::ScriptNotFound(
            script_path.display().to_string(),
        ));
    }

    let text = fs::read_to_string(script_path)?;

    println!("=== Executing startup script: {} ===\n", script_path.display());
    info!("Script execution started: {}", script_path.display());

    execute_script(session, &text)?;

    println!("\n=== Script completed ===");
    info!("Script execution finished");
    Ok(())
}

/// Executes script text line by line. Blank lines and lines whose first
/// non-space character is `#` are skipped but still counted for error
/// reporting.
pub fn execute_script(session: &mut Session, text: &str) -> Result<(), ScriptError> {
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        print!("{}", generate_prompt(session).green());
        println!("{}", line);

        let tokens = tokenize(line);
        match dispatch_line(session, &tokens) {
            Ok(CommandResult::Continue) => {}
            Ok(CommandResult::Exit) => return Ok(()),
            Err(source) => {
                return Err(ScriptError {
                    line: idx + 1,
                    source,
                });
            }
        }
    }

    Ok(())
}
