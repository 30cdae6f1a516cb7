//! Interactive mode
//!
//! The fail-soft REPL: command errors are printed and the loop continues.
//! Only `exit` (or EOF) ends it.

use log::info;
use owo_colors::OwoColorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::commands::{CommandResult, tokenize};
use crate::error::FatalError;
use crate::runner::dispatch_line;
use crate::runner::prompt::generate_prompt;
use crate::session::Session;

/// Runs the read-eval-print loop until `exit` or EOF.
pub fn run_interactive(session: &mut Session) -> Result<(), FatalError> {
    println!("Mode: interactive (REPL)\n");

    let mut rl = DefaultEditor::new()?;

    loop {
        let prompt = generate_prompt(session).green().to_string();
        match rl.readline(&prompt) {
            Ok(line) => {
                let tokens = tokenize(&line);
                if tokens.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match dispatch_line(session, &tokens) {
                    Ok(CommandResult::Continue) => {}
                    Ok(CommandResult::Exit) => break,
                    Err(e) => println!("{}", format!("Error: {}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                info!("EOF on stdin, leaving the REPL");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
