//! Execution driver
//!
//! Runs the command dispatcher either once per REPL line (interactive,
//! fail-soft) or once per script line (batch, fail-fast). Both modes share
//! the same tokenizer and dispatcher; only their failure policy differs.

pub mod interactive;
pub mod prompt;
pub mod script;

pub use interactive::run_interactive;
pub use prompt::generate_prompt;
pub use script::run_script;

use crate::commands::{self, CommandResult};
use crate::error::ShellError;
use crate::session::Session;

/// Parses one tokenized line and dispatches it against the session.
pub(crate) fn dispatch_line(
    session: &mut Session,
    tokens: &[&str],
) -> Result<CommandResult, ShellError> {
    let command = commands::parse_command(tokens)?;
    commands::handle_command(session, command)
}
