//! Prompt generation
//!
//! Builds the `{user}@{host}[{MODE}]:{path}$ ` prompt. Identity comes from
//! the environment; when it cannot be determined the whole prompt falls
//! back to a fixed placeholder rather than failing.

use std::env;

use crate::session::{Mode, Session};

const FALLBACK_PROMPT: &str = "user@host[UNKNOWN]:~$ ";

/// Builds the prompt for the session's current state.
pub fn generate_prompt(session: &Session) -> String {
    let user = env::var("USER").or_else(|_| env::var("USERNAME"));
    let host = env::var("HOSTNAME").or_else(|_| env::var("COMPUTERNAME"));

    match (user, host) {
        (Ok(user), Ok(host)) => {
            format_prompt(&user, &host, session.mode(), session.current_path())
        }
        _ => FALLBACK_PROMPT.to_string(),
    }
}

/// Formats a prompt from explicit parts. The root path renders as `~`.
pub fn format_prompt(user: &str, host: &str, mode: Mode, path: &str) -> String {
    let display_path = if path == "/" { "~" } else { path };
    format!("{}@{}[{}]:{}$ ", user, host, mode.as_str(), display_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_as_tilde() {
        assert_eq!(
            format_prompt("alice", "box", Mode::Interactive, "/"),
            "alice@box[REPL]:~$ "
        );
    }

    #[test]
    fn test_non_root_path_renders_verbatim() {
        assert_eq!(
            format_prompt("alice", "box", Mode::Script, "/home/docs"),
            "alice@box[SCRIPT]:/home/docs$ "
        );
    }
}
