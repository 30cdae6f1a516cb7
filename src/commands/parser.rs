// Command enum to represent shell commands
use crate::error::CommandError;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Ls(Option<String>),
    Cd(String),
    Pwd,
    VfsSave(String),
    Uname,
    Uptime,
    Exit,
}

/// Signal returned by the dispatcher: keep looping or stop.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}

/// Splits a command line into whitespace-separated tokens, collapsing
/// runs of whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

// Parse a non-empty token list into a Command. The command word is matched
// case-insensitively; arguments are never case-folded.
pub fn parse_command(tokens: &[&str]) -> Result<Command, CommandError> {
    let cmd = tokens[0].to_lowercase();
    let args = &tokens[1..];

    match cmd.as_str() {
        "ls" => Ok(Command::Ls(args.first().map(|s| s.to_string()))),
        "cd" => {
            if args.len() != 1 {
                return Err(CommandError::BadArity(
                    "The 'cd' command takes exactly one argument: the target path".to_string(),
                ));
            }
            Ok(Command::Cd(args[0].to_string()))
        }
        "pwd" => Ok(Command::Pwd),
        "vfs-save" => {
            if args.len() != 1 {
                return Err(CommandError::BadArity(
                    "The 'vfs-save' command takes exactly one argument: the output path"
                        .to_string(),
                ));
            }
            Ok(Command::VfsSave(args[0].to_string()))
        }
        "uname" => Ok(Command::Uname),
        "uptime" => Ok(Command::Uptime),
        "exit" => Ok(Command::Exit),
        _ => Err(CommandError::Unknown(tokens[0].to_string())),
    }
}
