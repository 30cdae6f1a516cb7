//! Error types
//!
//! Defines domain-specific error types for each module of the VFS shell.

use std::fmt;
use std::io;

/// VFS store errors
#[derive(Debug)]
pub enum VfsError {
    SnapshotNotFound(String),
    DirectoryNotFound(String),
    InvalidContent(base64::DecodeError),
    Io(io::Error),
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::SnapshotNotFound(p) => write!(f, "VFS snapshot not found: {}", p),
            VfsError::DirectoryNotFound(p) => write!(f, "No such directory: {}", p),
            VfsError::InvalidContent(e) => write!(f, "Invalid base64 content: {}", e),
            VfsError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for VfsError {}

impl From<io::Error> for VfsError {
    fn from(error: io::Error) -> Self {
        VfsError::Io(error)
    }
}

impl From<base64::DecodeError> for VfsError {
    fn from(error: base64::DecodeError) -> Self {
        VfsError::InvalidContent(error)
    }
}

/// Command parsing errors
#[derive(Debug)]
pub enum CommandError {
    BadArity(String),
    Unknown(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::BadArity(msg) => write!(f, "{}", msg),
            CommandError::Unknown(cmd) => write!(f, "Unknown command: {}", cmd),
        }
    }
}

impl std::error::Error for CommandError {}

/// Dispatcher-level error covering everything a single command can fail with
#[derive(Debug)]
pub enum ShellError {
    Command(CommandError),
    Vfs(VfsError),
    Io(io::Error),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Command(e) => write!(f, "{}", e),
            ShellError::Vfs(e) => write!(f, "{}", e),
            ShellError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<CommandError> for ShellError {
    fn from(error: CommandError) -> Self {
        ShellError::Command(error)
    }
}

impl From<VfsError> for ShellError {
    fn from(error: VfsError) -> Self {
        ShellError::Vfs(error)
    }
}

impl From<io::Error> for ShellError {
    fn from(error: io::Error) -> Self {
        ShellError::Io(error)
    }
}

/// A shell error tagged with the 1-based script line it occurred on
#[derive(Debug)]
pub struct ScriptError {
    pub line: usize,
    pub source: ShellError,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.source)
    }
}

impl std::error::Error for ScriptError {}

/// Fatal error that terminates the process with exit code 1
#[derive(Debug)]
pub enum FatalError {
    Usage(String),
    Config(config::ConfigError),
    Vfs(VfsError),
    ScriptNotFound(String),
    Script(ScriptError),
    Readline(rustyline::error::ReadlineError),
    Io(io::Error),
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::Usage(msg) => write!(f, "{}", msg),
            FatalError::Config(e) => write!(f, "Configuration error: {}", e),
            FatalError::Vfs(e) => write!(f, "{}", e),
            FatalError::ScriptNotFound(p) => write!(f, "Startup script not found: {}", p),
            FatalError::Script(e) => write!(f, "{}", e),
            FatalError::Readline(e) => write!(f, "Input error: {}", e),
            FatalError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FatalError {}

impl From<config::ConfigError> for FatalError {
    fn from(error: config::ConfigError) -> Self {
        FatalError::Config(error)
    }
}

impl From<VfsError> for FatalError {
    fn from(error: VfsError) -> Self {
        FatalError::Vfs(error)
    }
}

impl From<ScriptError> for FatalError {
    fn from(error: ScriptError) -> Self {
        FatalError::Script(error)
    }
}

impl From<rustyline::error::ReadlineError> for FatalError {
    fn from(error: rustyline::error::ReadlineError) -> Self {
        FatalError::Readline(error)
    }
}

impl From<io::Error> for FatalError {
    fn from(error: io::Error) -> Self {
        FatalError::Io(error)
    }
}
