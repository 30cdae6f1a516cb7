//! Module `session`
//!
//! Defines the `Session` struct holding all mutable shell state: the VFS
//! store, the current-directory cursor, the execution mode, and the process
//! start instant. Owned by the execution driver and passed into the command
//! dispatcher; there is no global state.

use std::time::Instant;

use crate::config::ShellConfig;
use crate::vfs::VfsStore;

/// Execution mode, reflected in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Script,
}

impl Mode {
    /// The prompt tag for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Interactive => "REPL",
            Mode::Script => "SCRIPT",
        }
    }
}

/// All state one shell run carries between commands.
pub struct Session {
    store: VfsStore,
    current_path: String,
    mode: Mode,
    started: Instant,
    config: ShellConfig,
}

impl Session {
    /// Creates a session rooted at `/`.
    pub fn new(store: VfsStore, mode: Mode, config: ShellConfig) -> Self {
        Self {
            store,
            current_path: "/".to_string(),
            mode,
            started: Instant::now(),
            config,
        }
    }

    /// Returns the VFS store.
    pub fn store(&self) -> &VfsStore {
        &self.store
    }

    /// Returns the current working directory cursor.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Replaces the cursor. Callers must pass a normalized absolute path
    /// that resolves to an existing directory.
    pub fn set_current_path(&mut self, path: String) {
        self.current_path = path;
    }

    /// Returns the execution mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the instant the process started, for `uptime`.
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Returns the ambient configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}
