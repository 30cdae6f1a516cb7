//! Configuration management for the VFS shell
//!
//! Ambient process configuration: an optional `vfs-shell.toml` in the
//! working directory plus environment overrides. The shell is fully
//! functional on built-in defaults, so a missing file is not an error.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Ambient shell configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    /// Fixed OS identity string printed by `uname`
    pub uname: String,

    /// VFS path probed for a message-of-the-day after snapshot load
    pub motd_path: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            uname: "Linux".to_string(),
            motd_path: "/motd.txt".to_string(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from vfs-shell.toml (optional) with environment
    /// overrides under the VFS_SHELL prefix.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("uname", "Linux")?
            .set_default("motd_path", "/motd.txt")?
            .add_source(File::with_name("vfs-shell").required(false))
            .add_source(Environment::with_prefix("VFS_SHELL"))
            .build()?;

        let config: ShellConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.uname.is_empty() {
            return Err(config::ConfigError::Message(
                "uname cannot be empty".into(),
            ));
        }

        if !self.motd_path.starts_with('/') {
            return Err(config::ConfigError::Message(
                "motd_path must be an absolute VFS path".into(),
            ));
        }

        Ok(())
    }
}
