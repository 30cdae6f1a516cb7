//! Command-line bootstrap
//!
//! Flag parsing and validation. `--help` exits 0 without touching the VFS;
//! every other parse failure becomes a fatal usage error (exit code 1).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

use crate::error::FatalError;

/// CSV-backed virtual filesystem shell emulator
#[derive(Parser, Debug)]
#[command(name = "vfs-shell")]
pub struct CliArgs {
    /// Path to the CSV snapshot of the virtual filesystem
    #[arg(short = 'v', long = "vfs-root", value_name = "PATH")]
    pub vfs_root: PathBuf,

    /// Startup script to execute in batch mode
    #[arg(short = 's', long = "script", value_name = "PATH")]
    pub script: Option<PathBuf>,
}

/// Parses process arguments, exiting 0 on `--help`.
pub fn parse_args() -> Result<CliArgs, FatalError> {
    match CliArgs::try_parse() {
        Ok(args) => Ok(args),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            print!("{}", e);
            process::exit(0);
        }
        Err(e) => Err(FatalError::Usage(e.to_string())),
    }
}
