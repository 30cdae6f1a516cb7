//! VFS Shell - Entry Point
//!
//! Loads the CSV snapshot, then hands control to the interactive REPL or
//! the startup-script executor. Any fatal error exits with code 1.

use std::process;

use log::{debug, error};
use owo_colors::OwoColorize;

use vfs_shell::cli;
use vfs_shell::config::ShellConfig;
use vfs_shell::error::FatalError;
use vfs_shell::runner;
use vfs_shell::session::{Mode, Session};
use vfs_shell::vfs::VfsStore;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        println!("{}", format!("Fatal error: {}", e).red());
        process::exit(1);
    }
}

fn run() -> Result<(), FatalError> {
    let args = cli::parse_args()?;
    debug!("VFS snapshot: {}", args.vfs_root.display());
    if let Some(script) = &args.script {
        debug!("Startup script: {}", script.display());
    }

    println!("=== VFS Shell Emulator ===\n");

    let config = ShellConfig::load()?;

    let mut store = VfsStore::new();
    store.load(&args.vfs_root)?;

    let mode = if args.script.is_some() {
        Mode::Script
    } else {
        Mode::Interactive
    };
    let mut session = Session::new(store, mode, config);

    print_motd(&session);

    match &args.script {
        Some(script) => runner::run_script(&mut session, script),
        None => runner::run_interactive(&mut session),
    }
}

/// Prints the message of the day if the snapshot carries one.
fn print_motd(session: &Session) {
    if let Some(node) = session.store().get(&session.config().motd_path) {
        println!("{}", String::from_utf8_lossy(node.content()).cyan());
    }
}
