use std::path::Path;
use std::time::Duration;

use log::info;

use crate::commands::parser::{Command, CommandResult};
use crate::error::{ShellError, VfsError};
use crate::navigate::{normalize_path, resolve_path};
use crate::session::Session;

// Handle a single command against the session
pub fn handle_command(
    session: &mut Session,
    command: Command,
) -> Result<CommandResult, ShellError> {
    match command {
        Command::Ls(path) => handle_cmd_ls(session, path.as_deref()),
        Command::Cd(path) => handle_cmd_cd(session, &path),
        Command::Pwd => handle_cmd_pwd(session),
        Command::VfsSave(path) => handle_cmd_vfs_save(session, &path),
        Command::Uname => handle_cmd_uname(session),
        Command::Uptime => handle_cmd_uptime(session),
        Command::Exit => handle_cmd_exit(),
    }
}

// Command handler for ls
fn handle_cmd_ls(session: &Session, path: Option<&str>) -> Result<CommandResult, ShellError> {
    let target = match path {
        Some(p) => normalize_path(&resolve_path(p, session.current_path())),
        None => session.current_path().to_string(),
    };

    let children = session.store().list_children(&target)?;
    for child in children {
        println!("{}", child);
    }
    Ok(CommandResult::Continue)
}

// Command handler for cd
fn handle_cmd_cd(session: &mut Session, path: &str) -> Result<CommandResult, ShellError> {
    let new_path = normalize_path(&resolve_path(path, session.current_path()));

    if !session.store().is_directory(&new_path) {
        return Err(VfsError::DirectoryNotFound(new_path).into());
    }

    session.set_current_path(new_path);
    Ok(CommandResult::Continue)
}

// Command handler for pwd
fn handle_cmd_pwd(session: &Session) -> Result<CommandResult, ShellError> {
    println!("{}", session.current_path());
    Ok(CommandResult::Continue)
}

// Command handler for vfs-save
fn handle_cmd_vfs_save(session: &Session, path: &str) -> Result<CommandResult, ShellError> {
    session.store().save(Path::new(path))?;
    info!("Snapshot written to {}", path);
    Ok(CommandResult::Continue)
}

// Command handler for uname
fn handle_cmd_uname(session: &Session) -> Result<CommandResult, ShellError> {
    println!("{}", session.config().uname);
    Ok(CommandResult::Continue)
}

// Command handler for uptime
fn handle_cmd_uptime(session: &Session) -> Result<CommandResult, ShellError> {
    println!("{}", format_uptime(session.started().elapsed()));
    Ok(CommandResult::Continue)
}

// Command handler for exit
fn handle_cmd_exit() -> Result<CommandResult, ShellError> {
    println!("Exiting...");
    Ok(CommandResult::Exit)
}

/// Renders elapsed time in its coarsest applicable unit. The minute part of
/// an hour-scale uptime appears only when the remainder is nonzero.
fn format_uptime(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;

    if hours >= 1 {
        if minutes > 0 {
            format!(
                "up {} hour{}, {} minute{}",
                hours,
                plural(hours),
                minutes,
                plural(minutes)
            )
        } else {
            format!("up {} hour{}", hours, plural(hours))
        }
    } else if total_secs >= 60 {
        let minutes = total_secs / 60;
        format!("up {} minute{}", minutes, plural(minutes))
    } else {
        format!("up {} second{}", total_secs, plural(total_secs))
    }
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
