//! Extras mini-game launcher
//!
//! Runs the configured program in its own working directory and blocks until
//! it exits. The caller's display context is torn down while the child owns
//! the screen, so `restore` is called on every path, success or not.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::settings::Settings;

#[derive(Debug)]
pub enum LaunchError {
    /// Working directory for the Extras program does not exist
    MissingDir(PathBuf),
    Spawn(io::Error),
    /// Program ran but exited unsuccessfully
    Failed(ExitStatus),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDir(dir) => write!(f, "extras directory not found: {}", dir.display()),
            Self::Spawn(e) => write!(f, "failed to start extras: {e}"),
            Self::Failed(status) => write!(f, "extras exited with {status}"),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

/// Run the Extras program to completion, then call `restore`
pub fn launch_extras(settings: &Settings, restore: impl FnOnce()) -> Result<ExitStatus, LaunchError> {
    let result = run(settings);
    restore();
    match &result {
        Ok(status) => log::info!("Extras finished ({status})"),
        Err(e) => log::warn!("{e}"),
    }
    result
}

fn run(settings: &Settings) -> Result<ExitStatus, LaunchError> {
    let dir = &settings.extras_dir;
    if !dir.is_dir() {
        return Err(LaunchError::MissingDir(dir.clone()));
    }

    log::info!("Launching extras: {} in {}", settings.extras_program, dir.display());
    let status = Command::new(&settings.extras_program)
        .current_dir(dir)
        .status()
        .map_err(LaunchError::Spawn)?;

    if status.success() {
        Ok(status)
    } else {
        Err(LaunchError::Failed(status))
    }
}
