//! Where clipgrab looks for its config file and writes its log.
//!
//! Unix targets follow the XDG base directory layout; elsewhere the config
//! sits next to the executable and logs go to stderr.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "clipgrab";

/// Directory containing the running executable.
pub fn exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate current executable")?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .with_context(|| format!("executable has no parent directory: {}", exe.display()))
}

/// Existing config file, if the user created one.
#[cfg(unix)]
pub fn find_config_file() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

#[cfg(not(unix))]
pub fn find_config_file() -> Result<Option<PathBuf>> {
    let path = exe_dir()?.join(format!("{APP_NAME}.toml"));
    Ok(path.is_file().then_some(path))
}

/// Log file path under the XDG state dir (parent directories are created).
/// `None` means there is no per-user state dir on this target.
#[cfg(unix)]
pub fn log_file() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    let path = xdg_dirs
        .place_state_file(format!("{APP_NAME}.log"))
        .context("create log directory")?;
    Ok(Some(path))
}

#[cfg(not(unix))]
pub fn log_file() -> Result<Option<PathBuf>> {
    Ok(None)
}
