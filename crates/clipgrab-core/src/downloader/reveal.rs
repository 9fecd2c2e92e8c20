use std::io;
use std::path::Path;
use std::process::Command;

/// Shows a folder to the user.
pub trait FolderOpener {
    fn open(&mut self, dir: &Path) -> io::Result<()>;
}

impl<T: FolderOpener + ?Sized> FolderOpener for &mut T {
    fn open(&mut self, dir: &Path) -> io::Result<()> {
        (**self).open(dir)
    }
}

/// Platform file browser: `explorer` on Windows, `open` on macOS,
/// `xdg-open` elsewhere. Launched without waiting.
#[derive(Debug, Default)]
pub struct SystemOpener;

#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const OPENER: &str = "xdg-open";

impl FolderOpener for SystemOpener {
    fn open(&mut self, dir: &Path) -> io::Result<()> {
        tracing::debug!("{} {}", OPENER, dir.display());
        Command::new(OPENER).arg(dir).spawn()?;
        Ok(())
    }
}
