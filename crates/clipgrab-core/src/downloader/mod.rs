//! Downloader invocation: argument building, process launch and folder reveal.
//!
//! The download itself is done by an external `yt-dlp` executable. Its flags
//! (`-o`, `-x`, `--audio-format`, `--audio-quality`, `-S`, `-f`) are a fixed
//! contract; this module only assembles them.

mod invoke;
mod process;
mod reveal;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

pub use invoke::{download_and_reveal, DownloadFailure};
pub use process::{ProcessExit, ProcessRunner, SystemRunner};
pub use reveal::{FolderOpener, SystemOpener};

use crate::paths;

/// Executable name (without platform suffix) looked up next to clipgrab.
pub const DOWNLOADER_NAME: &str = "yt-dlp";

const VIDEO_SORT: &str = "vcodec:h264";
const VIDEO_FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/mp4";

/// What to keep from the clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMode {
    /// mp3 at best quality.
    Audio,
    /// h264 mp4 with m4a audio.
    #[default]
    Video,
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Audio => write!(f, "audio"),
            DownloadMode::Video => write!(f, "video"),
        }
    }
}

impl FromStr for DownloadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(DownloadMode::Audio),
            "video" => Ok(DownloadMode::Video),
            other => Err(format!("unknown download type {other:?} (expected audio or video)")),
        }
    }
}

/// One download: source URL, output path template and mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    /// Folder the download goes into; this is what gets opened afterwards,
    /// even when the template adds its own subdirectories.
    pub output_dir: PathBuf,
    /// `output_dir` joined with a filename template (e.g. `%(title)s.%(ext)s`);
    /// the tokens are filled in by the downloader.
    pub output_template: PathBuf,
    pub mode: DownloadMode,
}

impl DownloadRequest {
    pub fn new(
        url: impl Into<String>,
        output_dir: &Path,
        template: &str,
        mode: DownloadMode,
    ) -> Self {
        Self {
            url: url.into(),
            output_dir: output_dir.to_path_buf(),
            output_template: output_template_for(output_dir, template),
            mode,
        }
    }
}

/// True if `template` stays inside the folder it is joined onto: relative,
/// non-empty, and without `..` components.
pub fn template_stays_inside(template: &str) -> bool {
    let path = Path::new(template);
    !template.trim().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// `folder` joined with the filename `template`.
pub fn output_template_for(folder: &Path, template: &str) -> PathBuf {
    folder.join(template)
}

/// Argument vector for the downloader (program name not included).
pub fn build_args(request: &DownloadRequest) -> Vec<String> {
    let mut args: Vec<String> = match request.mode {
        DownloadMode::Audio => vec![
            "-x".into(),
            "--audio-format".into(),
            "mp3".into(),
            "--audio-quality".into(),
            "0".into(),
        ],
        DownloadMode::Video => vec![
            "-S".into(),
            VIDEO_SORT.into(),
            "-f".into(),
            VIDEO_FORMAT.into(),
        ],
    };
    args.push("-o".into());
    args.push(request.output_template.to_string_lossy().into_owned());
    args.push(request.url.clone());
    args
}

/// `yt-dlp` (or `yt-dlp.exe`) in the directory of the running executable.
pub fn default_downloader_path() -> Result<PathBuf> {
    Ok(paths::exe_dir()?.join(format!(
        "{}{}",
        DOWNLOADER_NAME,
        std::env::consts::EXE_SUFFIX
    )))
}
