//! CLI for clipgrab.

mod commands;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use clipgrab_core::config;
use clipgrab_core::downloader::DownloadMode;
use std::path::PathBuf;

use commands::run_grab;

/// Download the URL on the clipboard into the most recently changed project folder.
#[derive(Debug, Parser)]
#[command(name = "clipgrab", version)]
#[command(
    about = "Download video from clipboard URL to most recently changed project folder.",
    long_about = None
)]
pub struct Cli {
    /// The root directory to search within.
    pub root_dir: PathBuf,

    /// Optional extra subfolders to append.
    pub extra_subfolders: Vec<PathBuf>,

    /// Type of download (default: config `default_mode`, else video).
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub kind: Option<ModeArg>,

    /// Downloader executable (default: yt-dlp next to clipgrab).
    #[arg(long, value_name = "PATH")]
    pub downloader: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Audio,
    Video,
}

impl From<ModeArg> for DownloadMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Audio => DownloadMode::Audio,
            ModeArg::Video => DownloadMode::Video,
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default().unwrap_or_else(|e| {
            tracing::warn!("ignoring config: {:#}", e);
            config::ClipgrabConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        run_grab(cli, &cfg)
    }
}

#[cfg(test)]
mod tests;
