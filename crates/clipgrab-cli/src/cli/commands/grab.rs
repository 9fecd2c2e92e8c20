//! `clipgrab <root_dir> [extra_subfolders...]` – download the clipboard URL.

use anyhow::Result;
use clipgrab_core::clipboard::{ClipboardSource, SystemClipboard};
use clipgrab_core::config::ClipgrabConfig;
use clipgrab_core::downloader::{self, FolderOpener, ProcessRunner, SystemOpener, SystemRunner};
use clipgrab_core::pipeline::{GrabJob, Pipeline};
use std::io::{self, Write};

use crate::cli::Cli;

/// Merges CLI arguments with config: flag, then config key, then default.
pub fn build_job(cli: Cli, cfg: &ClipgrabConfig) -> Result<GrabJob> {
    let downloader = match cli.downloader.or_else(|| cfg.downloader.clone()) {
        Some(path) => path,
        None => downloader::default_downloader_path()?,
    };
    Ok(GrabJob {
        root: cli.root_dir,
        extra_subfolders: cli.extra_subfolders,
        mode: cfg.resolve_mode(cli.kind.map(Into::into)),
        downloader,
        output_template: cfg.output_template.clone(),
    })
}

/// Runs one download against the real clipboard, downloader and file browser.
pub fn run_grab(cli: Cli, cfg: &ClipgrabConfig) -> Result<()> {
    let job = build_job(cli, cfg)?;
    tracing::info!(
        "grab root={} extra={:?} mode={}",
        job.root.display(),
        job.extra_subfolders,
        job.mode
    );

    let mut pipeline = Pipeline::new(SystemClipboard::new(), SystemRunner, SystemOpener);
    grab_and_report(&mut pipeline, &job, &mut io::stdout().lock())
}

/// Runs the pipeline and prints how it ended. Expected failures (no URL,
/// no folder, downloader error) are messages for the user, not errors for
/// the process; only a failing `out` is.
pub fn grab_and_report<C, R, O>(
    pipeline: &mut Pipeline<C, R, O>,
    job: &GrabJob,
    out: &mut dyn Write,
) -> Result<()>
where
    C: ClipboardSource,
    R: ProcessRunner,
    O: FolderOpener,
{
    match pipeline.run(job, out) {
        Ok(folder) => writeln!(out, "Saved to {}", folder.display())?,
        Err(err) => {
            tracing::warn!("run ended: {:?}", err);
            writeln!(out, "{err}")?;
        }
    }
    Ok(())
}
