//! Run the downloader, then always reveal the output folder.

use std::io::{self, Write};
use std::path::Path;

use super::{build_args, DownloadMode, DownloadRequest, FolderOpener, ProcessRunner};

const RULE_WIDTH: usize = 20;

/// Why a download did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum DownloadFailure {
    #[error("could not start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("downloader exited with status {0}")]
    Exited(i32),
    #[error("downloader was terminated by a signal")]
    Killed,
}

fn write_banner(out: &mut dyn Write, mode: DownloadMode) -> io::Result<()> {
    let (title, what) = match mode {
        DownloadMode::Audio => ("DOWNLOADING AUDIO", "audio"),
        DownloadMode::Video => ("DOWNLOADING VIDEO", "video"),
    };
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(
        out,
        "Please be patient, this may take a while depending on the size of the {what}."
    )?;
    writeln!(
        out,
        "WARNING: Ensure you have the rights to download and use this {what}."
    )?;
    writeln!(out, "{rule}\n")
}

/// Runs `downloader` for `request`, blocking until it exits, then opens the
/// output folder whether or not the download succeeded (partial results stay
/// inspectable). Banner and command line go to `out`.
///
/// Returns `Ok(Ok(()))` on success, `Ok(Err(_))` when the download failed, and
/// `Err` only if writing to `out` failed.
pub fn download_and_reveal<R, O>(
    runner: &mut R,
    opener: &mut O,
    downloader: &Path,
    request: &DownloadRequest,
    out: &mut dyn Write,
) -> io::Result<Result<(), DownloadFailure>>
where
    R: ProcessRunner + ?Sized,
    O: FolderOpener + ?Sized,
{
    let args = build_args(request);
    write_banner(out, request.mode)?;
    writeln!(out, "Running command: {} {}", downloader.display(), args.join(" "))?;
    out.flush()?;

    tracing::info!("running {} {:?}", downloader.display(), args);
    let outcome = match runner.run(downloader, &args) {
        Ok(exit) if exit.success() => Ok(()),
        Ok(exit) => Err(match exit.code {
            Some(code) => DownloadFailure::Exited(code),
            None => DownloadFailure::Killed,
        }),
        Err(source) => Err(DownloadFailure::Spawn {
            program: downloader.display().to_string(),
            source,
        }),
    };
    match &outcome {
        Ok(()) => tracing::info!("download finished"),
        Err(e) => tracing::warn!("download failed: {}", e),
    }

    let dir = &request.output_dir;
    if let Err(e) = opener.open(dir) {
        tracing::warn!("could not open {}: {}", dir.display(), e);
    }

    Ok(outcome)
}
