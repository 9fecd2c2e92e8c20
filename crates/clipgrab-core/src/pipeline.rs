//! One clipgrab run: find the project folder, read and check the clipboard
//! URL, then hand off to the downloader.
//!
//! Straight-line and blocking; the only wait is on the downloader process.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::clipboard::ClipboardSource;
use crate::downloader::{
    download_and_reveal, DownloadMode, DownloadRequest, FolderOpener, ProcessRunner,
};
use crate::error::GrabError;
use crate::scanner;
use crate::url_model;

/// Inputs for a run, already merged from CLI and config.
#[derive(Debug, Clone)]
pub struct GrabJob {
    /// Directory whose children are the candidate project folders.
    pub root: PathBuf,
    /// Appended below the selected project folder.
    pub extra_subfolders: Vec<PathBuf>,
    pub mode: DownloadMode,
    /// Downloader executable.
    pub downloader: PathBuf,
    /// Filename template, e.g. `%(title)s.%(ext)s`. Relative to the project
    /// folder; see [`crate::downloader::template_stays_inside`].
    pub output_template: String,
}

/// Owns the collaborators a run talks to.
pub struct Pipeline<C, R, O> {
    clipboard: C,
    runner: R,
    opener: O,
}

impl<C, R, O> Pipeline<C, R, O>
where
    C: ClipboardSource,
    R: ProcessRunner,
    O: FolderOpener,
{
    pub fn new(clipboard: C, runner: R, opener: O) -> Self {
        Self {
            clipboard,
            runner,
            opener,
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Runs the job and returns the folder the download went to.
    ///
    /// A failed download comes back as [`GrabError::DownloadProcessFailed`]
    /// after the folder has been opened.
    pub fn run(&mut self, job: &GrabJob, out: &mut dyn Write) -> Result<PathBuf, GrabError> {
        let folder = scanner::most_recent_project_folder(&job.root, &job.extra_subfolders)
            .ok_or_else(|| GrabError::NoProjectFolder {
                root: job.root.clone(),
            })?;

        let text = self
            .clipboard
            .read_text()
            .ok_or(GrabError::ClipboardUnavailable)?;
        let url = url_model::clean_clipboard_text(&text).ok_or(GrabError::ClipboardUnavailable)?;
        if !url_model::is_valid_url(url) {
            tracing::info!("rejected clipboard text {:?}", url);
            return Err(GrabError::InvalidUrl {
                text: url.to_string(),
            });
        }

        fs::create_dir_all(&folder).map_err(|source| GrabError::CreateFolder {
            path: folder.clone(),
            source,
        })?;

        let request = DownloadRequest::new(url, &folder, &job.output_template, job.mode);
        download_and_reveal(
            &mut self.runner,
            &mut self.opener,
            &job.downloader,
            &request,
            out,
        )?
        .map_err(GrabError::DownloadProcessFailed)?;

        Ok(folder)
    }
}
