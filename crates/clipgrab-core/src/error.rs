//! Ways a clipgrab run can end early. Each `Display` is the message shown to
//! the user.

use std::io;
use std::path::PathBuf;

use crate::downloader::DownloadFailure;

#[derive(Debug, thiserror::Error)]
pub enum GrabError {
    /// Clipboard holds no text, or could not be opened.
    #[error("No URL found in clipboard. Please copy a valid URL and try again.")]
    ClipboardUnavailable,

    /// Clipboard text does not look like a URL.
    #[error("Invalid URL found in clipboard. Please copy a valid URL and try again.")]
    InvalidUrl { text: String },

    /// The search root contains no files at all.
    #[error("No files found within subdirectories.")]
    NoProjectFolder { root: PathBuf },

    /// Destination folder could not be created.
    #[error("Could not create output folder {}: {source}", .path.display())]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The downloader failed; the output folder has been opened anyway.
    #[error("Error occurred while downloading: {0}")]
    DownloadProcessFailed(#[source] DownloadFailure),

    /// Writing progress output failed.
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}
