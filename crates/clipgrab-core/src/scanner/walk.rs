//! Depth-first walk in sorted name order, tracking the newest file.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use super::RecentFile;

/// Newest regular file anywhere under `root`, or `None` if there are no files.
///
/// Unreadable directories and entries are skipped with a warning; they never
/// abort the scan. Symlinked directories are not descended into. A `root`
/// that is missing or is not a directory yields `None`.
pub fn most_recent_file(root: &Path) -> Option<RecentFile> {
    let candidates = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => file_candidate(&entry).map(Ok),
            Err(e) => Some(Err(e)),
        });

    let newest = newest_of(candidates);
    match &newest {
        Some(found) => tracing::debug!(
            "newest file under {}: {}",
            root.display(),
            found.path.display()
        ),
        None => tracing::debug!("no files under {}", root.display()),
    }
    newest
}

/// Keeps the first candidate with the greatest mtime; errors are logged and skipped.
fn newest_of<I, E>(candidates: I) -> Option<RecentFile>
where
    I: IntoIterator<Item = Result<RecentFile, E>>,
    E: Display,
{
    let mut newest: Option<RecentFile> = None;
    for candidate in candidates {
        let candidate = match candidate {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("skipping: {}", e);
                continue;
            }
        };
        if newest
            .as_ref()
            .map_or(true, |n| candidate.modified > n.modified)
        {
            newest = Some(candidate);
        }
    }
    newest
}

/// The entry as a regular file with its mtime. Symlinks are resolved, so a
/// link to a file counts and a link to a directory does not.
fn file_candidate(entry: &DirEntry) -> Option<RecentFile> {
    if entry.file_type().is_dir() {
        return None;
    }
    let path = entry.path();
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!("skipping {}: {}", path.display(), e);
            return None;
        }
    };
    if !metadata.is_file() {
        return None;
    }
    match metadata.modified() {
        Ok(modified) => Some(RecentFile {
            path: path.to_path_buf(),
            modified,
        }),
        Err(e) => {
            tracing::debug!("no mtime for {}: {}", path.display(), e);
            None
        }
    }
}
