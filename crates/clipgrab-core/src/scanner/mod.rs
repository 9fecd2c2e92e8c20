//! Recency scan: find the project folder holding the newest file.
//!
//! A project folder is a direct child of the search root. The scan walks the
//! whole tree, keeps the file with the latest modification time, and maps it
//! back to the child of the root it lives under.
//!
//! Visit order is deterministic: entries of each directory are sorted by
//! name and walked depth-first, which amounts to lexicographic path order.
//! On equal mtimes the first file visited wins.

mod walk;

use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

pub use walk::most_recent_file;

/// The newest file seen by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Returns `root/<project>/<extra_subfolders...>` where `<project>` is the
/// child of `root` containing the most recently modified file, or `None`
/// when the tree holds no files.
///
/// A newest file lying directly in `root` selects `root` itself.
pub fn most_recent_project_folder<P: AsRef<Path>>(
    root: &Path,
    extra_subfolders: &[P],
) -> Option<PathBuf> {
    let newest = most_recent_file(root)?;
    let project = project_folder_of(root, &newest.path);
    tracing::info!(
        "newest file {} selects project folder {}",
        newest.path.display(),
        project.display()
    );
    let mut folder = project;
    for segment in extra_subfolders {
        folder.push(segment);
    }
    Some(folder)
}

/// The child of `root` on the way to `file`, or `root` for files directly in it.
fn project_folder_of(root: &Path, file: &Path) -> PathBuf {
    let relative = match file.strip_prefix(root) {
        Ok(r) => r,
        Err(_) => return root.to_path_buf(),
    };
    let mut components = relative.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(first)), Some(_)) => root.join(first),
        _ => root.to_path_buf(),
    }
}
