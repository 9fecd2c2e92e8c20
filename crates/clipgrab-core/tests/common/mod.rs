//! Fakes for the pipeline's collaborators and helpers for building trees.

use clipgrab_core::downloader::{FolderOpener, ProcessExit, ProcessRunner};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Records every invocation and answers with a fixed exit code.
pub struct FakeRunner {
    pub exit_code: Option<i32>,
    pub calls: Vec<(PathBuf, Vec<String>)>,
}

impl FakeRunner {
    pub fn exiting_with(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            calls: Vec::new(),
        }
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&mut self, program: &Path, args: &[String]) -> io::Result<ProcessExit> {
        self.calls.push((program.to_path_buf(), args.to_vec()));
        Ok(ProcessExit {
            code: self.exit_code,
        })
    }
}

/// Records the folders it was asked to open.
#[derive(Default)]
pub struct FakeOpener {
    pub opened: Vec<PathBuf>,
}

impl FolderOpener for FakeOpener {
    fn open(&mut self, dir: &Path) -> io::Result<()> {
        self.opened.push(dir.to_path_buf());
        Ok(())
    }
}

/// Creates `path` (and parents) with the given mtime in seconds since the epoch.
pub fn touch(path: &Path, secs: u64) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::File::create(path)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}
