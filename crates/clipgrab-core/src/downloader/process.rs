use std::io;
use std::path::Path;
use std::process::Command;

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion.
pub trait ProcessRunner {
    /// Spawn `program` with `args`, block until it exits.
    fn run(&mut self, program: &Path, args: &[String]) -> io::Result<ProcessExit>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &mut T {
    fn run(&mut self, program: &Path, args: &[String]) -> io::Result<ProcessExit> {
        (**self).run(program, args)
    }
}

/// Spawns a real child process with inherited stdio, so the downloader's own
/// progress output reaches the terminal. No timeout.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, program: &Path, args: &[String]) -> io::Result<ProcessExit> {
        let status = Command::new(program).args(args).status()?;
        Ok(ProcessExit {
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_success_only_on_zero() {
        assert!(ProcessExit { code: Some(0) }.success());
        assert!(!ProcessExit { code: Some(1) }.success());
        assert!(!ProcessExit { code: None }.success());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-downloader");
        let err = SystemRunner.run(&missing, &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_is_reported() {
        let exit = SystemRunner
            .run(Path::new("sh"), &["-c".to_string(), "exit 3".to_string()])
            .unwrap();
        assert_eq!(exit.code, Some(3));
        let exit = SystemRunner
            .run(Path::new("sh"), &["-c".to_string(), "exit 0".to_string()])
            .unwrap();
        assert!(exit.success());
    }
}
