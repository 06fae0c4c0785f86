//! Process runner abstraction.
//!
//! The executor talks to external processes through the [`Runner`] trait so
//! tests can substitute deterministic stubs. [`SystemRunner`] is the
//! production implementation backed by `std::process::Command`.

use crate::validator::CommandAttempt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured output of one completed process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Process exit code. A signal-terminated process reports no code and is
    /// normalized to 0, so 0 does not strictly imply a clean exit.
    pub exit_code: i32,
    /// Trimmed standard output.
    pub stdout: String,
    /// Trimmed standard error.
    pub stderr: String,
}

/// Spawns a candidate invocation and captures its output.
///
/// A missing executable must surface as [`io::ErrorKind::NotFound`] (the
/// ENOENT convention); the executor treats that class as the signal to fall
/// back to the next attempt and every other failure as fatal.
pub trait Runner {
    fn run(&self, attempt: &CommandAttempt, cwd: &Path) -> io::Result<RunOutcome>;
}

/// Production runner: spawns the attempt with null stdin and captured
/// stdout/stderr, blocking until the process exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, attempt: &CommandAttempt, cwd: &Path) -> io::Result<RunOutcome> {
        let output = Command::new(&attempt.command)
            .args(&attempt.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()?;

        Ok(RunOutcome {
            // No code means signal termination; normalized to 0.
            exit_code: output.status.code().unwrap_or(0),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(command: &str, args: &[&str]) -> CommandAttempt {
        CommandAttempt::new(command, args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn captures_and_trims_stdout() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        #[cfg(windows)]
        let attempt = attempt("cmd", &["/c", "echo hello"]);
        #[cfg(not(windows))]
        let attempt = attempt("sh", &["-c", "echo hello"]);

        let outcome = SystemRunner.run(&attempt, temp_dir.path()).unwrap();
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.stdout, "hello");
        assert_eq!(outcome.stderr, "");
    }

    #[test]
    fn captures_nonzero_exit_code_and_stderr() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        #[cfg(windows)]
        let attempt = attempt("cmd", &["/c", "echo oops 1>&2 & exit 3"]);
        #[cfg(not(windows))]
        let attempt = attempt("sh", &["-c", "echo oops >&2; exit 3"]);

        let outcome = SystemRunner.run(&attempt, temp_dir.path()).unwrap();
        assert_eq!(outcome.exit_code, 3);
        assert_eq!(outcome.stderr, "oops");
    }

    #[test]
    fn missing_executable_classifies_as_not_found() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let attempt = attempt("nonexistent_command_xyz_123", &[]);

        let err = SystemRunner.run(&attempt, temp_dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn runs_in_the_given_working_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        #[cfg(windows)]
        let attempt = attempt("cmd", &["/c", "cd"]);
        #[cfg(not(windows))]
        let attempt = attempt("pwd", &[]);

        let outcome = SystemRunner.run(&attempt, temp_dir.path()).unwrap();
        let reported = std::fs::canonicalize(outcome.stdout.trim()).unwrap();
        let expected = std::fs::canonicalize(temp_dir.path()).unwrap();
        assert_eq!(reported, expected);
    }
}
