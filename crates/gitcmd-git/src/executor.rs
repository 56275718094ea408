//! Process execution port.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Failure signal raised by an [`Executor`].
#[derive(Debug, Error)]
pub enum ExecError {
    /// The argument vector had no program name.
    #[error("empty argument vector")]
    EmptyCommand,

    /// The process could not be launched.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that failed to launch.
        program: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The process ran but did not exit successfully.
    #[error("{program} exited with {}: {stderr}", describe_status(*.code))]
    NonZeroExit {
        /// Program that failed.
        program: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}

fn describe_status(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status".to_string(),
    }
}

/// Runs an argument vector in a working directory.
///
/// `args[0]` is the program; the rest are passed verbatim.
pub trait Executor: Send + Sync {
    /// Runs the command and returns its captured standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be launched or exits with a
    /// non-zero status.
    fn execute(&self, args: &[String], cwd: &Path) -> Result<String, ExecError>;
}

/// Executor backed by [`std::process::Command`].
///
/// Never goes through a shell.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    envs: Vec<(String, String)>,
}

impl ProcessExecutor {
    /// Creates an executor that inherits the current environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds environment variables set on every invocation.
    #[must_use]
    pub fn with_envs<I, K, V>(mut self, envs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.envs
            .extend(envs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, args: &[String], cwd: &Path) -> Result<String, ExecError> {
        let (program, rest) = args.split_first().ok_or(ExecError::EmptyCommand)?;

        let output = Command::new(program)
            .args(rest)
            .current_dir(cwd)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ExecError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExecError::NonZeroExit {
                program: program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
