//! Git error types.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ExecError;

/// Identifies which operation failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// `git init` failed.
    #[serde(rename = "INIT_FAILED")]
    Init,
    /// `git clone` failed.
    #[serde(rename = "CLONE_FAILED")]
    Clone,
    /// `git status` failed.
    #[serde(rename = "STATUS_FAILED")]
    Status,
    /// `git add` failed.
    #[serde(rename = "ADD_FAILED")]
    Add,
    /// `git commit` failed.
    #[serde(rename = "COMMIT_FAILED")]
    Commit,
    /// `git pull` failed.
    #[serde(rename = "PULL_FAILED")]
    Pull,
    /// `git push` failed.
    #[serde(rename = "PUSH_FAILED")]
    Push,
    /// Removing the `origin` remote failed.
    #[serde(rename = "REMOTE_REMOVE_FAILED")]
    RemoteRemove,
    /// Adding the `origin` remote failed.
    #[serde(rename = "REMOTE_ADD_FAILED")]
    RemoteAdd,
    /// Switching (or creating) a branch failed.
    #[serde(rename = "CHECKOUT_BRANCH_FAILED")]
    CheckoutBranch,
    /// Restoring paths from the index failed.
    #[serde(rename = "CHECKOUT_PATH_FAILED")]
    CheckoutPath,
    /// Restoring paths from another branch failed.
    #[serde(rename = "CHECKOUT_PATH_FROM_BRANCH_FAILED")]
    CheckoutPathFromBranch,
    /// Fallback when no operation-specific code was set.
    #[default]
    #[serde(rename = "GIT_ERROR")]
    Generic,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Init,
        Self::Clone,
        Self::Status,
        Self::Add,
        Self::Commit,
        Self::Pull,
        Self::Push,
        Self::RemoteRemove,
        Self::RemoteAdd,
        Self::CheckoutBranch,
        Self::CheckoutPath,
        Self::CheckoutPathFromBranch,
        Self::Generic,
    ];

    /// Returns the symbolic tag, e.g. `"PUSH_FAILED"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "INIT_FAILED",
            Self::Clone => "CLONE_FAILED",
            Self::Status => "STATUS_FAILED",
            Self::Add => "ADD_FAILED",
            Self::Commit => "COMMIT_FAILED",
            Self::Pull => "PULL_FAILED",
            Self::Push => "PUSH_FAILED",
            Self::RemoteRemove => "REMOTE_REMOVE_FAILED",
            Self::RemoteAdd => "REMOTE_ADD_FAILED",
            Self::CheckoutBranch => "CHECKOUT_BRANCH_FAILED",
            Self::CheckoutPath => "CHECKOUT_PATH_FAILED",
            Self::CheckoutPathFromBranch => "CHECKOUT_PATH_FROM_BRANCH_FAILED",
            Self::Generic => "GIT_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a tag that names no [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

/// The invocation a failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMetadata {
    /// Executable that was run.
    pub program: String,
    /// Arguments after the program name, exactly as attempted.
    pub args: Vec<String>,
    /// Working directory of the invocation.
    pub cwd: PathBuf,
}

impl CommandMetadata {
    /// Renders the invocation as a single shell-like line.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Failure of a git operation.
///
/// Carries a message, the [`ErrorCode`] of the failing operation, the
/// [`CommandMetadata`] of the attempted invocation, and the executor failure
/// that caused it.
#[derive(Debug, Error)]
#[error("{message} [{code}]: {source}")]
pub struct GitError {
    message: String,
    code: ErrorCode,
    metadata: CommandMetadata,
    #[source]
    source: ExecError,
}

impl GitError {
    /// Creates an error with the generic [`ErrorCode::Generic`] code.
    pub fn new(message: impl Into<String>, metadata: CommandMetadata, source: ExecError) -> Self {
        Self {
            message: message.into(),
            code: ErrorCode::default(),
            metadata,
            source,
        }
    }

    /// Sets the error code.
    #[must_use]
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Code of the failing operation.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Invocation that failed.
    pub fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    /// Underlying executor failure.
    pub fn cause(&self) -> &ExecError {
        &self.source
    }
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
