//! Typed git command layer for gitcmd.
//!
//! This crate provides:
//! - The [`Git`] command layer, one method per repository operation
//! - The [`Executor`] port and its process-backed implementation
//! - The [`Log`] port and its `tracing`-backed implementation
//! - The structured [`GitError`] returned by every operation

mod error;
mod executor;
mod git;
mod log;

pub use error::{CommandMetadata, ErrorCode, GitError, GitResult, UnknownErrorCode};
pub use executor::{ExecError, Executor, ProcessExecutor};
pub use git::{DEFAULT_PROGRAM, Git};
pub use log::{Log, LogLevel, TracingLog};
