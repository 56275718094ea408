//! Logging port.

use std::fmt;

/// Severity of a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Receives log messages from the command layer.
pub trait Log: Send + Sync {
    /// Records a message at the given level.
    fn log(&self, level: LogLevel, message: &str);
}

/// Forwards messages to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Log for TracingLog {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "gitcmd", "{message}"),
            LogLevel::Debug => tracing::debug!(target: "gitcmd", "{message}"),
            LogLevel::Info => tracing::info!(target: "gitcmd", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "gitcmd", "{message}"),
            LogLevel::Error => tracing::error!(target: "gitcmd", "{message}"),
        }
    }
}
