//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// A configuration file is not valid TOML for the schema.
    #[error("invalid TOML in {path}: {source}")]
    InvalidToml {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: toml::de::Error,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// A configuration file parsed but holds an unusable value.
    #[error("invalid configuration in {path}: {reason}")]
    InvalidFile {
        /// File holding the value.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/repo/gitcmd.toml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /repo/gitcmd.toml"
        );
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid("git.program must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: git.program must not be empty"
        );
    }

    #[test]
    fn test_invalid_toml_names_file() {
        let source = toml::from_str::<toml::Table>("[[[").unwrap_err();
        let err = ConfigError::InvalidToml {
            path: PathBuf::from("/repo/gitcmd.toml"),
            source,
        };
        assert!(err.to_string().starts_with("invalid TOML in /repo/gitcmd.toml: "));
    }

    #[test]
    fn test_invalid_file_display() {
        let err = ConfigError::InvalidFile {
            path: PathBuf::from("/repo/gitcmd.toml"),
            reason: "push.remote_url must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in /repo/gitcmd.toml: push.remote_url must not be empty"
        );
    }
}
