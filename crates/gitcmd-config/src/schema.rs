//! Configuration schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How git is invoked.
    #[serde(default)]
    pub git: GitSettings,

    /// Push defaults.
    #[serde(default)]
    pub push: PushSettings,
}

impl Config {
    /// Checks values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.git.program.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "git.program must not be empty".to_string(),
            ));
        }
        if let Some(key) = self.git.env.keys().find(|k| k.is_empty() || k.contains('=')) {
            return Err(ConfigError::Invalid(format!(
                "git.env has an invalid variable name: {key:?}"
            )));
        }
        if self.push.remote_url.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::Invalid(
                "push.remote_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Git invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitSettings {
    /// Executable to run.
    #[serde(default = "default_program")]
    pub program: String,

    /// Extra environment variables for every invocation.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            env: BTreeMap::new(),
        }
    }
}

fn default_program() -> String {
    "git".to_string()
}

/// Push settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PushSettings {
    /// Replaces `origin` before pushing when set.
    pub remote_url: Option<String>,
}
