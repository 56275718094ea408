//! Subcommand implementations.

pub mod changes;
pub mod checkout;
pub mod remote;
pub mod repo;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use gitcmd_config::{Config, load_config, load_or_default};
use gitcmd_git::{Git, GitError, ProcessExecutor};
use tracing::debug;

/// Everything a subcommand needs.
pub struct Context {
    pub git: Git,
    pub config: Config,
    pub dir: PathBuf,
}

impl Context {
    /// Loads configuration and builds the git command layer.
    pub fn load(config_path: Option<&Path>, dir: PathBuf) -> Result<Self> {
        let config = match config_path {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?,
            None => load_or_default(&dir).context("failed to load configuration")?,
        };
        debug!(program = %config.git.program, env = config.git.env.len(), "configured git");

        let executor = ProcessExecutor::new().with_envs(config.git.env.clone());
        let git = Git::with_executor(Arc::new(executor)).with_program(config.git.program.clone());

        Ok(Self { git, config, dir })
    }
}

/// Prints a failure to stderr, with git context when available.
pub fn report_error(err: &anyhow::Error, json: bool) {
    let git_err = err.downcast_ref::<GitError>();

    if json {
        let value = match git_err {
            Some(e) => serde_json::json!({
                "error": e.message(),
                "code": e.code(),
                "metadata": e.metadata(),
                "cause": e.cause().to_string(),
            }),
            None => serde_json::json!({ "error": format!("{err:#}") }),
        };
        eprintln!("{value}");
        return;
    }

    match git_err {
        Some(e) => {
            eprintln!("error[{}]: {}", e.code(), e.message());
            eprintln!("  command: {}", e.metadata().command_line());
            eprintln!("  in: {}", e.metadata().cwd.display());
            eprintln!("  cause: {}", e.cause());
        }
        None => eprintln!("error: {err:#}"),
    }
}
