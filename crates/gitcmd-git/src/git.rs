//! Git command layer.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::{
    CommandMetadata, ErrorCode, Executor, GitError, GitResult, Log, LogLevel, ProcessExecutor,
    TracingLog,
};

/// Program run when none is configured.
pub const DEFAULT_PROGRAM: &str = "git";

const FAILURE_MESSAGE: &str = "git command failed";
const ORIGIN: &str = "origin";

/// Runs git operations through an [`Executor`].
///
/// Holds no repository state: every operation takes the working directory it
/// runs in.
#[derive(Clone)]
pub struct Git {
    executor: Arc<dyn Executor>,
    log: Arc<dyn Log>,
    program: String,
}

impl fmt::Debug for Git {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Git")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

impl Default for Git {
    fn default() -> Self {
        Self::new()
    }
}

impl Git {
    /// Creates a command layer that spawns `git` and logs through `tracing`.
    pub fn new() -> Self {
        Self::with_executor(Arc::new(ProcessExecutor::new()))
    }

    /// Creates a command layer using the given executor.
    pub fn with_executor(executor: Arc<dyn Executor>) -> Self {
        Self {
            executor,
            log: Arc::new(TracingLog),
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Replaces the logger.
    #[must_use]
    pub fn with_log(mut self, log: Arc<dyn Log>) -> Self {
        self.log = log;
        self
    }

    /// Replaces the program name prepended to every argument vector.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Returns the program name prepended to every argument vector.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Initializes a repository in `cwd`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Init`] if git fails.
    pub fn init(&self, cwd: impl AsRef<Path>) -> GitResult<()> {
        let cwd = cwd.as_ref();
        self.info(format!("Initializing git repository in '{}'", cwd.display()));
        self.run(args(["init"]), cwd, ErrorCode::Init)?;
        Ok(())
    }

    /// Clones `repo_url` into `cwd` itself.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Clone`] if git fails.
    pub fn clone_repo(&self, repo_url: &str, cwd: impl AsRef<Path>) -> GitResult<()> {
        let cwd = cwd.as_ref();
        self.info(format!(
            "Cloning repository '{repo_url}' into '{}'",
            cwd.display()
        ));
        self.run(args(["clone", repo_url, "."]), cwd, ErrorCode::Clone)?;
        Ok(())
    }

    /// Returns `git status --porcelain` output, unparsed.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Status`] if git fails.
    pub fn status(&self, cwd: impl AsRef<Path>) -> GitResult<String> {
        self.status_with(cwd, true)
    }

    /// Returns `git status` output, in porcelain format if requested.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Status`] if git fails.
    pub fn status_with(&self, cwd: impl AsRef<Path>, porcelain: bool) -> GitResult<String> {
        let cwd = cwd.as_ref();
        self.debug(format!(
            "Getting git status (porcelain={porcelain}) in '{}'",
            cwd.display()
        ));
        let args = if porcelain {
            args(["status", "--porcelain"])
        } else {
            args(["status"])
        };
        self.run(args, cwd, ErrorCode::Status)
    }

    /// Stages `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Add`] if git fails.
    pub fn add(&self, path: &str, cwd: impl AsRef<Path>) -> GitResult<()> {
        let cwd = cwd.as_ref();
        self.debug(format!("Adding file '{path}' in '{}'", cwd.display()));
        self.run(args(["add", path]), cwd, ErrorCode::Add)?;
        Ok(())
    }

    /// Commits staged changes with `message`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Commit`] if git fails.
    pub fn commit(&self, message: &str, cwd: impl AsRef<Path>) -> GitResult<()> {
        let cwd = cwd.as_ref();
        self.info(format!(
            "Committing changes in '{}' with message: {message}",
            cwd.display()
        ));
        self.run(args(["commit", "-m", message]), cwd, ErrorCode::Commit)?;
        Ok(())
    }

    /// Pulls the current branch from its upstream.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::Pull`] if git fails.
    pub fn pull(&self, cwd: impl AsRef<Path>) -> GitResult<()> {
        let cwd = cwd.as_ref();
        self.info(format!("Pulling latest changes in '{}'", cwd.display()));
        self.run(args(["pull"]), cwd, ErrorCode::Pull)?;
        Ok(())
    }

    /// Pushes `HEAD` to `origin`, setting it as upstream.
    ///
    /// With a non-empty `remote_url`, `origin` is first removed and re-added
    /// pointing at that URL. An empty URL is ignored. The first failing step
    /// aborts the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::RemoteRemove`] or [`ErrorCode::RemoteAdd`] if the
    /// remote cannot be replaced, and [`ErrorCode::Push`] if the push fails.
    pub fn push(&self, cwd: impl AsRef<Path>, remote_url: Option<&str>) -> GitResult<()> {
        let cwd = cwd.as_ref();
        self.info(format!("Pushing changes from '{}'", cwd.display()));

        if let Some(url) = remote_url.filter(|url| !url.is_empty()) {
            self.info(format!("Setting remote '{ORIGIN}' to '{url}'"));
            self.run(
                args(["remote", "remove", ORIGIN]),
                cwd,
                ErrorCode::RemoteRemove,
            )?;
            self.run(
                args(["remote", "add", ORIGIN, url]),
                cwd,
                ErrorCode::RemoteAdd,
            )?;
        }

        self.run(args(["push", "-u", ORIGIN, "HEAD"]), cwd, ErrorCode::Push)?;
        Ok(())
    }

    /// Switches to `branch`, creating it first when `create` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::CheckoutBranch`] if git fails.
    pub fn checkout_branch(
        &self,
        cwd: impl AsRef<Path>,
        branch: &str,
        create: bool,
    ) -> GitResult<()> {
        let cwd = cwd.as_ref();
        let action = if create {
            "Creating and checking out"
        } else {
            "Checking out"
        };
        self.info(format!("{action} branch '{branch}' in '{}'", cwd.display()));

        let args = if create {
            args(["-b", branch])
        } else {
            args([branch])
        };
        self.checkout(args, cwd, ErrorCode::CheckoutBranch)
    }

    /// Discards uncommitted changes to a single path.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::CheckoutPath`] if git fails.
    pub fn checkout_path(&self, cwd: impl AsRef<Path>, path: &str) -> GitResult<()> {
        self.checkout_paths(cwd, [path])
    }

    /// Discards uncommitted changes to `paths`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::CheckoutPath`] if git fails.
    pub fn checkout_paths<I, S>(&self, cwd: impl AsRef<Path>, paths: I) -> GitResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cwd = cwd.as_ref();
        let paths = args(paths);
        self.info(format!(
            "Reverting local changes to: {} in '{}'",
            paths.join(", "),
            cwd.display()
        ));

        let mut args = args(["--"]);
        args.extend(paths);
        self.checkout(args, cwd, ErrorCode::CheckoutPath)
    }

    /// Restores a single path from `branch` without switching branches.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::CheckoutPathFromBranch`] if git fails.
    pub fn checkout_path_from_branch(
        &self,
        cwd: impl AsRef<Path>,
        branch: &str,
        path: &str,
    ) -> GitResult<()> {
        self.checkout_paths_from_branch(cwd, branch, [path])
    }

    /// Restores `paths` from `branch` without switching branches.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::CheckoutPathFromBranch`] if git fails.
    pub fn checkout_paths_from_branch<I, S>(
        &self,
        cwd: impl AsRef<Path>,
        branch: &str,
        paths: I,
    ) -> GitResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cwd = cwd.as_ref();
        let paths = args(paths);
        self.info(format!(
            "Restoring files {} from branch '{branch}' in '{}'",
            paths.join(", "),
            cwd.display()
        ));

        let mut args = args([branch, "--"]);
        args.extend(paths);
        self.checkout(args, cwd, ErrorCode::CheckoutPathFromBranch)
    }

    fn checkout(&self, mut args: Vec<String>, cwd: &Path, code: ErrorCode) -> GitResult<()> {
        args.insert(0, "checkout".to_string());
        self.run(args, cwd, code)?;
        Ok(())
    }

    /// Every invocation goes through here.
    fn run(&self, args: Vec<String>, cwd: &Path, code: ErrorCode) -> GitResult<String> {
        let metadata = CommandMetadata {
            program: self.program.clone(),
            args,
            cwd: cwd.to_path_buf(),
        };
        let command_line = metadata.command_line();
        self.debug(format!(
            "Running git command: {command_line} in '{}'",
            cwd.display()
        ));

        let mut argv = Vec::with_capacity(metadata.args.len() + 1);
        argv.push(metadata.program.clone());
        argv.extend(metadata.args.iter().cloned());

        self.executor.execute(&argv, cwd).map_err(|source| {
            self.log.log(
                LogLevel::Error,
                &format!(
                    "Git command failed: {command_line} in '{}': {source}",
                    cwd.display()
                ),
            );
            GitError::new(FAILURE_MESSAGE, metadata, source).with_code(code)
        })
    }

    fn info(&self, message: String) {
        self.log.log(LogLevel::Info, &message);
    }

    fn debug(&self, message: String) {
        self.log.log(LogLevel::Debug, &message);
    }
}

fn args<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().map(|s| s.as_ref().to_string()).collect()
}
