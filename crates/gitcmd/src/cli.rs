//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{self, Context};

/// Run typed git operations from the command line.
#[derive(Debug, Parser)]
#[command(name = "gitcmd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Report failures as JSON on stderr
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: nearest gitcmd.toml)
    #[arg(long, global = true, env = "GITCMD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory to run git in
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a repository
    Init,

    /// Clone a repository into the directory
    Clone(commands::repo::CloneArgs),

    /// Show working tree status
    Status(commands::changes::StatusArgs),

    /// Stage a path
    Add(commands::changes::AddArgs),

    /// Commit staged changes
    Commit(commands::changes::CommitArgs),

    /// Pull from the upstream branch
    Pull,

    /// Push HEAD to origin
    Push(commands::remote::PushArgs),

    /// Switch to (or create) a branch
    CheckoutBranch(commands::checkout::BranchArgs),

    /// Discard local changes to paths
    CheckoutPath(commands::checkout::PathArgs),

    /// Restore paths from another branch
    CheckoutPathFromBranch(commands::checkout::PathFromBranchArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = Context::load(self.config.as_deref(), self.dir)?;
        match self.command {
            Commands::Init => commands::repo::init(&ctx),
            Commands::Clone(args) => commands::repo::clone(&ctx, &args),
            Commands::Status(args) => commands::changes::status(&ctx, &args),
            Commands::Add(args) => commands::changes::add(&ctx, &args),
            Commands::Commit(args) => commands::changes::commit(&ctx, &args),
            Commands::Pull => commands::remote::pull(&ctx),
            Commands::Push(args) => commands::remote::push(&ctx, &args),
            Commands::CheckoutBranch(args) => commands::checkout::branch(&ctx, &args),
            Commands::CheckoutPath(args) => commands::checkout::path(&ctx, &args),
            Commands::CheckoutPathFromBranch(args) => {
                commands::checkout::path_from_branch(&ctx, &args)
            }
        }
    }
}
