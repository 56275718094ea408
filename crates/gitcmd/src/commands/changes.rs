//! Working tree commands.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the status command.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Show the human-readable format instead of porcelain
    #[arg(long)]
    pub long: bool,
}

/// Arguments for the add command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Path to stage
    pub path: String,
}

/// Arguments for the commit command.
#[derive(Debug, Args)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short, long)]
    pub message: String,
}

/// Runs the status command.
pub fn status(ctx: &Context, args: &StatusArgs) -> Result<()> {
    let output = ctx.git.status_with(&ctx.dir, !args.long)?;
    print!("{output}");
    Ok(())
}

/// Runs the add command.
pub fn add(ctx: &Context, args: &AddArgs) -> Result<()> {
    ctx.git.add(&args.path, &ctx.dir)?;
    Ok(())
}

/// Runs the commit command.
pub fn commit(ctx: &Context, args: &CommitArgs) -> Result<()> {
    ctx.git.commit(&args.message, &ctx.dir)?;
    Ok(())
}
