//! Repository creation commands.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the clone command.
#[derive(Debug, Args)]
pub struct CloneArgs {
    /// Repository URL to clone
    pub url: String,
}

/// Runs the init command.
pub fn init(ctx: &Context) -> Result<()> {
    ctx.git.init(&ctx.dir)?;
    println!("Initialized repository in {}", ctx.dir.display());
    Ok(())
}

/// Runs the clone command.
pub fn clone(ctx: &Context, args: &CloneArgs) -> Result<()> {
    ctx.git.clone_repo(&args.url, &ctx.dir)?;
    println!("Cloned {} into {}", args.url, ctx.dir.display());
    Ok(())
}
