//! Checkout commands.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the checkout-branch command.
#[derive(Debug, Args)]
pub struct BranchArgs {
    /// Branch to switch to
    pub branch: String,

    /// Create the branch first
    #[arg(short = 'b', long)]
    pub create: bool,
}

/// Arguments for the checkout-path command.
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Paths to restore, in order
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Arguments for the checkout-path-from-branch command.
#[derive(Debug, Args)]
pub struct PathFromBranchArgs {
    /// Branch to restore from
    pub branch: String,

    /// Paths to restore, in order
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Runs the checkout-branch command.
pub fn branch(ctx: &Context, args: &BranchArgs) -> Result<()> {
    ctx.git.checkout_branch(&ctx.dir, &args.branch, args.create)?;
    Ok(())
}

/// Runs the checkout-path command.
pub fn path(ctx: &Context, args: &PathArgs) -> Result<()> {
    ctx.git.checkout_paths(&ctx.dir, &args.paths)?;
    Ok(())
}

/// Runs the checkout-path-from-branch command.
pub fn path_from_branch(ctx: &Context, args: &PathFromBranchArgs) -> Result<()> {
    ctx.git
        .checkout_paths_from_branch(&ctx.dir, &args.branch, &args.paths)?;
    Ok(())
}
