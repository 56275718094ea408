//! Remote synchronization commands.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::Context;

/// Arguments for the push command.
#[derive(Debug, Args)]
pub struct PushArgs {
    /// Point origin at this URL before pushing (overrides push.remote_url)
    #[arg(long)]
    pub remote_url: Option<String>,
}

/// Runs the pull command.
pub fn pull(ctx: &Context) -> Result<()> {
    ctx.git.pull(&ctx.dir)?;
    Ok(())
}

/// Runs the push command.
pub fn push(ctx: &Context, args: &PushArgs) -> Result<()> {
    let remote_url = args
        .remote_url
        .as_deref()
        .or(ctx.config.push.remote_url.as_deref());
    if args.remote_url.is_none() && remote_url.is_some() {
        info!("using push.remote_url from configuration");
    }

    ctx.git.push(&ctx.dir, remote_url)?;
    Ok(())
}
