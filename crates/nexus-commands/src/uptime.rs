//! Uptime command reading the immutable startup context.

use chrono::Utc;
use nexus_common::format_duration;

use crate::framework::{Context, Error};

/// Show how long the bot has been running.
#[poise::command(prefix_command, slash_command)]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
    let uptime = ctx.data().startup.uptime(Utc::now());
    ctx.say(format!("⏱️ Uptime: {}", format_duration(uptime))).await?;
    Ok(())
}
