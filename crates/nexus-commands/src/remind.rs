//! Timed reminder command.
//!
//! The handler suspends cooperatively for the requested duration, so other
//! users' commands keep flowing. Pending reminders are not persisted; a
//! restart drops them silently.

use poise::serenity_prelude::Mentionable;

use crate::framework::{Context, Error};

/// Set a reminder. The bot pings you after the given number of seconds.
#[poise::command(prefix_command, slash_command)]
pub async fn remind(
    ctx: Context<'_>,
    #[description = "Seconds until the reminder"] seconds: u64,
    #[description = "What to remind you about"]
    #[rest]
    message: String,
) -> Result<(), Error> {
    ctx.say(format!("⏰ Okay, I'll remind you in {seconds} seconds."))
        .await?;

    tokio::time::sleep(std::time::Duration::from_secs(seconds)).await;

    ctx.say(format!(
        "🔔 {} Reminder: {message}",
        ctx.author().mention()
    ))
    .await?;
    Ok(())
}
