//! Registration command writing to the user registry.

use chrono::Utc;
use poise::serenity_prelude as serenity;

use crate::framework::{Context, Error};
use crate::respond;

/// Register yourself to use the bot.
#[poise::command(prefix_command, slash_command)]
pub async fn register(
    ctx: Context<'_>,
    #[description = "Your display name"] username: String,
) -> Result<(), Error> {
    let user_id = ctx.author().id.to_string();
    let record = ctx.data().registry.register(&user_id, &username, Utc::now())?;

    let embed = respond::text_embed(
        "✅ Registration Successful!",
        format!(
            "Welcome, **{}**! You can now access all the bot's features.",
            record.username
        ),
        serenity::Colour::DARK_GREEN,
    );
    respond::send_embed(ctx, embed).await
}
