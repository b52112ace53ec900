//! About command.

use poise::serenity_prelude as serenity;

use crate::framework::{Context, Error};
use crate::respond;

/// Get information about the bot.
#[poise::command(prefix_command, slash_command)]
pub async fn about(ctx: Context<'_>) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title("🤖 About InfoNexus")
        .description(
            "Welcome to InfoNexus! I'm your ultimate Discord companion, here to \
             provide you with a wealth of information, fun facts, and interactive \
             experiences.",
        )
        .field(
            "⭐ Star Our Project",
            "If you enjoy using me, please consider starring our GitHub repository!",
            false,
        )
        .field(
            "💻 GitHub Repository",
            "[infonexus-rs](https://github.com/infonexus/infonexus-rs)",
            false,
        )
        .footer(serenity::CreateEmbedFooter::new("Thank you for using InfoNexus!"))
        .colour(serenity::Colour::BLUE);

    respond::send_embed(ctx, embed).await
}
