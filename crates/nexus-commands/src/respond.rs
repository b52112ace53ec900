//! Embed and reply helpers shared by the command bodies.

use poise::serenity_prelude as serenity;
use poise::CreateReply;

use crate::framework::{Context, Error};

/// Sends a single embed as the command reply.
pub async fn send_embed(ctx: Context<'_>, embed: serenity::CreateEmbed) -> Result<(), Error> {
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// A title + description embed.
pub fn text_embed(
    title: impl Into<String>,
    description: impl Into<String>,
    colour: serenity::Colour,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.into())
        .description(description.into())
        .colour(colour)
}

/// A titled embed whose body is an image.
pub fn image_embed(
    title: impl Into<String>,
    image_url: impl Into<String>,
    colour: serenity::Colour,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title.into())
        .image(image_url.into())
        .colour(colour)
}

/// The fixed degradation reply when a provider returns no data.
pub async fn couldnt_fetch(ctx: Context<'_>, subject: &str) -> Result<(), Error> {
    ctx.say(format!("Couldn't fetch {subject} right now.")).await?;
    Ok(())
}
