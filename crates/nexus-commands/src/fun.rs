//! Jokes, memes, and GIF commands.

use poise::serenity_prelude as serenity;

use crate::framework::{Context, Error};
use crate::respond;

/// Hear a random joke.
#[poise::command(prefix_command, slash_command)]
pub async fn joke(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::jokes::fetch_joke(&ctx.data().http).await {
        Some(joke) => {
            let embed =
                respond::text_embed("😂 Here's a joke!", joke.as_line(), serenity::Colour::GOLD);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a joke").await,
    }
}

/// Hear a random dad joke.
#[poise::command(prefix_command, slash_command)]
pub async fn dadjoke(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::jokes::fetch_dad_joke(&ctx.data().http).await {
        Some(joke) => {
            let embed = respond::text_embed("👨 Dad joke incoming!", joke, serenity::Colour::GOLD);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a dad joke").await,
    }
}

/// See a random meme.
#[poise::command(prefix_command, slash_command)]
pub async fn meme(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::memes::fetch_random_meme(&ctx.data().http).await {
        Some(meme) => {
            let embed = respond::image_embed(meme.title, meme.url, serenity::Colour::PURPLE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a meme").await,
    }
}

/// Search for a GIF by tag.
#[poise::command(prefix_command, slash_command)]
pub async fn gif(
    ctx: Context<'_>,
    #[description = "What to search for"]
    #[rest]
    tag: String,
) -> Result<(), Error> {
    let api_key = ctx.data().config.api_keys.tenor.clone();
    match nexus_providers::tenor::fetch_gif(&ctx.data().http, &api_key, &tag).await {
        Some(url) => {
            let embed = respond::image_embed(
                format!("🎬 GIF: {tag}"),
                url,
                serenity::Colour::TEAL,
            );
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a GIF").await,
    }
}
