//! Animal image commands.

use poise::serenity_prelude as serenity;

use crate::framework::{Context, Error};
use crate::respond;

/// Get a random dog picture.
#[poise::command(prefix_command, slash_command)]
pub async fn dog(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::animals::fetch_dog_image(&ctx.data().http).await {
        Some(url) => {
            let embed = respond::image_embed("🐶 Woof!", url, serenity::Colour::ORANGE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a dog picture").await,
    }
}

/// Get a random cat picture.
#[poise::command(prefix_command, slash_command)]
pub async fn cat(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::animals::fetch_cat_image(&ctx.data().http).await {
        Some(url) => {
            let embed = respond::image_embed("🐱 Meow!", url, serenity::Colour::PURPLE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a cat picture").await,
    }
}

/// Get a random fox picture.
#[poise::command(prefix_command, slash_command)]
pub async fn fox(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::animals::fetch_fox_image(&ctx.data().http).await {
        Some(url) => {
            let embed = respond::image_embed("🦊 Yip!", url, serenity::Colour::DARK_ORANGE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a fox picture").await,
    }
}
