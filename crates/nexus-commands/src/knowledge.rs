//! Facts, quotes, and lookup commands.

use poise::serenity_prelude as serenity;

use crate::framework::{Context, Error};
use crate::respond;

/// Learn a random useless fact.
#[poise::command(prefix_command, slash_command)]
pub async fn fact(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::facts::fetch_random_fact(&ctx.data().http).await {
        Some(fact) => {
            let embed = respond::text_embed("🧠 Did you know?", fact, serenity::Colour::TEAL);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a fact").await,
    }
}

/// Read an inspirational quote.
#[poise::command(prefix_command, slash_command)]
pub async fn quote(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::quotes::fetch_quote(&ctx.data().http).await {
        Some(quote) => {
            let embed = respond::text_embed("💬 Quote", quote, serenity::Colour::DARK_BLUE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a quote").await,
    }
}

/// Look up the definition of a word.
#[poise::command(prefix_command, slash_command)]
pub async fn define(
    ctx: Context<'_>,
    #[description = "Word to define"] word: String,
) -> Result<(), Error> {
    match nexus_providers::dictionary::fetch_definition(&ctx.data().http, &word).await {
        Some(definition) => {
            let mut body = definition.definition;
            if let Some(example) = definition.example {
                body.push_str(&format!("\n\n*Example:* {example}"));
            }
            let embed = respond::text_embed(
                format!("📖 {word}"),
                body,
                serenity::Colour::DARK_BLUE,
            );
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a definition").await,
    }
}

/// Get a piece of trivia about a number.
#[poise::command(prefix_command, slash_command)]
pub async fn numberfact(
    ctx: Context<'_>,
    #[description = "Number to look up"] number: i64,
) -> Result<(), Error> {
    match nexus_providers::numbers::fetch_number_trivia(&ctx.data().http, number).await {
        Some(trivia) => {
            let embed = respond::text_embed(
                format!("🔢 About {number}"),
                trivia,
                serenity::Colour::TEAL,
            );
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a number fact").await,
    }
}

/// Get a suggestion for something to do.
#[poise::command(prefix_command, slash_command)]
pub async fn activity(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::activity::fetch_random_activity(&ctx.data().http).await {
        Some(activity) => {
            let embed =
                respond::text_embed("🎯 Why not try...", activity, serenity::Colour::DARK_GREEN);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "an activity").await,
    }
}

/// Read today's horoscope for a zodiac sign.
#[poise::command(prefix_command, slash_command)]
pub async fn horoscope(
    ctx: Context<'_>,
    #[description = "Zodiac sign, e.g. aries"] sign: String,
) -> Result<(), Error> {
    let sign = sign.to_lowercase();
    if !nexus_providers::horoscope::is_valid_sign(&sign) {
        ctx.say(format!(
            "❗ `{sign}` is not a zodiac sign. Try one of: {}.",
            nexus_providers::horoscope::SIGNS.join(", ")
        ))
        .await?;
        return Ok(());
    }
    match nexus_providers::horoscope::fetch_horoscope(&ctx.data().http, &sign).await {
        Some(reading) => {
            let embed = respond::text_embed(
                format!("🔮 Horoscope for {sign}"),
                reading,
                serenity::Colour::DARK_PURPLE,
            );
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a horoscope").await,
    }
}
