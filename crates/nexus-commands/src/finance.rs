//! Market data commands.

use poise::serenity_prelude as serenity;

use crate::framework::{Context, Error};
use crate::respond;

/// Get the latest quote for a stock symbol.
#[poise::command(prefix_command, slash_command)]
pub async fn stock(
    ctx: Context<'_>,
    #[description = "Ticker symbol, e.g. AAPL"] symbol: String,
) -> Result<(), Error> {
    let symbol = symbol.to_uppercase();
    let api_key = ctx.data().config.api_keys.alpha_vantage.clone();
    match nexus_providers::finance::fetch_stock_quote(&ctx.data().http, &api_key, &symbol).await {
        Some(quote) => {
            let embed = serenity::CreateEmbed::new()
                .title(format!("📊 {symbol}"))
                .field("Price", format!("${}", quote.price), true)
                .field("Change", quote.change, true)
                .colour(serenity::Colour::DARK_GREEN);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, format!("a quote for {symbol}").as_str()).await,
    }
}

/// Get the current bitcoin price in USD.
#[poise::command(prefix_command, slash_command)]
pub async fn bitcoin(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::finance::fetch_bitcoin_price(&ctx.data().http).await {
        Some(rate) => {
            let embed = respond::text_embed(
                "₿ Bitcoin",
                format!("Current price: **${rate}**"),
                serenity::Colour::GOLD,
            );
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "the bitcoin price").await,
    }
}
