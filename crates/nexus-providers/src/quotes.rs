//! Inspirational quotes from the Quotable API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://api.quotable.io/random";

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    content: String,
    author: String,
}

/// Fetches a random quote, rendered as `"content" - author`.
pub async fn fetch_quote(client: &Client) -> Option<String> {
    fetch_json::<QuoteResponse>(client.get(API_URL))
        .await
        .map(|quote| format!("\"{}\" - {}", quote.content, quote.author))
}
