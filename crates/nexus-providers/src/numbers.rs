//! Number trivia from the Numbers API.

use reqwest::Client;

use crate::client::fetch_text;

/// Fetches a trivia line about `number`.
pub async fn fetch_number_trivia(client: &Client, number: i64) -> Option<String> {
    let url = format!("http://numbersapi.com/{number}/trivia");
    fetch_text(client.get(url)).await
}
