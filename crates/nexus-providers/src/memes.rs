//! Random memes from the Meme API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://meme-api.com/gimme";

/// A meme image post.
#[derive(Debug, Clone, Deserialize)]
pub struct Meme {
    /// Post title.
    pub title: String,
    /// Image URL.
    pub url: String,
}

/// Fetches a random meme.
pub async fn fetch_random_meme(client: &Client) -> Option<Meme> {
    fetch_json::<Meme>(client.get(API_URL))
        .await
        .filter(|meme| !meme.url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meme_payload_parses() {
        let payload = r#"{"title": "A classic", "url": "https://i.redd.it/m.png", "ups": 10}"#;
        let meme: Meme = serde_json::from_str(payload).unwrap();
        assert_eq!(meme.title, "A classic");
    }
}
