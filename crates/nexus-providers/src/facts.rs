//! Random facts from the Useless Facts API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://uselessfacts.jsph.pl/random.json?language=en";

#[derive(Debug, Deserialize)]
struct FactResponse {
    text: String,
}

/// Fetches one random fact.
pub async fn fetch_random_fact(client: &Client) -> Option<String> {
    fetch_json::<FactResponse>(client.get(API_URL))
        .await
        .map(|response| response.text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_fact_text() {
        let payload = r#"{"id": "x", "text": "Bananas are berries.", "language": "en"}"#;
        let response: FactResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.text, "Bananas are berries.");
    }

    #[test]
    fn missing_text_is_malformed() {
        let payload = r#"{"id": "x", "language": "en"}"#;
        assert!(serde_json::from_str::<FactResponse>(payload).is_err());
    }
}
