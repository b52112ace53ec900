//! Activity suggestions from the Bored API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://www.boredapi.com/api/activity/";

#[derive(Debug, Deserialize)]
struct ActivityResponse {
    activity: String,
}

/// Fetches a random activity suggestion.
pub async fn fetch_random_activity(client: &Client) -> Option<String> {
    fetch_json::<ActivityResponse>(client.get(API_URL))
        .await
        .map(|response| response.activity)
}
