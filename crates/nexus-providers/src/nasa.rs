//! NASA Astronomy Picture of the Day.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://api.nasa.gov/planetary/apod";

/// The picture of the day.
#[derive(Debug, Clone, Deserialize)]
pub struct Apod {
    /// Title of the picture.
    pub title: String,
    /// Explanation text.
    pub explanation: String,
    /// Media URL; a video link on some days.
    pub url: String,
}

/// Fetches today's astronomy picture.
pub async fn fetch_apod(client: &Client, api_key: &str) -> Option<Apod> {
    let request = client.get(API_URL).query(&[("api_key", api_key)]);
    fetch_json(request).await
}
