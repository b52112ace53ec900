//! GIF search via the Tenor API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://tenor.googleapis.com/v2/search";

#[derive(Debug, Deserialize)]
struct TenorResponse {
    #[serde(default)]
    results: Vec<TenorResult>,
}

#[derive(Debug, Deserialize)]
struct TenorResult {
    #[serde(default)]
    media_formats: MediaFormats,
}

#[derive(Debug, Default, Deserialize)]
struct MediaFormats {
    gif: Option<MediaUrl>,
}

#[derive(Debug, Deserialize)]
struct MediaUrl {
    url: String,
}

fn first_gif_url(response: TenorResponse) -> Option<String> {
    response
        .results
        .into_iter()
        .next()?
        .media_formats
        .gif
        .map(|media| media.url)
}

/// Fetches the first GIF matching `tag`.
pub async fn fetch_gif(client: &Client, api_key: &str, tag: &str) -> Option<String> {
    let request = client
        .get(API_URL)
        .query(&[("q", tag), ("key", api_key), ("limit", "1")]);
    fetch_json::<TenorResponse>(request).await.and_then(first_gif_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_first_result_gif() {
        let payload = r#"{"results": [{"media_formats": {"gif": {"url": "https://t.co/a.gif"}}}]}"#;
        let url = first_gif_url(serde_json::from_str(payload).unwrap()).unwrap();
        assert_eq!(url, "https://t.co/a.gif");
    }

    #[test]
    fn missing_gif_format_is_not_found() {
        let payload = r#"{"results": [{"media_formats": {}}]}"#;
        assert!(first_gif_url(serde_json::from_str(payload).unwrap()).is_none());
    }

    #[test]
    fn empty_results_are_not_found() {
        assert!(first_gif_url(serde_json::from_str(r#"{"results": []}"#).unwrap()).is_none());
    }
}
