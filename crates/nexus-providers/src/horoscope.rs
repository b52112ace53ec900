//! Daily horoscopes from the aztro API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://aztro.sameerkumar.website/";

/// The twelve zodiac signs the upstream accepts.
pub const SIGNS: &[&str] = &[
    "aries",
    "taurus",
    "gemini",
    "cancer",
    "leo",
    "virgo",
    "libra",
    "scorpio",
    "sagittarius",
    "capricorn",
    "aquarius",
    "pisces",
];

#[derive(Debug, Deserialize)]
struct HoroscopeResponse {
    description: String,
}

/// Whether `sign` is a zodiac sign the upstream accepts.
#[must_use]
pub fn is_valid_sign(sign: &str) -> bool {
    SIGNS.contains(&sign.to_ascii_lowercase().as_str())
}

/// Fetches today's horoscope for `sign`. The upstream takes a POST with the
/// sign and day as query parameters.
pub async fn fetch_horoscope(client: &Client, sign: &str) -> Option<String> {
    if !is_valid_sign(sign) {
        return None;
    }
    let request = client
        .post(API_URL)
        .query(&[("sign", sign.to_ascii_lowercase().as_str()), ("day", "today")]);
    fetch_json::<HoroscopeResponse>(request)
        .await
        .map(|response| response.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_validation_is_case_insensitive() {
        assert!(is_valid_sign("leo"));
        assert!(is_valid_sign("Libra"));
        assert!(!is_valid_sign("ophiuchus"));
    }

    #[test]
    fn horoscope_payload_parses() {
        let payload = r#"{"current_date": "June 1, 2024", "description": "A good day."}"#;
        let response: HoroscopeResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.description, "A good day.");
    }
}
