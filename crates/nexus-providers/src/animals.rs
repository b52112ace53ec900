//! Animal image providers: Dog CEO, TheCatAPI, and randomfox.ca.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const DOG_URL: &str = "https://dog.ceo/api/breeds/image/random";
const CAT_URL: &str = "https://api.thecatapi.com/v1/images/search";
const FOX_URL: &str = "https://randomfox.ca/floof/";

#[derive(Debug, Deserialize)]
struct DogResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CatImage {
    url: String,
}

#[derive(Debug, Deserialize)]
struct FoxResponse {
    image: String,
}

fn non_empty(url: String) -> Option<String> {
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}

/// Fetches a random dog image URL.
pub async fn fetch_dog_image(client: &Client) -> Option<String> {
    fetch_json::<DogResponse>(client.get(DOG_URL))
        .await
        .and_then(|response| non_empty(response.message))
}

/// Fetches a random cat image URL.
pub async fn fetch_cat_image(client: &Client) -> Option<String> {
    fetch_json::<Vec<CatImage>>(client.get(CAT_URL))
        .await
        .and_then(|images| images.into_iter().next())
        .and_then(|image| non_empty(image.url))
}

/// Fetches a random fox image URL.
pub async fn fetch_fox_image(client: &Client) -> Option<String> {
    fetch_json::<FoxResponse>(client.get(FOX_URL))
        .await
        .and_then(|response| non_empty(response.image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dog_payload_parses() {
        let payload = r#"{"message": "https://images.dog.ceo/1.jpg", "status": "success"}"#;
        let response: DogResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(non_empty(response.message).unwrap(), "https://images.dog.ceo/1.jpg");
    }

    #[test]
    fn cat_payload_takes_the_first_image() {
        let payload = r#"[{"id": "a", "url": "https://cdn2.thecatapi.com/a.jpg"}]"#;
        let images: Vec<CatImage> = serde_json::from_str(payload).unwrap();
        assert_eq!(images[0].url, "https://cdn2.thecatapi.com/a.jpg");
    }

    #[test]
    fn empty_cat_list_is_not_found() {
        let images: Vec<CatImage> = serde_json::from_str("[]").unwrap();
        assert!(images.into_iter().next().is_none());
    }

    #[test]
    fn empty_url_is_not_found() {
        assert!(non_empty(String::new()).is_none());
    }
}
