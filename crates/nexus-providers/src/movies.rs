//! Movie lookups from the OMDB API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://www.omdbapi.com/";

/// Movie details.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    /// Title.
    #[serde(rename = "Title", default)]
    pub title: String,
    /// Release year.
    #[serde(rename = "Year", default)]
    pub year: String,
    /// Genre list.
    #[serde(rename = "Genre", default)]
    pub genre: String,
    /// Director credit.
    #[serde(rename = "Director", default)]
    pub director: String,
    /// Plot summary.
    #[serde(rename = "Plot", default)]
    pub plot: String,
    /// Poster image URL.
    #[serde(rename = "Poster", default)]
    pub poster: String,
    /// OMDB's own found/not-found flag, `"True"` on success.
    #[serde(rename = "Response")]
    response: String,
}

fn found(movie: Movie) -> Option<Movie> {
    // OMDB signals a miss with HTTP 200 and Response == "False".
    if movie.response == "True" {
        Some(movie)
    } else {
        None
    }
}

/// Looks up a movie by title.
pub async fn fetch_movie(client: &Client, api_key: &str, title: &str) -> Option<Movie> {
    let request = client.get(API_URL).query(&[("t", title), ("apikey", api_key)]);
    fetch_json::<Movie>(request).await.and_then(found)
}
