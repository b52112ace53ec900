//! Jokes from the Official Joke API and icanhazdadjoke.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const JOKE_URL: &str = "https://official-joke-api.appspot.com/jokes/random";
const DAD_JOKE_URL: &str = "https://icanhazdadjoke.com/";

/// A setup/punchline joke.
#[derive(Debug, Clone, Deserialize)]
pub struct Joke {
    /// The setup line.
    pub setup: String,
    /// The punchline.
    pub punchline: String,
}

impl Joke {
    /// Renders the joke as a single line.
    #[must_use]
    pub fn as_line(&self) -> String {
        format!("{} - {}", self.setup, self.punchline)
    }
}

#[derive(Debug, Deserialize)]
struct DadJokeResponse {
    joke: String,
}

/// Fetches a random two-part joke.
pub async fn fetch_joke(client: &Client) -> Option<Joke> {
    fetch_json(client.get(JOKE_URL)).await
}

/// Fetches a random dad joke.
pub async fn fetch_dad_joke(client: &Client) -> Option<String> {
    fetch_json::<DadJokeResponse>(client.get(DAD_JOKE_URL).header("Accept", "application/json"))
        .await
        .map(|response| response.joke)
}
