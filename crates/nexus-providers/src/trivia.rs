//! Trivia questions from the Open Trivia Database.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://opentdb.com/api.php";

/// One trivia question with its answers.
#[derive(Debug, Clone, Deserialize)]
pub struct TriviaQuestion {
    /// Question text as returned by the upstream.
    pub question: String,
    /// The correct answer.
    pub correct_answer: String,
    /// The wrong answers to shuffle in.
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    results: Vec<TriviaQuestion>,
}

/// Maps a human category name to the Open Trivia DB category id.
/// Unknown names fall back to an uncategorized question.
#[must_use]
pub fn category_id(category: &str) -> Option<u32> {
    let id = match category.to_ascii_lowercase().as_str() {
        "general" => 9,
        "books" => 10,
        "film" => 11,
        "music" => 12,
        "science" => 17,
        "computers" => 18,
        "math" => 19,
        "sports" => 21,
        "geography" => 22,
        "history" => 23,
        "politics" => 24,
        "art" => 25,
        "celebrities" => 26,
        "animals" => 27,
        "vehicles" => 28,
        "comics" => 29,
        "gadgets" => 30,
        "anime" => 31,
        "cartoon" => 32,
        _ => return None,
    };
    Some(id)
}

fn first_question(response: TriviaResponse) -> Option<TriviaQuestion> {
    response.results.into_iter().next()
}

/// Fetches one trivia question, optionally constrained to a category.
pub async fn fetch_trivia_question(client: &Client, category: Option<&str>) -> Option<TriviaQuestion> {
    let mut request = client.get(API_URL).query(&[("amount", "1")]);
    if let Some(id) = category.and_then(category_id) {
        request = request.query(&[("category", id.to_string())]);
    }
    fetch_json::<TriviaResponse>(request).await.and_then(first_question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_ids() {
        assert_eq!(category_id("general"), Some(9));
        assert_eq!(category_id("GEOGRAPHY"), Some(22));
        assert_eq!(category_id("underwater basket weaving"), None);
    }

    #[test]
    fn parses_the_first_question() {
        let payload = r#"{
            "response_code": 0,
            "results": [{
                "question": "Capital of France?",
                "correct_answer": "Paris",
                "incorrect_answers": ["London", "Berlin", "Madrid"]
            }]
        }"#;
        let response: TriviaResponse = serde_json::from_str(payload).unwrap();
        let question = first_question(response).unwrap();
        assert_eq!(question.correct_answer, "Paris");
        assert_eq!(question.incorrect_answers.len(), 3);
    }

    #[test]
    fn empty_results_are_not_found() {
        let payload = r#"{"response_code": 1, "results": []}"#;
        let response: TriviaResponse = serde_json::from_str(payload).unwrap();
        assert!(first_question(response).is_none());
    }
}
