//! Word definitions from the Free Dictionary API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

/// A definition with an optional usage example.
#[derive(Debug, Clone)]
pub struct Definition {
    /// The definition text.
    pub definition: String,
    /// An example sentence, when the upstream provides one.
    pub example: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    definitions: Vec<DefinitionEntry>,
}

#[derive(Debug, Deserialize)]
struct DefinitionEntry {
    definition: String,
    example: Option<String>,
}

fn first_definition(entries: Vec<Entry>) -> Option<Definition> {
    let entry = entries
        .into_iter()
        .next()?
        .meanings
        .into_iter()
        .next()?
        .definitions
        .into_iter()
        .next()?;
    Some(Definition {
        definition: entry.definition,
        example: entry.example,
    })
}

/// Looks up the first definition of `word`.
pub async fn fetch_definition(client: &Client, word: &str) -> Option<Definition> {
    let url = format!("https://api.dictionaryapi.dev/api/v2/entries/en/{word}");
    fetch_json::<Vec<Entry>>(client.get(url))
        .await
        .and_then(first_definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_first_definition() {
        let payload = r#"[{"word": "crate", "meanings": [{"partOfSpeech": "noun",
            "definitions": [{"definition": "A box.", "example": "A crate of apples."}]
        }]}]"#;
        let definition = first_definition(serde_json::from_str(payload).unwrap()).unwrap();
        assert_eq!(definition.definition, "A box.");
        assert_eq!(definition.example.as_deref(), Some("A crate of apples."));
    }

    #[test]
    fn missing_example_is_allowed() {
        let payload = r#"[{"meanings": [{"definitions": [{"definition": "A box."}]}]}]"#;
        let definition = first_definition(serde_json::from_str(payload).unwrap()).unwrap();
        assert!(definition.example.is_none());
    }

    #[test]
    fn empty_entries_are_not_found() {
        assert!(first_definition(serde_json::from_str("[]").unwrap()).is_none());
    }
}
