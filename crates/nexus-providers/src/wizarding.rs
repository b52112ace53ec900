//! Harry Potter spells from the HP API.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://hp-api.onrender.com/api/spells";

/// One spell.
#[derive(Debug, Clone, Deserialize)]
pub struct Spell {
    /// Spell incantation.
    pub name: String,
    /// What the spell does.
    pub description: String,
}

/// Fetches the full spell list.
pub async fn fetch_spells(client: &Client) -> Option<Vec<Spell>> {
    fetch_json::<Vec<Spell>>(client.get(API_URL))
        .await
        .filter(|spells| !spells.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_list_parses() {
        let payload = r#"[{"id": "1", "name": "Lumos", "description": "Creates light."}]"#;
        let spells: Vec<Spell> = serde_json::from_str(payload).unwrap();
        assert_eq!(spells[0].name, "Lumos");
    }
}
