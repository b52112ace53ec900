//! Configuration loading from the process environment.

use crate::schema::{ApiKeysConfig, Config, DiscordConfig, HttpConfig, RegistryConfig};
use nexus_common::NexusError;
use tracing::debug;

/// Required environment variables; every one of these must be present.
const REQUIRED_VARS: &[&str] = &[
    "BOT_TOKEN",
    "TENOR_API_KEY",
    "NEWS_API_KEY",
    "OMDB_API_KEY",
    "ALPHA_VANTAGE_API_KEY",
    "NASA_API_KEY",
];

const DEFAULT_REGISTRY_PATH: &str = "user_data.json";
const DEFAULT_PREFIX: &str = "!";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Loads configuration from the process environment.
///
/// # Errors
///
/// Returns [`NexusError::Config`] naming every missing required variable.
pub fn load_from_env() -> Result<Config, NexusError> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Loads configuration through an injected lookup function.
///
/// The indirection keeps tests away from process-global environment state.
///
/// # Errors
///
/// Returns [`NexusError::Config`] naming every missing required variable,
/// or when a present value fails validation.
pub fn load_from_lookup<F>(lookup: F) -> Result<Config, NexusError>
where
    F: Fn(&str) -> Option<String>,
{
    let missing: Vec<&str> = REQUIRED_VARS
        .iter()
        .copied()
        .filter(|key| lookup(key).map_or(true, |value| value.is_empty()))
        .collect();
    if !missing.is_empty() {
        return Err(NexusError::Config(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    let get = |key: &str| lookup(key).unwrap_or_default();

    let timeout = match lookup("REQUEST_TIMEOUT_SECONDS") {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            NexusError::Config(format!("REQUEST_TIMEOUT_SECONDS is not a number: {raw}"))
        })?,
        None => DEFAULT_TIMEOUT_SECONDS,
    };

    let config = Config {
        discord: DiscordConfig {
            token: get("BOT_TOKEN"),
            prefix: lookup("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        },
        api_keys: ApiKeysConfig {
            tenor: get("TENOR_API_KEY"),
            news: get("NEWS_API_KEY"),
            omdb: get("OMDB_API_KEY"),
            alpha_vantage: get("ALPHA_VANTAGE_API_KEY"),
            nasa: get("NASA_API_KEY"),
        },
        registry: RegistryConfig {
            path: lookup("USER_DATA_FILE").unwrap_or_else(|| DEFAULT_REGISTRY_PATH.to_string()),
        },
        http: HttpConfig {
            request_timeout_seconds: timeout,
        },
    };

    config.validate()?;
    debug!(registry = %config.registry.path, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        REQUIRED_VARS.iter().map(|key| (*key, "value")).collect()
    }

    fn lookup_in<'a>(env: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| env.get(key).map(|value| (*value).to_string())
    }

    #[test]
    fn loads_with_all_required_vars() {
        let env = full_env();
        let config = load_from_lookup(lookup_in(&env)).unwrap();
        assert_eq!(config.discord.token, "value");
        assert_eq!(config.discord.prefix, "!");
        assert_eq!(config.registry.path, "user_data.json");
        assert_eq!(config.http.request_timeout_seconds, 10);
    }

    #[test]
    fn missing_vars_are_all_named() {
        let mut env = full_env();
        env.remove("BOT_TOKEN");
        env.remove("NASA_API_KEY");
        let err = load_from_lookup(lookup_in(&env)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("BOT_TOKEN"));
        assert!(message.contains("NASA_API_KEY"));
    }

    #[test]
    fn empty_required_var_counts_as_missing() {
        let mut env = full_env();
        env.insert("OMDB_API_KEY", "");
        let err = load_from_lookup(lookup_in(&env)).unwrap_err();
        assert!(err.to_string().contains("OMDB_API_KEY"));
    }

    #[test]
    fn overrides_are_honored() {
        let mut env = full_env();
        env.insert("COMMAND_PREFIX", "?");
        env.insert("USER_DATA_FILE", "/tmp/users.json");
        env.insert("REQUEST_TIMEOUT_SECONDS", "30");
        let config = load_from_lookup(lookup_in(&env)).unwrap();
        assert_eq!(config.discord.prefix, "?");
        assert_eq!(config.registry.path, "/tmp/users.json");
        assert_eq!(config.http.request_timeout_seconds, 30);
    }

    #[test]
    fn bad_timeout_is_a_config_error() {
        let mut env = full_env();
        env.insert("REQUEST_TIMEOUT_SECONDS", "soon");
        assert!(load_from_lookup(lookup_in(&env)).is_err());
    }
}
