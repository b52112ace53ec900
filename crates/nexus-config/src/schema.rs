//! Configuration schema definitions.

use nexus_common::NexusError;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the InfoNexus bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Upstream API keys.
    pub api_keys: ApiKeysConfig,
    /// User registry configuration.
    pub registry: RegistryConfig,
    /// Outbound HTTP configuration.
    pub http: HttpConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Prefix for text commands.
    pub prefix: String,
}

/// API keys for upstream providers that require one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeysConfig {
    /// Tenor GIF search key.
    pub tenor: String,
    /// News API key.
    pub news: String,
    /// OMDB movie lookup key.
    pub omdb: String,
    /// Alpha Vantage stock quote key.
    pub alpha_vantage: String,
    /// NASA open API key.
    pub nasa: String,
}

/// User registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Path of the JSON registry file.
    pub path: String,
}

/// Outbound HTTP configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout applied to every provider call.
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::Config`] when a required value is empty.
    pub fn validate(&self) -> Result<(), NexusError> {
        if self.discord.token.is_empty() {
            return Err(NexusError::Config(
                "Discord token cannot be empty".to_string(),
            ));
        }
        if self.discord.prefix.is_empty() {
            return Err(NexusError::Config(
                "Command prefix cannot be empty".to_string(),
            ));
        }
        if self.registry.path.is_empty() {
            return Err(NexusError::Config(
                "Registry path cannot be empty".to_string(),
            ));
        }
        if self.http.request_timeout_seconds == 0 {
            return Err(NexusError::Config(
                "Request timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            discord: DiscordConfig {
                token: "token".to_string(),
                prefix: "!".to_string(),
            },
            api_keys: ApiKeysConfig {
                tenor: "t".to_string(),
                news: "n".to_string(),
                omdb: "o".to_string(),
                alpha_vantage: "a".to_string(),
                nasa: "ns".to_string(),
            },
            registry: RegistryConfig {
                path: "user_data.json".to_string(),
            },
            http: HttpConfig {
                request_timeout_seconds: 10,
            },
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn empty_token_fails_validation() {
        let mut config = sample_config();
        config.discord.token.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = sample_config();
        config.http.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
