//! Core bot logic using the Poise framework.

use std::sync::Arc;
use std::time::Duration;

use nexus_commands::{all_commands, on_error, run_guards, Data};
use nexus_common::StartupContext;
use nexus_config::Config;
use nexus_registry::UserRegistry;
use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::error::BotResult;

/// Main bot structure.
pub struct InfoNexusBot {
    config: Arc<Config>,
}

impl InfoNexusBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Starts the bot and runs until the process receives a shutdown signal.
    ///
    /// # Errors
    ///
    /// Returns an error when the registry file cannot be opened, the HTTP
    /// client cannot be built, or the gateway connection fails.
    pub async fn start(&self) -> BotResult<()> {
        let http = nexus_providers::build_client(Duration::from_secs(
            self.config.http.request_timeout_seconds,
        ))?;
        let registry = Arc::new(UserRegistry::open(&self.config.registry.path)?);

        let data = Data {
            config: self.config.clone(),
            http,
            registry,
            startup: StartupContext::now(),
        };

        let framework = poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: all_commands(),
                prefix_options: poise::PrefixFrameworkOptions {
                    prefix: Some(self.config.discord.prefix.clone()),
                    ..Default::default()
                },
                on_error: |framework_error| Box::pin(on_error(framework_error)),
                command_check: Some(|ctx| Box::pin(run_guards(ctx))),
                ..Default::default()
            })
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!(
                        user = %ready.user.name,
                        commands = framework.options().commands.len(),
                        "connected and registered commands"
                    );
                    Ok(data)
                })
            })
            .build();

        // Prefix commands need message content on top of the guild streams.
        let intents = serenity::GatewayIntents::GUILDS
            | serenity::GatewayIntents::GUILD_MESSAGES
            | serenity::GatewayIntents::MESSAGE_CONTENT;

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, intents)
            .framework(framework)
            .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(signal_error) = tokio::signal::ctrl_c().await {
                error!(error = %signal_error, "failed to listen for shutdown signal");
                return;
            }
            info!("shutdown signal received, closing gateway connection");
            shard_manager.shutdown_all().await;
        });

        client.start().await?;
        Ok(())
    }
}
