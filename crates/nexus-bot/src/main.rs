//! Main entry point for the InfoNexus bot.

use nexus_bot::InfoNexusBot;
use nexus_config::load_from_env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexus_bot=info,nexus_commands=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting InfoNexus");

    let config = load_from_env()?;
    let bot = InfoNexusBot::new(config);
    bot.start().await?;

    Ok(())
}
