//! Shared command data, guard composition, and the framework error handler.

use std::sync::Arc;

use nexus_common::StartupContext;
use nexus_config::Config;
use nexus_registry::{StorageError, UserRegistry};
use tracing::{debug, error};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Shared HTTP client for provider calls.
    pub http: reqwest::Client,
    /// The durable user registry.
    pub registry: Arc<UserRegistry>,
    /// Immutable startup facts (launch time).
    pub startup: StartupContext,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// A dispatcher guard: runs before a command body, returns allow/deny.
pub type Guard = for<'a> fn(Context<'a>) -> poise::BoxFuture<'a, Result<bool, Error>>;

/// Commands that run without a registration record.
pub const UNGATED_COMMANDS: &[&str] = &["about", "register", "what"];

/// Fixed denial message for unregistered users.
pub const NOT_REGISTERED_MESSAGE: &str =
    "❗ You need to register first using `!register <username>`.";

/// Fixed corrective message for bad or missing arguments.
pub const MISSING_ARGUMENT_MESSAGE: &str =
    "❗ Missing arguments. Please check the command usage with `!what`.";

/// Fixed corrective message for unknown commands.
pub const UNKNOWN_COMMAND_MESSAGE: &str =
    "❗ Command not found. Use `!what` to see the list of available commands.";

/// Generic apology for anything unexpected.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "❗ An unexpected error occurred. Please try again later.";

/// The named guard list, run in order before every command body.
pub const GUARDS: &[(&str, Guard)] = &[("registration", registration_guard_entry)];

fn registration_guard_entry(ctx: Context<'_>) -> poise::BoxFuture<'_, Result<bool, Error>> {
    Box::pin(registration_guard(ctx))
}

/// Runs every guard; the first deny suppresses the command body.
///
/// Wired into the framework through `FrameworkOptions::command_check`.
///
/// # Errors
///
/// Propagates a guard's own failure (for the registration guard, a registry
/// `StorageError`), which the error handler reports as a generic failure.
pub async fn run_guards(ctx: Context<'_>) -> Result<bool, Error> {
    for (name, guard) in GUARDS {
        if !guard(ctx).await? {
            debug!(guard = name, command = %ctx.command().name, "guard denied command");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Allows ungated commands for everyone and everything else only for
/// registered users. Stateless apart from the registry read.
async fn registration_guard(ctx: Context<'_>) -> Result<bool, Error> {
    let user_id = ctx.author().id.to_string();
    let registry = &ctx.data().registry;
    Ok(gate_allows(&ctx.command().name, || {
        registry.is_registered(&user_id)
    })?)
}

/// The gate decision itself, separated from the dispatcher wiring. Ungated
/// commands pass without a registry read; everything else passes only for a
/// registered id. A failing lookup is a guard error, not a pass.
fn gate_allows(
    command_name: &str,
    is_registered: impl FnOnce() -> Result<bool, StorageError>,
) -> Result<bool, StorageError> {
    if UNGATED_COMMANDS.contains(&command_name) {
        return Ok(true);
    }
    is_registered()
}

/// Global error handler: every per-command failure is recovered here; only
/// startup errors are allowed to end the process.
pub async fn on_error(framework_error: poise::FrameworkError<'_, Data, Error>) {
    match framework_error {
        poise::FrameworkError::Setup { error, .. } => {
            error!(%error, "failed to set up the bot");
        }
        poise::FrameworkError::ArgumentParse { ctx, error, .. } => {
            debug!(command = %ctx.command().name, %error, "argument parse failure");
            if let Err(error) = ctx.say(MISSING_ARGUMENT_MESSAGE).await {
                error!(%error, "failed to send argument-parse notice");
            }
        }
        poise::FrameworkError::UnknownCommand { ctx, msg, .. } => {
            if let Err(error) = msg.reply(ctx, UNKNOWN_COMMAND_MESSAGE).await {
                error!(%error, "failed to send unknown-command notice");
            }
        }
        poise::FrameworkError::CommandCheckFailed { ctx, error, .. } => {
            let notice = match error {
                Some(error) => {
                    error!(command = %ctx.command().name, %error, "guard failed");
                    UNEXPECTED_ERROR_MESSAGE
                }
                None => NOT_REGISTERED_MESSAGE,
            };
            if let Err(error) = ctx.say(notice).await {
                error!(%error, "failed to send access-denied notice");
            }
        }
        poise::FrameworkError::Command { ctx, error, .. } => {
            error!(command = %ctx.command().name, %error, "command failed");
            if let Err(error) = ctx.say(UNEXPECTED_ERROR_MESSAGE).await {
                error!(%error, "failed to send error apology");
            }
        }
        other => {
            if let Err(error) = poise::builtins::on_error(other).await {
                error!(%error, "error while handling framework error");
            }
        }
    }
}

/// The full command catalog, one canonical command per subject.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::about::about(),
        crate::register::register(),
        crate::what::what(),
        crate::uptime::uptime(),
        crate::remind::remind(),
        crate::trivia::trivia(),
        // Animal images
        crate::animals::dog(),
        crate::animals::cat(),
        crate::animals::fox(),
        // Jokes and entertainment
        crate::fun::joke(),
        crate::fun::dadjoke(),
        crate::fun::meme(),
        crate::fun::gif(),
        // Facts and lookups
        crate::knowledge::fact(),
        crate::knowledge::quote(),
        crate::knowledge::define(),
        crate::knowledge::numberfact(),
        crate::knowledge::activity(),
        crate::knowledge::horoscope(),
        // Media and culture
        crate::media::movie(),
        crate::media::nasa(),
        crate::media::spell(),
        crate::media::meal(),
        crate::media::reddit(),
        // Developer corner
        crate::dev::github(),
        crate::dev::trending(),
        // Markets
        crate::finance::stock(),
        crate::finance::bitcoin(),
        // Canned subjects
        crate::canned::fortune(),
        crate::canned::story(),
        crate::canned::music_quote(),
        crate::canned::art_quote(),
        crate::canned::math_fact(),
        crate::canned::geography_fact(),
        crate::canned::politics_fact(),
        crate::canned::computer_fact(),
        crate::canned::cinema_fact(),
        crate::canned::religion_fact(),
        crate::canned::physics_fact(),
        crate::canned::technology_fact(),
        crate::canned::environment_fact(),
        crate::canned::entertainment_fact(),
        crate::canned::fashion_fact(),
        crate::canned::lifestyle_fact(),
        crate::canned::weather_fact(),
        crate::canned::space_fact(),
        crate::canned::health_tip(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn registry_with(dir: &tempfile::TempDir, user_id: &str) -> UserRegistry {
        let registry = UserRegistry::open(dir.path().join("user_data.json")).unwrap();
        registry.register(user_id, "Ada", Utc::now()).unwrap();
        registry
    }

    #[test]
    fn ungated_commands_skip_the_registry() {
        for name in UNGATED_COMMANDS {
            let allowed = gate_allows(name, || panic!("ungated command read the registry"));
            assert!(allowed.unwrap());
        }
    }

    #[test]
    fn registered_user_passes_the_gate() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with(&dir, "42");
        assert!(gate_allows("trivia", || registry.is_registered("42")).unwrap());
    }

    #[test]
    fn unregistered_user_is_denied() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with(&dir, "42");
        assert!(!gate_allows("trivia", || registry.is_registered("99")).unwrap());
    }

    #[test]
    fn registry_failure_is_a_guard_error_not_a_pass() {
        let result = gate_allows("trivia", || {
            Err(StorageError::Io(std::io::Error::other("disk gone")))
        });
        assert!(result.is_err());
    }
}
