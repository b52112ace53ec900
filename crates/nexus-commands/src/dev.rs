//! Developer-oriented commands.

use poise::serenity_prelude as serenity;

use crate::framework::{Context, Error};
use crate::respond;

/// Look up a GitHub user profile.
#[poise::command(prefix_command, slash_command)]
pub async fn github(
    ctx: Context<'_>,
    #[description = "GitHub login"] username: String,
) -> Result<(), Error> {
    match nexus_providers::github::fetch_github_user(&ctx.data().http, &username).await {
        Some(user) => {
            let embed = serenity::CreateEmbed::new()
                .title(format!("🐙 {}", user.name.unwrap_or_else(|| username.clone())))
                .description(user.bio.unwrap_or_else(|| "No bio.".to_string()))
                .field("Public repos", user.public_repos.to_string(), true)
                .field("Followers", user.followers.to_string(), true)
                .field("Following", user.following.to_string(), true)
                .thumbnail(user.avatar_url)
                .colour(serenity::Colour::DARK_BLUE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, format!("the profile of {username}").as_str()).await,
    }
}

/// See today's trending GitHub repositories.
#[poise::command(prefix_command, slash_command)]
pub async fn trending(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::github::fetch_trending_repositories(&ctx.data().http).await {
        Some(repos) => {
            let body = repos
                .iter()
                .map(|repo| format!("[{}/{}]({})", repo.author, repo.name, repo.url))
                .collect::<Vec<_>>()
                .join("\n");
            let embed = respond::text_embed(
                "📈 Trending today on GitHub",
                body,
                serenity::Colour::DARK_GREEN,
            );
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "trending repositories").await,
    }
}
