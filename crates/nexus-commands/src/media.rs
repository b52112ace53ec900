//! Movie, space, food, magic, and Reddit commands.

use poise::serenity_prelude as serenity;
use rand::seq::SliceRandom;

use crate::framework::{Context, Error};
use crate::respond;

/// Look up a movie by title.
#[poise::command(prefix_command, slash_command)]
pub async fn movie(
    ctx: Context<'_>,
    #[description = "Movie title"]
    #[rest]
    title: String,
) -> Result<(), Error> {
    let api_key = ctx.data().config.api_keys.omdb.clone();
    match nexus_providers::movies::fetch_movie(&ctx.data().http, &api_key, &title).await {
        Some(movie) => {
            let embed = serenity::CreateEmbed::new()
                .title(format!("🎬 {} ({})", movie.title, movie.year))
                .description(movie.plot)
                .field("Genre", movie.genre, true)
                .field("Director", movie.director, true)
                .thumbnail(movie.poster)
                .colour(serenity::Colour::RED);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "that movie").await,
    }
}

/// See NASA's astronomy picture of the day.
#[poise::command(prefix_command, slash_command)]
pub async fn nasa(ctx: Context<'_>) -> Result<(), Error> {
    let api_key = ctx.data().config.api_keys.nasa.clone();
    match nexus_providers::nasa::fetch_apod(&ctx.data().http, &api_key).await {
        Some(apod) => {
            let embed = serenity::CreateEmbed::new()
                .title(format!("🚀 {}", apod.title))
                .description(apod.explanation)
                .image(apod.url)
                .colour(serenity::Colour::DARK_BLUE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "the astronomy picture").await,
    }
}

/// Learn a random spell from the wizarding world.
#[poise::command(prefix_command, slash_command)]
pub async fn spell(ctx: Context<'_>) -> Result<(), Error> {
    let spells = nexus_providers::wizarding::fetch_spells(&ctx.data().http).await;
    let picked = spells.and_then(|spells| {
        let mut rng = rand::thread_rng();
        spells.choose(&mut rng).cloned()
    });
    match picked {
        Some(spell) => {
            let embed = respond::text_embed(
                format!("🪄 {}", spell.name),
                spell.description,
                serenity::Colour::DARK_PURPLE,
            );
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a spell").await,
    }
}

/// Get a random meal suggestion.
#[poise::command(prefix_command, slash_command)]
pub async fn meal(ctx: Context<'_>) -> Result<(), Error> {
    match nexus_providers::food::fetch_random_meal(&ctx.data().http).await {
        Some(meal) => {
            let embed = serenity::CreateEmbed::new()
                .title(format!("🍽️ {}", meal.name))
                .field("Cuisine", meal.area, true)
                .field("Category", meal.category, true)
                .image(meal.thumbnail)
                .colour(serenity::Colour::ORANGE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, "a meal").await,
    }
}

/// Fetch a random post from a subreddit.
#[poise::command(prefix_command, slash_command)]
pub async fn reddit(
    ctx: Context<'_>,
    #[description = "Subreddit name without the r/"] subreddit: String,
) -> Result<(), Error> {
    match nexus_providers::reddit::fetch_subreddit_post(&ctx.data().http, &subreddit).await {
        Some(post) => {
            let embed = serenity::CreateEmbed::new()
                .title(post.title)
                .url(post.url.clone())
                .image(post.url)
                .colour(serenity::Colour::ORANGE);
            respond::send_embed(ctx, embed).await
        }
        None => respond::couldnt_fetch(ctx, format!("a post from r/{subreddit}").as_str()).await,
    }
}
