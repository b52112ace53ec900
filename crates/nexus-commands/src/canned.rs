//! Commands backed by the built-in text collections.
//!
//! These never touch the network; the only moving part is the random pick,
//! done in a block so the thread-local generator is gone before the reply
//! future is awaited.

use nexus_providers::canned;
use poise::serenity_prelude as serenity;

use crate::framework::{Context, Error};
use crate::respond;

macro_rules! canned_command {
    ($name:ident, $list:path, $doc:expr, $title:expr, $colour:ident) => {
        #[doc = $doc]
        #[poise::command(prefix_command, slash_command)]
        pub async fn $name(ctx: Context<'_>) -> Result<(), Error> {
            let text = {
                let mut rng = rand::thread_rng();
                canned::pick($list, &mut rng)
            };
            let embed = respond::text_embed($title, text, serenity::Colour::$colour);
            respond::send_embed(ctx, embed).await
        }
    };
}

canned_command!(
    fortune,
    canned::FORTUNES,
    "Receive a fortune cookie message.",
    "🥠 Your fortune",
    GOLD
);
canned_command!(
    story,
    canned::STORIES,
    "Hear a very short story.",
    "📚 Story time",
    PURPLE
);
canned_command!(
    music_quote,
    canned::MUSIC_QUOTES,
    "Read a quote about music.",
    "🎵 On music",
    BLUE
);
canned_command!(
    art_quote,
    canned::ART_QUOTES,
    "Read a quote about art.",
    "🎨 On art",
    PURPLE
);
canned_command!(
    math_fact,
    canned::MATH_FACTS,
    "Learn a mathematics fact.",
    "➗ Math fact",
    TEAL
);
canned_command!(
    geography_fact,
    canned::GEOGRAPHY_FACTS,
    "Learn a geography fact.",
    "🗺️ Geography fact",
    DARK_GREEN
);
canned_command!(
    politics_fact,
    canned::POLITICS_FACTS,
    "Learn a politics fact.",
    "🏛️ Politics fact",
    DARK_BLUE
);
canned_command!(
    computer_fact,
    canned::COMPUTER_FACTS,
    "Learn a computing fact.",
    "💻 Computer fact",
    DARK_BLUE
);
canned_command!(
    cinema_fact,
    canned::CINEMA_FACTS,
    "Learn a cinema fact.",
    "🎥 Cinema fact",
    RED
);
canned_command!(
    religion_fact,
    canned::RELIGION_FACTS,
    "Learn a fact about world religions.",
    "🕊️ Religion fact",
    GOLD
);
canned_command!(
    physics_fact,
    canned::PHYSICS_FACTS,
    "Learn a physics fact.",
    "⚛️ Physics fact",
    TEAL
);
canned_command!(
    technology_fact,
    canned::TECHNOLOGY_FACTS,
    "Learn a technology fact.",
    "🔧 Technology fact",
    DARK_BLUE
);
canned_command!(
    environment_fact,
    canned::ENVIRONMENT_FACTS,
    "Learn an environment fact.",
    "🌱 Environment fact",
    DARK_GREEN
);
canned_command!(
    entertainment_fact,
    canned::ENTERTAINMENT_FACTS,
    "Learn an entertainment fact.",
    "🎭 Entertainment fact",
    PURPLE
);
canned_command!(
    fashion_fact,
    canned::FASHION_FACTS,
    "Learn a fashion fact.",
    "👗 Fashion fact",
    PURPLE
);
canned_command!(
    lifestyle_fact,
    canned::LIFESTYLE_FACTS,
    "Get a lifestyle tidbit.",
    "🛋️ Lifestyle",
    ORANGE
);
canned_command!(
    weather_fact,
    canned::WEATHER_FACTS,
    "Learn a weather fact.",
    "🌦️ Weather fact",
    TEAL
);
canned_command!(
    space_fact,
    canned::SPACE_FACTS,
    "Learn a space fact.",
    "🌌 Space fact",
    DARK_BLUE
);
canned_command!(
    health_tip,
    canned::HEALTH_TIPS,
    "Get a simple health tip.",
    "💪 Health tip",
    DARK_GREEN
);
