//! Canned content for subjects with no reliable public API.
//!
//! These satisfy the same provider contract as the HTTP modules: a pick
//! from a non-empty list never fails, so the commands built on them have no
//! not-found path.

use rand::seq::SliceRandom;
use rand::Rng;

/// Fortune-cookie lines.
pub const FORTUNES: &[&str] = &[
    "You will have a great day!",
    "Success is in your future.",
    "Adventure awaits you.",
    "Embrace the challenges ahead.",
    "A pleasant surprise is waiting for you.",
];

/// Short inspirational stories.
pub const STORIES: &[&str] = &[
    "Once upon a time, in a land far, far away, there lived a brave adventurer who overcame all odds to achieve their dreams.",
    "A young apprentice asked the blacksmith how long mastery takes. \"As long as you keep showing up,\" the smith said, and handed over the hammer.",
    "The gardener planted a tree knowing she would never sit in its shade. Forty years later, the whole street did.",
];

/// Music quotes.
pub const MUSIC_QUOTES: &[&str] = &[
    "Music is the universal language of mankind. - Henry Wadsworth Longfellow",
    "Where words fail, music speaks. - Hans Christian Andersen",
    "Without music, life would be a mistake. - Friedrich Nietzsche",
    "One good thing about music, when it hits you, you feel no pain. - Bob Marley",
    "Music expresses that which cannot be said and on which it is impossible to be silent. - Victor Hugo",
];

/// Art quotes.
pub const ART_QUOTES: &[&str] = &[
    "Every artist was first an amateur. - Ralph Waldo Emerson",
    "Art is not what you see, but what you make others see. - Edgar Degas",
    "Creativity takes courage. - Henri Matisse",
    "Art enables us to find ourselves and lose ourselves at the same time. - Thomas Merton",
    "The purpose of art is washing the dust of daily life off our souls. - Pablo Picasso",
];

/// Mathematics facts.
pub const MATH_FACTS: &[&str] = &[
    "Zero is the only number that cannot be represented by Roman numerals.",
    "A triangle has three sides, a square has four.",
    "The number pi is irrational.",
    "There are infinitely many prime numbers.",
    "Euler's identity is considered the most beautiful theorem in mathematics.",
];

/// Geography facts.
pub const GEOGRAPHY_FACTS: &[&str] = &[
    "Canada has the longest coastline in the world.",
    "Russia is the largest country by area.",
    "There are seven continents on Earth.",
    "The Amazon River is the largest by discharge volume.",
    "Mount Everest is the highest mountain above sea level.",
];

/// Politics facts.
pub const POLITICS_FACTS: &[&str] = &[
    "The United Nations has 193 member states.",
    "The first female Prime Minister was Sirimavo Bandaranaike of Sri Lanka.",
    "The term 'democracy' comes from the Greek words 'demos' and 'kratos'.",
    "There are over 200 recognized political systems globally.",
    "The longest-serving head of state was King Bhumibol Adulyadej of Thailand.",
];

/// Computing facts.
pub const COMPUTER_FACTS: &[&str] = &[
    "The first computer bug was a moth trapped in a Harvard Mark II computer.",
    "The QWERTY keyboard was designed to prevent typewriter jams.",
    "The first computer virus was created in 1983.",
    "Approximately 90% of the world's data has been created in the last two years.",
    "The term 'debugging' was popularized by Grace Hopper.",
];

/// Cinema facts.
pub const CINEMA_FACTS: &[&str] = &[
    "The first feature-length film was 'The Story of the Kelly Gang' (1906).",
    "Avatar is the highest-grossing film of all time.",
    "Gone with the Wind was the first film to earn over $1 billion.",
    "The silent film era lasted from the late 1890s to the late 1920s.",
    "Pixar's 'Toy Story' was the first entirely computer-animated feature film.",
];

/// Religion facts.
pub const RELIGION_FACTS: &[&str] = &[
    "There are over 4,000 religions in the world.",
    "Buddhism originated in India around the 5th century BCE.",
    "Christianity is the largest religion globally.",
    "Islam was founded in the 7th century CE in Mecca.",
    "Hinduism is the oldest living religion.",
];

/// Physics facts.
pub const PHYSICS_FACTS: &[&str] = &[
    "Light can behave both as a wave and as a particle.",
    "Einstein's theory of relativity revolutionized physics.",
    "Quantum entanglement is a phenomenon where particles remain connected.",
    "The speed of light is approximately 299,792 kilometers per second.",
    "Black holes are regions in space with gravitational pulls so strong that nothing can escape.",
];

/// Technology facts.
pub const TECHNOLOGY_FACTS: &[&str] = &[
    "The first computer was invented in the 1940s.",
    "The internet was initially developed for military use.",
    "Over 3 billion people use the internet worldwide.",
    "Artificial Intelligence is a rapidly growing field in technology.",
    "Blockchain technology underpins cryptocurrencies like Bitcoin.",
];

/// Environment facts.
pub const ENVIRONMENT_FACTS: &[&str] = &[
    "The Amazon rainforest produces over 20% of the world's oxygen.",
    "Plastic pollution is one of the biggest threats to marine life.",
    "Renewable energy sources are crucial for combating climate change.",
    "Deforestation contributes to the loss of biodiversity.",
    "Recycling helps reduce greenhouse gas emissions.",
];

/// Entertainment facts.
pub const ENTERTAINMENT_FACTS: &[&str] = &[
    "The Grammy Awards were established in 1959.",
    "The Oscars statuette is made of gold-plated britannium.",
    "MTV was launched on August 1, 1981.",
    "The Super Bowl is one of the most-watched sporting events in the US.",
    "Broadway in New York City is known for its theater productions.",
];

/// Fashion facts.
pub const FASHION_FACTS: &[&str] = &[
    "The little black dress became popular thanks to Coco Chanel.",
    "Blue jeans were invented by Levi Strauss in the 1870s.",
    "The first fashion magazine was published in Germany in 1586.",
    "Heels were originally worn by men in the 10th century.",
    "Nike is one of the largest sportswear brands in the world.",
];

/// Lifestyle facts.
pub const LIFESTYLE_FACTS: &[&str] = &[
    "Meditation can reduce stress and improve focus.",
    "A balanced diet is essential for maintaining good health.",
    "Regular exercise boosts mental and physical well-being.",
    "Adequate sleep is crucial for overall health.",
    "Hydration plays a key role in bodily functions.",
];

/// Weather facts.
pub const WEATHER_FACTS: &[&str] = &[
    "A bolt of lightning is about five times hotter than the surface of the sun.",
    "Raindrops are shaped more like hamburger buns than teardrops.",
    "The highest temperature ever recorded on Earth was 56.7 °C in Death Valley.",
    "Snowflakes can take up to an hour to fall from cloud to ground.",
    "A hurricane can release energy equivalent to thousands of nuclear bombs.",
];

/// Space facts.
pub const SPACE_FACTS: &[&str] = &[
    "One day on Venus is longer than one year on Venus.",
    "Neutron stars can spin hundreds of times per second.",
    "There are more stars in the universe than grains of sand on Earth.",
    "Footprints on the Moon will remain for millions of years.",
    "Jupiter's Great Red Spot is a storm larger than Earth.",
];

/// Health tips.
pub const HEALTH_TIPS: &[&str] = &[
    "Drink a glass of water first thing in the morning.",
    "Take short walking breaks during long sitting sessions.",
    "Aim for seven to nine hours of sleep each night.",
    "Add a serving of vegetables to every meal.",
    "Practice deep breathing to lower stress.",
];

/// Picks a uniformly random entry from a non-empty list.
///
/// # Panics
///
/// Panics if `items` is empty; the lists in this module never are.
#[must_use]
pub fn pick<R: Rng>(items: &[&'static str], rng: &mut R) -> &'static str {
    items.choose(rng).copied().expect("canned list must not be empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LISTS: &[&[&str]] = &[
        FORTUNES,
        STORIES,
        MUSIC_QUOTES,
        ART_QUOTES,
        MATH_FACTS,
        GEOGRAPHY_FACTS,
        POLITICS_FACTS,
        COMPUTER_FACTS,
        CINEMA_FACTS,
        RELIGION_FACTS,
        PHYSICS_FACTS,
        TECHNOLOGY_FACTS,
        ENVIRONMENT_FACTS,
        ENTERTAINMENT_FACTS,
        FASHION_FACTS,
        LIFESTYLE_FACTS,
        WEATHER_FACTS,
        SPACE_FACTS,
        HEALTH_TIPS,
    ];

    #[test]
    fn every_list_is_non_empty() {
        for list in ALL_LISTS {
            assert!(!list.is_empty());
        }
    }

    #[test]
    fn pick_returns_a_member() {
        let mut rng = rand::thread_rng();
        for list in ALL_LISTS {
            let picked = pick(list, &mut rng);
            assert!(list.contains(&picked));
        }
    }
}
