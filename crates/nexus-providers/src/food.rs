//! Random meals from TheMealDB.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const API_URL: &str = "https://www.themealdb.com/api/json/v1/1/random.php";

/// A meal suggestion.
#[derive(Debug, Clone, Deserialize)]
pub struct Meal {
    /// Meal name.
    #[serde(rename = "strMeal")]
    pub name: String,
    /// Cuisine area.
    #[serde(rename = "strArea")]
    pub area: String,
    /// Meal category.
    #[serde(rename = "strCategory")]
    pub category: String,
    /// Thumbnail image URL.
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
}

#[derive(Debug, Deserialize)]
struct MealResponse {
    meals: Option<Vec<Meal>>,
}

fn first_meal(response: MealResponse) -> Option<Meal> {
    response.meals.and_then(|meals| meals.into_iter().next())
}

/// Fetches a random meal.
pub async fn fetch_random_meal(client: &Client) -> Option<Meal> {
    fetch_json::<MealResponse>(client.get(API_URL))
        .await
        .and_then(first_meal)
}
