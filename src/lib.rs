pub mod browser;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod ingredients;
pub mod model;
pub mod uniffi_bindings;

pub use browser::{Browser, View};
pub use client::{CatalogSource, MealDbClient, MealDbClientBuilder};
pub use config::BrowserConfig;
pub use error::{BrowseError, Result};
pub use filter::{filter_by_name, filter_categories, filter_meals, Named};
pub use ingredients::extract_ingredients;
pub use model::{Category, IngredientSlot, Meal, MealDetail, SLOT_COUNT};

/// Fetch every category from the public catalog and keep those matching `query`.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let seafood = mealdb_browser::search_categories("sea").await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_categories(query: &str) -> Result<Vec<Category>> {
    let client = MealDbClient::builder().build()?;
    let categories = client.categories().await?;
    Ok(filter_categories(&categories, query))
}

/// Fetch the meal summaries of one category from the public catalog.
pub async fn meals_in_category(category: &str) -> Result<Vec<Meal>> {
    let client = MealDbClient::builder().build()?;
    client.meals_in_category(category).await
}

/// Look up one meal and return it together with its ingredient lines.
pub async fn meal_with_ingredients(id: &str) -> Result<(MealDetail, Vec<String>)> {
    let client = MealDbClient::builder().build()?;
    let detail = client.meal_detail(id).await?;
    let ingredients = extract_ingredients(&detail);
    Ok((detail, ingredients))
}
