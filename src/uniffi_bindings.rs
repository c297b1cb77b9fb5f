//! UniFFI bindings for mealdb-browser
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::client::{CatalogSource, MealDbClient};
use crate::{BrowseError, Category, Meal, MealDetail};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible category
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiCategory {
    pub id: String,
    pub name: String,
    /// Thumbnail URL, upgraded to https
    pub thumbnail_url: String,
    pub description: String,
}

impl From<Category> for FfiCategory {
    fn from(category: Category) -> Self {
        FfiCategory {
            thumbnail_url: category.secure_thumbnail(),
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

/// FFI-compatible meal summary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMeal {
    pub id: String,
    pub name: String,
    /// Thumbnail URL, upgraded to https
    pub thumbnail_url: String,
}

impl From<Meal> for FfiMeal {
    fn from(meal: Meal) -> Self {
        FfiMeal {
            thumbnail_url: meal.secure_thumbnail(),
            id: meal.id,
            name: meal.name,
        }
    }
}

/// FFI-compatible meal detail, with the ingredient lines already built
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMealDetail {
    pub id: String,
    pub name: String,
    pub region: String,
    pub instructions: String,
    pub thumbnail_url: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub youtube_url: Option<String>,
    pub source_url: Option<String>,
    /// "<measure> <ingredient>" lines in slot order
    pub ingredients: Vec<String>,
}

impl From<MealDetail> for FfiMealDetail {
    fn from(detail: MealDetail) -> Self {
        let ingredients = crate::extract_ingredients(&detail);
        FfiMealDetail {
            thumbnail_url: detail.secure_thumbnail(),
            id: detail.id,
            name: detail.name,
            region: detail.region,
            instructions: detail.instructions,
            category: detail.category,
            tags: detail.tags,
            youtube_url: detail.youtube_url,
            source_url: detail.source_url,
            ingredients,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiBrowseError {
    /// Network failure or non-success HTTP status
    FetchError { message: String },
    /// Catalog response could not be parsed
    ParseError { message: String },
    /// No meal with the requested id
    NotFound { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Client or configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiBrowseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiBrowseError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiBrowseError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiBrowseError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiBrowseError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiBrowseError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiBrowseError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiBrowseError {}

impl From<BrowseError> for FfiBrowseError {
    fn from(err: BrowseError) -> Self {
        let message = err.to_string();
        match err {
            BrowseError::FetchError(_) | BrowseError::HttpStatus { .. } => {
                FfiBrowseError::FetchError { message }
            }
            BrowseError::ParseError(_) => FfiBrowseError::ParseError { message },
            BrowseError::NotFound(id) => FfiBrowseError::NotFound { message: id },
            BrowseError::InvalidInput(msg) => FfiBrowseError::InvalidInput { message: msg },
            BrowseError::BuilderError(_) | BrowseError::ConfigError(_) => {
                FfiBrowseError::ConfigError { message }
            }
        }
    }
}

/// Configuration for catalog calls
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiBrowserConfig {
    /// Optional catalog root (uses the public catalog if not specified)
    pub base_url: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiBrowseError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiBrowseError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn client_for(config: Option<FfiBrowserConfig>) -> Result<MealDbClient, FfiBrowseError> {
    let config = config.unwrap_or_default();

    let mut builder = MealDbClient::builder();

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    Ok(builder.build()?)
}

/// List categories whose name contains `query` (case-insensitive)
///
/// # Arguments
/// * `query` - Search text; empty returns every category
/// * `config` - Optional configuration for the request
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_categories(
    query: String,
    config: Option<FfiBrowserConfig>,
) -> Result<Vec<FfiCategory>, FfiBrowseError> {
    let client = client_for(config)?;
    let rt = create_runtime()?;
    let categories = rt.block_on(client.categories())?;
    Ok(crate::filter_categories(&categories, &query)
        .into_iter()
        .map(FfiCategory::from)
        .collect())
}

/// List the meals of one category
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_meals(
    category: String,
    config: Option<FfiBrowserConfig>,
) -> Result<Vec<FfiMeal>, FfiBrowseError> {
    let client = client_for(config)?;
    let rt = create_runtime()?;
    let meals = rt.block_on(client.meals_in_category(&category))?;
    Ok(meals.into_iter().map(FfiMeal::from).collect())
}

/// Look up a meal by id
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_meal_detail(
    id: String,
    config: Option<FfiBrowserConfig>,
) -> Result<FfiMealDetail, FfiBrowseError> {
    let client = client_for(config)?;
    let rt = create_runtime()?;
    let detail = rt.block_on(client.meal_detail(&id))?;
    Ok(detail.into())
}

/// Filter already-loaded category names without a network call
///
/// Lets a mobile front end re-run the search on every keystroke.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn filter_category_names(names: Vec<String>, query: String) -> Vec<String> {
    let categories: Vec<Category> = names
        .into_iter()
        .map(|name| Category::new(String::new(), name))
        .collect();
    crate::filter_categories(&categories, &query)
        .into_iter()
        .map(|c| c.name)
        .collect()
}
