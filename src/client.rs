use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{BrowserConfig, DEFAULT_BASE_URL};
use crate::error::{BrowseError, Result};
use crate::model::{Category, CategoryList, Meal, MealDetail, MealList};

/// Where the browser gets its catalog data from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All food categories
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Meal summaries belonging to the named category
    async fn meals_in_category(&self, category: &str) -> Result<Vec<Meal>>;

    /// Full record for one meal
    async fn meal_detail(&self, id: &str) -> Result<MealDetail>;
}

/// HTTP client for TheMealDB JSON API
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Creates a new builder for the client
    ///
    /// # Example
    /// ```
    /// use mealdb_browser::MealDbClient;
    /// use std::time::Duration;
    ///
    /// let client = MealDbClient::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::default()
    }

    pub fn from_config(config: &BrowserConfig) -> Result<Self> {
        Self::builder()
            .base_url(&config.base_url)
            .timeout(config.timeout_duration())
            .user_agent(&config.user_agent)
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{}: {} returned {}", context, url, status);
            return Err(BrowseError::HttpStatus {
                context: context.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogSource for MealDbClient {
    async fn categories(&self) -> Result<Vec<Category>> {
        let list: CategoryList = self
            .get_json("categories.php", &[], "Failed to fetch categories")
            .await?;
        let categories = list.categories.unwrap_or_default();
        debug!("Fetched {} categories", categories.len());
        Ok(categories)
    }

    async fn meals_in_category(&self, category: &str) -> Result<Vec<Meal>> {
        let category = category.trim();
        if category.is_empty() {
            return Err(BrowseError::InvalidInput(
                "Category name cannot be empty".to_string(),
            ));
        }

        let list: MealList<Meal> = self
            .get_json("filter.php", &[("c", category)], "Failed to fetch meals")
            .await?;
        let meals = list.meals.unwrap_or_default();
        debug!("Fetched {} meals in '{}'", meals.len(), category);
        Ok(meals)
    }

    async fn meal_detail(&self, id: &str) -> Result<MealDetail> {
        let id = id.trim();
        if id.is_empty() {
            return Err(BrowseError::InvalidInput(
                "Meal id cannot be empty".to_string(),
            ));
        }

        let list: MealList<MealDetail> = self
            .get_json("lookup.php", &[("i", id)], "Failed to fetch meal details")
            .await?;
        list.meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or_else(|| BrowseError::NotFound(id.to_string()))
    }
}

/// Builder for configuring a [`MealDbClient`]
#[derive(Debug, Default)]
pub struct MealDbClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MealDbClientBuilder {
    /// Point the client at another catalog root, e.g. a premium key or a local mock
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `BrowseError::BuilderError` if the base URL is blank or the
    /// underlying HTTP client cannot be created.
    pub fn build(self) -> Result<MealDbClient> {
        let defaults = BrowserConfig::default();

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(BrowseError::BuilderError(
                "Base URL cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(defaults.timeout_duration()))
            .user_agent(self.user_agent.unwrap_or(defaults.user_agent))
            .build()
            .map_err(|e| BrowseError::BuilderError(format!("Failed to create HTTP client: {e}")))?;

        Ok(MealDbClient { client, base_url })
    }
}
