//! Front-end independent browsing session.
//!
//! Holds what a recipe-browsing screen shows at any moment: the category
//! list and its search query, the meals of the open category, and the meal
//! whose details are being displayed. Every fetching operation takes
//! `&mut self`, so a session never has more than one request in flight.

use log::{debug, info, warn};

use crate::client::CatalogSource;
use crate::error::{BrowseError, Result};
use crate::filter::filter_categories;
use crate::ingredients::extract_ingredients;
use crate::model::{Category, Meal, MealDetail};

/// Which list the session is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The searchable list of categories
    Categories,
    /// Meals of the named category
    Meals(String),
}

pub struct Browser<S> {
    source: S,
    categories: Vec<Category>,
    query: String,
    current_category: Option<String>,
    meals: Vec<Meal>,
    selected: Option<MealDetail>,
    error: Option<String>,
}

impl<S: CatalogSource> Browser<S> {
    pub fn new(source: S) -> Self {
        Browser {
            source,
            categories: Vec::new(),
            query: String::new(),
            current_category: None,
            meals: Vec::new(),
            selected: None,
            error: None,
        }
    }

    /// Fetch the category list, replacing whatever was loaded before.
    pub async fn load_categories(&mut self) -> Result<&[Category]> {
        self.error = None;
        let result = self.source.categories().await;
        match result {
            Ok(categories) => {
                info!("Loaded {} categories", categories.len());
                self.categories = categories;
                Ok(&self.categories)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Categories matching the current search query.
    pub fn visible_categories(&self) -> Vec<Category> {
        filter_categories(&self.categories, &self.query)
    }

    /// Switch to the meal list of `category`.
    ///
    /// The view only changes once the list has arrived; on failure the
    /// session stays where it was with the error recorded.
    pub async fn open_category(&mut self, category: &str) -> Result<&[Meal]> {
        self.error = None;
        self.meals.clear();
        let result = self.source.meals_in_category(category).await;
        match result {
            Ok(meals) => {
                debug!("Opened category '{}' with {} meals", category, meals.len());
                self.meals = meals;
                self.current_category = Some(category.to_string());
                Ok(&self.meals)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Fetch a meal and make it the selected detail.
    pub async fn open_meal(&mut self, id: &str) -> Result<&MealDetail> {
        self.error = None;
        let result = self.source.meal_detail(id).await;
        match result {
            Ok(detail) => {
                debug!("Selected meal {} ({})", detail.id, detail.name);
                Ok(&*self.selected.insert(detail))
            }
            Err(e) => Err(self.record(e)),
        }
    }

    pub fn selected(&self) -> Option<&MealDetail> {
        self.selected.as_ref()
    }

    /// Ingredient lines of the selected meal; empty when nothing is selected.
    pub fn selected_ingredients(&self) -> Vec<String> {
        self.selected
            .as_ref()
            .map(extract_ingredients)
            .unwrap_or_default()
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Return to the category list. Also clears a recorded error, which is
    /// how a front end offers "try again".
    pub fn go_back(&mut self) {
        self.current_category = None;
        self.meals.clear();
        self.error = None;
    }

    pub fn view(&self) -> View {
        match &self.current_category {
            Some(category) => View::Meals(category.clone()),
            None => View::Categories,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Message of the last failed request, if it has not been cleared.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn record(&mut self, err: BrowseError) -> BrowseError {
        warn!("{}", err);
        self.error = Some(err.to_string());
        err
    }
}
