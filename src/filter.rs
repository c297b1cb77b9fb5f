use crate::model::{Category, Meal};

/// Anything listed by a display name that a search box can narrow down.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for Category {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Meal {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Keep the items whose name contains `query`, ignoring case.
///
/// An empty query keeps everything. Relative order is preserved and the
/// query is not trimmed.
pub fn filter_by_name<T: Named + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.display_name().to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub fn filter_categories(categories: &[Category], query: &str) -> Vec<Category> {
    filter_by_name(categories, query)
}

pub fn filter_meals(meals: &[Meal], query: &str) -> Vec<Meal> {
    filter_by_name(meals, query)
}
