use crate::model::MealDetail;

/// Build the display lines for a meal's ingredients, as `"<measure> <ingredient>"`.
///
/// Slots are read in order and the first absent or blank ingredient ends the
/// list; later slots are never looked at even if they hold text. A missing
/// measure yields just the ingredient, with no leading space. A byte order
/// mark counts as whitespace when trimming.
pub fn extract_ingredients(detail: &MealDetail) -> Vec<String> {
    let mut ingredients = Vec::new();

    for slot in detail.slots() {
        let ingredient = match slot.ingredient.as_deref().map(trim_blank) {
            Some(ingredient) if !ingredient.is_empty() => ingredient,
            _ => break,
        };
        let measure = slot.measure.as_deref().map(trim_blank).unwrap_or("");

        ingredients.push(trim_blank(&format!("{measure} {ingredient}")).to_string());
    }

    ingredients
}

fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
