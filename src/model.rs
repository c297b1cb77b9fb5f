use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Number of numbered ingredient/measure slots in a catalog meal record.
pub const SLOT_COUNT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(
        rename = "strCategoryThumb",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub thumbnail_url: String,
    #[serde(
        rename = "strCategoryDescription",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub description: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn secure_thumbnail(&self) -> String {
        upgrade_to_https(&self.thumbnail_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(
        rename = "strMealThumb",
        default,
        deserialize_with = "string_or_empty"
    )]
    pub thumbnail_url: String,
}

impl Meal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Meal {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn secure_thumbnail(&self) -> String {
        upgrade_to_https(&self.thumbnail_url)
    }
}

/// One numbered ingredient/measure pair of a meal record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl IngredientSlot {
    pub fn new(ingredient: Option<&str>, measure: Option<&str>) -> Self {
        IngredientSlot {
            ingredient: ingredient.map(str::to_string),
            measure: measure.map(str::to_string),
        }
    }
}

/// Full recipe record as returned by a lookup.
///
/// The catalog flattens ingredients into `strIngredient1..20` and
/// `strMeasure1..20`; they are gathered into an ordered list of exactly
/// [`SLOT_COUNT`] slots, slot 1 first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMealDetail", into = "RawMealDetail")]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub region: String,
    pub instructions: String,
    pub thumbnail_url: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub youtube_url: Option<String>,
    pub source_url: Option<String>,
    slots: Vec<IngredientSlot>,
}

impl Default for MealDetail {
    fn default() -> Self {
        MealDetail {
            id: String::new(),
            name: String::new(),
            region: String::new(),
            instructions: String::new(),
            thumbnail_url: String::new(),
            category: None,
            tags: Vec::new(),
            youtube_url: None,
            source_url: None,
            slots: vec![IngredientSlot::default(); SLOT_COUNT],
        }
    }
}

impl MealDetail {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        MealDetail {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Replace the ingredient slots, in slot order.
    ///
    /// Extra entries beyond [`SLOT_COUNT`] are dropped; missing ones are empty.
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = IngredientSlot>) -> Self {
        let mut slots: Vec<IngredientSlot> = slots.into_iter().take(SLOT_COUNT).collect();
        slots.resize(SLOT_COUNT, IngredientSlot::default());
        self.slots = slots;
        self
    }

    /// Slot by its 1-based catalog index.
    pub fn slot(&self, index: usize) -> Option<&IngredientSlot> {
        index.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    pub fn slots(&self) -> &[IngredientSlot] {
        &self.slots
    }

    pub fn secure_thumbnail(&self) -> String {
        upgrade_to_https(&self.thumbnail_url)
    }
}

/// Wire shape of a lookup record; everything besides the named fields lands in `rest`.
#[derive(Debug, Serialize, Deserialize)]
struct RawMealDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "string_or_empty")]
    name: String,
    #[serde(rename = "strArea", default, deserialize_with = "string_or_empty")]
    region: String,
    #[serde(
        rename = "strInstructions",
        default,
        deserialize_with = "string_or_empty"
    )]
    instructions: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "string_or_empty")]
    thumbnail_url: String,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube_url: Option<String>,
    #[serde(rename = "strSource", default)]
    source_url: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawMealDetail> for MealDetail {
    fn from(raw: RawMealDetail) -> Self {
        let text_field = |key: String| -> Option<String> {
            raw.rest
                .get(&key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let slots = (1..=SLOT_COUNT)
            .map(|i| IngredientSlot {
                ingredient: text_field(format!("strIngredient{i}")),
                measure: text_field(format!("strMeasure{i}")),
            })
            .collect();

        let tags = raw
            .tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        MealDetail {
            id: raw.id,
            name: raw.name,
            region: raw.region,
            instructions: raw.instructions,
            thumbnail_url: raw.thumbnail_url,
            category: non_blank(raw.category),
            tags,
            youtube_url: non_blank(raw.youtube_url),
            source_url: non_blank(raw.source_url),
            slots,
        }
    }
}

impl From<MealDetail> for RawMealDetail {
    fn from(detail: MealDetail) -> Self {
        let text_value = |text: Option<String>| text.map(Value::String).unwrap_or(Value::Null);

        let mut rest = HashMap::new();
        for (i, slot) in detail.slots.into_iter().enumerate() {
            rest.insert(format!("strIngredient{}", i + 1), text_value(slot.ingredient));
            rest.insert(format!("strMeasure{}", i + 1), text_value(slot.measure));
        }

        RawMealDetail {
            id: detail.id,
            name: detail.name,
            region: detail.region,
            instructions: detail.instructions,
            thumbnail_url: detail.thumbnail_url,
            category: detail.category,
            tags: (!detail.tags.is_empty()).then(|| detail.tags.join(",")),
            youtube_url: detail.youtube_url,
            source_url: detail.source_url,
            rest,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryList {
    pub categories: Option<Vec<Category>>,
}

/// Envelope shared by `filter.php` and `lookup.php`; `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
pub(crate) struct MealList<T> {
    pub meals: Option<Vec<T>>,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Rewrite the first `http://` of an image URL to `https://`.
pub fn upgrade_to_https(url: &str) -> String {
    url.replacen("http://", "https://", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_catalog_json() {
        let json = r#"{
            "idCategory": "3",
            "strCategory": "Dessert",
            "strCategoryThumb": "https://www.themealdb.com/images/category/dessert.png",
            "strCategoryDescription": "Dessert is a course that concludes a meal."
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "3");
        assert_eq!(category.name, "Dessert");
        assert!(category.description.starts_with("Dessert is"));
    }

    #[test]
    fn test_meal_with_null_thumbnail() {
        let json = r#"{"idMeal": "52772", "strMeal": "Teriyaki Chicken Casserole", "strMealThumb": null}"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.name, "Teriyaki Chicken Casserole");
        assert_eq!(meal.thumbnail_url, "");
    }

    #[test]
    fn test_detail_collects_numbered_slots() {
        let json = r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strArea": "Japanese",
            "strCategory": "Chicken",
            "strInstructions": "Preheat oven to 350 F.",
            "strMealThumb": "http://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strTags": "Meat,Casserole",
            "strYoutube": "",
            "strIngredient1": "soy sauce",
            "strIngredient2": "water",
            "strIngredient3": "",
            "strIngredient4": null,
            "strMeasure1": "3/4 cup",
            "strMeasure2": "1/2 cup",
            "strMeasure3": "",
            "strMeasure4": null
        }"#;
        let detail: MealDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.region, "Japanese");
        assert_eq!(detail.category.as_deref(), Some("Chicken"));
        assert_eq!(detail.tags, vec!["Meat", "Casserole"]);
        assert_eq!(detail.youtube_url, None);
        assert_eq!(detail.slots().len(), SLOT_COUNT);

        let first = detail.slot(1).unwrap();
        assert_eq!(first.ingredient.as_deref(), Some("soy sauce"));
        assert_eq!(first.measure.as_deref(), Some("3/4 cup"));
        assert_eq!(detail.slot(3).unwrap().ingredient.as_deref(), Some(""));
        assert_eq!(detail.slot(4).unwrap().ingredient, None);
        assert_eq!(detail.slot(20).unwrap().ingredient, None);
    }

    #[test]
    fn test_slot_index_is_one_based() {
        let detail = MealDetail::new("1", "Toast")
            .with_slots([IngredientSlot::new(Some("Bread"), Some("2 slices"))]);
        assert!(detail.slot(0).is_none());
        assert!(detail.slot(SLOT_COUNT + 1).is_none());
        assert_eq!(detail.slot(1).unwrap().ingredient.as_deref(), Some("Bread"));
    }

    #[test]
    fn test_with_slots_truncates_to_slot_count() {
        let slots = (0..30).map(|i| IngredientSlot {
            ingredient: Some(format!("item {i}")),
            measure: None,
        });
        let detail = MealDetail::new("1", "Big").with_slots(slots);
        assert_eq!(detail.slots().len(), SLOT_COUNT);
        assert_eq!(
            detail.slot(SLOT_COUNT).unwrap().ingredient.as_deref(),
            Some("item 19")
        );
    }

    #[test]
    fn test_non_string_slot_values_are_absent() {
        let json = r#"{"idMeal": "1", "strMeal": "Odd", "strIngredient1": 42, "strMeasure1": true}"#;
        let detail: MealDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.slot(1).unwrap(), &IngredientSlot::default());
    }

    #[test]
    fn test_upgrade_to_https() {
        assert_eq!(
            upgrade_to_https("http://www.themealdb.com/a.jpg"),
            "https://www.themealdb.com/a.jpg"
        );
        assert_eq!(
            upgrade_to_https("https://www.themealdb.com/a.jpg"),
            "https://www.themealdb.com/a.jpg"
        );
        assert_eq!(upgrade_to_https(""), "");
        assert_eq!(
            upgrade_to_https("//cdn.example.com/?from=http://www.themealdb.com/a.jpg"),
            "//cdn.example.com/?from=https://www.themealdb.com/a.jpg"
        );
    }

    #[test]
    fn test_category_and_meal_serialize_with_catalog_names() {
        let category = Category::new("1", "Beef");
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["idCategory"], "1");
        assert_eq!(json["strCategory"], "Beef");

        let back: Category = serde_json::from_value(json).unwrap();
        assert_eq!(back, category);

        let meal = Meal::new("52772", "Teriyaki Chicken Casserole");
        let back: Meal = serde_json::from_str(&serde_json::to_string(&meal).unwrap()).unwrap();
        assert_eq!(back, meal);
    }

    #[test]
    fn test_detail_serializes_flat_slots_and_reads_back() {
        let mut detail = MealDetail::new("52802", "Fish pie").with_slots([
            IngredientSlot::new(Some("Floury Potatoes"), Some("900g")),
            IngredientSlot::new(Some("Olive Oil"), None),
            IngredientSlot::new(Some(""), Some("")),
        ]);
        detail.region = "British".to_string();
        detail.category = Some("Seafood".to_string());
        detail.tags = vec!["Fish".to_string(), "Pie".to_string()];

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["idMeal"], "52802");
        assert_eq!(json["strArea"], "British");
        assert_eq!(json["strTags"], "Fish,Pie");
        assert_eq!(json["strIngredient1"], "Floury Potatoes");
        assert_eq!(json["strMeasure2"], Value::Null);
        assert_eq!(json["strIngredient20"], Value::Null);
        assert!(json.get("slots").is_none());

        let back: MealDetail = serde_json::from_value(json).unwrap();
        assert_eq!(back, detail);
    }

    #[test]
    fn test_null_meals_envelope() {
        let list: MealList<Meal> = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(list.meals.is_none());
    }
}
