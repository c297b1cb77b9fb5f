use mealdb_browser::{extract_ingredients, MealDetail};

fn lookup_record(slots: &str) -> MealDetail {
    let json = format!(
        r#"
        {{
            "idMeal": "53049",
            "strMeal": "Apam balik",
            "strArea": "Malaysian",
            "strInstructions": "Mix milk, oil and egg together.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/adxcbq1619787919.jpg"
            {slots}
        }}
        "#
    );
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_catalog_record_with_trailing_empty_slots() {
    let detail = lookup_record(
        r#",
        "strIngredient1": "Milk",
        "strIngredient2": "Oil",
        "strIngredient3": "Eggs",
        "strIngredient4": "Flour",
        "strIngredient5": "",
        "strIngredient6": "",
        "strIngredient20": "",
        "strMeasure1": "200ml",
        "strMeasure2": "60ml",
        "strMeasure3": "2",
        "strMeasure4": "1600g",
        "strMeasure5": " ",
        "strMeasure6": " ",
        "strMeasure20": " "
        "#,
    );

    assert_eq!(
        extract_ingredients(&detail),
        vec!["200ml Milk", "60ml Oil", "2 Eggs", "1600g Flour"]
    );
}

#[test]
fn test_null_measure_gives_bare_ingredient() {
    let detail = lookup_record(
        r#",
        "strIngredient1": "Salt",
        "strIngredient2": "Pepper",
        "strMeasure1": "2 tsp",
        "strMeasure2": null
        "#,
    );

    assert_eq!(extract_ingredients(&detail), vec!["2 tsp Salt", "Pepper"]);
}

#[test]
fn test_gap_ends_the_list() {
    let detail = lookup_record(
        r#",
        "strIngredient1": "Rice",
        "strIngredient2": "Water",
        "strIngredient3": "   ",
        "strIngredient4": "Salt",
        "strMeasure1": "1 cup",
        "strMeasure2": "2 cups",
        "strMeasure4": "pinch"
        "#,
    );

    assert_eq!(extract_ingredients(&detail), vec!["1 cup Rice", "2 cups Water"]);
}

#[test]
fn test_record_without_slot_fields() {
    let detail = lookup_record("");
    assert!(extract_ingredients(&detail).is_empty());
}

#[test]
fn test_all_twenty_slots() {
    let slots: String = (1..=20)
        .map(|i| format!(r#", "strIngredient{i}": "Item {i}", "strMeasure{i}": "{i} g""#))
        .collect();
    let detail = lookup_record(&slots);

    let lines = extract_ingredients(&detail);
    assert_eq!(lines.len(), 20);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line, &format!("{n} g Item {n}", n = i + 1));
    }
}
