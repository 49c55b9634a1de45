use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{DietError, Result};
use crate::models::FoodItem;

fn invalid_food_label(food: &FoodItem) -> String {
    if food.name.trim().is_empty() {
        "unnamed entry".to_string()
    } else {
        food.name.clone()
    }
}

/// Load a food catalog from a JSON file.
///
/// Deduplicates by lowercase name, keeping first-seen order with the last
/// occurrence's values. Rejects entries with negative or non-finite macros.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;

    let mut ordered: Vec<FoodItem> = Vec::with_capacity(foods.len());
    let mut slots: HashMap<String, usize> = HashMap::new();

    for food in foods {
        if !food.is_valid() {
            return Err(DietError::InvalidFood(invalid_food_label(&food)));
        }
        match slots.get(&food.key()) {
            Some(&slot) => ordered[slot] = food,
            None => {
                slots.insert(food.key(), ordered.len());
                ordered.push(food);
            }
        }
    }

    Ok(ordered)
}

/// Save a food catalog to a pretty-printed JSON file.
///
/// Deduplicates by lowercase name before writing (last occurrence wins).
pub fn save_catalog<P: AsRef<Path>>(path: P, foods: &[FoodItem]) -> Result<()> {
    let mut ordered: Vec<&FoodItem> = Vec::with_capacity(foods.len());
    let mut slots: HashMap<String, usize> = HashMap::new();

    for food in foods {
        match slots.get(&food.key()) {
            Some(&slot) => ordered[slot] = food,
            None => {
                slots.insert(food.key(), ordered.len());
                ordered.push(food);
            }
        }
    }

    let json = serde_json::to_string_pretty(&ordered)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &builtin_catalog()).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 6);
        assert_eq!(reloaded[0].name, "Oatmeal");
        assert_eq!(reloaded[4].calories, 95);
    }

    #[test]
    fn test_deduplication_last_wins() {
        let json = r#"[
            {"Name": "Apple", "Calories": 95, "Protein": 0, "Carbs": 25, "Fat": 0},
            {"Name": "Salad", "Calories": 100, "Protein": 2, "Carbs": 5, "Fat": 0},
            {"Name": "apple", "Calories": 80, "Protein": 0, "Carbs": 20, "Fat": 0}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let foods = load_catalog(file.path()).unwrap();
        assert_eq!(foods.len(), 2);
        // First-seen order, last occurrence's values.
        assert_eq!(foods[0].name, "apple");
        assert_eq!(foods[0].calories, 80);
        assert_eq!(foods[1].name, "Salad");
    }

    #[test]
    fn test_rejects_negative_macros() {
        let json = r#"[
            {"Name": "Bad", "Calories": 100, "Protein": -5, "Carbs": 0, "Fat": 0}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(DietError::InvalidFood(name)) if name == "Bad"
        ));
    }
}
