pub mod persistence;

pub use persistence::{load_catalog, save_catalog};

use crate::models::FoodItem;

/// The six built-in foods used when no catalog file is supplied.
pub fn builtin_catalog() -> Vec<FoodItem> {
    vec![
        FoodItem::new("Oatmeal", 150, 5.0, 27.0, 3.0),
        FoodItem::new("Grilled Chicken", 250, 30.0, 0.0, 3.0),
        FoodItem::new("Salad", 100, 2.0, 5.0, 0.0),
        FoodItem::new("Brown Rice", 220, 5.0, 45.0, 2.0),
        FoodItem::new("Apple", 95, 0.0, 25.0, 0.0),
        FoodItem::new("Greek Yogurt", 120, 10.0, 8.0, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_entries() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.iter().all(|f| f.is_valid()));

        let total: u32 = catalog.iter().map(|f| f.calories).sum();
        assert_eq!(total, 935);
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let catalog = builtin_catalog();
        let keys: HashSet<String> = catalog.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), catalog.len());
    }
}
