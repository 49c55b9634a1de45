use serde::{Deserialize, Serialize};

/// One selectable food with its per-serving nutrition facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: u32,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Carbs")]
    pub carbs: f64,

    #[serde(rename = "Fat")]
    pub fat: f64,
}

impl FoodItem {
    pub fn new(name: &str, calories: u32, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: a usable name and non-negative, finite macros.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.protein.is_finite()
            && self.protein >= 0.0
            && self.carbs.is_finite()
            && self.carbs >= 0.0
            && self.fat.is_finite()
            && self.fat >= 0.0
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
