pub mod food;
pub mod plan;
pub mod profile;

pub use food::FoodItem;
pub use plan::MealPlan;
pub use profile::{ActivityLevel, Goal, UserProfile};
