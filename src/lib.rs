pub mod catalog;
pub mod cli;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod models;
pub mod selector;

pub use error::{DietError, Result};
pub use models::{ActivityLevel, FoodItem, Goal, MealPlan, UserProfile};
