use rand::Rng;

use crate::models::{FoodItem, MealPlan};

/// How far past the target a plan's running total may go, in kcal.
///
/// The slack lets one too-large item finish a plan that would otherwise
/// stall just short of the target.
pub const OVERSHOOT_TOLERANCE_KCAL: i64 = 100;

/// Build a meal plan approaching `target` kcal by randomized greedy draws.
///
/// Items are drawn uniformly from a shrinking pool copied from the catalog.
/// Each drawn item is removed from the pool whether or not it is accepted,
/// so no item repeats within a plan and the loop runs at most
/// `catalog.len()` times. An item is accepted when taking it keeps the
/// running deficit within [`OVERSHOOT_TOLERANCE_KCAL`] past the target.
///
/// A `target <= 0` or an exhausted pool yields a short (possibly empty)
/// plan; both are valid outcomes, not errors.
pub fn select_meals(catalog: &[FoodItem], target: i64, rng: &mut impl Rng) -> MealPlan {
    let mut plan = MealPlan::new();
    let mut pool: Vec<&FoodItem> = catalog.iter().collect();
    let mut remaining = target;

    while remaining > 0 && !pool.is_empty() {
        let drawn = pool.swap_remove(rng.gen_range(0..pool.len()));
        let calories = drawn.calories as i64;

        if remaining - calories >= -OVERSHOOT_TOLERANCE_KCAL {
            plan.push(drawn.clone());
            remaining -= calories;
        }
    }

    plan
}
