use crate::models::{FoodItem, MealPlan};

/// Display the predicted daily calorie requirement.
pub fn display_calorie_target(target: i64) {
    println!();
    println!("Estimated daily calorie requirement: {} kcal", target);
}

/// Display a meal plan with per-item rows and aggregate totals.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!();
        println!("Not enough food items to build a plan. Add more foods to the catalog.");
        return;
    }

    println!();
    println!("=== Meal Plan ===");
    println!();

    let max_name_len = plan.items().iter().map(|f| f.name.len()).max().unwrap_or(10);

    for (i, item) in plan.items().iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>4} kcal",
            i + 1,
            item.name,
            item.calories,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total items: {}", plan.len());
    println!("Total calories: {} kcal", plan.total_calories());
    println!("Protein: {:.0} g", plan.total_protein());
    println!("Carbs: {:.0} g", plan.total_carbs());
    println!("Fat: {:.0} g", plan.total_fat());
    println!();
}

/// Display the catalog as a simple list.
pub fn display_catalog(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {} kcal, P:{} C:{} F:{}",
            food.name, food.calories, food.protein, food.carbs, food.fat
        );
    }

    println!();
}
