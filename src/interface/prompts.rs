use dialoguer::{Confirm, Input, Select};

use crate::error::{DietError, Result};
use crate::models::profile::{AGE_RANGE, HEIGHT_RANGE, WEIGHT_RANGE};
use crate::models::{ActivityLevel, Goal, UserProfile};

/// Prompt for a whole number and reject values outside [min, max].
fn prompt_bounded(prompt: &str, default: u32, (min, max): (u32, u32)) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: u32 = input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("'{}' is not a whole number", input.trim())))?;

    if !(min..=max).contains(&value) {
        return Err(DietError::InvalidInput(format!(
            "{} must be between {} and {}",
            prompt, min, max
        )));
    }

    Ok(value)
}

pub fn prompt_age() -> Result<u32> {
    prompt_bounded("Age", 25, AGE_RANGE)
}

pub fn prompt_weight() -> Result<u32> {
    prompt_bounded("Weight (kg)", 70, WEIGHT_RANGE)
}

pub fn prompt_height() -> Result<u32> {
    prompt_bounded("Height (cm)", 170, HEIGHT_RANGE)
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Health goal")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full, range-checked user profile for one estimation request.
pub fn collect_user_profile() -> Result<UserProfile> {
    let age = prompt_age()?;
    let weight_kg = prompt_weight()?;
    let height_cm = prompt_height()?;
    let activity = prompt_activity_level()?;
    let goal = prompt_goal()?;

    Ok(UserProfile {
        age,
        weight_kg,
        height_cm,
        activity,
        goal,
    })
}
