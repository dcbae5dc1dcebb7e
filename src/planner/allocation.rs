use std::collections::HashMap;

use crate::models::{MacroTargets, MealCategory, MealTarget};
use crate::planner::constants::meal_share;

/// Target for a single category: the category's share of daily calories and
/// of each macro range's *upper* bound.
///
/// Using the upper bound (never midpoint or min) is deliberate and fixed.
pub fn category_target(
    category: MealCategory,
    daily_calories: f64,
    macros: &MacroTargets,
) -> MealTarget {
    let share = meal_share(category);

    MealTarget {
        calories: (daily_calories * share).round() as u32,
        protein: (f64::from(macros.protein.max) * share).round() as u32,
        carbs: (f64::from(macros.carbs.max) * share).round() as u32,
        fat: (f64::from(macros.fat.max) * share).round() as u32,
        sugar: (f64::from(macros.sugar.max) * share).round() as u32,
    }
}

/// Split the daily targets across all six categories.
pub fn allocate_meal_targets(
    daily_calories: f64,
    macros: &MacroTargets,
) -> HashMap<MealCategory, MealTarget> {
    MealCategory::ALL
        .into_iter()
        .map(|category| (category, category_target(category, daily_calories, macros)))
        .collect()
}
