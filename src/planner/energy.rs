use crate::models::{ActivityLevel, Gender, Goal};
use crate::planner::constants::{GOAL_ADJUSTMENT_KCAL, LOSE_FLOOR_FACTOR, activity_multiplier};

/// Basal metabolic rate via the Mifflin-St Jeor equation, in kcal/day.
///
/// Inputs are assumed pre-validated by the caller.
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age: f64, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily calorie target: activity multiplier first, goal adjustment second.
///
/// That ordering is load-bearing; swapping it changes the numbers.
pub fn compute_daily_calories(bmr: f64, activity: ActivityLevel, goal: Goal) -> f64 {
    let calories = bmr * activity_multiplier(activity);

    match goal {
        Goal::Lose => (bmr * LOSE_FLOOR_FACTOR).max(calories - GOAL_ADJUSTMENT_KCAL),
        Goal::Gain => calories + GOAL_ADJUSTMENT_KCAL,
        Goal::Maintain => calories,
    }
}
