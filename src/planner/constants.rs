use crate::models::{ActivityLevel, MealCategory};

/// kcal added for a gain goal / subtracted for a lose goal.
pub const GOAL_ADJUSTMENT_KCAL: f64 = 300.0;

/// Floor for the lose goal: daily calories never drop below bmr * this.
pub const LOSE_FLOOR_FACTOR: f64 = 0.8;

// ─────────────────────────────────────────────────────────────────────────────
// Macro range parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie range around the daily target.
pub const CALORIE_MIN_MULT: f64 = 0.9;
pub const CALORIE_MAX_MULT: f64 = 1.1;

/// Protein base in grams per kg body weight, spanned up to 2.2 g/kg.
pub const PROTEIN_G_PER_KG: f64 = 1.6;
pub const PROTEIN_MIN_MULT: f64 = 1.0;
pub const PROTEIN_MAX_MULT: f64 = 1.375;

/// Carbs cover 40-60% of calories at 4 kcal/g.
pub const CARB_CALORIE_SHARE: f64 = 0.4;
pub const CARB_MIN_MULT: f64 = 1.0;
pub const CARB_MAX_MULT: f64 = 1.5;

/// Fat covers 20-35% of calories at 9 kcal/g.
pub const FAT_CALORIE_SHARE: f64 = 0.2;
pub const FAT_MIN_MULT: f64 = 1.0;
pub const FAT_MAX_MULT: f64 = 1.75;

/// Sugar capped at 5% of calories, as a carbohydrate at 4 kcal/g.
pub const SUGAR_CALORIE_SHARE: f64 = 0.05;

pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Suitability bands
// ─────────────────────────────────────────────────────────────────────────────

/// A food's actual calories must land within 60-140% of the meal target.
pub const CALORIE_BAND_LOW: f64 = 0.6;
pub const CALORIE_BAND_HIGH: f64 = 1.4;

/// A food's actual sugar may reach 150% of the meal target.
pub const SUGAR_BAND_HIGH: f64 = 1.5;

/// Per-category gram bounds for a single portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortionLimits {
    pub min: u32,
    pub max: u32,
}

/// Share of daily calories/macros assigned to a category. Sums to 1.0.
pub fn meal_share(category: MealCategory) -> f64 {
    match category {
        MealCategory::Breakfast => 0.25,
        MealCategory::Fruit => 0.05,
        MealCategory::Salad => 0.15,
        MealCategory::Lunch => 0.25,
        MealCategory::Snacks => 0.15,
        MealCategory::Dinner => 0.15,
    }
}

/// Portion bounds for a category.
pub fn portion_limits(category: MealCategory) -> PortionLimits {
    match category {
        MealCategory::Breakfast => PortionLimits { min: 50, max: 500 },
        MealCategory::Fruit => PortionLimits { min: 50, max: 300 },
        MealCategory::Salad => PortionLimits { min: 50, max: 400 },
        MealCategory::Lunch => PortionLimits { min: 100, max: 600 },
        MealCategory::Snacks => PortionLimits { min: 30, max: 300 },
        MealCategory::Dinner => PortionLimits { min: 100, max: 600 },
    }
}

/// Calorie multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Low => 1.4,
        ActivityLevel::Moderate => 1.7,
        ActivityLevel::High => 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_shares_sum_to_one() {
        let total: f64 = MealCategory::ALL.into_iter().map(meal_share).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_portion_limits_are_ordered() {
        for category in MealCategory::ALL {
            let limits = portion_limits(category);
            assert!(limits.min <= limits.max, "bad limits for {}", category);
        }
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(activity_multiplier(ActivityLevel::Low), 1.4);
        assert_eq!(activity_multiplier(ActivityLevel::Moderate), 1.7);
        assert_eq!(activity_multiplier(ActivityLevel::High), 2.0);
    }
}
