use crate::models::{MacroTargets, NutrientRange, Unit};
use crate::planner::constants::*;

/// Derive daily macro ranges from the calorie target and body weight.
///
/// Sugar is a fixed 0..max range rather than a scaled pair; everything else
/// goes through `NutrientRange::from_base` so endpoints round independently.
pub fn compute_macros(daily_calories: f64, weight_kg: f64) -> MacroTargets {
    MacroTargets {
        calories: NutrientRange::from_base(
            daily_calories,
            CALORIE_MIN_MULT,
            CALORIE_MAX_MULT,
            Unit::Kcal,
        ),
        protein: NutrientRange::from_base(
            weight_kg * PROTEIN_G_PER_KG,
            PROTEIN_MIN_MULT,
            PROTEIN_MAX_MULT,
            Unit::Gram,
        ),
        carbs: NutrientRange::from_base(
            daily_calories * CARB_CALORIE_SHARE / KCAL_PER_G_CARB,
            CARB_MIN_MULT,
            CARB_MAX_MULT,
            Unit::Gram,
        ),
        fat: NutrientRange::from_base(
            daily_calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT,
            FAT_MIN_MULT,
            FAT_MAX_MULT,
            Unit::Gram,
        ),
        sugar: NutrientRange {
            min: 0,
            max: (daily_calories * SUGAR_CALORIE_SHARE / KCAL_PER_G_CARB).round() as u32,
            unit: Unit::Gram,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_range_fixture() {
        // weight 70: 70*1.6 = 112, 70*2.2 = 154
        let macros = compute_macros(2000.0, 70.0);
        assert_eq!(macros.protein.min, 112);
        assert_eq!(macros.protein.max, 154);
        assert_eq!(macros.protein.unit, Unit::Gram);
    }

    #[test]
    fn test_carb_and_fat_ranges() {
        let macros = compute_macros(2000.0, 70.0);
        // carbs: 2000*0.4/4 = 200 -> 200..300
        assert_eq!(macros.carbs.min, 200);
        assert_eq!(macros.carbs.max, 300);
        // fat: 2000*0.2/9 = 44.44 -> 44..78 (44.44*1.75 = 77.78)
        assert_eq!(macros.fat.min, 44);
        assert_eq!(macros.fat.max, 78);
    }

    #[test]
    fn test_calorie_range() {
        let macros = compute_macros(2000.0, 70.0);
        assert_eq!(macros.calories.min, 1800);
        assert_eq!(macros.calories.max, 2200);
        assert_eq!(macros.calories.unit, Unit::Kcal);
    }

    #[test]
    fn test_sugar_range() {
        // 2000*0.05/4 = 25
        let macros = compute_macros(2000.0, 70.0);
        assert_eq!(macros.sugar.min, 0);
        assert_eq!(macros.sugar.max, 25);
    }

    #[test]
    fn test_ranges_are_ordered() {
        for calories in [1200.0, 1857.3, 2500.0, 3600.0] {
            for weight in [30.0, 72.5, 140.0] {
                let macros = compute_macros(calories, weight);
                for (name, range) in macros.entries() {
                    assert!(range.min <= range.max, "{} range inverted", name);
                }
            }
        }
    }

    #[test]
    fn test_endpoints_round_from_unrounded_base() {
        // daily 2857.275: carbs base = 285.7275 -> min 286, max 428.59 -> 429.
        // Rounding the base first would give max round(286*1.5) = 429 too, but
        // fat distinguishes: base 63.495 -> min 63 (not 64 from a pre-rounded 63.5).
        let macros = compute_macros(2857.275, 70.0);
        assert_eq!(macros.carbs.min, 286);
        assert_eq!(macros.carbs.max, 429);
        assert_eq!(macros.fat.min, 63);
        assert_eq!(macros.fat.max, 111);
    }
}
