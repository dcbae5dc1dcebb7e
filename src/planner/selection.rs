use tracing::debug;

use crate::models::{FoodRecord, MealEntry, MealTarget};
use crate::planner::constants::{
    CALORIE_BAND_HIGH, CALORIE_BAND_LOW, PortionLimits, SUGAR_BAND_HIGH,
};

/// Portion in grams that meets the protein target, clamped to the category
/// limits.
///
/// Returns `None` for degenerate records: a food whose protein density is not
/// a positive finite number cannot be sized and is excluded from suggestions,
/// so no NaN or infinity ever leaves this module.
pub fn size_portion(food: &FoodRecord, protein_target: u32, limits: &PortionLimits) -> Option<u32> {
    let density = food.protein_density();
    if !density.is_finite() || density <= 0.0 {
        return None;
    }

    let raw = (f64::from(protein_target) / density).round() as u32;
    Some(raw.clamp(limits.min, limits.max))
}

/// Whether a food fits a meal target at its computed portion.
///
/// Calories must land within 60-140% of the target (inclusive) and sugar may
/// reach at most 150%.
pub fn is_suitable(food: &FoodRecord, target: &MealTarget, limits: &PortionLimits) -> bool {
    entry_for(food, target, limits).is_some()
}

/// Filter a catalog slice down to suitable entries, preserving input order.
pub fn build_meal_entries(
    foods: &[FoodRecord],
    target: &MealTarget,
    limits: &PortionLimits,
) -> Vec<MealEntry> {
    let entries: Vec<MealEntry> = foods
        .iter()
        .filter_map(|food| entry_for(food, target, limits))
        .collect();

    debug!(
        candidates = foods.len(),
        suitable = entries.len(),
        "filtered meal entries"
    );

    entries
}

/// Size the portion and keep the entry only if it fits the target bands.
fn entry_for(food: &FoodRecord, target: &MealTarget, limits: &PortionLimits) -> Option<MealEntry> {
    let portion = size_portion(food, target.protein, limits)?;
    let entry = MealEntry::at_portion(food, portion);

    let calories = f64::from(entry.calories);
    let calorie_target = f64::from(target.calories);
    let calorie_ok = calories >= calorie_target * CALORIE_BAND_LOW
        && calories <= calorie_target * CALORIE_BAND_HIGH;

    let sugar_ok = f64::from(entry.sugar) <= f64::from(target.sugar) * SUGAR_BAND_HIGH;

    (calorie_ok && sugar_ok).then_some(entry)
}
