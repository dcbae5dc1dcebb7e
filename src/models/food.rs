use serde::{Deserialize, Serialize};

fn default_gram() -> f64 {
    100.0
}

/// A food composition record, with nutrients given per `gram` of reference
/// portion (100 g unless the source says otherwise).
///
/// Sourced from static catalog tables; read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,

    #[serde(default = "default_gram")]
    pub gram: f64,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    pub sugar: f64,
}

impl FoodRecord {
    /// Protein grams per single gram of this food.
    #[inline]
    pub fn protein_density(&self) -> f64 {
        self.protein / self.gram
    }

    /// Scale a per-reference-portion amount to a concrete portion, rounded
    /// to the nearest integer.
    #[inline]
    pub fn scaled(&self, amount: f64, portion: u32) -> u32 {
        ((amount / self.gram) * f64::from(portion)).round() as u32
    }

    /// Basic validation: positive reference portion and non-negative nutrients.
    pub fn is_valid(&self) -> bool {
        self.gram > 0.0
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
            && self.sugar >= 0.0
    }
}
