use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit attached to a nutrient range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kcal")]
    Kcal,
    #[serde(rename = "g")]
    Gram,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Kcal => f.write_str("kcal"),
            Unit::Gram => f.write_str("g"),
        }
    }
}

/// A closed nutrient interval with its unit. Both endpoints are rounded
/// integers and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientRange {
    pub min: u32,
    pub max: u32,
    pub unit: Unit,
}

impl NutrientRange {
    /// Build a range by scaling a base value with two multipliers.
    ///
    /// Each endpoint is rounded independently; the base is never rounded first.
    pub fn from_base(base: f64, min_mult: f64, max_mult: f64, unit: Unit) -> Self {
        Self {
            min: (base * min_mult).round() as u32,
            max: (base * max_mult).round() as u32,
            unit,
        }
    }
}

impl fmt::Display for NutrientRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} - {}{}", self.min, self.unit, self.max, self.unit)
    }
}

/// Daily macro ranges, computed once per request and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: NutrientRange,
    pub protein: NutrientRange,
    pub carbs: NutrientRange,
    pub fat: NutrientRange,
    pub sugar: NutrientRange,
}

impl MacroTargets {
    /// Named ranges in display order, for tabular rendering by the caller.
    pub fn entries(&self) -> [(&'static str, NutrientRange); 5] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("sugar", self.sugar),
        ]
    }
}

/// The full energy/macro computation result for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionalNeeds {
    /// Basal metabolic rate in kcal/day.
    pub bmr: f64,

    /// Daily calorie target after activity and goal adjustment, unrounded.
    pub daily_calories: f64,

    pub macros: MacroTargets,
}

/// Single-value targets for one meal category.
///
/// Derived from the upper bound of each macro range times the category share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTarget {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub sugar: u32,
}
