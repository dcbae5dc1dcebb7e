use std::collections::HashMap;

use serde::Serialize;

use crate::models::{FoodRecord, MealCategory, MealTarget};

/// A suggested food with its computed portion and the nutrients that portion
/// actually delivers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealEntry {
    pub food: FoodRecord,

    /// Suggested portion in grams, clamped to the category's limits.
    pub portion: u32,

    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub sugar: u32,
}

impl MealEntry {
    /// Compute the entry for a food at a fixed portion.
    ///
    /// Every nutrient goes through the same per-gram scale-then-round path.
    pub fn at_portion(food: &FoodRecord, portion: u32) -> Self {
        Self {
            portion,
            calories: food.scaled(food.calories, portion),
            protein: food.scaled(food.protein, portion),
            carbs: food.scaled(food.carbs, portion),
            fat: food.scaled(food.fat, portion),
            sugar: food.scaled(food.sugar, portion),
            food: food.clone(),
        }
    }
}

/// One category's slice of the plan: its target and the suitable foods,
/// in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPlan {
    pub target: MealTarget,
    pub entries: Vec<MealEntry>,
}

/// A full daily meal plan keyed by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlan {
    pub meals: HashMap<MealCategory, CategoryPlan>,
}

impl MealPlan {
    /// Iterate categories in canonical display order.
    pub fn in_category_order(&self) -> impl Iterator<Item = (MealCategory, &CategoryPlan)> {
        MealCategory::ALL
            .into_iter()
            .filter_map(|category| self.meals.get(&category).map(|plan| (category, plan)))
    }
}
