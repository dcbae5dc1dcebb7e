pub mod catalog;
pub mod error;
pub mod models;
pub mod planner;

pub use error::{NutriError, Result};
pub use models::{Biometrics, FoodRecord, MacroTargets, MealCategory, MealPlan, NutritionalNeeds};
