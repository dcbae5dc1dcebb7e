mod biometrics;
mod category;
mod food;
mod plan;
mod targets;

pub use biometrics::{ActivityLevel, Biometrics, Gender, Goal};
pub use category::MealCategory;
pub use food::FoodRecord;
pub use plan::{CategoryPlan, MealEntry, MealPlan};
pub use targets::{MacroTargets, MealTarget, NutrientRange, NutritionalNeeds, Unit};
