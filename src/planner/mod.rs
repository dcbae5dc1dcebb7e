pub mod allocation;
pub mod constants;
pub mod energy;
pub mod macros;
pub mod plan;
pub mod selection;

pub use allocation::{allocate_meal_targets, category_target};
pub use constants::*;
pub use energy::{compute_bmr, compute_daily_calories};
pub use macros::compute_macros;
pub use plan::{compute_nutritional_needs, generate_meal_plan};
pub use selection::{build_meal_entries, is_suitable, size_portion};
