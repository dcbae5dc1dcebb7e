use std::collections::HashMap;

use futures::future;
use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::error::{NutriError, Result};
use crate::models::{
    Biometrics, CategoryPlan, MacroTargets, MealCategory, MealPlan, NutritionalNeeds,
};
use crate::planner::allocation::category_target;
use crate::planner::constants::portion_limits;
use crate::planner::energy::{compute_bmr, compute_daily_calories};
use crate::planner::macros::compute_macros;
use crate::planner::selection::build_meal_entries;

/// Validate biometrics and compute the full energy/macro result.
///
/// Pure and deterministic: the same biometrics always produce the same needs.
pub fn compute_nutritional_needs(biometrics: &Biometrics) -> Result<NutritionalNeeds> {
    biometrics.validate()?;

    let bmr = compute_bmr(
        biometrics.weight_kg,
        biometrics.height_cm,
        biometrics.age,
        biometrics.gender,
    );
    let daily_calories = compute_daily_calories(bmr, biometrics.activity, biometrics.goal);
    let macros = compute_macros(daily_calories, biometrics.weight_kg);

    debug!(bmr, daily_calories, "computed nutritional needs");

    Ok(NutritionalNeeds {
        bmr,
        daily_calories,
        macros,
    })
}

/// Build the daily meal plan from the computed needs.
///
/// All six category tables load concurrently; the join is all-or-nothing, and
/// any failed load aborts the plan with an error naming its category. Each
/// category then gets its target and the suitable foods in catalog order.
pub async fn generate_meal_plan<C>(
    catalog: &C,
    daily_calories: f64,
    macros: &MacroTargets,
) -> Result<MealPlan>
where
    C: FoodCatalog + ?Sized,
{
    let loads = MealCategory::ALL.into_iter().map(|category| async move {
        match catalog.load_category(category).await {
            Ok(foods) => Ok((category, foods)),
            Err(source) => Err(NutriError::CatalogLoad {
                category,
                source: Box::new(source),
            }),
        }
    });

    let loaded = future::try_join_all(loads).await?;

    let mut meals = HashMap::new();
    for (category, foods) in loaded {
        let target = category_target(category, daily_calories, macros);
        let limits = portion_limits(category);
        let entries = build_meal_entries(&foods, &target, &limits);

        if entries.is_empty() {
            debug!(%category, "no suitable foods for category");
        }

        meals.insert(category, CategoryPlan { target, entries });
    }

    Ok(MealPlan { meals })
}
