use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{NutriError, Result};
use crate::models::{FoodRecord, MealCategory};

/// A source of per-category food composition tables.
///
/// One retrieval per category; the records come back in source order and are
/// treated as read-only.
#[async_trait]
pub trait FoodCatalog: Send + Sync {
    async fn load_category(&self, category: MealCategory) -> Result<Vec<FoodRecord>>;
}

/// In-memory catalog for tests and embedded data.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    foods: HashMap<MealCategory, Vec<FoodRecord>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one category's table.
    pub fn with_category(mut self, category: MealCategory, foods: Vec<FoodRecord>) -> Self {
        self.foods.insert(category, foods);
        self
    }
}

#[async_trait]
impl FoodCatalog for StaticCatalog {
    async fn load_category(&self, category: MealCategory) -> Result<Vec<FoodRecord>> {
        self.foods
            .get(&category)
            .cloned()
            .ok_or(NutriError::CategoryMissing(category))
    }
}
