use thiserror::Error;

use crate::models::MealCategory;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to load {category} data: {source}")]
    CatalogLoad {
        category: MealCategory,
        #[source]
        source: Box<NutriError>,
    },

    #[error("No food data for category: {0}")]
    CategoryMissing(MealCategory),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, NutriError>;
