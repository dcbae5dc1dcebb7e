use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{FoodRecord, MealCategory};

/// On-disk encoding of a category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    fn extension(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Csv => "csv",
        }
    }
}

/// Filesystem catalog: one file per category under a single directory,
/// named `<category>.json` or `<category>.csv`.
#[derive(Debug, Clone)]
pub struct FsCatalog {
    dir: PathBuf,
    format: CatalogFormat,
}

impl FsCatalog {
    pub fn json<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            format: CatalogFormat::Json,
        }
    }

    pub fn csv<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            format: CatalogFormat::Csv,
        }
    }

    fn category_path(&self, category: MealCategory) -> PathBuf {
        self.dir
            .join(format!("{}.{}", category, self.format.extension()))
    }
}

#[async_trait]
impl FoodCatalog for FsCatalog {
    async fn load_category(&self, category: MealCategory) -> Result<Vec<FoodRecord>> {
        let path = self.category_path(category);
        let content = fs::read_to_string(&path).await?;

        let foods = match self.format {
            CatalogFormat::Json => parse_json(&content)?,
            CatalogFormat::Csv => parse_csv(&content)?,
        };

        let invalid = foods.iter().filter(|f| !f.is_valid()).count();
        if invalid > 0 {
            warn!(%category, invalid, path = %path.display(), "catalog records failed validation");
        }

        debug!(%category, count = foods.len(), "loaded category table");
        Ok(foods)
    }
}

fn parse_json(content: &str) -> Result<Vec<FoodRecord>> {
    Ok(serde_json::from_str(content)?)
}

fn parse_csv(content: &str) -> Result<Vec<FoodRecord>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut foods = Vec::new();
    for record in reader.deserialize() {
        foods.push(record?);
    }
    Ok(foods)
}

/// Write a category table as pretty JSON, mainly for building test fixtures
/// and seeding catalog directories.
pub fn write_category<P: AsRef<Path>>(path: P, foods: &[FoodRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(foods)?;
    std::fs::write(path, json)?;
    Ok(())
}
