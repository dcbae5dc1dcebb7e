use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// One of the six fixed daily eating occasions.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Fruit,
    Salad,
    Lunch,
    Snacks,
    Dinner,
}

impl MealCategory {
    /// All categories in canonical order.
    pub const ALL: [MealCategory; 6] = [
        MealCategory::Breakfast,
        MealCategory::Fruit,
        MealCategory::Salad,
        MealCategory::Lunch,
        MealCategory::Snacks,
        MealCategory::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Fruit => "fruit",
            MealCategory::Salad => "salad",
            MealCategory::Lunch => "lunch",
            MealCategory::Snacks => "snacks",
            MealCategory::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        MealCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| NutriError::InvalidInput(format!("unknown meal category: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_category() {
        assert_eq!(MealCategory::ALL.len(), 6);
        assert_eq!(MealCategory::ALL[0], MealCategory::Breakfast);
        assert_eq!(MealCategory::ALL[5], MealCategory::Dinner);
    }

    #[test]
    fn test_roundtrip_names() {
        for category in MealCategory::ALL {
            assert_eq!(category.as_str().parse::<MealCategory>().unwrap(), category);
        }
        assert!("brunch".parse::<MealCategory>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&MealCategory::Snacks).unwrap();
        assert_eq!(json, "\"snacks\"");
    }
}
