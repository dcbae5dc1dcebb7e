use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// Biological sex used by the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Weekly activity level, mapped to a calorie multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

/// Weight goal, applied after the activity multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Maintain,
    Lose,
    Gain,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
        }
    }
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(NutriError::InvalidInput(format!(
                "invalid gender selection: {}",
                s
            ))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(ActivityLevel::Low),
            "moderate" => Ok(ActivityLevel::Moderate),
            "high" => Ok(ActivityLevel::High),
            _ => Err(NutriError::InvalidInput(format!(
                "invalid activity level: {}",
                s
            ))),
        }
    }
}

impl FromStr for Goal {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "maintain" => Ok(Goal::Maintain),
            "lose" => Ok(Goal::Lose),
            "gain" => Ok(Goal::Gain),
            _ => Err(NutriError::InvalidInput(format!(
                "invalid goal selection: {}",
                s
            ))),
        }
    }
}

/// User biometrics, the immutable input of a calculation request.
///
/// Callers must run `validate` before handing the record to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl Biometrics {
    /// Check every field against its allowed range.
    ///
    /// Rejection means no calculation runs at all; there are no partial results.
    pub fn validate(&self) -> Result<()> {
        if !self.age.is_finite() || self.age < 15.0 || self.age > 120.0 {
            return Err(NutriError::InvalidInput(
                "age must be between 15 and 120".to_string(),
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg < 30.0 || self.weight_kg > 300.0 {
            return Err(NutriError::InvalidInput(
                "weight must be between 30 and 300 kg".to_string(),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm < 100.0 || self.height_cm > 250.0 {
            return Err(NutriError::InvalidInput(
                "height must be between 100 and 250 cm".to_string(),
            ));
        }
        Ok(())
    }
}
