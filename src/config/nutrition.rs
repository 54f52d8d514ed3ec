// ABOUTME: Nutrition configuration for energy targets and meal selection
// ABOUTME: Configures BMR coefficients, per-goal macro policy, and meal calorie shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Energy targets are computed with one canonical formula:
//!
//! ```text
//! BMR      = 10 x weight_kg + 6.25 x height_cm - 5 x age + (5 | -161)
//! TDEE     = max(BMR, floor) x activity multiplier
//! calories = round(TDEE x goal calorie_modifier)
//! ```
//!
//! Activity multipliers and goal modifiers are reference data (see
//! `reference::ReferenceCatalog`); everything else lives here.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use super::planning_config::ConfigError;
use fitplan_core::models::{Goal, MealType};
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// BMR never drops below this value (kcal/day)
    pub min_bmr_kcal: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            min_bmr_kcal: 1000.0,
        }
    }
}

/// Macro split for one goal
///
/// Protein scales with bodyweight, fat is a share of the calorie target and
/// carbohydrates take whatever energy is left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPolicy {
    /// Protein grams per kilogram of bodyweight
    pub protein_g_per_kg: f64,
    /// Fat as a percentage of target calories
    pub fat_percent: f64,
}

/// Per-goal macro policy
///
/// Reference: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroPolicyConfig {
    /// Weight loss: high protein preserves lean mass in a deficit
    pub weight_loss: MacroPolicy,
    /// Maintenance: moderate protein, balanced fat
    pub maintain: MacroPolicy,
    /// Muscle gain: strength-athlete protein range
    pub muscle_gain: MacroPolicy,
    /// Protein energy is capped at this percentage of target calories
    pub protein_max_percent: f64,
}

impl MacroPolicyConfig {
    /// Policy for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroPolicy {
        match goal {
            Goal::WeightLoss => self.weight_loss,
            Goal::Maintain => self.maintain,
            Goal::MuscleGain => self.muscle_gain,
        }
    }

    /// Validate every policy
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a protein factor is not positive
    /// or a percentage falls outside (0, 100)
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, policy) in [
            ("weight_loss", &self.weight_loss),
            ("maintain", &self.maintain),
            ("muscle_gain", &self.muscle_gain),
        ] {
            if !(policy.protein_g_per_kg.is_finite() && policy.protein_g_per_kg > 0.0) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name}.protein_g_per_kg must be positive"
                )));
            }
            if !(policy.fat_percent > 0.0 && policy.fat_percent < 100.0) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name}.fat_percent must be within (0, 100)"
                )));
            }
        }
        if !(self.protein_max_percent > 0.0 && self.protein_max_percent < 100.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein_max_percent must be within (0, 100)".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for MacroPolicyConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroPolicy {
                protein_g_per_kg: 2.0,
                fat_percent: 25.0,
            },
            maintain: MacroPolicy {
                protein_g_per_kg: 1.6,
                fat_percent: 30.0,
            },
            muscle_gain: MacroPolicy {
                protein_g_per_kg: 2.2,
                fat_percent: 25.0,
            },
            protein_max_percent: 35.0,
        }
    }
}

/// Share of daily calories each meal category aims for (0.0-1.0)
///
/// The planner picks, inside a category, the admitted recipe whose calories
/// are closest to `share x target calories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSharesConfig {
    /// Breakfast share (0.25)
    pub breakfast: f64,
    /// Lunch share (0.35)
    pub lunch: f64,
    /// Dinner share (0.30)
    pub dinner: f64,
    /// Snack share (0.10)
    pub snack: f64,
}

impl MealSharesConfig {
    /// Share for one category
    #[must_use]
    pub const fn share(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }

    /// Validate that shares are positive and sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if shares are negative or do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = [self.breakfast, self.lunch, self.dinner, self.snack];
        if shares.iter().any(|s| !(s.is_finite() && *s >= 0.0)) {
            return Err(ConfigError::InvalidWeights(
                "meal shares must be non-negative".to_owned(),
            ));
        }
        let total: f64 = shares.iter().sum();
        if (total - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(format!(
                "meal shares must sum to 1.0 (got {total:.3})"
            )));
        }
        Ok(())
    }
}

impl Default for MealSharesConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
        }
    }
}

/// Nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula settings
    pub bmr: BmrConfig,
    /// Macro split per goal
    pub macros: MacroPolicyConfig,
    /// Calorie share per meal category
    pub meal_shares: MealSharesConfig,
}

impl NutritionConfig {
    /// Validate all nutrition settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.bmr.min_bmr_kcal.is_finite() && self.bmr.min_bmr_kcal > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "bmr.min_bmr_kcal must be positive".to_owned(),
            ));
        }
        self.macros.validate()?;
        self.meal_shares.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_meal_shares_are_valid() {
        assert!(MealSharesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_meal_shares_must_sum_to_one() {
        let shares = MealSharesConfig {
            snack: 0.5,
            ..MealSharesConfig::default()
        };
        assert!(matches!(
            shares.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_macro_policy_rejects_bad_fat_percent() {
        let mut macros = MacroPolicyConfig::default();
        macros.maintain.fat_percent = 120.0;
        assert!(macros.validate().is_err());
    }
}
