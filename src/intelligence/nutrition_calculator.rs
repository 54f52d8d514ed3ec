// ABOUTME: Energy and macronutrient target calculation using peer-reviewed formulas
// ABOUTME: Mifflin-St Jeor BMR, TDEE, goal calorie modifier, and per-goal macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Every function here is total over validated profiles: inputs are bounded
//! by the intake normalizer, so results are always finite.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::{BmrConfig, MacroPolicy, NutritionConfig};
use fitplan_core::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use fitplan_core::models::{Gender, Goal, NutritionTargets};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The result never drops below `config.min_bmr_kcal`.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    (weight_component + height_component + age_component + gender_constant)
        .max(config.min_bmr_kcal)
}

/// Total Daily Energy Expenditure: BMR x activity multiplier
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    bmr * activity_multiplier
}

/// Target calories: TDEE x goal modifier, rounded to whole kcal
#[must_use]
pub fn calculate_target_calories(tdee: f64, calorie_modifier: f64) -> f64 {
    (tdee * calorie_modifier).round()
}

/// Protein grams: bodyweight x goal factor, capped at a share of calories
///
/// # Reference
/// Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[must_use]
pub fn calculate_protein_needs(
    weight_kg: f64,
    target_calories: f64,
    policy: MacroPolicy,
    protein_max_percent: f64,
) -> f64 {
    let cap_g = target_calories * (protein_max_percent / 100.0) / PROTEIN_KCAL_PER_G;
    (weight_kg * policy.protein_g_per_kg).min(cap_g)
}

/// Fat grams: a fixed share of the calorie target
#[must_use]
pub fn calculate_fat_needs(target_calories: f64, policy: MacroPolicy) -> f64 {
    target_calories * (policy.fat_percent / 100.0) / FAT_KCAL_PER_G
}

/// Carbohydrate grams: whatever energy protein and fat leave, never negative
#[must_use]
pub fn calculate_carb_needs(target_calories: f64, protein_g: f64, fat_g: f64) -> f64 {
    let after_protein = protein_g.mul_add(-PROTEIN_KCAL_PER_G, target_calories);
    let remaining = fat_g.mul_add(-FAT_KCAL_PER_G, after_protein);
    (remaining / CARBS_KCAL_PER_G).max(0.0)
}

/// Inputs for a full target calculation
#[derive(Debug, Clone, Copy)]
pub struct TargetInputs {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years), already defaulted
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Goal, selects the macro policy
    pub goal: Goal,
    /// Activity multiplier from the reference catalog
    pub activity_multiplier: f64,
    /// Goal calorie modifier from the reference catalog
    pub calorie_modifier: f64,
}

/// Calculate energy and macro targets
///
/// Macro grams are rounded to whole grams after carbohydrates are derived
/// from the unrounded protein and fat values.
#[must_use]
pub fn calculate_nutrition_targets(
    inputs: &TargetInputs,
    config: &NutritionConfig,
) -> NutritionTargets {
    let bmr = calculate_mifflin_st_jeor(
        inputs.weight_kg,
        inputs.height_cm,
        inputs.age,
        inputs.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, inputs.activity_multiplier);
    let calories = calculate_target_calories(tdee, inputs.calorie_modifier);

    let policy = config.macros.for_goal(inputs.goal);
    let protein_g = calculate_protein_needs(
        inputs.weight_kg,
        calories,
        policy,
        config.macros.protein_max_percent,
    );
    let fat_g = calculate_fat_needs(calories, policy);
    let carbs_g = calculate_carb_needs(calories, protein_g, fat_g);

    NutritionTargets {
        bmr,
        tdee,
        calories,
        protein_g: protein_g.round(),
        fat_g: fat_g.round(),
        carbs_g: carbs_g.round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_floor() {
        let config = BmrConfig::default();
        let bmr = calculate_mifflin_st_jeor(30.0, 100.0, 120, Gender::Female, &config);
        assert!((bmr - config.min_bmr_kcal).abs() < f64::EPSILON);
    }

    #[test]
    fn test_carbs_never_negative() {
        assert!(calculate_carb_needs(1000.0, 200.0, 80.0).abs() < f64::EPSILON);
    }
}
