// ABOUTME: Nutrition plan generator combining energy targets with constraint-filtered recipes
// ABOUTME: Builds recipe constraints from a profile and fills each meal category fail-soft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Plan Generator
//!
//! 1. Targets come from [`calculate_nutrition_targets`] with the catalog's
//!    activity multiplier and goal modifier.
//! 2. Candidates are every recipe the profile's [`RecipeConstraints`] admit.
//! 3. Each meal category takes the candidate whose calories are closest to
//!    that category's share of the target; ties go to catalog order. A
//!    category without candidates stays empty.

use super::nutrition_calculator::{calculate_nutrition_targets, TargetInputs};
use crate::config::{MealSharesConfig, NutritionConfig};
use crate::intake::{validate_profile, ProfileDefaults};
use crate::reference::ReferenceCatalog;
use chrono::Utc;
use fitplan_core::errors::PlanError;
use fitplan_core::models::{
    DietTypeProfile, GeneratedNutritionPlan, MealPlan, MealType, Recipe, RecipeConstraints,
    UserProfile,
};
use tracing::{debug, info};
use uuid::Uuid;

/// Dietary constraints for a profile under its diet type's reference row
#[must_use]
pub fn build_constraints(profile: &UserProfile, diet: &DietTypeProfile) -> RecipeConstraints {
    RecipeConstraints {
        accepted_diet_tags: diet.accepted_tags.clone(),
        meat_preference: Some(profile.meat_preference),
        exclude_dairy: !profile.consumes_dairy,
        allergies: profile
            .allergies
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect(),
        meal_type: None,
    }
}

/// Candidate closest to `target_kcal`; the first one wins a tie
#[must_use]
pub fn closest_to_target<'a>(candidates: &[&'a Recipe], target_kcal: f64) -> Option<&'a Recipe> {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = (a.calories - target_kcal).abs();
            let db = (b.calories - target_kcal).abs();
            da.total_cmp(&db)
        })
}

/// Fill every day category from already filtered candidates
#[must_use]
pub fn assemble_day(
    candidates: &[&Recipe],
    target_calories: f64,
    shares: &MealSharesConfig,
) -> MealPlan {
    let mut plan = MealPlan::unfilled();
    for meal_type in MealType::DAY {
        let in_category: Vec<&Recipe> = candidates
            .iter()
            .copied()
            .filter(|r| r.meal_type == meal_type)
            .collect();
        let choice = closest_to_target(&in_category, target_calories * shares.share(meal_type));
        if choice.is_none() {
            debug!(meal = %meal_type, "No compatible recipe for meal category");
        }
        plan.set(meal_type, choice.cloned());
    }
    plan
}

/// Generate a nutrition plan for a fully specified profile
///
/// # Errors
///
/// - `PlanError::Validation` if the profile is outside the intake bounds
/// - `PlanError::MissingReference` if the catalog lacks the goal, activity or diet row
/// - `PlanError::NoCompatibleRecipes` (carrying the targets) if no recipe in
///   any category satisfies the dietary constraints
pub fn generate_nutrition_plan(
    profile: &UserProfile,
    catalog: &ReferenceCatalog,
    config: &NutritionConfig,
    defaults: &ProfileDefaults,
) -> Result<GeneratedNutritionPlan, PlanError> {
    validate_profile(profile)?;

    let goal = catalog.find_goal(profile.goal)?;
    let activity = catalog.find_activity_level(profile.activity_level)?;
    let diet = catalog.find_diet_type(profile.diet_type)?;

    let targets = calculate_nutrition_targets(
        &TargetInputs {
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age: defaults.age_for(profile),
            gender: profile.gender,
            goal: profile.goal,
            activity_multiplier: activity.multiplier,
            calorie_modifier: goal.calorie_modifier,
        },
        config,
    );

    let constraints = build_constraints(profile, diet);
    let candidates = catalog.find_recipes_matching(&constraints);
    if candidates.is_empty() {
        info!(
            goal = %profile.goal,
            diet = %profile.diet_type,
            calories = targets.calories,
            "No recipe satisfies the dietary constraints"
        );
        return Err(PlanError::NoCompatibleRecipes { targets });
    }

    let meals = assemble_day(&candidates, targets.calories, &config.meal_shares);
    info!(
        goal = %profile.goal,
        calories = targets.calories,
        planned_calories = meals.total_calories(),
        candidates = candidates.len(),
        empty_categories = meals.empty_categories().len(),
        "Generated nutrition plan"
    );

    Ok(GeneratedNutritionPlan {
        id: Uuid::new_v4(),
        goal: profile.goal,
        goal_label: goal.name.clone(),
        targets,
        meals,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_prefers_first_on_tie() {
        let a = Recipe::new("a", "A", MealType::Lunch).with_nutrition(400.0, 0.0, 0.0, 0.0);
        let b = Recipe::new("b", "B", MealType::Lunch).with_nutrition(600.0, 0.0, 0.0, 0.0);
        let chosen = closest_to_target(&[&a, &b], 500.0).unwrap();
        assert_eq!(chosen.id, "a");
        let chosen = closest_to_target(&[&b, &a], 500.0).unwrap();
        assert_eq!(chosen.id, "b");
        assert!(closest_to_target(&[], 500.0).is_none());
    }

    #[test]
    fn test_assemble_day_leaves_missing_categories_empty() {
        let lunch = Recipe::new("l", "L", MealType::Lunch).with_nutrition(700.0, 0.0, 0.0, 0.0);
        let plan = assemble_day(&[&lunch], 2000.0, &MealSharesConfig::default());
        assert_eq!(plan.get(MealType::Lunch).map(|r| r.id.as_str()), Some("l"));
        assert_eq!(
            plan.empty_categories(),
            vec![MealType::Breakfast, MealType::Dinner, MealType::Snack]
        );
    }
}
