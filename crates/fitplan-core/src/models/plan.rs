// ABOUTME: Generated nutrition plan models returned by the plan generator
// ABOUTME: NutritionTargets, MealPlan, and GeneratedNutritionPlan value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recipe::{MealType, Recipe};
use super::tokens::Goal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Daily energy and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Target calories after the goal modifier (kcal/day, whole number)
    pub calories: f64,
    /// Protein target (g)
    pub protein_g: f64,
    /// Fat target (g)
    pub fat_g: f64,
    /// Carbohydrate target (g)
    pub carbs_g: f64,
}

/// One day of meals: each category maps to a recipe or to nothing
///
/// An absent recipe means no catalog entry satisfied the category's
/// constraints; the planner never substitutes a disallowed recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    meals: BTreeMap<MealType, Option<Recipe>>,
}

impl MealPlan {
    /// Empty plan with every day category unfilled
    #[must_use]
    pub fn unfilled() -> Self {
        Self {
            meals: MealType::DAY.iter().map(|m| (*m, None)).collect(),
        }
    }

    /// Assign a category
    pub fn set(&mut self, meal_type: MealType, recipe: Option<Recipe>) {
        self.meals.insert(meal_type, recipe);
    }

    /// Recipe chosen for a category, `None` when the category is empty
    #[must_use]
    pub fn get(&self, meal_type: MealType) -> Option<&Recipe> {
        self.meals.get(&meal_type).and_then(Option::as_ref)
    }

    /// Selected recipes in serving order
    #[must_use]
    pub fn recipes(&self) -> Vec<&Recipe> {
        self.meals.values().filter_map(Option::as_ref).collect()
    }

    /// Categories left empty
    #[must_use]
    pub fn empty_categories(&self) -> Vec<MealType> {
        self.meals
            .iter()
            .filter(|(_, r)| r.is_none())
            .map(|(m, _)| *m)
            .collect()
    }

    /// Sum of selected recipe calories
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.recipes().iter().map(|r| r.calories).sum()
    }
}

/// Nutrition plan produced by one generation call
///
/// Created fresh per call and never mutated; a new call yields a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedNutritionPlan {
    /// Record identifier
    pub id: Uuid,
    /// Goal the plan targets
    pub goal: Goal,
    /// Goal display label from the reference data
    pub goal_label: String,
    /// Energy and macro targets
    pub targets: NutritionTargets,
    /// Selected meals
    pub meals: MealPlan,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl GeneratedNutritionPlan {
    /// Target calories (kcal/day)
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.targets.calories
    }

    /// Selected recipes in serving order
    #[must_use]
    pub fn recipes(&self) -> Vec<&Recipe> {
        self.meals.recipes()
    }
}
