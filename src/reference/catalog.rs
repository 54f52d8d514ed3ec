// ABOUTME: In-memory reference catalog with goal, activity, diet, recipe, and template tables
// ABOUTME: YAML loading, structural validation, and the lookups consumed by the generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intake::tokens::Tokenized;
use fitplan_core::errors::PlanError;
use fitplan_core::models::{
    ActivityLevel, ActivityLevelProfile, CanonicalEnum, DietType, DietTypeProfile, Goal,
    GoalProfile, MealType, Recipe, RecipeConstraints, TrainingPlanTemplate,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("builtin_catalog.yaml");

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid catalog YAML
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A row appears twice for the same key
    #[error("duplicate {kind} entry '{key}'")]
    Duplicate {
        /// Table name
        kind: &'static str,
        /// Duplicated key
        key: String,
    },

    /// A numeric value is negative, zero where it must be positive, or not finite
    #[error("invalid {kind} '{key}': {reason}")]
    InvalidValue {
        /// Table name
        kind: &'static str,
        /// Row key
        key: String,
        /// What is wrong
        reason: String,
    },
}

/// Read-only reference tables
///
/// Recipes and training templates keep their document order; "first match"
/// always means first in that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    /// Goal rows with calorie modifiers
    #[serde(default)]
    pub goals: Vec<GoalProfile>,
    /// Activity rows with TDEE multipliers
    #[serde(default)]
    pub activity_levels: Vec<ActivityLevelProfile>,
    /// Diet rows with accepted recipe tags
    #[serde(default)]
    pub diet_types: Vec<DietTypeProfile>,
    /// Recipe catalog
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Training plan templates
    #[serde(default)]
    pub training_templates: Vec<TrainingPlanTemplate>,
}

/// Row counts for a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// Goal rows
    pub goals: usize,
    /// Activity rows
    pub activity_levels: usize,
    /// Diet rows
    pub diet_types: usize,
    /// Recipes per meal category
    pub recipes_by_meal: BTreeMap<MealType, usize>,
    /// Training templates
    pub training_templates: usize,
}

impl ReferenceCatalog {
    /// Catalog shipped with the engine
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only if the embedded document is corrupt
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a YAML catalog document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed YAML and a validation error
    /// for duplicate keys or invalid numbers
    pub fn from_yaml_str(document: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(document)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a YAML catalog file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise as [`Self::from_yaml_str`]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&document)?;
        tracing::info!(
            path = %path.display(),
            recipes = catalog.recipes.len(),
            templates = catalog.training_templates.len(),
            "Loaded reference catalog"
        );
        Ok(catalog)
    }

    /// Check keys are unique and numbers are usable
    ///
    /// Missing rows are allowed; generation reports them as `MissingReference`.
    ///
    /// # Errors
    ///
    /// Returns the first problem found
    pub fn validate(&self) -> Result<(), CatalogError> {
        unique("goal", self.goals.iter().map(|g| g.goal.canonical_name()))?;
        unique(
            "activity level",
            self.activity_levels.iter().map(|a| a.level.canonical_name()),
        )?;
        unique(
            "diet type",
            self.diet_types.iter().map(|d| d.diet_type.canonical_name()),
        )?;
        unique("recipe", self.recipes.iter().map(|r| r.id.as_str()))?;
        unique(
            "training template",
            self.training_templates.iter().map(|t| t.id.as_str()),
        )?;

        for goal in &self.goals {
            positive("goal", goal.goal.canonical_name(), goal.calorie_modifier)?;
        }
        for activity in &self.activity_levels {
            positive(
                "activity level",
                activity.level.canonical_name(),
                activity.multiplier,
            )?;
        }
        for recipe in &self.recipes {
            for value in [
                recipe.calories,
                recipe.protein_g,
                recipe.fat_g,
                recipe.carbs_g,
            ] {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(CatalogError::InvalidValue {
                        kind: "recipe",
                        key: recipe.id.clone(),
                        reason: format!("nutrition value {value} must be finite and non-negative"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Goal row for a goal
    ///
    /// # Errors
    ///
    /// `PlanError::MissingReference` if the catalog has no row for it
    pub fn find_goal(&self, goal: Goal) -> Result<&GoalProfile, PlanError> {
        self.goals
            .iter()
            .find(|g| g.goal == goal)
            .ok_or_else(|| missing("goal", goal.canonical_name()))
    }

    /// Resolve free-text to a goal
    ///
    /// Canonical tokens win over display names, which win over the catalog's
    /// own row names.
    ///
    /// # Errors
    ///
    /// `PlanError::UnknownEnumValue` when nothing matches
    pub fn resolve_goal(&self, name: &str) -> Result<Goal, PlanError> {
        if let Some(goal) = Goal::lookup(name) {
            return Ok(goal);
        }
        let wanted = name.trim().to_lowercase();
        self.goals
            .iter()
            .find(|g| g.name.to_lowercase() == wanted)
            .map(|g| g.goal)
            .ok_or_else(|| PlanError::UnknownEnumValue {
                kind: Goal::KIND,
                input: name.trim().to_owned(),
                allowed_values: Goal::allowed_values(),
            })
    }

    /// Goal row by free-text name
    ///
    /// # Errors
    ///
    /// `PlanError::UnknownEnumValue` when nothing matches, `MissingReference`
    /// when the name resolves to a goal without a row
    pub fn find_goal_by_name(&self, name: &str) -> Result<&GoalProfile, PlanError> {
        self.resolve_goal(name).and_then(|goal| self.find_goal(goal))
    }

    /// Activity row for a level
    ///
    /// # Errors
    ///
    /// `PlanError::MissingReference` if the catalog has no row for it
    pub fn find_activity_level(
        &self,
        level: ActivityLevel,
    ) -> Result<&ActivityLevelProfile, PlanError> {
        self.activity_levels
            .iter()
            .find(|a| a.level == level)
            .ok_or_else(|| missing("activity level", level.canonical_name()))
    }

    /// Diet row for a diet type
    ///
    /// # Errors
    ///
    /// `PlanError::MissingReference` if the catalog has no row for it
    pub fn find_diet_type(&self, diet_type: DietType) -> Result<&DietTypeProfile, PlanError> {
        self.diet_types
            .iter()
            .find(|d| d.diet_type == diet_type)
            .ok_or_else(|| missing("diet type", diet_type.canonical_name()))
    }

    /// Recipes admitted by the constraints, in catalog order
    #[must_use]
    pub fn find_recipes_matching(&self, constraints: &RecipeConstraints) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| constraints.admits(r))
            .collect()
    }

    /// First template whose `(goal, with_weights)` matches exactly
    #[must_use]
    pub fn find_template_by_goal_and_weights(
        &self,
        goal: Goal,
        with_weights: bool,
    ) -> Option<&TrainingPlanTemplate> {
        self.training_templates
            .iter()
            .find(|t| t.goal == goal && t.with_weights == with_weights)
    }

    /// Row counts
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let mut recipes_by_meal: BTreeMap<MealType, usize> =
            MealType::DAY.iter().map(|m| (*m, 0)).collect();
        for recipe in &self.recipes {
            *recipes_by_meal.entry(recipe.meal_type).or_default() += 1;
        }
        CatalogSummary {
            goals: self.goals.len(),
            activity_levels: self.activity_levels.len(),
            diet_types: self.diet_types.len(),
            recipes_by_meal,
            training_templates: self.training_templates.len(),
        }
    }
}

fn missing(kind: &'static str, key: &str) -> PlanError {
    PlanError::MissingReference {
        kind,
        key: key.to_owned(),
    }
}

fn unique<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::Duplicate {
                kind,
                key: key.to_owned(),
            });
        }
    }
    Ok(())
}

fn positive(kind: &'static str, key: &str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidValue {
            kind,
            key: key.to_owned(),
            reason: format!("{value} must be a positive number"),
        })
    }
}
