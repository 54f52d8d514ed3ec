// ABOUTME: Core data models for the FitPlan engine
// ABOUTME: Re-exports profile, recipe, reference, training, and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! Value objects exchanged between the engine and its collaborators. None of
//! these types knows about storage; the persistence layer takes ownership of
//! generated plans and files them under the user's history.

/// Generated nutrition plans and targets
pub mod plan;
/// User profile, partial intake profile and snapshots
pub mod profile;
/// Recipes and dietary constraints
pub mod recipe;
/// Goal, activity level and diet type reference rows
pub mod reference;
/// Closed enums with canonical and localized tokens
pub mod tokens;
/// Training templates and generated training plans
pub mod training;

pub use plan::{GeneratedNutritionPlan, MealPlan, NutritionTargets};
pub use profile::{FieldKind, PartialProfile, ProfileSnapshot, UserProfile};
pub use recipe::{MealType, Recipe, RecipeConstraints};
pub use reference::{ActivityLevelProfile, DietTypeProfile, GoalProfile};
pub use tokens::{
    ActivityLevel, CanonicalEnum, DietType, Gender, Goal, MeatPreference, TrainingPreference,
};
pub use training::{Exercise, GeneratedTrainingPlan, TrainingPlanTemplate, TrainingSession};
