// ABOUTME: Shared test fixtures for the plan engine integration tests
// ABOUTME: Quiet test logging, a sample profile, and a small hand-sized catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan_core::models::{
    ActivityLevel, ActivityLevelProfile, DietType, DietTypeProfile, Exercise, Gender, Goal,
    GoalProfile, MealType, MeatPreference, Recipe, TrainingPlanTemplate, TrainingPreference,
    TrainingSession, UserProfile,
};
use fitplan_engine::config::PlanningConfig;
use fitplan_engine::reference::ReferenceCatalog;
use fitplan_engine::PlanEngine;
use std::collections::BTreeSet;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg, 175 cm, male, 30 years, moderately active, no restrictions
pub fn sample_profile(goal: Goal) -> UserProfile {
    UserProfile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: Some(30),
        gender: Gender::Male,
        goal,
        activity_level: ActivityLevel::ModeratelyActive,
        diet_type: DietType::Standard,
        meat_preference: MeatPreference::Any,
        consumes_dairy: true,
        allergies: BTreeSet::new(),
        training_preference: TrainingPreference::Weights,
    }
}

/// Two recipes per meal category with round calorie values
///
/// For the 2556 kcal maintenance target the closest picks are
/// `eggs`, `chicken-rice`, `salmon`, `almonds`.
pub fn test_catalog() -> ReferenceCatalog {
    ReferenceCatalog {
        goals: vec![
            goal(Goal::WeightLoss, "Weight loss", 0.85),
            goal(Goal::Maintain, "Maintain weight", 1.0),
            goal(Goal::MuscleGain, "Muscle gain", 1.10),
        ],
        activity_levels: vec![
            activity(ActivityLevel::Sedentary, 1.2),
            activity(ActivityLevel::LightlyActive, 1.375),
            activity(ActivityLevel::ModeratelyActive, 1.55),
            activity(ActivityLevel::VeryActive, 1.725),
            activity(ActivityLevel::ExtraActive, 1.9),
        ],
        diet_types: vec![
            diet(DietType::Standard, &[]),
            diet(DietType::Vegetarian, &["vegetarian", "vegan"]),
            diet(DietType::Vegan, &["vegan"]),
            diet(DietType::Keto, &["keto"]),
        ],
        recipes: vec![
            Recipe::new("oats", "Oats", MealType::Breakfast)
                .with_nutrition(400.0, 12.0, 8.0, 70.0)
                .with_tag("vegan")
                .with_allergen("gluten"),
            Recipe::new("eggs", "Scrambled eggs", MealType::Breakfast)
                .with_nutrition(600.0, 35.0, 40.0, 20.0)
                .with_tag("vegetarian")
                .with_allergen("eggs"),
            Recipe::new("chicken-rice", "Chicken and rice", MealType::Lunch)
                .with_nutrition(800.0, 55.0, 20.0, 95.0)
                .with_tag("poultry"),
            Recipe::new("lentils", "Lentil stew", MealType::Lunch)
                .with_nutrition(700.0, 35.0, 15.0, 100.0)
                .with_tag("vegan"),
            Recipe::new("salmon", "Baked salmon", MealType::Dinner)
                .with_nutrition(750.0, 50.0, 35.0, 50.0)
                .with_tag("fish"),
            Recipe::new("tofu", "Tofu stir fry", MealType::Dinner)
                .with_nutrition(650.0, 35.0, 25.0, 60.0)
                .with_tag("vegan")
                .with_allergen("soy"),
            Recipe::new("almonds", "Almonds", MealType::Snack)
                .with_nutrition(250.0, 9.0, 22.0, 8.0)
                .with_tag("vegan")
                .with_allergen("nuts"),
            Recipe::new("yogurt", "Plain yogurt", MealType::Snack)
                .with_nutrition(200.0, 15.0, 8.0, 15.0)
                .with_tag("vegetarian")
                .with_tag("dairy")
                .with_allergen("milk"),
        ],
        training_templates: vec![template("maintain-gym", Goal::Maintain, true)],
    }
}

/// Engine over [`test_catalog`] with default configuration
pub fn test_engine() -> PlanEngine {
    init_test_logging();
    PlanEngine::with_catalog(test_catalog(), PlanningConfig::default())
}

/// Engine over the built-in catalog with default configuration
pub fn builtin_engine() -> PlanEngine {
    init_test_logging();
    PlanEngine::with_catalog(
        ReferenceCatalog::builtin().expect("builtin catalog"),
        PlanningConfig::default(),
    )
}

pub fn goal(goal: Goal, name: &str, calorie_modifier: f64) -> GoalProfile {
    GoalProfile {
        goal,
        name: name.to_owned(),
        calorie_modifier,
    }
}

pub fn activity(level: ActivityLevel, multiplier: f64) -> ActivityLevelProfile {
    ActivityLevelProfile { level, multiplier }
}

pub fn diet(diet_type: DietType, tags: &[&str]) -> DietTypeProfile {
    DietTypeProfile {
        diet_type,
        accepted_tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

pub fn template(id: &str, goal: Goal, with_weights: bool) -> TrainingPlanTemplate {
    TrainingPlanTemplate {
        id: id.to_owned(),
        name: format!("Template {id}"),
        goal,
        with_weights,
        sessions: vec![TrainingSession {
            day: "Monday".to_owned(),
            duration_minutes: 45,
            exercises: vec![Exercise {
                name: "Squat".to_owned(),
                sets: Some(3),
                reps: Some(10),
            }],
        }],
    }
}
