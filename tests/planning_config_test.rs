// ABOUTME: Integration tests for planning configuration defaults and environment overrides
// ABOUTME: Runs serially because the tests mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan_core::constants::prompts;
use fitplan_core::models::{ActivityLevel, DietType, Goal};
use fitplan_engine::config::{ConfigError, PlanningConfig};
use fitplan_engine::PlanEngine;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "FITPLAN_DEFAULT_AGE",
    "FITPLAN_DEFAULT_ACTIVITY_LEVEL",
    "FITPLAN_DEFAULT_DIET_TYPE",
    "FITPLAN_DEFAULT_MEAT_PREFERENCE",
    "FITPLAN_DEFAULT_TRAINING_TYPE",
    "FITPLAN_RESTART_COMMANDS",
    "FITPLAN_SUMMARY_RECIPE_COUNT",
    "FITPLAN_MIN_BMR_KCAL",
    "FITPLAN_PROTEIN_MAX_PERCENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_env();
    let config = PlanningConfig::load().unwrap();
    let defaults = PlanningConfig::default();

    assert_eq!(config.defaults, defaults.defaults);
    assert_eq!(
        config.conversation.restart_commands,
        defaults.conversation.restart_commands
    );
    assert_eq!(config.conversation.summary_recipe_count, 3);
}

#[test]
#[serial]
fn test_env_overrides_accept_tokens_and_display_names() {
    clear_env();
    env::set_var("FITPLAN_DEFAULT_AGE", "45");
    env::set_var("FITPLAN_DEFAULT_ACTIVITY_LEVEL", "Very active");
    env::set_var("FITPLAN_DEFAULT_DIET_TYPE", "vegetarian");
    env::set_var("FITPLAN_RESTART_COMMANDS", "start over, reset");

    let config = PlanningConfig::load().unwrap();
    clear_env();

    assert_eq!(config.defaults.age, 45);
    assert_eq!(config.defaults.activity_level, ActivityLevel::VeryActive);
    assert_eq!(config.defaults.diet_type, DietType::Vegetarian);
    assert!(config.conversation.is_restart("Start Over"));
    assert!(!config.conversation.is_restart("restart"));
}

#[test]
#[serial]
fn test_invalid_env_values_are_rejected() {
    clear_env();
    env::set_var("FITPLAN_DEFAULT_AGE", "old");
    assert!(matches!(PlanningConfig::load(), Err(ConfigError::Parse(_))));

    clear_env();
    env::set_var("FITPLAN_DEFAULT_AGE", "200");
    assert!(matches!(
        PlanningConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
    env::set_var("FITPLAN_DEFAULT_DIET_TYPE", "carnivore");
    assert!(matches!(PlanningConfig::load(), Err(ConfigError::Parse(_))));

    clear_env();
    env::set_var("FITPLAN_PROTEIN_MAX_PERCENT", "120");
    assert!(PlanningConfig::load().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_summary_recipe_count_limits_chat_summary() {
    clear_env();
    env::set_var("FITPLAN_SUMMARY_RECIPE_COUNT", "1");
    let config = PlanningConfig::load().unwrap();
    clear_env();

    let engine = PlanEngine::with_catalog(common::test_catalog(), config);
    for message in ["70", "175", "male"] {
        let _ = engine.advance("s1", message);
    }
    let reply = engine.advance("s1", "maintain");
    assert!(reply.prompt.contains("Scrambled eggs"));
    assert!(!reply.prompt.contains("Chicken and rice"));
}

#[test]
fn test_zero_summary_recipe_count_omits_meal_list() {
    let mut config = PlanningConfig::default();
    config.conversation.summary_recipe_count = 0;
    let engine = PlanEngine::with_catalog(common::test_catalog(), config);

    for message in ["70", "175", "male"] {
        let _ = engine.advance("s1", message);
    }
    let reply = engine.advance("s1", "maintain");

    assert!(reply.generated_plan.is_some());
    assert!(!reply.prompt.contains(prompts::NO_RECIPES));
    assert!(!reply.prompt.contains("Example meals"));
    assert!(reply.prompt.contains("Daily target: 2556 kcal"));
}

#[test]
fn test_configured_default_age_changes_targets() {
    let mut config = PlanningConfig::default();
    config.defaults.age = 50;
    let engine = PlanEngine::with_catalog(common::test_catalog(), config);

    let mut profile = common::sample_profile(Goal::Maintain);
    profile.age = None;
    let plan = engine.generate_nutrition_plan(&profile).unwrap();

    // BMR drops by 5 kcal per year: (1648.75 - 100) * 1.55 = 2400.56
    assert!((plan.targets.calories - 2401.0).abs() < f64::EPSILON);
}
