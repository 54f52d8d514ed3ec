// ABOUTME: Plan generation intelligence: energy targets, meal selection, training templates
// ABOUTME: Pure functions over a profile, a catalog snapshot, and the nutrition config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Deterministic rules turning a completed profile into plans. Nothing here
//! holds state or performs I/O; callers pass the catalog snapshot explicitly.

/// Nutrition plan generation and per-category recipe selection
pub mod meal_planner;
/// BMR, TDEE and macro target formulas
pub mod nutrition_calculator;
/// Training template matching
pub mod training_recommender;

pub use meal_planner::{assemble_day, build_constraints, generate_nutrition_plan};
pub use nutrition_calculator::{calculate_nutrition_targets, TargetInputs};
pub use training_recommender::{
    recommend_for_profile, recommend_training_plan, recommend_training_plan_by_name,
};
