// ABOUTME: Configuration management module for the plan generation engine
// ABOUTME: Nutrition formulas, profile defaults, and conversation settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the FitPlan engine
//!
//! - **Nutrition**: BMR coefficients, per-goal macro policy, meal calorie shares
//! - **Planning**: top-level config with profile defaults, conversation
//!   settings, environment overrides and validation

/// BMR, macro policy and meal share configuration
pub mod nutrition;
/// Top-level planning configuration and global accessor
pub mod planning_config;

pub use nutrition::{BmrConfig, MacroPolicy, MacroPolicyConfig, MealSharesConfig, NutritionConfig};
pub use planning_config::{ConfigError, ConversationConfig, PlanningConfig};
