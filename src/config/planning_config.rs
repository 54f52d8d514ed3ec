// ABOUTME: Top-level planning configuration with environment overrides and validation
// ABOUTME: Bundles nutrition, profile defaults, and conversation settings behind a global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning Configuration
//!
//! Configuration is resolved in two steps:
//!
//! 1. Default values
//! 2. Environment variable overrides (highest priority):
//!    ```bash
//!    export FITPLAN_DEFAULT_AGE=35
//!    export FITPLAN_DEFAULT_ACTIVITY_LEVEL=lightly_active
//!    export FITPLAN_RESTART_COMMANDS=restart,рестарт,start over
//!    ```
//!
//! The merged result is validated before use.

use super::nutrition::NutritionConfig;
use crate::intake::defaults::ProfileDefaults;
use crate::intake::tokens::Tokenized;
use fitplan_core::models::{ActivityLevel, DietType, MeatPreference, TrainingPreference};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held an unparsable value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights or shares do not add up
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// A numeric setting is outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// A required setting is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Conversation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Messages that restart the intake from any state (case-insensitive)
    pub restart_commands: Vec<String>,
    /// Number of example recipe names listed in the final summary
    pub summary_recipe_count: usize,
}

impl ConversationConfig {
    /// Whether a message is a restart command
    #[must_use]
    pub fn is_restart(&self, message: &str) -> bool {
        let message = message.trim().to_lowercase();
        self.restart_commands
            .iter()
            .any(|command| command.to_lowercase() == message)
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            restart_commands: vec!["restart".to_owned(), "рестарт".to_owned()],
            summary_recipe_count: 3,
        }
    }
}

/// Planning engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Energy and macro settings
    pub nutrition: NutritionConfig,
    /// Values used for profile fields the intake flow does not collect
    pub defaults: ProfileDefaults,
    /// Dialogue settings
    pub conversation: ConversationConfig,
}

static PLANNING_CONFIG: OnceLock<PlanningConfig> = OnceLock::new();

impl PlanningConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        PLANNING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load planning config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.defaults.validate()?;
        if self.conversation.restart_commands.is_empty() {
            return Err(ConfigError::MissingField("conversation.restart_commands"));
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(age) = parse_env::<u32>("FITPLAN_DEFAULT_AGE")? {
            self.defaults.age = age;
        }
        if let Some(level) = parse_env_token::<ActivityLevel>("FITPLAN_DEFAULT_ACTIVITY_LEVEL")? {
            self.defaults.activity_level = level;
        }
        if let Some(diet) = parse_env_token::<DietType>("FITPLAN_DEFAULT_DIET_TYPE")? {
            self.defaults.diet_type = diet;
        }
        if let Some(meat) = parse_env_token::<MeatPreference>("FITPLAN_DEFAULT_MEAT_PREFERENCE")? {
            self.defaults.meat_preference = meat;
        }
        if let Some(training) =
            parse_env_token::<TrainingPreference>("FITPLAN_DEFAULT_TRAINING_TYPE")?
        {
            self.defaults.training_preference = training;
        }
        if let Ok(commands) = env::var("FITPLAN_RESTART_COMMANDS") {
            self.conversation.restart_commands = commands
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
                .collect();
        }
        if let Some(count) = parse_env::<usize>("FITPLAN_SUMMARY_RECIPE_COUNT")? {
            self.conversation.summary_recipe_count = count;
        }
        if let Some(floor) = parse_env::<f64>("FITPLAN_MIN_BMR_KCAL")? {
            self.nutrition.bmr.min_bmr_kcal = floor;
        }
        if let Some(cap) = parse_env::<f64>("FITPLAN_PROTEIN_MAX_PERCENT")? {
            self.nutrition.macros.protein_max_percent = cap;
        }
        Ok(self)
    }
}

fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    env::var(name).map_or(Ok(None), |val| {
        val.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))
    })
}

fn parse_env_token<T: Tokenized>(name: &str) -> Result<Option<T>, ConfigError> {
    env::var(name).map_or(Ok(None), |val| {
        T::lookup(&val).map(Some).ok_or_else(|| {
            ConfigError::Parse(format!(
                "Invalid {name}: expected one of {}",
                T::allowed_values().join(", ")
            ))
        })
    })
}
