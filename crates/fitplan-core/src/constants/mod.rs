// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Intake bounds, recipe tag markers, conversation prompts, service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Accepted ranges for numeric intake fields
pub mod intake {
    /// Minimum body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 250.0;
    /// Minimum height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum age (years); Mifflin-St Jeor is validated from age 10
    pub const MIN_AGE: u32 = 10;
    /// Maximum age (years)
    pub const MAX_AGE: u32 = 120;
    /// Unit suffixes accepted after a weight
    pub const WEIGHT_UNITS: &[&str] = &["kg", "кг"];
    /// Unit suffixes accepted after a height
    pub const HEIGHT_UNITS: &[&str] = &["cm", "см"];
    /// Unit suffixes accepted after an age
    pub const AGE_UNITS: &[&str] = &["years", "лет"];
    /// Tokens read as "yes" for boolean fields
    pub const YES_TOKENS: &[&str] = &["yes", "y", "true", "1", "да", "д"];
    /// Tokens read as "no" for boolean fields
    pub const NO_TOKENS: &[&str] = &["no", "n", "false", "0", "нет", "н"];
}

/// Recipe tag markers with engine meaning
pub mod recipe_tags {
    /// Marks recipes containing dairy
    pub const DAIRY: &str = "dairy";
    /// Animal-protein markers
    pub const MEAT: &[&str] = &["poultry", "fish", "red_meat"];
}

/// Conversation prompts and replies
pub mod prompts {
    /// Prompt for the weight field
    pub const ASK_WEIGHT: &str = "What is your weight in kilograms?";
    /// Prompt for the height field
    pub const ASK_HEIGHT: &str = "What is your height in centimeters?";
    /// Prompt for the gender field
    pub const ASK_GENDER: &str = "What is your gender? (male / female)";
    /// Prompt for the goal field
    pub const ASK_GOAL: &str =
        "What is your goal? (weight loss / maintain weight / muscle gain)";
    /// Reply to any message once the plan is computed
    pub const ALREADY_DONE: &str =
        "Your plan has already been computed. Say \"restart\" to build a new one.";
    /// Acknowledgement of the restart command
    pub const RESTARTED: &str = "Starting over.";
    /// Hint for unparsable numbers
    pub const HINT_NOT_A_NUMBER: &str = "Please enter a number.";
    /// Hint for an unrecognized gender
    pub const HINT_GENDER: &str = "Please answer \"male\" or \"female\".";
    /// Hint for an unrecognized goal
    pub const HINT_GOAL: &str =
        "Please answer \"weight loss\", \"maintain weight\" or \"muscle gain\".";
    /// Reply when no recipe fits the profile
    pub const NO_RECIPES: &str =
        "No recipes in the catalog match your dietary constraints, so no meals were selected.";
}

/// Service identification used in logs
pub mod service_names {
    /// Engine service name
    pub const FITPLAN_ENGINE: &str = "fitplan-engine";
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}
