// ABOUTME: Reference-table models the engine reads from the catalog
// ABOUTME: GoalProfile, ActivityLevelProfile, and DietTypeProfile rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::tokens::{ActivityLevel, DietType, Goal};
use serde::{Deserialize, Serialize};

/// Goal reference row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Goal this row describes
    pub goal: Goal,
    /// Display name shown to the user (e.g. "Weight loss")
    pub name: String,
    /// Multiplier applied to TDEE to obtain the calorie target
    pub calorie_modifier: f64,
}

/// Activity level reference row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLevelProfile {
    /// Level this row describes
    pub level: ActivityLevel,
    /// TDEE multiplier applied to BMR
    pub multiplier: f64,
}

/// Diet type reference row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietTypeProfile {
    /// Diet type this row describes
    pub diet_type: DietType,
    /// A recipe must carry at least one of these tags; empty means unrestricted
    #[serde(default)]
    pub accepted_tags: Vec<String>,
}
