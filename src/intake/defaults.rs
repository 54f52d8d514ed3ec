// ABOUTME: Explicit defaulting policy for profile fields the intake dialogue does not collect
// ABOUTME: Completes a PartialProfile into a UserProfile before generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ConfigError;
use fitplan_core::constants::intake::{MAX_AGE, MIN_AGE};
use fitplan_core::errors::ValidationError;
use fitplan_core::models::{
    ActivityLevel, DietType, FieldKind, MeatPreference, PartialProfile, TrainingPreference,
    UserProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Values assumed for fields the conversational flow never asks about
///
/// Applied as a visible step before generation, so a chat-generated plan and
/// a direct `/generate` plan differ only in what the user actually supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// Age used by the BMR formula when the profile has none
    pub age: u32,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Diet type
    pub diet_type: DietType,
    /// Meat preference
    pub meat_preference: MeatPreference,
    /// Whether dairy is acceptable
    pub consumes_dairy: bool,
    /// Allergy entries
    pub allergies: BTreeSet<String>,
    /// Training equipment mode
    pub training_preference: TrainingPreference,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            age: 30,
            activity_level: ActivityLevel::ModeratelyActive,
            diet_type: DietType::Standard,
            meat_preference: MeatPreference::Any,
            consumes_dairy: true,
            allergies: BTreeSet::new(),
            training_preference: TrainingPreference::Weights,
        }
    }
}

impl ProfileDefaults {
    /// Fill every uncollected field of a finished intake profile
    ///
    /// The age stays unset on the returned profile; generation substitutes
    /// [`ProfileDefaults::age`] and the training snapshot records that value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::missing` for the first collected field that is still empty
    pub fn complete(&self, draft: &PartialProfile) -> Result<UserProfile, ValidationError> {
        let (Some(weight_kg), Some(height_cm), Some(gender), Some(goal)) =
            (draft.weight_kg, draft.height_cm, draft.gender, draft.goal)
        else {
            return Err(ValidationError::missing(
                draft.first_missing().unwrap_or(FieldKind::Weight),
            ));
        };

        Ok(UserProfile {
            weight_kg,
            height_cm,
            age: None,
            gender,
            goal,
            activity_level: self.activity_level,
            diet_type: self.diet_type,
            meat_preference: self.meat_preference,
            consumes_dairy: self.consumes_dairy,
            allergies: self.allergies.clone(),
            training_preference: self.training_preference,
        })
    }

    /// Age to feed the BMR formula for a profile
    #[must_use]
    pub fn age_for(&self, profile: &UserProfile) -> u32 {
        profile.age.unwrap_or(self.age)
    }

    /// Validate the defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the default age is outside the intake bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "defaults.age must be within {MIN_AGE}..={MAX_AGE}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::errors::ValidationReason;
    use fitplan_core::models::{Gender, Goal};

    #[test]
    fn test_complete_applies_defaults() {
        let draft = PartialProfile {
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            gender: Some(Gender::Male),
            goal: Some(Goal::Maintain),
        };
        let defaults = ProfileDefaults::default();
        let profile = defaults.complete(&draft).unwrap();

        assert_eq!(profile.activity_level, ActivityLevel::ModeratelyActive);
        assert_eq!(profile.diet_type, DietType::Standard);
        assert!(profile.consumes_dairy);
        assert!(profile.allergies.is_empty());
        assert_eq!(profile.age, None);
        assert_eq!(defaults.age_for(&profile), 30);
    }

    #[test]
    fn test_complete_reports_first_missing_field() {
        let draft = PartialProfile {
            weight_kg: Some(70.0),
            ..PartialProfile::default()
        };
        let error = ProfileDefaults::default().complete(&draft).unwrap_err();
        assert_eq!(error.field, FieldKind::Height);
        assert_eq!(error.reason, ValidationReason::Missing);
    }
}
