// ABOUTME: Closed enumerations for profile fields with canonical and localized tokens
// ABOUTME: Gender, Goal, ActivityLevel, DietType, MeatPreference, TrainingPreference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Every user-facing enumeration exposes its canonical token (the
//! `SCREAMING_SNAKE_CASE` name used in reference data and serialized output)
//! and a list of display names in English and Russian. The intake normalizer
//! builds its lookup tables from these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed enumeration with a canonical token and localized display names
pub trait CanonicalEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Human-readable name of the field this enum fills, used in errors
    const KIND: &'static str;

    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// Canonical token, e.g. `WEIGHT_LOSS`
    fn canonical_name(self) -> &'static str;

    /// Localized display names, first entry is the English label
    fn display_names(self) -> &'static [&'static str];

    /// Primary English label
    fn label(self) -> &'static str {
        self.display_names()
            .first()
            .copied()
            .unwrap_or_else(|| self.canonical_name())
    }

    /// Canonical tokens of every variant
    #[must_use]
    fn allowed_values() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|v| v.canonical_name().to_owned())
            .collect()
    }
}

/// Biological gender used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

impl CanonicalEnum for Gender {
    const KIND: &'static str = "gender";
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }

    fn display_names(self) -> &'static [&'static str] {
        match self {
            Self::Male => &["Male", "Man", "Мужской", "Мужчина"],
            Self::Female => &["Female", "Woman", "Женский", "Женщина"],
        }
    }
}

/// Training goal driving the calorie modifier and macro policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    MuscleGain,
}

impl CanonicalEnum for Goal {
    const KIND: &'static str = "goal";
    const ALL: &'static [Self] = &[Self::WeightLoss, Self::Maintain, Self::MuscleGain];

    fn canonical_name(self) -> &'static str {
        match self {
            Self::WeightLoss => "WEIGHT_LOSS",
            Self::Maintain => "MAINTAIN",
            Self::MuscleGain => "MUSCLE_GAIN",
        }
    }

    fn display_names(self) -> &'static [&'static str] {
        match self {
            Self::WeightLoss => &["Weight loss", "Lose weight", "Похудение", "Снижение веса"],
            Self::Maintain => &[
                "Maintain weight",
                "Maintenance",
                "Поддержание веса",
                "Поддержание",
            ],
            Self::MuscleGain => &[
                "Muscle gain",
                "Gain muscle",
                "Набор мышечной массы",
                "Набор массы",
            ],
        }
    }
}

/// Activity level; the numeric multiplier lives in the reference catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    LightlyActive,
    /// Exercise 3-5 days/week
    ModeratelyActive,
    /// Exercise 6-7 days/week
    VeryActive,
    /// Hard training twice a day
    ExtraActive,
}

impl CanonicalEnum for ActivityLevel {
    const KIND: &'static str = "activity level";
    const ALL: &'static [Self] = &[
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Sedentary => "SEDENTARY",
            Self::LightlyActive => "LIGHTLY_ACTIVE",
            Self::ModeratelyActive => "MODERATELY_ACTIVE",
            Self::VeryActive => "VERY_ACTIVE",
            Self::ExtraActive => "EXTRA_ACTIVE",
        }
    }

    fn display_names(self) -> &'static [&'static str] {
        match self {
            Self::Sedentary => &["Sedentary", "Сидячий образ жизни", "Минимальная"],
            Self::LightlyActive => &["Lightly active", "Light", "Низкая", "Лёгкая активность"],
            Self::ModeratelyActive => &["Moderately active", "Moderate", "Средняя", "Умеренная"],
            Self::VeryActive => &["Very active", "Высокая", "Высокая активность"],
            Self::ExtraActive => &["Extra active", "Athlete", "Очень высокая"],
        }
    }
}

/// Named dietary regime used to filter recipes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietType {
    /// No regime restriction
    Standard,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Very low carbohydrate
    Keto,
    /// No gluten-containing grains
    GlutenFree,
}

impl CanonicalEnum for DietType {
    const KIND: &'static str = "diet type";
    const ALL: &'static [Self] = &[
        Self::Standard,
        Self::Vegetarian,
        Self::Vegan,
        Self::Keto,
        Self::GlutenFree,
    ];

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Vegetarian => "VEGETARIAN",
            Self::Vegan => "VEGAN",
            Self::Keto => "KETO",
            Self::GlutenFree => "GLUTEN_FREE",
        }
    }

    fn display_names(self) -> &'static [&'static str] {
        match self {
            Self::Standard => &["Standard", "No restrictions", "Обычная", "Без ограничений"],
            Self::Vegetarian => &["Vegetarian", "Вегетарианская"],
            Self::Vegan => &["Vegan", "Веганская"],
            Self::Keto => &["Keto", "Кето"],
            Self::GlutenFree => &["Gluten free", "Без глютена"],
        }
    }
}

/// Animal-protein category the user accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeatPreference {
    /// Every animal protein is acceptable
    Any,
    /// Chicken, turkey and other birds only
    Poultry,
    /// Fish and seafood only
    Fish,
    /// Beef, pork, lamb only
    RedMeat,
    /// No animal protein at all
    None,
}

impl MeatPreference {
    /// Recipe tag marking the animal protein this preference accepts
    ///
    /// `Any` and `None` have no single tag: the former accepts every meat tag,
    /// the latter accepts none.
    #[must_use]
    pub const fn accepted_tag(self) -> Option<&'static str> {
        match self {
            Self::Poultry => Some("poultry"),
            Self::Fish => Some("fish"),
            Self::RedMeat => Some("red_meat"),
            Self::Any | Self::None => None,
        }
    }
}

impl CanonicalEnum for MeatPreference {
    const KIND: &'static str = "meat preference";
    const ALL: &'static [Self] = &[
        Self::Any,
        Self::Poultry,
        Self::Fish,
        Self::RedMeat,
        Self::None,
    ];

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Poultry => "POULTRY",
            Self::Fish => "FISH",
            Self::RedMeat => "RED_MEAT",
            Self::None => "NONE",
        }
    }

    fn display_names(self) -> &'static [&'static str] {
        match self {
            Self::Any => &["Any", "All", "Любое", "Всё"],
            Self::Poultry => &["Poultry", "Chicken", "Птица", "Курица"],
            Self::Fish => &["Fish", "Seafood", "Рыба", "Морепродукты"],
            Self::RedMeat => &["Red meat", "Beef", "Красное мясо", "Говядина"],
            Self::None => &["No meat", "Без мяса", "Не ем мясо"],
        }
    }
}

/// Equipment mode for the training plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingPreference {
    /// Free weights and machines
    Weights,
    /// Bodyweight exercises only
    Bodyweight,
    /// Cardio sessions
    Cardio,
}

impl TrainingPreference {
    /// Whether templates for this preference require weights
    #[must_use]
    pub const fn with_weights(self) -> bool {
        matches!(self, Self::Weights)
    }
}

impl CanonicalEnum for TrainingPreference {
    const KIND: &'static str = "training type";
    const ALL: &'static [Self] = &[Self::Weights, Self::Bodyweight, Self::Cardio];

    fn canonical_name(self) -> &'static str {
        match self {
            Self::Weights => "WEIGHTS",
            Self::Bodyweight => "BODYWEIGHT",
            Self::Cardio => "CARDIO",
        }
    }

    fn display_names(self) -> &'static [&'static str] {
        match self {
            Self::Weights => &["Weights", "Gym", "С отягощениями", "Зал"],
            Self::Bodyweight => &["Bodyweight", "No equipment", "Свой вес", "Без оборудования"],
            Self::Cardio => &["Cardio", "Кардио"],
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl fmt::Display for MeatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl fmt::Display for TrainingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_canonical_tokens() {
        for goal in Goal::ALL {
            let json = serde_json::to_string(goal).unwrap();
            assert_eq!(json, format!("\"{}\"", goal.canonical_name()));
        }
        let parsed: MeatPreference = serde_json::from_str("\"RED_MEAT\"").unwrap();
        assert_eq!(parsed, MeatPreference::RedMeat);
    }

    #[test]
    fn test_every_variant_has_a_label() {
        assert!(Gender::ALL.iter().all(|g| !g.display_names().is_empty()));
        assert!(DietType::ALL.iter().all(|d| !d.display_names().is_empty()));
        assert_eq!(Goal::MuscleGain.label(), "Muscle gain");
    }
}
