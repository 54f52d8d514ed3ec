// ABOUTME: Bidirectional token tables for profile enums, built once per type
// ABOUTME: Matches canonical names first, then localized display names, case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::models::{
    ActivityLevel, CanonicalEnum, DietType, Gender, Goal, MeatPreference, TrainingPreference,
};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Lookup table from folded text to an enum variant
#[derive(Debug)]
pub struct TokenTable<T: CanonicalEnum> {
    canonical: HashMap<String, T>,
    display: HashMap<String, T>,
}

impl<T: CanonicalEnum> TokenTable<T> {
    /// Build the table from the enum's declared tokens
    #[must_use]
    pub fn build() -> Self {
        let mut canonical = HashMap::with_capacity(T::ALL.len());
        let mut display = HashMap::new();
        for variant in T::ALL {
            canonical.insert(fold_canonical(variant.canonical_name()), *variant);
            for name in variant.display_names() {
                // First declaration wins if two variants share a display name
                display.entry(fold_display(name)).or_insert(*variant);
            }
        }
        Self { canonical, display }
    }

    /// Resolve raw text: exact canonical token first, then display names
    #[must_use]
    pub fn lookup(&self, input: &str) -> Option<T> {
        self.canonical
            .get(&fold_canonical(input))
            .or_else(|| self.display.get(&fold_display(input)))
            .copied()
    }
}

/// `" Weight-Loss "` -> `"weight_loss"`
fn fold_canonical(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Lowercase with inner whitespace collapsed to single spaces
fn fold_display(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Enum with a process-wide token table
pub trait Tokenized: CanonicalEnum {
    /// Shared table for this enum
    fn table() -> &'static TokenTable<Self>;

    /// Resolve raw text to a variant
    #[must_use]
    fn lookup(input: &str) -> Option<Self> {
        Self::table().lookup(input)
    }
}

macro_rules! impl_tokenized {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Tokenized for $ty {
                fn table() -> &'static TokenTable<Self> {
                    static TABLE: OnceLock<TokenTable<$ty>> = OnceLock::new();
                    TABLE.get_or_init(TokenTable::build)
                }
            }
        )+
    };
}

impl_tokenized!(
    Gender,
    Goal,
    ActivityLevel,
    DietType,
    MeatPreference,
    TrainingPreference,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_and_display_lookup() {
        assert_eq!(Goal::lookup("weight_loss"), Some(Goal::WeightLoss));
        assert_eq!(Goal::lookup("WEIGHT-LOSS"), Some(Goal::WeightLoss));
        assert_eq!(Goal::lookup("  Muscle   gain "), Some(Goal::MuscleGain));
        assert_eq!(Goal::lookup("Похудение"), Some(Goal::WeightLoss));
        assert_eq!(Gender::lookup("женский"), Some(Gender::Female));
        assert_eq!(Gender::lookup("robot"), None);
    }

    #[test]
    fn test_multi_word_tokens() {
        assert_eq!(MeatPreference::lookup("none"), Some(MeatPreference::None));
        assert_eq!(MeatPreference::lookup("no meat"), Some(MeatPreference::None));
        assert_eq!(MeatPreference::lookup("red meat"), Some(MeatPreference::RedMeat));
        assert_eq!(DietType::lookup("gluten free"), Some(DietType::GlutenFree));
        assert_eq!(
            ActivityLevel::lookup("Moderately_Active"),
            Some(ActivityLevel::ModeratelyActive)
        );
        assert_eq!(TrainingPreference::lookup("Кардио"), Some(TrainingPreference::Cardio));
    }
}
