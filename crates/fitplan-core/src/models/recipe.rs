// ABOUTME: Recipe catalog models and dietary constraint matching
// ABOUTME: MealType, Recipe, and RecipeConstraints used by the meal planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::tokens::MeatPreference;
use crate::constants::recipe_tags;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Meal category a recipe is intended for
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Categories a day plan covers, in serving order
    pub const DAY: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog recipe, immutable from the engine's point of view
///
/// Nutrition values are per serving. `tags` carries diet markers (`vegan`,
/// `keto`...), animal-protein markers (`poultry`, `fish`, `red_meat`) and the
/// `dairy` marker; `allergens` carries allergen markers (`nuts`, `gluten`...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Diet, meat and dairy markers (lowercase)
    #[serde(default, deserialize_with = "lowercase_markers")]
    pub tags: BTreeSet<String>,
    /// Allergen markers (lowercase)
    #[serde(default, deserialize_with = "lowercase_markers")]
    pub allergens: BTreeSet<String>,
    /// Intended meal category
    pub meal_type: MealType,
}

impl Recipe {
    /// Create a recipe with zeroed nutrition
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            calories: 0.0,
            protein_g: 0.0,
            fat_g: 0.0,
            carbs_g: 0.0,
            tags: BTreeSet::new(),
            allergens: BTreeSet::new(),
            meal_type,
        }
    }

    /// Set calories and macros
    #[must_use]
    pub const fn with_nutrition(
        mut self,
        calories: f64,
        protein_g: f64,
        fat_g: f64,
        carbs_g: f64,
    ) -> Self {
        self.calories = calories;
        self.protein_g = protein_g;
        self.fat_g = fat_g;
        self.carbs_g = carbs_g;
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.insert(tag.as_ref().trim().to_lowercase());
        self
    }

    /// Add an allergen marker
    #[must_use]
    pub fn with_allergen(mut self, allergen: impl AsRef<str>) -> Self {
        self.allergens.insert(allergen.as_ref().trim().to_lowercase());
        self
    }

    /// Whether the recipe carries a tag (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Animal-protein markers present on the recipe, in canonical spelling
    pub fn meat_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        recipe_tags::MEAT
            .iter()
            .copied()
            .filter(|marker| self.has_tag(marker))
    }
}

fn lowercase_markers<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let markers = BTreeSet::<String>::deserialize(deserializer)?;
    Ok(markers
        .into_iter()
        .map(|marker| marker.trim().to_lowercase())
        .filter(|marker| !marker.is_empty())
        .collect())
}

/// Dietary constraints a recipe must satisfy
///
/// Built from a profile plus the diet type's reference entry. A recipe is
/// admitted when every constraint holds; no constraint is ever relaxed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeConstraints {
    /// At least one of these tags must be present; empty means unrestricted
    pub accepted_diet_tags: Vec<String>,
    /// Accepted animal-protein category
    pub meat_preference: Option<MeatPreference>,
    /// Exclude recipes tagged as dairy
    pub exclude_dairy: bool,
    /// Free-text allergy entries (lowercase)
    pub allergies: BTreeSet<String>,
    /// Restrict to a single meal category
    pub meal_type: Option<MealType>,
}

impl RecipeConstraints {
    /// Narrow the constraints to one meal category
    #[must_use]
    pub fn for_meal(&self, meal_type: MealType) -> Self {
        Self {
            meal_type: Some(meal_type),
            ..self.clone()
        }
    }

    /// Whether a recipe satisfies every constraint
    #[must_use]
    pub fn admits(&self, recipe: &Recipe) -> bool {
        self.meal_type.is_none_or(|m| m == recipe.meal_type)
            && self.admits_diet(recipe)
            && self.admits_meat(recipe)
            && !(self.exclude_dairy && recipe.has_tag(recipe_tags::DAIRY))
            && !self.conflicts_with_allergies(recipe)
    }

    fn admits_diet(&self, recipe: &Recipe) -> bool {
        self.accepted_diet_tags.is_empty()
            || self.accepted_diet_tags.iter().any(|t| recipe.has_tag(t))
    }

    fn admits_meat(&self, recipe: &Recipe) -> bool {
        match self.meat_preference {
            None | Some(MeatPreference::Any) => true,
            Some(MeatPreference::None) => recipe.meat_tags().next().is_none(),
            Some(preference) => {
                let accepted = preference.accepted_tag();
                recipe.meat_tags().all(|t| Some(t) == accepted)
            }
        }
    }

    /// Allergen markers and allergy entries match when either contains the
    /// other, so "nut" excludes "nuts" and "tree nuts" excludes "nuts".
    fn conflicts_with_allergies(&self, recipe: &Recipe) -> bool {
        recipe.allergens.iter().any(|allergen| {
            let allergen = allergen.to_lowercase();
            self.allergies.iter().any(|allergy| {
                !allergy.is_empty() && (allergen.contains(allergy) || allergy.contains(&allergen))
            })
        })
    }
}
