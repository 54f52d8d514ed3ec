// ABOUTME: Training plan recommender matching goal and equipment mode to a catalog template
// ABOUTME: Exact (goal, with_weights) match, first in catalog order, no fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::reference::ReferenceCatalog;
use fitplan_core::errors::PlanError;
use fitplan_core::models::{Goal, TrainingPlanTemplate, UserProfile};
use tracing::debug;

/// Recommend the first template whose `(goal, with_weights)` matches exactly
///
/// # Errors
///
/// `PlanError::NotFound` when no template matches; there is no nearest-goal fallback
pub fn recommend_training_plan(
    catalog: &ReferenceCatalog,
    goal: Goal,
    with_weights: bool,
) -> Result<TrainingPlanTemplate, PlanError> {
    let template = catalog
        .find_template_by_goal_and_weights(goal, with_weights)
        .ok_or(PlanError::NotFound { goal, with_weights })?;
    debug!(template = %template.id, %goal, with_weights, "Matched training template");
    Ok(template.clone())
}

/// Recommend by free-text goal name
///
/// # Errors
///
/// `PlanError::UnknownEnumValue` for an unrecognized goal, otherwise as
/// [`recommend_training_plan`]
pub fn recommend_training_plan_by_name(
    catalog: &ReferenceCatalog,
    goal_name: &str,
    with_weights: bool,
) -> Result<TrainingPlanTemplate, PlanError> {
    let goal = catalog.resolve_goal(goal_name)?;
    recommend_training_plan(catalog, goal, with_weights)
}

/// Recommend from a profile's goal and training preference
///
/// # Errors
///
/// As [`recommend_training_plan`]
pub fn recommend_for_profile(
    catalog: &ReferenceCatalog,
    profile: &UserProfile,
) -> Result<TrainingPlanTemplate, PlanError> {
    recommend_training_plan(
        catalog,
        profile.goal,
        profile.training_preference.with_weights(),
    )
}
