// ABOUTME: Plan assembly pairing the nutrition plan and training template into one response
// ABOUTME: Partial results are kept; each failed component is reported as a PlanIssue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::errors::{AppError, ErrorCode, PlanError};
use fitplan_core::models::{
    GeneratedNutritionPlan, GeneratedTrainingPlan, NutritionTargets, ProfileSnapshot,
    TrainingPlanTemplate,
};
use serde::{Deserialize, Serialize};

/// Which half of the bundle an issue belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanComponent {
    /// Nutrition plan
    Nutrition,
    /// Training plan
    Training,
}

/// A component that could not be produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanIssue {
    /// Failed component
    pub component: PlanComponent,
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details from the underlying error
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl PlanIssue {
    fn from_error(component: PlanComponent, error: PlanError) -> Self {
        let error = AppError::from(error);
        Self {
            component,
            code: error.code,
            message: error.message,
            details: error.context.details,
        }
    }
}

/// Combined response for one generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanBundle {
    /// Nutrition plan, absent if generation failed
    pub nutrition: Option<GeneratedNutritionPlan>,
    /// Training plan, absent if no template matched
    pub training: Option<GeneratedTrainingPlan>,
    /// Energy targets; present even when no recipe matched
    pub targets: Option<NutritionTargets>,
    /// Failures for the absent components
    pub issues: Vec<PlanIssue>,
}

impl PlanBundle {
    /// Whether both components were produced
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.nutrition.is_some() && self.training.is_some()
    }

    /// Issue reported for a component, if any
    #[must_use]
    pub fn issue(&self, component: PlanComponent) -> Option<&PlanIssue> {
        self.issues.iter().find(|i| i.component == component)
    }
}

/// Pair both generator results, freezing the profile into the training plan
#[must_use]
pub fn assemble(
    profile: ProfileSnapshot,
    nutrition: Result<GeneratedNutritionPlan, PlanError>,
    training: Result<TrainingPlanTemplate, PlanError>,
) -> PlanBundle {
    let mut issues = Vec::new();

    let (nutrition, targets) = match nutrition {
        Ok(plan) => {
            let targets = plan.targets;
            (Some(plan), Some(targets))
        }
        Err(error) => {
            let targets = match &error {
                PlanError::NoCompatibleRecipes { targets } => Some(*targets),
                _ => None,
            };
            issues.push(PlanIssue::from_error(PlanComponent::Nutrition, error));
            (None, targets)
        }
    };

    let training = match training {
        Ok(template) => Some(GeneratedTrainingPlan::from_template(&template, profile)),
        Err(error) => {
            issues.push(PlanIssue::from_error(PlanComponent::Training, error));
            None
        }
    };

    PlanBundle {
        nutrition,
        training,
        targets,
        issues,
    }
}
