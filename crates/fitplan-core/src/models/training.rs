// ABOUTME: Training plan template models and generated training plan records
// ABOUTME: TrainingPlanTemplate, TrainingSession, Exercise, GeneratedTrainingPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::ProfileSnapshot;
use super::tokens::Goal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single exercise inside a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets, if prescribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u8>,
    /// Repetitions per set, if prescribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u16>,
}

/// One training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Day label (e.g. "Monday" or "Day 1")
    pub day: String,
    /// Session duration in minutes
    pub duration_minutes: u16,
    /// Exercises in order
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Predefined weekly session structure tagged by goal and equipment mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlanTemplate {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Goal this template serves
    pub goal: Goal,
    /// Whether the template requires weights
    pub with_weights: bool,
    /// Weekly sessions
    #[serde(default)]
    pub sessions: Vec<TrainingSession>,
}

/// Training plan handed to the storage collaborator as a history record
///
/// Copies the template's session structure and freezes the profile so the
/// record stays valid after template or profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTrainingPlan {
    /// Record identifier
    pub id: Uuid,
    /// Template the plan was built from
    pub template_id: String,
    /// Template display name
    pub name: String,
    /// Goal served
    pub goal: Goal,
    /// Whether weights are required
    pub with_weights: bool,
    /// Weekly sessions
    pub sessions: Vec<TrainingSession>,
    /// Profile at generation time
    pub profile: ProfileSnapshot,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl GeneratedTrainingPlan {
    /// Build a plan record from a template and a profile snapshot
    #[must_use]
    pub fn from_template(template: &TrainingPlanTemplate, profile: ProfileSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            template_id: template.id.clone(),
            name: template.name.clone(),
            goal: template.goal,
            with_weights: template.with_weights,
            sessions: template.sessions.clone(),
            profile,
            generated_at: Utc::now(),
        }
    }

    /// Total weekly training time in minutes
    #[must_use]
    pub fn weekly_minutes(&self) -> u32 {
        self.sessions
            .iter()
            .map(|s| u32::from(s.duration_minutes))
            .sum()
    }
}
