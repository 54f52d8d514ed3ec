// ABOUTME: Conversation states and the per-session record driven by the intake dialogue
// ABOUTME: ASK_WEIGHT -> ASK_HEIGHT -> ASK_GENDER -> ASK_GOAL -> DONE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intake::TypedValue;
use chrono::{DateTime, Utc};
use fitplan_core::constants::prompts;
use fitplan_core::models::{FieldKind, PartialProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dialogue position; each state asks for exactly one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationState {
    /// Waiting for weight
    #[default]
    AskWeight,
    /// Waiting for height
    AskHeight,
    /// Waiting for gender
    AskGender,
    /// Waiting for goal
    AskGoal,
    /// Plan computed; only a restart leaves this state
    Done,
}

impl ConversationState {
    /// Field this state collects, `None` in `Done`
    #[must_use]
    pub const fn field(self) -> Option<FieldKind> {
        match self {
            Self::AskWeight => Some(FieldKind::Weight),
            Self::AskHeight => Some(FieldKind::Height),
            Self::AskGender => Some(FieldKind::Gender),
            Self::AskGoal => Some(FieldKind::Goal),
            Self::Done => None,
        }
    }

    /// State that asks for a field, `None` for fields the dialogue skips
    #[must_use]
    pub const fn asking_for(field: FieldKind) -> Option<Self> {
        match field {
            FieldKind::Weight => Some(Self::AskWeight),
            FieldKind::Height => Some(Self::AskHeight),
            FieldKind::Gender => Some(Self::AskGender),
            FieldKind::Goal => Some(Self::AskGoal),
            _ => None,
        }
    }

    /// State after a valid answer
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::AskWeight => Self::AskHeight,
            Self::AskHeight => Self::AskGender,
            Self::AskGender => Self::AskGoal,
            Self::AskGoal | Self::Done => Self::Done,
        }
    }

    /// Question asked in this state
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::AskWeight => prompts::ASK_WEIGHT,
            Self::AskHeight => prompts::ASK_HEIGHT,
            Self::AskGender => prompts::ASK_GENDER,
            Self::AskGoal => prompts::ASK_GOAL,
            Self::Done => prompts::ALREADY_DONE,
        }
    }

    /// Whether the dialogue is finished
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Canonical state name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AskWeight => "ASK_WEIGHT",
            Self::AskHeight => "ASK_HEIGHT",
            Self::AskGender => "ASK_GENDER",
            Self::AskGoal => "ASK_GOAL",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user's intake dialogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    /// Caller-supplied opaque key
    pub session_id: String,
    /// Current position
    pub state: ConversationState,
    /// Answers collected so far
    pub profile: PartialProfile,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last accepted answer or restart
    pub updated_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Fresh session at `ASK_WEIGHT`
    #[must_use]
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            state: ConversationState::AskWeight,
            profile: PartialProfile::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Back to `ASK_WEIGHT` with every answer cleared
    pub fn reset(&mut self) {
        self.state = ConversationState::AskWeight;
        self.profile = PartialProfile::default();
        self.updated_at = Utc::now();
    }

    /// Store an accepted answer and advance
    ///
    /// Values for fields the dialogue does not collect are ignored.
    pub fn accept(&mut self, value: TypedValue) {
        match value {
            TypedValue::Weight(w) => self.profile.weight_kg = Some(w),
            TypedValue::Height(h) => self.profile.height_cm = Some(h),
            TypedValue::Gender(g) => self.profile.gender = Some(g),
            TypedValue::Goal(g) => self.profile.goal = Some(g),
            _ => return,
        }
        self.state = self.state.next();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::models::Gender;

    #[test]
    fn test_state_order() {
        let mut state = ConversationState::default();
        let mut fields = Vec::new();
        while let Some(field) = state.field() {
            fields.push(field);
            state = state.next();
        }
        assert_eq!(
            fields,
            vec![
                FieldKind::Weight,
                FieldKind::Height,
                FieldKind::Gender,
                FieldKind::Goal
            ]
        );
        assert!(state.is_terminal());
        assert_eq!(state.next(), ConversationState::Done);
    }

    #[test]
    fn test_accept_ignores_uncollected_fields() {
        let mut session = ConversationSession::new("s");
        session.accept(TypedValue::Dairy(false));
        assert_eq!(session.state, ConversationState::AskWeight);

        session.accept(TypedValue::Weight(70.0));
        session.accept(TypedValue::Height(175.0));
        session.accept(TypedValue::Gender(Gender::Male));
        assert_eq!(session.state, ConversationState::AskGoal);

        session.reset();
        assert_eq!(session.state, ConversationState::AskWeight);
        assert_eq!(session.profile, PartialProfile::default());
    }
}
