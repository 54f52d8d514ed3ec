// ABOUTME: Intake state machine advancing one field per turn over an injected session store
// ABOUTME: Handles restart in every state, re-prompts with hints, and hands back the finished profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::state::{ConversationSession, ConversationState};
use super::store::{InMemorySessionStore, SessionStore};
use crate::config::ConversationConfig;
use crate::intake::{normalize, ProfileDefaults};
use fitplan_core::constants::prompts;
use fitplan_core::errors::{ValidationError, ValidationReason};
use fitplan_core::models::{FieldKind, GeneratedNutritionPlan, GeneratedTrainingPlan, UserProfile};
use serde::Serialize;
use tracing::debug;

/// Result of one dialogue turn, before any plan generation
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Answer accepted; the session now waits in `state`
    Asked {
        /// New state
        state: ConversationState,
    },
    /// Answer rejected; the session stays in `state`
    Rejected {
        /// Unchanged state
        state: ConversationState,
        /// Why the answer was rejected
        error: ValidationError,
    },
    /// Restart command; the session is back at `ASK_WEIGHT`
    Restarted,
    /// Message received in `DONE`; nothing changed
    AlreadyDone,
    /// Last answer accepted; the session is `DONE`
    Completed {
        /// Collected answers with defaults applied
        profile: UserProfile,
    },
}

/// Reply returned to the caller for one turn
#[derive(Debug, Clone, Serialize)]
pub struct TurnReply {
    /// Text to show the user
    pub prompt: String,
    /// Session state after the turn
    pub state: ConversationState,
    /// Correction hint when the answer was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Nutrition plan, only on the transition into `DONE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_plan: Option<GeneratedNutritionPlan>,
    /// Training plan, only on the transition into `DONE` when a template matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_plan: Option<GeneratedTrainingPlan>,
}

impl TurnReply {
    /// Reply carrying only a prompt
    #[must_use]
    pub fn prompt(state: ConversationState, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            state,
            hint: None,
            generated_plan: None,
            training_plan: None,
        }
    }

    /// Hint followed by the prompt, as shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        self.hint.as_ref().map_or_else(
            || self.prompt.clone(),
            |hint| format!("{hint} {}", self.prompt),
        )
    }
}

/// Field-specific correction hint for a rejected answer
#[must_use]
pub fn hint_for(error: &ValidationError) -> String {
    match (&error.reason, error.field) {
        (ValidationReason::OutOfRange { min, max, .. }, _) => {
            format!("Please enter a value between {min} and {max}.")
        }
        (_, FieldKind::Gender) => prompts::HINT_GENDER.to_owned(),
        (_, FieldKind::Goal) => prompts::HINT_GOAL.to_owned(),
        (ValidationReason::UnknownEnumValue { allowed_values, .. }, _) => {
            format!("Please answer one of: {}.", allowed_values.join(", "))
        }
        (ValidationReason::NotANumber { .. } | ValidationReason::Missing, _) => {
            prompts::HINT_NOT_A_NUMBER.to_owned()
        }
    }
}

/// Conversational intake over a session store
pub struct IntakeConversation<S: SessionStore = InMemorySessionStore> {
    store: S,
    config: ConversationConfig,
    defaults: ProfileDefaults,
}

impl<S: SessionStore> IntakeConversation<S> {
    /// Create a state machine over `store`
    #[must_use]
    pub const fn new(store: S, config: ConversationConfig, defaults: ProfileDefaults) -> Self {
        Self {
            store,
            config,
            defaults,
        }
    }

    /// Underlying session store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Process one message; the read-compute-write runs atomically per session
    #[must_use]
    pub fn advance(&self, session_id: &str, message: &str) -> TurnOutcome {
        let outcome = self
            .store
            .update(session_id, |session| self.step(session, message));
        debug!(session_id, outcome = outcome_name(&outcome), "Conversation turn");
        outcome
    }

    /// Current state; unknown sessions are at `ASK_WEIGHT`
    #[must_use]
    pub fn state_of(&self, session_id: &str) -> ConversationState {
        self.store
            .get(session_id)
            .map_or(ConversationState::AskWeight, |s| s.state)
    }

    /// Forget a session; the next message starts over
    pub fn reset(&self, session_id: &str) {
        if self.store.delete(session_id) {
            debug!(session_id, "Session reset");
        }
    }

    fn step(&self, session: &mut ConversationSession, message: &str) -> TurnOutcome {
        if self.config.is_restart(message) {
            session.reset();
            return TurnOutcome::Restarted;
        }

        let Some(field) = session.state.field() else {
            return TurnOutcome::AlreadyDone;
        };

        match normalize(field, message) {
            Err(error) => TurnOutcome::Rejected {
                state: session.state,
                error,
            },
            Ok(value) => {
                session.accept(value);
                if !session.state.is_terminal() {
                    return TurnOutcome::Asked {
                        state: session.state,
                    };
                }
                match self.defaults.complete(&session.profile) {
                    Ok(profile) => TurnOutcome::Completed { profile },
                    Err(error) => {
                        // Unreachable through the state order; recover by asking again
                        session.state = ConversationState::asking_for(error.field)
                            .unwrap_or(ConversationState::AskWeight);
                        TurnOutcome::Rejected {
                            state: session.state,
                            error,
                        }
                    }
                }
            }
        }
    }
}

const fn outcome_name(outcome: &TurnOutcome) -> &'static str {
    match outcome {
        TurnOutcome::Asked { .. } => "asked",
        TurnOutcome::Rejected { .. } => "rejected",
        TurnOutcome::Restarted => "restarted",
        TurnOutcome::AlreadyDone => "already_done",
        TurnOutcome::Completed { .. } => "completed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_text() {
        let error = ValidationError::not_a_number(FieldKind::Weight, "seventy");
        assert_eq!(hint_for(&error), prompts::HINT_NOT_A_NUMBER);

        let error = ValidationError::out_of_range(FieldKind::Height, 90.0, 100.0, 250.0);
        assert_eq!(hint_for(&error), "Please enter a value between 100 and 250.");

        let error = ValidationError::unknown_value(FieldKind::Goal, "fly", vec![]);
        assert_eq!(hint_for(&error), prompts::HINT_GOAL);
    }

    #[test]
    fn test_message_joins_hint_and_prompt() {
        let mut reply = TurnReply::prompt(ConversationState::AskWeight, prompts::ASK_WEIGHT);
        assert_eq!(reply.message(), prompts::ASK_WEIGHT);
        reply.hint = Some(prompts::HINT_NOT_A_NUMBER.to_owned());
        assert_eq!(
            reply.message(),
            format!("{} {}", prompts::HINT_NOT_A_NUMBER, prompts::ASK_WEIGHT)
        );
    }
}
