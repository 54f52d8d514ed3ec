// ABOUTME: Conversational intake module: states, session storage, and the state machine
// ABOUTME: Collects weight, height, gender, and goal one turn at a time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Conversational Intake
//!
//! Sessions are keyed by an opaque id supplied by the caller. An unknown id
//! is a brand-new session at `ASK_WEIGHT`. Invalid answers never advance the
//! state and never lose the session.

/// Intake state machine and turn replies
pub mod machine;
/// Conversation states and session records
pub mod state;
/// Session store interface and in-memory implementation
pub mod store;

pub use machine::{hint_for, IntakeConversation, TurnOutcome, TurnReply};
pub use state::{ConversationSession, ConversationState};
pub use store::{InMemorySessionStore, SessionStore};
