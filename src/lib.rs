// ABOUTME: Main library entry point for the FitPlan plan generation engine
// ABOUTME: Conversational intake, nutrition targets, meal selection, and training templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # FitPlan Engine
//!
//! Turns a user's body metrics and goal into a daily nutrition plan and a
//! weekly training template. Input arrives either as a complete profile or
//! through a turn-by-turn chat intake that asks for weight, height, gender,
//! and goal.
//!
//! ## Architecture
//!
//! - **Intake**: free-text normalization into typed values, with defaults
//! - **Conversation**: per-session state machine over an injected store
//! - **Reference**: goals, activity levels, diet types, recipes, templates
//! - **Intelligence**: calorie and macro targets, meal selection, templates
//! - **Services**: assembly of nutrition and training into one result
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan_engine::engine::PlanEngine;
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = PlanEngine::with_builtin_catalog()?;
//!     for message in ["70", "175", "male", "maintain"] {
//!         let reply = engine.advance("session-1", message);
//!         println!("{}", reply.message());
//!     }
//!     Ok(())
//! }
//! ```

/// Engine configuration: nutrition policy, defaults, conversation settings
pub mod config;

/// Conversational intake state machine and session storage
pub mod conversation;

/// `PlanEngine` facade
pub mod engine;

/// Unified error types
pub mod errors;

/// Raw value normalization and profile defaults
pub mod intake;

/// Calorie, macro, meal, and training computations
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Reference catalog and snapshot provider
pub mod reference;

/// Plan assembly
pub mod services;

pub use engine::PlanEngine;
pub use fitplan_core::models;
