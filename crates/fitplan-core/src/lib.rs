// ABOUTME: Core types and constants for the FitPlan plan generation engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitPlan Core
//!
//! Foundation crate providing shared types and constants for the FitPlan
//! nutrition and training plan engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   plan-generation error taxonomy (`ValidationError`, `PlanError`)
//! - **models**: Profiles, recipes, reference profiles, training templates and
//!   generated plans
//! - **constants**: Intake bounds, conversation prompts and restart tokens

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profiles, recipes, templates, generated plans)
pub mod models;
