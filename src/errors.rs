// ABOUTME: Re-exports the unified error types from fitplan-core for crate-local use
// ABOUTME: Keeps `fitplan_engine::errors::*` paths stable for collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! The error taxonomy is defined in `fitplan-core` so the storage and HTTP
//! collaborators can depend on it without pulling in the engine.

pub use fitplan_core::errors::*;
