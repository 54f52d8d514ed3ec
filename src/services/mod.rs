// ABOUTME: Domain service layer composing generator outputs for callers
// ABOUTME: Protocol-agnostic; reusable by the CLI and any excluded HTTP collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Nutrition and training plan assembly with partial results
pub mod plan_assembly;

pub use plan_assembly::{assemble, PlanBundle, PlanComponent, PlanIssue};
