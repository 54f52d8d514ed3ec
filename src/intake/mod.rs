// ABOUTME: Intake module turning raw user answers into typed profile data
// ABOUTME: Token tables, field normalization, and the profile defaulting policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Profile defaulting policy applied before chat-triggered generation
pub mod defaults;
/// Raw value normalization and whole-profile validation
pub mod normalize;
/// Static canonical/display token tables
pub mod tokens;

pub use defaults::ProfileDefaults;
pub use normalize::{
    normalize, normalize_age, normalize_enum, normalize_height, normalize_profile,
    normalize_weight, validate_profile, RawProfile, TypedValue,
};
pub use tokens::{TokenTable, Tokenized};
