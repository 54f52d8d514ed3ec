// ABOUTME: Re-exports command modules for fitplan-cli
// ABOUTME: Provides the chat, generate, and catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod chat;
pub mod generate;
