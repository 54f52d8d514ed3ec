// ABOUTME: Interactive chat intake for fitplan-cli
// ABOUTME: Reads one answer per line and prints each reply until the session is DONE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitplan_engine::conversation::ConversationState;
use fitplan_engine::PlanEngine;
use std::io::{self, BufRead, Write};
use tracing::info;
use uuid::Uuid;

/// Run the intake dialogue on stdin/stdout
pub fn run(engine: &PlanEngine, session: Option<String>) -> Result<()> {
    let session_id = session.unwrap_or_else(|| Uuid::new_v4().to_string());
    info!(session_id, "Starting chat session");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", engine.session_state(&session_id).prompt())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let reply = engine.advance(&session_id, &line);
        writeln!(stdout, "{}", reply.message())?;

        if reply.generated_plan.is_some() || reply.training_plan.is_some() {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&reply)?)?;
        }
        if reply.state == ConversationState::Done {
            break;
        }
    }

    Ok(())
}
