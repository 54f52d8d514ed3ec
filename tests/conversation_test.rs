// ABOUTME: Integration tests for the chat intake state machine driven through PlanEngine
// ABOUTME: Four-turn flow, re-prompts, restart from every state, DONE behavior, concurrent sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan_core::constants::prompts;
use fitplan_core::models::Goal;
use fitplan_engine::conversation::{ConversationState, SessionStore};
use std::sync::Arc;
use std::thread;

const FLOW: [&str; 4] = ["70", "175", "male", "maintain"];

#[test]
fn test_four_turn_flow_produces_plan() {
    let engine = common::test_engine();

    let reply = engine.advance("s1", FLOW[0]);
    assert_eq!(reply.state, ConversationState::AskHeight);
    assert_eq!(reply.prompt, prompts::ASK_HEIGHT);
    assert!(reply.generated_plan.is_none());

    let reply = engine.advance("s1", FLOW[1]);
    assert_eq!(reply.state, ConversationState::AskGender);
    let reply = engine.advance("s1", FLOW[2]);
    assert_eq!(reply.state, ConversationState::AskGoal);
    assert!(reply.generated_plan.is_none());

    let reply = engine.advance("s1", FLOW[3]);
    assert_eq!(reply.state, ConversationState::Done);
    let plan = reply.generated_plan.expect("plan on DONE");
    assert_eq!(plan.goal, Goal::Maintain);
    assert!((plan.targets.calories - 2556.0).abs() < f64::EPSILON);
    assert!(reply.prompt.contains("2556 kcal"));
    assert!(reply.prompt.contains("Scrambled eggs"));

    let training = reply.training_plan.expect("maintain-gym matches");
    assert_eq!(training.template_id, "maintain-gym");
    // Chat never asks for age; the snapshot keeps the default the targets used
    assert_eq!(training.profile.age, 30);
}

#[test]
fn test_invalid_weight_keeps_state_and_hints() {
    let engine = common::test_engine();

    let reply = engine.advance("s1", "seventy");
    assert_eq!(reply.state, ConversationState::AskWeight);
    assert_eq!(reply.prompt, prompts::ASK_WEIGHT);
    assert_eq!(reply.hint.as_deref(), Some(prompts::HINT_NOT_A_NUMBER));
    assert!(reply.message().starts_with(prompts::HINT_NOT_A_NUMBER));

    let reply = engine.advance("s1", "20");
    assert_eq!(reply.state, ConversationState::AskWeight);
    assert_eq!(
        reply.hint.as_deref(),
        Some("Please enter a value between 30 and 250.")
    );

    let reply = engine.advance("s1", "70");
    assert_eq!(reply.state, ConversationState::AskHeight);
    assert!(reply.hint.is_none());
}

#[test]
fn test_invalid_gender_and_goal_hints() {
    let engine = common::test_engine();
    let _ = engine.advance("s1", "70");
    let _ = engine.advance("s1", "175");

    let reply = engine.advance("s1", "robot");
    assert_eq!(reply.state, ConversationState::AskGender);
    assert_eq!(reply.hint.as_deref(), Some(prompts::HINT_GENDER));

    let _ = engine.advance("s1", "female");
    let reply = engine.advance("s1", "fly");
    assert_eq!(reply.state, ConversationState::AskGoal);
    assert_eq!(reply.hint.as_deref(), Some(prompts::HINT_GOAL));
}

#[test]
fn test_restart_from_every_state() {
    let engine = common::test_engine();

    for answered in 0..=FLOW.len() {
        let session = format!("restart-{answered}");
        for message in &FLOW[..answered] {
            let _ = engine.advance(&session, message);
        }

        let reply = engine.advance(&session, "Restart");
        assert_eq!(reply.state, ConversationState::AskWeight, "after {answered}");
        assert_eq!(
            reply.prompt,
            format!("{} {}", prompts::RESTARTED, prompts::ASK_WEIGHT)
        );
        assert!(reply.generated_plan.is_none());

        let stored = engine.sessions().get(&session).unwrap();
        assert_eq!(stored.profile, Default::default());
    }
}

#[test]
fn test_russian_restart_command() {
    let engine = common::test_engine();
    let _ = engine.advance("s1", "70");
    let reply = engine.advance("s1", "рестарт");
    assert_eq!(reply.state, ConversationState::AskWeight);
}

#[test]
fn test_done_ignores_messages_until_restart() {
    let engine = common::test_engine();
    for message in FLOW {
        let _ = engine.advance("s1", message);
    }

    let reply = engine.advance("s1", "80");
    assert_eq!(reply.state, ConversationState::Done);
    assert_eq!(reply.prompt, prompts::ALREADY_DONE);
    assert!(reply.generated_plan.is_none());
    assert!(reply.training_plan.is_none());

    let _ = engine.advance("s1", "restart");
    let reply = engine.advance("s1", "80");
    assert_eq!(reply.state, ConversationState::AskHeight);
}

#[test]
fn test_reset_session_starts_over() {
    let engine = common::test_engine();
    let _ = engine.advance("s1", "70");
    assert_eq!(engine.session_state("s1"), ConversationState::AskHeight);

    engine.reset_session("s1");
    assert_eq!(engine.session_state("s1"), ConversationState::AskWeight);
    assert!(engine.sessions().get("s1").is_none());
}

#[test]
fn test_no_compatible_recipes_shows_targets() {
    let mut catalog = common::test_catalog();
    catalog.recipes.clear();
    let engine = fitplan_engine::PlanEngine::with_catalog(
        catalog,
        fitplan_engine::config::PlanningConfig::default(),
    );
    for message in &FLOW[..3] {
        let _ = engine.advance("s1", message);
    }

    let reply = engine.advance("s1", "maintain");
    assert_eq!(reply.state, ConversationState::Done);
    assert!(reply.prompt.contains(prompts::NO_RECIPES));
    let plan = reply.generated_plan.expect("empty plan with targets");
    assert!(plan.recipes().is_empty());
    assert!((plan.targets.calories - 2556.0).abs() < f64::EPSILON);
}

#[test]
fn test_concurrent_sessions_are_isolated() {
    let engine = Arc::new(common::test_engine());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let session = format!("user-{i}");
                let goal = if i % 2 == 0 { "maintain" } else { "muscle_gain" };
                let mut last = None;
                for message in ["70", "175", "male", goal] {
                    last = Some(engine.advance(&session, message));
                }
                (i, last.unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, reply) = handle.join().unwrap();
        let plan = reply.generated_plan.unwrap();
        let expected = if i % 2 == 0 {
            Goal::Maintain
        } else {
            Goal::MuscleGain
        };
        assert_eq!(plan.goal, expected);
    }
    assert_eq!(engine.sessions().len(), 8);
}

#[test]
fn test_concurrent_turns_on_one_session_advance_once() {
    let engine = Arc::new(common::test_engine());

    // "70" is a valid weight but an out-of-range height, so only the first
    // turn to take the session lock may advance it
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.advance("shared", "70").state)
        })
        .collect();
    let states: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(states.iter().all(|s| *s == ConversationState::AskHeight));
    let stored = engine.sessions().get("shared").unwrap();
    assert_eq!(stored.state, ConversationState::AskHeight);
    assert_eq!(stored.profile.weight_kg, Some(70.0));
    assert_eq!(stored.profile.height_cm, None);
}
