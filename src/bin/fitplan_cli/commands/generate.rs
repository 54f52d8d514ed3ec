// ABOUTME: Direct plan generation for fitplan-cli
// ABOUTME: Normalizes flag values into a profile and prints the assembled PlanBundle as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use clap::Args;
use fitplan_engine::intake::RawProfile;
use fitplan_engine::PlanEngine;
use std::io::{self, Write};

/// Profile flags; values go through the same normalizer as chat answers
#[derive(Args)]
pub struct GenerateArgs {
    /// Weight in kilograms
    #[arg(long)]
    weight: String,

    /// Height in centimeters
    #[arg(long)]
    height: String,

    /// male or female
    #[arg(long)]
    gender: String,

    /// weight_loss, maintain or muscle_gain
    #[arg(long)]
    goal: String,

    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// Activity level token, e.g. moderately_active
    #[arg(long)]
    activity: Option<String>,

    /// Diet type token, e.g. vegetarian
    #[arg(long)]
    diet: Option<String>,

    /// Meat preference token, e.g. poultry
    #[arg(long)]
    meat: Option<String>,

    /// Exclude dairy recipes
    #[arg(long)]
    no_dairy: bool,

    /// Comma-separated allergy list
    #[arg(long)]
    allergies: Option<String>,

    /// weights or bodyweight
    #[arg(long)]
    training: Option<String>,
}

impl From<GenerateArgs> for RawProfile {
    fn from(args: GenerateArgs) -> Self {
        Self {
            weight: Some(args.weight),
            height: Some(args.height),
            gender: Some(args.gender),
            goal: Some(args.goal),
            age: args.age,
            activity_level: args.activity,
            diet_type: args.diet,
            meat_preference: args.meat,
            dairy: args.no_dairy.then(|| "no".to_owned()),
            allergies: args.allergies,
            training_type: args.training,
        }
    }
}

/// Generate and print both plans
pub fn run(engine: &PlanEngine, args: GenerateArgs) -> Result<()> {
    let profile = engine
        .normalize_profile(&RawProfile::from(args))
        .context("Invalid profile")?;
    let bundle = engine.generate_plans(&profile);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&bundle)?)?;
    Ok(())
}
