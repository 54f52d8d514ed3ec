// ABOUTME: Catalog inspection for fitplan-cli
// ABOUTME: Validates a reference catalog and prints its summary as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitplan_engine::reference::ReferenceCatalog;
use std::io::{self, Write};

/// Validate and summarize
pub fn run(catalog: &ReferenceCatalog) -> Result<()> {
    catalog.validate()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&catalog.summary())?)?;
    Ok(())
}
