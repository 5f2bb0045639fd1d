//! List command implementation.
//!
//! This module handles listing the patterns of a catalog.

use crate::display::load_catalog;
use anyhow::Result;
use std::path::Path;

/// List catalog patterns with their trend and candle count.
pub(crate) fn list_patterns(catalog: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    if catalog.is_empty() {
        println!("No patterns found.");
        return Ok(());
    }

    println!("{:<24} {:<10} {:<8}", "NAME", "TREND", "CANDLES");
    println!("{}", "-".repeat(44));

    for (name, definition) in catalog.all() {
        let trend = definition
            .trend()
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        println!("{:<24} {:<10} {:<8}", name, trend, definition.quads().len());
    }

    println!("\nTotal: {} patterns", catalog.len());
    Ok(())
}
