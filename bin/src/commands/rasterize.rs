//! Rasterize command implementation.
//!
//! Converts a tree of SVG files into a mirrored tree of compressed PNGs.

use crate::ToolArgs;
use crate::display::spinner;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use wickmark_lib::prelude::*;

/// Run the batch pipeline from `svg_dir` into `png_dir`.
pub(crate) fn rasterize(
    svg_dir: &Path,
    png_dir: &Path,
    config: &ChartConfig,
    tools: &ToolArgs,
    quiet: bool,
) -> Result<()> {
    let chain = ToolChain::new(config.width, config.height)
        .with_rasterizer(&tools.rasterizer)
        .with_compressor(&tools.compressor)
        .locate()
        .context("Required image tools are not installed")?;
    info!(
        rasterizer = %chain.rasterizer.display(),
        compressor = %chain.compressor.display(),
        "using tools"
    );

    let pb = spinner(quiet, &format!("{} -> {}", svg_dir.display(), png_dir.display()));
    let batch = BatchRasterizer::new(chain);

    let result = batch.run_with_progress(svg_dir, png_dir, |conversion| {
        pb.inc(1);
        pb.set_message(conversion.output.display().to_string());
    });
    pb.finish_and_clear();

    let report = result
        .with_context(|| format!("Failed to rasterize {}", svg_dir.display()))?;

    if !quiet {
        println!(
            "Converted {} files into {} ({} directories created, {} entries skipped)",
            report.conversions.len(),
            png_dir.display(),
            report.directories_created,
            report.skipped
        );
    }

    Ok(())
}
