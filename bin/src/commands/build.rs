//! Build command implementation.

use crate::commands::{generate, rasterize};
use crate::display::load_config;
use crate::{RenderArgs, ToolArgs};
use anyhow::Result;
use std::path::Path;

/// Generate the SVG icons into `svg_dir`, then convert them into `png_dir`.
pub(crate) fn build(
    svg_dir: &Path,
    png_dir: &Path,
    render: &RenderArgs,
    tools: &ToolArgs,
    quiet: bool,
) -> Result<()> {
    generate::generate(svg_dir, render, quiet)?;

    let config = load_config(render.config.as_deref(), render.embedded)?;
    rasterize::rasterize(svg_dir, png_dir, &config, tools, quiet)
}
