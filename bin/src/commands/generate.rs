//! Generate command implementation.
//!
//! Renders catalog patterns into one SVG file per pattern.

use crate::RenderArgs;
use crate::display::{load_catalog, load_config};
use anyhow::{Context, Result, bail};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use wickmark_lib::prelude::*;

/// Render every selected pattern to `<svg_dir>/<NAME>.svg`.
///
/// Returns the written paths in catalog order.
pub(crate) fn generate(svg_dir: &Path, args: &RenderArgs, quiet: bool) -> Result<Vec<PathBuf>> {
    let config = load_config(args.config.as_deref(), args.embedded)?;
    let catalog = load_catalog(args.catalog.as_deref())?;

    for name in &args.only {
        if catalog.get(name).is_none() {
            bail!("Unknown pattern: {name}. Use 'wickmark list' to see available patterns.");
        }
    }

    fs::create_dir_all(svg_dir)
        .with_context(|| format!("Failed to create {}", svg_dir.display()))?;

    let writer = SvgWriter::new(config);
    let mut written = Vec::new();

    for (name, definition) in catalog.all() {
        if !args.only.is_empty() && !args.only.iter().any(|o| o.eq_ignore_ascii_case(name)) {
            continue;
        }

        let path = svg_dir.join(format!("{name}.svg"));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        writer
            .write_definition(definition, BufWriter::new(file))
            .with_context(|| format!("Failed to render {name}"))?;

        info!(pattern = name, path = %path.display(), "wrote svg");
        written.push(path);
    }

    if !quiet {
        println!(
            "Wrote {} {} icons to {}",
            written.len(),
            writer.config().variant,
            svg_dir.display()
        );
    }

    Ok(written)
}
