//! Benchmark utilities for wickmark.

use std::fs;
use std::io;
use std::path::Path;

use wickmark_lib::{ChartConfig, Invocation, Tick, ToolOutput, ToolRunner};

/// Builds `count` in-range ticks alternating between up and down candles.
///
/// The chart is widened so every candle fits.
pub fn synthetic_sequence(count: usize) -> (ChartConfig, Vec<Tick>) {
    let mut config = ChartConfig::default();
    let step = config.body_width + config.gap;
    config.width = u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(step) + step;

    let ticks = (0..count)
        .map(|i| {
            let swing = (i % 5) as f64 * 4.0;
            if i % 2 == 0 {
                Tick::new(30.0 + swing, 60.0 + swing, 20.0 + swing, 70.0 + swing)
            } else {
                Tick::new(60.0 - swing, 40.0 - swing, 30.0 - swing, 80.0 - swing)
            }
        })
        .collect();
    (config, ticks)
}

/// Writes `files` SVG stubs into each of `dirs` nested directories below `root`.
pub fn populate_tree(root: &Path, dirs: usize, files: usize) -> io::Result<()> {
    let mut dir = root.to_path_buf();
    for d in 0..dirs {
        dir = dir.join(format!("level{d}"));
        fs::create_dir_all(&dir)?;
        for f in 0..files {
            fs::write(dir.join(format!("icon{f}.svg")), "<svg/>")?;
        }
    }
    Ok(())
}

/// Tool runner that touches the export target and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchRunner;

impl ToolRunner for TouchRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
        let target = invocation
            .args
            .windows(2)
            .find(|pair| pair[0] == "-e")
            .map(|pair| &pair[1]);
        if let Some(target) = target {
            fs::write(target, b"png")?;
        }
        Ok(ToolOutput::exited(0))
    }
}
