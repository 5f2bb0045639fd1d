//! Per-file rasterize and compress pipeline.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Invocation, RasterError, Result, ToolRunner};

/// One step of the per-file pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStep {
    /// SVG to PNG export.
    Rasterize,
    /// Lossy compression pass, numbered from 1.
    Compress {
        /// Pass number.
        pass: usize,
    },
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rasterize => write!(f, "rasterize"),
            Self::Compress { pass } => write!(f, "compress pass {pass}"),
        }
    }
}

/// Settings of one in-place lossy compression pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compression {
    /// Minimum acceptable quality, 0-100.
    pub min_quality: u8,
    /// Target quality, 0-100.
    pub max_quality: u8,
    /// Use ordered dithering.
    pub ordered: bool,
    /// Speed/quality trade-off, 1 (slowest) to 11; tool default when `None`.
    pub speed: Option<u8>,
}

impl Compression {
    /// Creates a pass with the given quality range and default tuning.
    #[must_use]
    pub const fn new(min_quality: u8, max_quality: u8) -> Self {
        Self {
            min_quality,
            max_quality,
            ordered: false,
            speed: None,
        }
    }

    /// Enables ordered dithering.
    #[must_use]
    pub const fn ordered(mut self) -> Self {
        self.ordered = true;
        self
    }

    /// Sets the speed.
    #[must_use]
    pub const fn with_speed(mut self, speed: u8) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Arguments compressing `path` in place.
    #[must_use]
    pub fn args(&self, path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-f".into(), "-v".into(), "--strip".into()];
        if self.ordered {
            args.push("--ordered".into());
        }
        if let Some(speed) = self.speed {
            args.push(format!("--speed={speed}").into());
        }
        args.push(format!("--quality={}-{}", self.min_quality, self.max_quality).into());
        args.push("-o".into());
        args.push(path.into());
        args.push(path.into());
        args
    }
}

/// External tools and settings used to convert one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolChain {
    /// Inkscape-compatible rasterizer.
    pub rasterizer: PathBuf,
    /// pngquant-compatible compressor.
    pub compressor: PathBuf,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Compression passes, run in order after rasterizing.
    pub passes: Vec<Compression>,
}

impl ToolChain {
    /// Creates a tool chain exporting at `width` x `height`.
    ///
    /// Uses `inkscape` and `pngquant` from `PATH` and three compression
    /// passes: quality 45-85, then twice ordered at speed 1 with quality
    /// 50-90.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let fine = Compression::new(50, 90).ordered().with_speed(1);
        Self {
            rasterizer: PathBuf::from("inkscape"),
            compressor: PathBuf::from("pngquant"),
            width,
            height,
            passes: vec![Compression::new(45, 85), fine, fine],
        }
    }

    /// Sets the rasterizer program.
    #[must_use]
    pub fn with_rasterizer(mut self, program: impl Into<PathBuf>) -> Self {
        self.rasterizer = program.into();
        self
    }

    /// Sets the compressor program.
    #[must_use]
    pub fn with_compressor(mut self, program: impl Into<PathBuf>) -> Self {
        self.compressor = program.into();
        self
    }

    /// Resolves both programs on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::ToolNotFound`] for the first missing program.
    pub fn locate(&self) -> Result<Self> {
        let find = |program: &PathBuf| {
            which::which(program).map_err(|source| RasterError::ToolNotFound {
                program: program.clone(),
                source,
            })
        };
        Ok(Self {
            rasterizer: find(&self.rasterizer)?,
            compressor: find(&self.compressor)?,
            ..self.clone()
        })
    }

    /// Returns the commands that convert `svg` into `png`, in order.
    #[must_use]
    pub fn invocations(&self, svg: &Path, png: &Path) -> Vec<(PipelineStep, Invocation)> {
        let rasterize = Invocation::new(
            &self.rasterizer,
            [
                OsString::from("-z"),
                OsString::from("-e"),
                png.into(),
                OsString::from("-w"),
                self.width.to_string().into(),
                OsString::from("-h"),
                self.height.to_string().into(),
                svg.into(),
            ],
        );

        std::iter::once((PipelineStep::Rasterize, rasterize))
            .chain(self.passes.iter().enumerate().map(|(i, pass)| {
                (
                    PipelineStep::Compress { pass: i + 1 },
                    Invocation::new(&self.compressor, pass.args(png)),
                )
            }))
            .collect()
    }

    /// Converts `svg` into `png`, stopping at the first failing step.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Spawn`] if a tool cannot be started and
    /// [`RasterError::ToolFailure`] if one exits unsuccessfully.
    pub fn convert<R: ToolRunner + ?Sized>(
        &self,
        runner: &R,
        svg: &Path,
        png: &Path,
    ) -> Result<()> {
        for (step, invocation) in self.invocations(svg, png) {
            debug!(%step, command = %invocation, "running");
            let output = runner
                .run(&invocation)
                .map_err(|source| RasterError::Spawn {
                    program: invocation.program.clone(),
                    source,
                })?;

            if !output.success {
                return Err(RasterError::ToolFailure {
                    step,
                    file: svg.to_path_buf(),
                    command: invocation.to_string(),
                    code: output.code,
                    status: output.status(),
                    stderr: output.stderr.trim_end().to_string(),
                });
            }
        }
        Ok(())
    }
}
