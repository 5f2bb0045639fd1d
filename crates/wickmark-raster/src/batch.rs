//! Directory tree conversion.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{RasterError, Result, SystemRunner, ToolChain, ToolRunner};

/// Suffix of the files picked up for conversion.
pub const VECTOR_EXTENSION: &str = ".svg";

/// Suffix given to converted files.
pub const RASTER_EXTENSION: &str = ".png";

/// One converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The SVG that was read.
    pub source: PathBuf,
    /// The PNG that was written.
    pub output: PathBuf,
}

/// Summary of a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files converted, in visiting order.
    pub conversions: Vec<Conversion>,
    /// Output directories that had to be created.
    pub directories_created: usize,
    /// Entries that were neither directories nor SVG files.
    pub skipped: usize,
}

/// Converts a tree of SVG files into a mirrored tree of PNG files.
///
/// Runs strictly sequentially: each file goes through every pipeline step
/// before the next file is looked at, and the first failure ends the run.
#[derive(Debug, Clone)]
pub struct BatchRasterizer<R = SystemRunner> {
    tools: ToolChain,
    runner: R,
}

impl BatchRasterizer<SystemRunner> {
    /// Creates a rasterizer that runs tools as child processes.
    #[must_use]
    pub const fn new(tools: ToolChain) -> Self {
        Self {
            tools,
            runner: SystemRunner,
        }
    }
}

impl<R: ToolRunner> BatchRasterizer<R> {
    /// Creates a rasterizer with a custom tool runner.
    #[must_use]
    pub const fn with_runner(tools: ToolChain, runner: R) -> Self {
        Self { tools, runner }
    }

    /// Returns the tool chain.
    #[must_use]
    pub const fn tools(&self) -> &ToolChain {
        &self.tools
    }

    /// Converts every SVG below `source` into `output`.
    ///
    /// # Errors
    ///
    /// Returns an error on the first filesystem or tool failure.
    pub fn run(&self, source: &Path, output: &Path) -> Result<BatchReport> {
        self.run_with_progress(source, output, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_file` after each converted file.
    ///
    /// # Errors
    ///
    /// Returns an error on the first filesystem or tool failure.
    pub fn run_with_progress<F>(
        &self,
        source: &Path,
        output: &Path,
        mut on_file: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(&Conversion),
    {
        let metadata = fs::metadata(source).map_err(|e| RasterError::Metadata {
            path: source.to_path_buf(),
            source: e,
        })?;
        if !metadata.is_dir() {
            return Err(RasterError::SourceNotDirectory {
                path: source.to_path_buf(),
            });
        }

        let mut report = BatchReport::default();
        if !output.exists() {
            fs::create_dir_all(output).map_err(|e| RasterError::CreateDir {
                path: output.to_path_buf(),
                source: e,
            })?;
            report.directories_created += 1;
        }

        let output_root = canonical(output)?;
        self.walk(source, output, &output_root, &mut report, &mut on_file)?;

        info!(
            files = report.conversions.len(),
            directories = report.directories_created,
            skipped = report.skipped,
            "batch finished"
        );
        Ok(report)
    }

    fn walk(
        &self,
        dir: &Path,
        out_dir: &Path,
        output_root: &Path,
        report: &mut BatchReport,
        on_file: &mut dyn FnMut(&Conversion),
    ) -> Result<()> {
        for path in sorted_entries(dir)? {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!(path = %path.display(), "skipping entry with non UTF-8 name");
                report.skipped += 1;
                continue;
            };

            let metadata = fs::metadata(&path).map_err(|e| RasterError::Metadata {
                path: path.clone(),
                source: e,
            })?;

            if metadata.is_dir() {
                // An output tree nested inside the source tree is not source
                // material, however either path is spelled.
                if canonical(&path)? == output_root {
                    debug!(path = %path.display(), "skipping output root");
                    continue;
                }

                let target = out_dir.join(name);
                if !target.exists() {
                    fs::create_dir(&target).map_err(|e| RasterError::CreateDir {
                        path: target.clone(),
                        source: e,
                    })?;
                    report.directories_created += 1;
                }
                self.walk(&path, &target, output_root, report, on_file)?;
            } else if let Some(stem) = name.strip_suffix(VECTOR_EXTENSION) {
                let target = out_dir.join(format!("{stem}{RASTER_EXTENSION}"));
                self.tools.convert(&self.runner, &path, &target)?;
                info!(source = %path.display(), output = %target.display(), "converted");

                let conversion = Conversion {
                    source: path,
                    output: target,
                };
                on_file(&conversion);
                report.conversions.push(conversion);
            } else {
                debug!(path = %path.display(), "ignoring non-SVG entry");
                report.skipped += 1;
            }
        }
        Ok(())
    }
}

/// Resolves `path` to its absolute form with symlinks followed.
fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| RasterError::Metadata {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Entries of `dir`, sorted by path.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |e| RasterError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort();
    Ok(entries)
}
