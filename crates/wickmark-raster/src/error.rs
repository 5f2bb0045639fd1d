//! Error types for batch conversion.

use std::path::PathBuf;
use thiserror::Error;

use crate::PipelineStep;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors that can occur while converting a tree of SVG files.
#[derive(Error, Debug)]
pub enum RasterError {
    /// An external tool exited unsuccessfully.
    #[error("{step} of '{file}' failed ({status}): {command}\n{stderr}")]
    ToolFailure {
        /// The pipeline step that failed.
        step: PipelineStep,
        /// The SVG file being converted.
        file: PathBuf,
        /// The command line that was run.
        command: String,
        /// Exit code, if the tool exited normally.
        code: Option<i32>,
        /// Human-readable exit status.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// An external tool could not be started.
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        /// The program that could not be started.
        program: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An external tool is not on `PATH`.
    #[error("Tool '{program}' not found: {source}")]
    ToolNotFound {
        /// The program that was looked up.
        program: PathBuf,
        /// The lookup error.
        source: which::Error,
    },

    /// The source root is not a directory.
    #[error("Source '{path}' is not a directory")]
    SourceNotDirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Failed to read a directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to create an output directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to stat an entry.
    #[error("Failed to read metadata of '{path}': {source}")]
    Metadata {
        /// The path that could not be inspected.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
