//! Batch SVG to PNG conversion for the wickmark candlestick icon generator.
//!
//! This crate mirrors a tree of SVG files into a tree of compressed PNG
//! files by driving external command-line tools:
//!
//! - [`BatchRasterizer`] - Walks the source tree and converts every SVG
//! - [`ToolChain`] - Rasterizer and compressor commands for one file
//! - [`Compression`] - Settings of one lossy compression pass
//! - [`ToolRunner`] - Process execution seam, [`SystemRunner`] by default
//! - [`RasterError`] - Tool, spawn and filesystem failures

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wickmark/wickmark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod batch;
mod error;
mod pipeline;
mod runner;

pub use batch::{BatchRasterizer, BatchReport, Conversion, RASTER_EXTENSION, VECTOR_EXTENSION};
pub use error::{RasterError, Result};
pub use pipeline::{Compression, PipelineStep, ToolChain};
pub use runner::{Invocation, SystemRunner, ToolOutput, ToolRunner};
