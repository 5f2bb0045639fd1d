//! Core types for the wickmark candlestick icon generator.
//!
//! This crate provides the data structures shared by the layout engine,
//! the SVG serializer and the command-line front end:
//!
//! - [`Tick`] - A single chart-space price observation or trend marker
//! - [`Trend`] - Up/down trend tag
//! - [`CandleDefinition`] - An icon description, expanded into ticks
//! - [`ChartConfig`] - Chart dimensions, spacing, palette and output variant
//! - [`LayoutError`] - Out-of-range tick values

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wickmark/wickmark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod definition;
mod error;
mod tick;

pub use config::{ChartConfig, Palette, SvgVariant, SvgVariantParseError};
pub use definition::{CandleDefinition, DefinitionEntry};
pub use error::{DefinitionError, LayoutError};
pub use tick::{Tick, Trend};
