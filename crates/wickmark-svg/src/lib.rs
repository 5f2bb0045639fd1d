//! SVG serializer for the wickmark candlestick icon generator.
//!
//! This crate renders laid-out ticks as compact single-line SVG:
//!
//! - [`SvgWriter`] - Renders definitions, tick sequences or layouts
//! - [`compact`] - Whitespace compaction applied to every document
//! - [`SvgError`] - Layout or I/O failure while rendering

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wickmark/wickmark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod compact;
mod document;
mod writer;

pub use compact::compact;
pub use writer::{SvgError, SvgWriter};
