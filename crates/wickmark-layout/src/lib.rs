//! Candlestick geometry layout for the wickmark icon generator.
//!
//! This crate turns an expanded tick sequence into pixel geometry:
//!
//! - [`layout`] - Validates ticks and computes their geometry
//! - [`Layout`] - Geometries in paint order
//! - [`TickGeometry`] - Position, color and shape of one tick
//! - [`Shape`] - Trend marker line or candle body with wicks

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wickmark/wickmark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod geometry;

pub use engine::{base_offset, layout};
pub use geometry::{CandleShape, Layout, MarkerShape, Shape, TickGeometry};
