//! Error types for wickmark.

use thiserror::Error;

use crate::Tick;

/// Errors raised while laying out a tick sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A tick value is above `height - body_width`.
    #[error("Tick {index} ({tick}): value {value} exceeds the maximum candle height of {max}")]
    MaxHeightExceeded {
        /// Position of the tick in the expanded sequence.
        index: usize,
        /// The offending value.
        value: f64,
        /// The maximum allowed value.
        max: f64,
        /// The offending tick.
        tick: Tick,
    },

    /// A tick value is below `body_width`.
    #[error("Tick {index} ({tick}): value {value} is below the minimum candle height of {min}")]
    MinHeightExceeded {
        /// Position of the tick in the expanded sequence.
        index: usize,
        /// The offending value.
        value: f64,
        /// The minimum allowed value.
        min: f64,
        /// The offending tick.
        tick: Tick,
    },

    /// Nothing to lay out.
    #[error("Cannot lay out an empty tick sequence")]
    EmptySequence,
}

/// Errors raised while reading a candle definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// A trend tag appeared after the first position.
    #[error("Trend tag at position {position}; a trend tag may only open a definition")]
    MisplacedTrend {
        /// Index of the misplaced tag.
        position: usize,
    },
}
