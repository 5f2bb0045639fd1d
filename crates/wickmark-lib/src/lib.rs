//! Candlestick icon generation: layout, SVG rendering and PNG batch conversion.
//!
//! This is a facade crate that re-exports functionality from the wickmark
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use wickmark_lib::prelude::*;
//!
//! let definition = CandleDefinition::trending(
//!     Trend::Uptrend,
//!     vec![[30.0, 60.0, 20.0, 70.0], [80.0, 70.0, 60.0, 90.0]],
//! );
//! let writer = SvgWriter::new(ChartConfig::default());
//! let svg = writer.render_definition(&definition)?;
//! assert!(svg.ends_with("</svg>"));
//! # Ok::<(), SvgError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/wickmark/wickmark/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use wickmark_types::*;

// Re-export layout and rendering
pub use wickmark_layout::{
    CandleShape, Layout, MarkerShape, Shape, TickGeometry, base_offset, layout,
};
pub use wickmark_svg::{SvgError, SvgWriter, compact};

// Re-export the pattern catalog
#[cfg(feature = "catalog")]
pub use wickmark_catalog::CandleCatalog;

// Re-export batch conversion
#[cfg(feature = "raster")]
pub use wickmark_raster::{
    BatchRasterizer, BatchReport, Compression, Conversion, Invocation, PipelineStep, RasterError,
    SystemRunner, ToolChain, ToolOutput, ToolRunner,
};

/// Prelude module for convenient imports.
///
/// ```
/// use wickmark_lib::prelude::*;
/// ```
pub mod prelude {
    pub use wickmark_types::{
        CandleDefinition, ChartConfig, LayoutError, Palette, SvgVariant, Tick, Trend,
    };

    pub use wickmark_layout::{Layout, layout};
    pub use wickmark_svg::{SvgError, SvgWriter};

    #[cfg(feature = "catalog")]
    pub use wickmark_catalog::CandleCatalog;

    #[cfg(feature = "raster")]
    pub use wickmark_raster::{BatchRasterizer, BatchReport, RasterError, ToolChain};
}
