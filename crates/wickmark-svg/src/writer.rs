//! SVG rendering entry points.

use std::io::Write;

use thiserror::Error;
use wickmark_layout::{Layout, layout};
use wickmark_types::{CandleDefinition, ChartConfig, LayoutError, Tick};

use crate::{compact, document};

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum SvgError {
    /// A tick does not fit the chart.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders candlestick icons as compact SVG.
#[derive(Debug, Clone, Default)]
pub struct SvgWriter {
    config: ChartConfig,
}

impl SvgWriter {
    /// Creates a writer for the given chart configuration.
    #[must_use]
    pub const fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Returns the chart configuration.
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Renders an already laid-out sequence.
    #[must_use]
    pub fn render_layout(&self, layout: &Layout) -> String {
        compact(&document::document(layout, &self.config))
    }

    /// Lays out and renders a tick sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if a tick is out of range or the sequence is empty.
    pub fn render(&self, ticks: &[Tick]) -> Result<String, SvgError> {
        let layout = layout(ticks, &self.config)?;
        Ok(self.render_layout(&layout))
    }

    /// Expands, lays out and renders a candle definition.
    ///
    /// # Errors
    ///
    /// Returns an error if a tick is out of range or the definition is empty.
    pub fn render_definition(&self, definition: &CandleDefinition) -> Result<String, SvgError> {
        self.render(&definition.expand())
    }

    /// Renders a candle definition into `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn write_definition<W: Write>(
        &self,
        definition: &CandleDefinition,
        mut writer: W,
    ) -> Result<(), SvgError> {
        let svg = self.render_definition(definition)?;
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
