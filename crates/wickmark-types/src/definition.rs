//! Candle definitions and their expansion into ticks.

use serde::{Deserialize, Serialize};

use crate::{DefinitionError, Tick, Trend};

/// One element of the flat definition form.
///
/// In JSON a definition reads `["UPTREND", [30, 60, 20, 70], ...]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefinitionEntry {
    /// Trend tag, valid at position 0 only.
    Trend(Trend),
    /// `[open, close, low, high]`.
    Ohlc([f64; 4]),
}

/// Description of one icon: an optional leading trend followed by candles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<DefinitionEntry>", into = "Vec<DefinitionEntry>")]
pub struct CandleDefinition {
    trend: Option<Trend>,
    quads: Vec<[f64; 4]>,
}

impl CandleDefinition {
    /// Creates a definition made of plain candles only.
    #[must_use]
    pub const fn new(quads: Vec<[f64; 4]>) -> Self {
        Self { trend: None, quads }
    }

    /// Creates a definition introduced by a trend marker.
    #[must_use]
    pub const fn trending(trend: Trend, quads: Vec<[f64; 4]>) -> Self {
        Self {
            trend: Some(trend),
            quads,
        }
    }

    /// Returns the leading trend tag, if any.
    #[must_use]
    pub const fn trend(&self) -> Option<Trend> {
        self.trend
    }

    /// Returns the `[open, close, low, high]` candles.
    #[must_use]
    pub fn quads(&self) -> &[[f64; 4]] {
        &self.quads
    }

    /// Expands the definition into its canonical tick sequence.
    ///
    /// A trend tag becomes its three fixed marker ticks; every candle then
    /// maps one-to-one onto a plain tick, in order. Values are not checked
    /// here.
    #[must_use]
    pub fn expand(&self) -> Vec<Tick> {
        let markers = self.trend.map(Trend::markers);
        markers
            .into_iter()
            .flatten()
            .chain(self.quads.iter().copied().map(Tick::from_quad))
            .collect()
    }
}

impl TryFrom<Vec<DefinitionEntry>> for CandleDefinition {
    type Error = DefinitionError;

    fn try_from(entries: Vec<DefinitionEntry>) -> Result<Self, Self::Error> {
        let mut definition = Self::default();
        for (position, entry) in entries.into_iter().enumerate() {
            match entry {
                DefinitionEntry::Trend(trend) if position == 0 => definition.trend = Some(trend),
                DefinitionEntry::Trend(_) => {
                    return Err(DefinitionError::MisplacedTrend { position });
                }
                DefinitionEntry::Ohlc(quad) => definition.quads.push(quad),
            }
        }
        Ok(definition)
    }
}

impl From<CandleDefinition> for Vec<DefinitionEntry> {
    fn from(definition: CandleDefinition) -> Self {
        definition
            .trend
            .map(DefinitionEntry::Trend)
            .into_iter()
            .chain(definition.quads.into_iter().map(DefinitionEntry::Ohlc))
            .collect()
    }
}
