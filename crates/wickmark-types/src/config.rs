//! Chart dimensions, palette and output variant.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::Trend;

/// SVG document flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SvgVariant {
    /// Full document with XML declaration, DOCTYPE and pixel size attributes.
    #[default]
    Standalone,
    /// Inline fragment sized through a `style` attribute.
    Embedded,
}

impl SvgVariant {
    /// Returns the variant as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standalone => "standalone",
            Self::Embedded => "embedded",
        }
    }
}

impl std::fmt::Display for SvgVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown SVG variant name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown SVG variant: {0}")]
pub struct SvgVariantParseError(pub String);

impl FromStr for SvgVariant {
    type Err = SvgVariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standalone" | "document" => Ok(Self::Standalone),
            "embedded" | "inline" => Ok(Self::Embedded),
            _ => Err(SvgVariantParseError(s.to_string())),
        }
    }
}

/// Colors used by the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Body color of rising candles.
    pub up: String,
    /// Body color of falling candles.
    pub down: String,
    /// Line color of up-trend markers.
    pub uptrend: String,
    /// Line color of down-trend markers.
    pub downtrend: String,
    /// Background fill.
    pub background: String,
    /// Background border stroke.
    pub border: String,
}

impl Palette {
    /// Returns the color of a candle body.
    #[must_use]
    pub fn candle(&self, is_up: bool) -> &str {
        if is_up { &self.up } else { &self.down }
    }

    /// Returns the color of a trend marker.
    #[must_use]
    pub fn trend(&self, trend: Trend) -> &str {
        match trend {
            Trend::Uptrend => &self.uptrend,
            Trend::Downtrend => &self.downtrend,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            up: "#2185D0".to_string(),
            down: "#DB2828".to_string(),
            uptrend: "#2185D0".to_string(),
            downtrend: "#DB2828".to_string(),
            background: "#FAFAFA".to_string(),
            border: "#DDD".to_string(),
        }
    }
}

/// Chart configuration shared by the layout engine and the serializer.
///
/// All lengths are in pixels. A partial JSON document only overrides the
/// fields it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart width.
    pub width: u32,
    /// Chart height.
    pub height: u32,
    /// Candle body width; also the vertical margin kept free of ticks.
    pub body_width: u32,
    /// Horizontal step between consecutive trend markers.
    pub trend_width: u32,
    /// Space between candle bodies.
    pub gap: u32,
    /// Colors.
    pub palette: Palette,
    /// Output document flavour.
    pub variant: SvgVariant,
}

impl ChartConfig {
    /// Returns the embedded preset: inline SVG with a tighter gap.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            gap: 4,
            variant: SvgVariant::Embedded,
            ..Self::default()
        }
    }

    /// Sets the output variant.
    #[must_use]
    pub const fn with_variant(mut self, variant: SvgVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the gap between candle bodies.
    #[must_use]
    pub const fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Smallest tick value that fits the chart.
    #[must_use]
    pub fn min_value(&self) -> f64 {
        f64::from(self.body_width)
    }

    /// Largest tick value that fits the chart.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        f64::from(self.height) - f64::from(self.body_width)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 100,
            body_width: 10,
            trend_width: 8,
            gap: 5,
            palette: Palette::default(),
            variant: SvgVariant::Standalone,
        }
    }
}
