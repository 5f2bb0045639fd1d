//! Tick representation.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Trend tag carried by marker ticks.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    /// Rising trend leading into the pattern.
    #[display("UPTREND")]
    Uptrend,
    /// Falling trend leading into the pattern.
    #[display("DOWNTREND")]
    Downtrend,
}

impl Trend {
    /// Returns the three synthetic marker ticks drawn for this trend.
    ///
    /// The values are fixed and do not depend on the candles that follow
    /// the trend tag.
    #[must_use]
    pub const fn markers(self) -> [Tick; 3] {
        match self {
            Self::Uptrend => [
                Tick::new(20.0, 20.0, 10.0, 30.0).with_trend(self),
                Tick::new(25.0, 25.0, 15.0, 35.0).with_trend(self),
                Tick::new(30.0, 30.0, 20.0, 40.0).with_trend(self),
            ],
            Self::Downtrend => [
                Tick::new(80.0, 80.0, 70.0, 90.0).with_trend(self),
                Tick::new(75.0, 75.0, 65.0, 85.0).with_trend(self),
                Tick::new(70.0, 70.0, 60.0, 80.0).with_trend(self),
            ],
        }
    }
}

/// A single tick in chart-space coordinates.
///
/// A tick with a [`Trend`] is only a directional marker and is drawn as a
/// single vertical line instead of a candle body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Opening value.
    pub open: f64,
    /// Closing value.
    pub close: f64,
    /// Lowest value.
    pub low: f64,
    /// Highest value.
    pub high: f64,
    /// Trend tag, set for marker ticks only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl Tick {
    /// Creates a plain tick.
    #[must_use]
    pub const fn new(open: f64, close: f64, low: f64, high: f64) -> Self {
        Self {
            open,
            close,
            low,
            high,
            trend: None,
        }
    }

    /// Creates a plain tick from an `[open, close, low, high]` quadruple.
    #[must_use]
    pub const fn from_quad(quad: [f64; 4]) -> Self {
        Self::new(quad[0], quad[1], quad[2], quad[3])
    }

    /// Tags the tick with a trend.
    #[must_use]
    pub const fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Returns true if the tick is a trend marker.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        self.trend.is_some()
    }

    /// Returns true if the tick closed at or above its open.
    #[must_use]
    pub const fn is_up(&self) -> bool {
        self.close >= self.open
    }

    /// Returns the values checked against the chart bounds, in check order.
    #[must_use]
    pub const fn values(&self) -> [f64; 4] {
        [self.open, self.close, self.high, self.low]
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "open={} close={} low={} high={}",
            self.open, self.close, self.low, self.high
        )?;
        if let Some(trend) = self.trend {
            write!(f, " trend={trend}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_up() {
        assert!(Tick::new(20.0, 80.0, 10.0, 90.0).is_up());
        assert!(!Tick::new(80.0, 20.0, 10.0, 90.0).is_up());
        // Doji counts as up
        assert!(Tick::new(50.0, 50.0, 40.0, 60.0).is_up());
    }

    #[test]
    fn test_is_up_in_const_context() {
        const LONG_WHITE_UP: bool = Tick::new(20.0, 80.0, 10.0, 90.0).is_up();
        const MARKER_UP: bool = Trend::Downtrend.markers()[0].is_up();
        assert!(LONG_WHITE_UP);
        assert!(MARKER_UP);
    }

    #[test]
    fn test_uptrend_markers() {
        let markers = Trend::Uptrend.markers();
        assert_eq!(markers[0], Tick::new(20.0, 20.0, 10.0, 30.0).with_trend(Trend::Uptrend));
        assert_eq!(markers[1], Tick::new(25.0, 25.0, 15.0, 35.0).with_trend(Trend::Uptrend));
        assert_eq!(markers[2], Tick::new(30.0, 30.0, 20.0, 40.0).with_trend(Trend::Uptrend));
    }

    #[test]
    fn test_downtrend_markers() {
        let markers = Trend::Downtrend.markers();
        assert!(markers.iter().all(|t| t.trend == Some(Trend::Downtrend)));
        assert_eq!(markers[0].high, 90.0);
        assert_eq!(markers[2].low, 60.0);
    }

    #[test]
    fn test_display() {
        let tick = Tick::new(20.0, 80.0, 10.0, 90.0);
        assert_eq!(tick.to_string(), "open=20 close=80 low=10 high=90");

        let marker = tick.with_trend(Trend::Downtrend);
        assert_eq!(
            marker.to_string(),
            "open=20 close=80 low=10 high=90 trend=DOWNTREND"
        );
    }

    #[test]
    fn test_trend_serde() {
        let json = serde_json::to_string(&Trend::Uptrend).unwrap();
        assert_eq!(json, "\"UPTREND\"");
        let trend: Trend = serde_json::from_str("\"DOWNTREND\"").unwrap();
        assert_eq!(trend, Trend::Downtrend);
    }
}
