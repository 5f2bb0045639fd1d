//! Tick placement.

use wickmark_types::{ChartConfig, LayoutError, Tick};

use crate::{CandleShape, Layout, MarkerShape, Shape, TickGeometry};

/// Lays out an expanded tick sequence.
///
/// Every tick is checked against the chart bounds before its own
/// coordinates are computed, in sequence order, and the first offending
/// tick aborts the layout.
///
/// # Errors
///
/// Returns [`LayoutError::MaxHeightExceeded`] or
/// [`LayoutError::MinHeightExceeded`] for out-of-range values, and
/// [`LayoutError::EmptySequence`] when `ticks` is empty.
pub fn layout(ticks: &[Tick], config: &ChartConfig) -> Result<Layout, LayoutError> {
    let first = ticks.first().ok_or(LayoutError::EmptySequence)?;
    let leads_with_trend = first.is_marker();
    let skip = base_offset(ticks.len(), config, leads_with_trend);
    let count = ticks.len();

    let geometries = ticks
        .iter()
        .enumerate()
        .map(|(index, tick)| {
            check_bounds(index, tick, config)?;
            Ok(place(index, count, tick, skip, leads_with_trend, config))
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;

    Ok(Layout::new(geometries))
}

/// Left offset that centres `count` candle bodies in the chart.
///
/// Sequences opening with a trend marker are shifted left by one body
/// width.
#[must_use]
pub fn base_offset(count: usize, config: &ChartConfig, leads_with_trend: bool) -> f64 {
    let count = count as f64;
    let body = f64::from(config.body_width);
    let gap = f64::from(config.gap);

    let skip = f64::from(config.width) / 2.0 - (count * body / 2.0 + (count - 1.0) * gap / 2.0);
    if leads_with_trend { skip - body } else { skip }
}

fn check_bounds(index: usize, tick: &Tick, config: &ChartConfig) -> Result<(), LayoutError> {
    let max = config.max_value();
    if let Some(&value) = tick.values().iter().find(|v| **v > max) {
        return Err(LayoutError::MaxHeightExceeded {
            index,
            value,
            max,
            tick: *tick,
        });
    }

    let min = config.min_value();
    if let Some(&value) = tick.values().iter().find(|v| **v < min) {
        return Err(LayoutError::MinHeightExceeded {
            index,
            value,
            min,
            tick: *tick,
        });
    }

    Ok(())
}

fn place(
    index: usize,
    count: usize,
    tick: &Tick,
    skip: f64,
    leads_with_trend: bool,
    config: &ChartConfig,
) -> TickGeometry {
    let height = f64::from(config.height);
    let body_width = f64::from(config.body_width);
    let trend_width = f64::from(config.trend_width);

    // Candles that follow trend markers are pulled left to line up with them.
    let tick_skip = if leads_with_trend && !tick.is_marker() {
        skip - 3.0 * (body_width - trend_width)
    } else {
        skip
    };
    let step = if tick.is_marker() {
        trend_width
    } else {
        body_width + f64::from(config.gap)
    };
    let left = px(tick_skip + index as f64 * step);

    let is_up = tick.is_up();
    let (upper, lower) = if is_up {
        (tick.close, tick.open)
    } else {
        (tick.open, tick.close)
    };

    let x = px(left as f64 + body_width / 2.0);
    let top = px(height - tick.high);
    let bottom = px(height - tick.low);

    let (color, shape) = match tick.trend {
        Some(trend) => (
            config.palette.trend(trend),
            Shape::Marker(MarkerShape { x, top, bottom }),
        ),
        None => (
            config.palette.candle(is_up),
            Shape::Candle(CandleShape {
                left,
                body_top: px(height - upper),
                body_bottom: px(height - lower),
                body_width: config.body_width,
                wick_x: x,
                wick_top: top,
                wick_bottom: bottom,
            }),
        ),
    };

    TickGeometry {
        index,
        paint_index: count - 1 - index,
        color: color.to_string(),
        shape,
    }
}

fn px(value: f64) -> i64 {
    value.ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wickmark_types::{CandleDefinition, Trend};

    fn candle(geometry: &TickGeometry) -> CandleShape {
        match geometry.shape {
            Shape::Candle(shape) => shape,
            Shape::Marker(_) => panic!("expected a candle at {}", geometry.index),
        }
    }

    fn marker(geometry: &TickGeometry) -> MarkerShape {
        match geometry.shape {
            Shape::Marker(shape) => shape,
            Shape::Candle(_) => panic!("expected a marker at {}", geometry.index),
        }
    }

    fn evening_star() -> Vec<Tick> {
        CandleDefinition::trending(
            Trend::Uptrend,
            vec![[30.0, 60.0, 20.0, 70.0], [80.0, 70.0, 60.0, 90.0], [60.0, 40.0, 35.0, 70.0]],
        )
        .expand()
    }

    #[test]
    fn test_long_bullish_candle() {
        let config = ChartConfig::default();
        let layout = layout(&[Tick::new(20.0, 80.0, 10.0, 90.0)], &config).unwrap();

        let geometry = layout.tick(0).unwrap();
        let shape = candle(geometry);
        assert_eq!(shape.left, 55);
        assert_eq!(shape.body_top, 20);
        assert_eq!(shape.body_bottom, 80);
        assert_eq!(shape.body_height(), 60);
        assert_eq!(shape.wick_x, 60);
        assert_eq!(shape.wick_top, 10);
        assert_eq!(shape.wick_bottom, 90);
        assert_eq!(geometry.color, "#2185D0");
    }

    #[test]
    fn test_bearish_candle_uses_open_as_top() {
        let config = ChartConfig::default();
        let layout = layout(&[Tick::new(70.0, 40.0, 30.0, 80.0)], &config).unwrap();

        let geometry = layout.tick(0).unwrap();
        let shape = candle(geometry);
        assert_eq!(shape.body_top, 30);
        assert_eq!(shape.body_bottom, 60);
        assert_eq!(shape.wick_top, 20);
        assert_eq!(shape.wick_bottom, 70);
        assert_eq!(geometry.color, "#DB2828");
    }

    #[test]
    fn test_base_offset() {
        let config = ChartConfig::default();
        assert_relative_eq!(base_offset(1, &config, false), 55.0);
        assert_relative_eq!(base_offset(3, &config, false), 40.0);
        assert_relative_eq!(base_offset(6, &config, true), 7.5);

        let embedded = ChartConfig::embedded();
        assert_relative_eq!(base_offset(6, &embedded, true), 10.0);
    }

    #[test]
    fn test_mixed_sequence_alignment() {
        let config = ChartConfig::default();
        let layout = layout(&evening_star(), &config).unwrap();

        let xs: Vec<_> = (0..3).map(|i| marker(layout.tick(i).unwrap()).x).collect();
        assert_eq!(xs, vec![13, 21, 29]);

        let lefts: Vec<_> = (3..6).map(|i| candle(layout.tick(i).unwrap()).left).collect();
        assert_eq!(lefts, vec![47, 62, 77]);
    }

    #[test]
    fn test_downtrend_sequence_geometry() {
        let config = ChartConfig::default();
        let ticks = CandleDefinition::trending(
            Trend::Downtrend,
            vec![[70.0, 40.0, 30.0, 80.0], [20.0, 30.0, 10.0, 40.0], [40.0, 60.0, 30.0, 70.0]],
        )
        .expand();
        let layout = layout(&ticks, &config).unwrap();

        let markers: Vec<_> = (0..3)
            .map(|i| {
                let m = marker(layout.tick(i).unwrap());
                (m.x, m.top, m.bottom)
            })
            .collect();
        assert_eq!(markers, vec![(13, 10, 30), (21, 15, 35), (29, 20, 40)]);

        let candles: Vec<_> = (3..6)
            .map(|i| {
                let c = candle(layout.tick(i).unwrap());
                (c.left, c.body_top, c.body_bottom, c.wick_x, c.wick_top, c.wick_bottom)
            })
            .collect();
        assert_eq!(
            candles,
            vec![
                (47, 30, 60, 52, 20, 70),
                (62, 70, 80, 67, 60, 90),
                (77, 40, 60, 82, 30, 70),
            ]
        );

        let colors: Vec<_> = (0..6)
            .map(|i| layout.tick(i).unwrap().color.as_str())
            .collect();
        assert_eq!(
            colors,
            vec!["#DB2828", "#DB2828", "#DB2828", "#DB2828", "#2185D0", "#2185D0"]
        );
    }

    #[test]
    fn test_mixed_sequence_alignment_embedded() {
        let config = ChartConfig::embedded();
        let layout = layout(&evening_star(), &config).unwrap();

        let lefts: Vec<_> = (3..6).map(|i| candle(layout.tick(i).unwrap()).left).collect();
        assert_eq!(lefts, vec![46, 60, 74]);
        assert_eq!(marker(layout.tick(0).unwrap()).x, 15);
    }

    #[test]
    fn test_marker_spans_low_to_high() {
        let config = ChartConfig::default();
        let ticks = Trend::Uptrend.markers();
        let layout = layout(&ticks, &config).unwrap();

        let first = marker(layout.tick(0).unwrap());
        assert_eq!(first.top, 70);
        assert_eq!(first.bottom, 90);
        let last = marker(layout.tick(2).unwrap());
        assert_eq!(last.top, 60);
        assert_eq!(last.bottom, 80);
    }

    #[test]
    fn test_marker_uses_trend_color() {
        let mut config = ChartConfig::default();
        config.palette.downtrend = "#7F0100".to_string();
        let layout = layout(&Trend::Downtrend.markers(), &config).unwrap();

        assert!(layout.iter().all(|g| g.color == "#7F0100"));
    }

    #[test]
    fn test_paint_order_is_reversed() {
        let config = ChartConfig::default();
        let layout = layout(&evening_star(), &config).unwrap();

        let indices: Vec<_> = layout.iter().map(|g| g.index).collect();
        assert_eq!(indices, vec![5, 4, 3, 2, 1, 0]);
        assert!(layout.iter().all(|g| g.paint_index == 5 - g.index));
    }

    #[test]
    fn test_min_bound() {
        let config = ChartConfig::default();

        let ok = layout(&[Tick::new(10.0, 80.0, 10.0, 90.0)], &config);
        assert!(ok.is_ok());

        let err = layout(&[Tick::new(20.0, 80.0, 9.0, 90.0)], &config).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::MinHeightExceeded { index: 0, value, min, .. } if value == 9.0 && min == 10.0
        ));
    }

    #[test]
    fn test_max_bound() {
        let config = ChartConfig::default();

        let ok = layout(&[Tick::new(20.0, 90.0, 10.0, 90.0)], &config);
        assert!(ok.is_ok());

        let err = layout(&[Tick::new(20.0, 80.0, 10.0, 91.0)], &config).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::MaxHeightExceeded { index: 0, value, max, .. } if value == 91.0 && max == 90.0
        ));
    }

    #[test]
    fn test_max_checked_before_min() {
        let config = ChartConfig::default();
        let err = layout(&[Tick::new(5.0, 95.0, 5.0, 95.0)], &config).unwrap_err();
        assert!(matches!(err, LayoutError::MaxHeightExceeded { .. }));
    }

    #[test]
    fn test_first_offending_tick_reported() {
        let config = ChartConfig::default();
        let ticks = [
            Tick::new(20.0, 80.0, 10.0, 90.0),
            Tick::new(20.0, 80.0, 0.0, 90.0),
            Tick::new(20.0, 99.0, 10.0, 99.0),
        ];
        let err = layout(&ticks, &config).unwrap_err();
        assert!(matches!(err, LayoutError::MinHeightExceeded { index: 1, .. }));
    }

    #[test]
    fn test_empty_sequence() {
        let config = ChartConfig::default();
        assert_eq!(layout(&[], &config).unwrap_err(), LayoutError::EmptySequence);
    }
}
