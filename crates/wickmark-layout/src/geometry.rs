//! Pixel geometry produced by the layout engine.

/// A trend marker: one vertical line spanning low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerShape {
    /// Horizontal position of the line.
    pub x: i64,
    /// Top end (the tick's high).
    pub top: i64,
    /// Bottom end (the tick's low).
    pub bottom: i64,
}

/// A candle: body rectangle plus upper and lower wicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandleShape {
    /// Left edge of the body.
    pub left: i64,
    /// Top edge of the body.
    pub body_top: i64,
    /// Bottom edge of the body.
    pub body_bottom: i64,
    /// Body width.
    pub body_width: u32,
    /// Horizontal position of both wicks.
    pub wick_x: i64,
    /// Upper wick end (the tick's high).
    pub wick_top: i64,
    /// Lower wick end (the tick's low).
    pub wick_bottom: i64,
}

impl CandleShape {
    /// Returns the body height.
    #[must_use]
    pub const fn body_height(&self) -> i64 {
        self.body_bottom - self.body_top
    }
}

/// Shape drawn for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Trend-tagged tick.
    Marker(MarkerShape),
    /// Plain tick.
    Candle(CandleShape),
}

/// Geometry of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickGeometry {
    /// Position of the tick in the expanded sequence.
    pub index: usize,
    /// Position of the tick's fragment in the output, `len - 1 - index`.
    pub paint_index: usize,
    /// Stroke and fill color.
    pub color: String,
    /// What to draw.
    pub shape: Shape,
}

/// Laid-out tick sequence, ordered by paint index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    geometries: Vec<TickGeometry>,
}

impl Layout {
    pub(crate) fn new(mut geometries: Vec<TickGeometry>) -> Self {
        geometries.sort_by_key(|g| g.paint_index);
        Self { geometries }
    }

    /// Iterates geometries in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &TickGeometry> {
        self.geometries.iter()
    }

    /// Returns the geometry of the tick at `index` in the expanded sequence.
    #[must_use]
    pub fn tick(&self, index: usize) -> Option<&TickGeometry> {
        self.geometries.iter().find(|g| g.index == index)
    }

    /// Returns the number of ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Returns true if there are no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a TickGeometry;
    type IntoIter = std::slice::Iter<'a, TickGeometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.geometries.iter()
    }
}
