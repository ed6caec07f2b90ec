use serde::{Deserialize, Serialize};

/// Flat pixel-space buffer of interleaved `[x0, y0, x1, y1, ...]` values.
pub type Paths = Vec<f32>;

/// Pixel-space size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle. Used both for data-space view boxes and for
/// pixel-space layout rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn dimension(self) -> Dimension {
        Dimension::new(self.width, self.height)
    }
}

impl From<Dimension> for Rect {
    fn from(dimension: Dimension) -> Self {
        Self::new(0.0, 0.0, dimension.width, dimension.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One named series in data space. Owned by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub id: String,
    pub points: Vec<Point>,
}

impl DataSeries {
    #[must_use]
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }

    /// Builds a series from `(x, y)` tuples.
    #[must_use]
    pub fn from_xy(id: impl Into<String>, points: &[(f64, f64)]) -> Self {
        Self::new(
            id,
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        )
    }
}

/// A series after transformation to pixel space.
///
/// `paths.len() == 2 * points.len()` of the series it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct DataInternalSeries {
    pub id: String,
    pub paths: Paths,
}

impl DataInternalSeries {
    /// Number of points stored in `paths`.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.paths.len() / 2
    }
}
