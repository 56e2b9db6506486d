use serde::{Deserialize, Serialize};

/// Continuous world coordinate.
///
/// Agents move in continuous space; the grid layer truncates a position to the
/// cell it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Cell coordinate of this position, truncated toward zero.
    ///
    /// Returns `None` for negative or non-finite coordinates, which never map to a cell.
    #[inline]
    pub fn cell(&self) -> Option<(usize, usize)> {
        if self.x.is_finite() && self.y.is_finite() && self.x >= 0.0 && self.y >= 0.0 {
            Some((self.x as usize, self.y as usize))
        } else {
            None
        }
    }

    /// True iff the position lies in `[0, width) x [0, height)`.
    #[inline]
    pub fn is_in_bounds(&self, width: usize, height: usize) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x < width as f64 && self.y < height as f64
    }

    #[inline]
    pub fn distance_sq(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Inclusive circle test: a point exactly `radius` away is inside.
    #[inline]
    pub fn is_within_radius(&self, center: &Position, radius: f64) -> bool {
        self.distance_sq(center) <= radius * radius
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x as f64, y as f64)
    }
}
