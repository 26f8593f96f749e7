use crate::computing::Float;
use crate::computing::Point;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

/// Axis-aligned rectangle in integer screen coordinates.
///
/// Both corners are inclusive: `x1..=x2` and `y1..=y2`.
/// A single pixel is `x1 == x2 && y1 == y2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Area {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Area {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Zero-sized area located at `p`.
    pub const fn point(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Smallest integer area enclosing the float bounds, rounding outward.
    pub fn enclosing(min_x: Float, min_y: Float, max_x: Float, max_y: Float) -> Self {
        Self {
            x1: min_x.floor() as i32,
            y1: min_y.floor() as i32,
            x2: max_x.ceil() as i32,
            y2: max_y.ceil() as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// true if `other` lies entirely inside `self`
    pub fn covers(&self, other: &Area) -> bool {
        self.contains(other.x1, other.y1) && self.contains(other.x2, other.y2)
    }

    pub fn union(&self, other: &Area) -> Area {
        Area {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Overlapping part of both areas, if any.
    pub fn intersection(&self, other: &Area) -> Option<Area> {
        let area = Area {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        };

        match area.x1 <= area.x2 && area.y1 <= area.y2 {
            true => Some(area),
            false => None,
        }
    }
}
