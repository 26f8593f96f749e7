use crate::area::Area;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

pub type Float = f32;
pub type Couple = vek::vec::repr_c::vec2::Vec2<Float>;
pub type Point = vek::vec::repr_c::vec2::Vec2<i32>;
pub const C_ZERO: Couple = Couple::new(0.0, 0.0);

/// Angles at which a circle reaches its horizontal or vertical extremes.
pub const CARDINALS: [Float; 4] = [0.0, 90.0, 180.0, 270.0];

/// Maps any finite angle (in degrees) into `[0, 360)`.
pub fn normalize_angle(angle: Float) -> Float {
    let mut angle = angle % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    // -0.00001 + 360.0 rounds up to 360.0 in single precision
    if angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}

/// Canonical angular span of an arc.
///
/// Angles are in degrees, 0° at 3 o'clock, increasing clockwise.
/// The swept interval always goes from `start` to `end` in the
/// clockwise direction:
/// - `wraps == false`: `[start, end]`
/// - `wraps == true`: `[start, 360) ∪ [0, end]`
/// - `full == true`: the whole circle; `start == end` in that case.
///
/// A zero-length span (`start == end` and `!full`) only covers its
/// single endpoint. A full circle has to be asked for with a clockwise
/// sweep of at least 360° (`end - start >= 360`); coinciding angles
/// never mean "everything", and `end < start` is reduced like any
/// other pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSpan {
    pub start: Float,
    pub end: Float,
    pub wraps: bool,
    pub full: bool,
}

impl ArcSpan {
    pub fn new(start_angle: Float, end_angle: Float) -> Self {
        let full = end_angle - start_angle >= 360.0;
        let start = normalize_angle(start_angle);
        let end = match full {
            true => start,
            false => normalize_angle(end_angle),
        };

        Self {
            start,
            end,
            wraps: !full && start > end,
            full,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.start == self.end
    }

    /// Swept angle in degrees, `0..=360`
    pub fn sweep(&self) -> Float {
        match (self.full, self.wraps) {
            (true, _) => 360.0,
            (false, true) => 360.0 - self.start + self.end,
            (false, false) => self.end - self.start,
        }
    }

    pub fn contains(&self, angle: Float) -> bool {
        let angle = normalize_angle(angle);
        match (self.full, self.wraps) {
            (true, _) => true,
            (false, true) => angle >= self.start || angle <= self.end,
            (false, false) => angle >= self.start && angle <= self.end,
        }
    }
}

/// `(sin, cos)` of an angle in degrees.
///
/// Exact at the cardinal angles: `cos(90°)` computed through radians is
/// slightly negative, which would push a bound one pixel too far after
/// rounding outward.
pub fn sin_cos_deg(degrees: Float) -> (Float, Float) {
    match normalize_angle(degrees) {
        d if d == 0.0 => (0.0, 1.0),
        d if d == 90.0 => (1.0, 0.0),
        d if d == 180.0 => (0.0, -1.0),
        d if d == 270.0 => (-1.0, 0.0),
        d => d.to_radians().sin_cos(),
    }
}

/// Point at `radius` from `center` in the direction of `degrees`.
pub fn polar(center: Couple, radius: Float, degrees: Float) -> Couple {
    let (sin, cos) = sin_cos_deg(degrees);
    Couple::new(center.x + radius * cos, center.y + radius * sin)
}

#[derive(Debug, Copy, Clone)]
struct Bounds {
    min: Couple,
    max: Couple,
}

impl Bounds {
    fn at(p: Couple) -> Self {
        Self { min: p, max: p }
    }

    fn add(&mut self, p: Couple) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    fn add_disc(&mut self, center: Couple, radius: Float) {
        self.add(Couple::new(center.x - radius, center.y - radius));
        self.add(Couple::new(center.x + radius, center.y + radius));
    }

    fn enclosing_area(&self) -> Area {
        Area::enclosing(self.min.x, self.min.y, self.max.x, self.max.y)
    }
}

/// Area to invalidate so that an arc with these parameters gets repainted.
///
/// - `center`: center of the arc's circle
/// - `radius`: outer radius; the stroke covers `radius - width ..= radius`
/// - `start_angle`, `end_angle`: degrees, see [`ArcSpan`]
/// - `width`: stroke width; negative values count as zero
/// - `rounded`: whether both ends carry a semicircular cap
///
/// The result is rounded outward and may cover slightly more than the
/// painted pixels, never less.
pub fn arc_area(
    center: Point,
    radius: u16,
    start_angle: Float,
    end_angle: Float,
    width: i32,
    rounded: bool,
) -> Area {
    let span = ArcSpan::new(start_angle, end_angle);

    if span.full {
        let r = radius as i32;
        return Area::new(center.x - r, center.y - r, center.x + r, center.y + r);
    }

    let c = Couple::new(center.x as Float, center.y as Float);
    let r = radius as Float;
    let w = width.max(0) as Float;

    let mut bounds = Bounds::at(polar(c, r, span.start));
    bounds.add(polar(c, r, span.end));

    if !span.is_empty() {
        // short arcs: the inner corners of the butt ends can stick out
        // of the box spanned by the outer arc
        let inner = (r - w).max(0.0);
        bounds.add(polar(c, inner, span.start));
        bounds.add(polar(c, inner, span.end));

        for cardinal in CARDINALS {
            if span.contains(cardinal) {
                bounds.add(polar(c, r, cardinal));
            }
        }
    }

    if rounded && w > 0.0 {
        let cap = w / 2.0;
        let painted_cap = w.min(r) / 2.0;
        for angle in [span.start, span.end] {
            bounds.add_disc(polar(c, r, angle), cap);
            bounds.add_disc(polar(c, r - painted_cap, angle), painted_cap);
        }
    }

    let area = bounds.enclosing_area();
    log::trace!("arc area: {:?} for {:?}, r = {}, w = {}", area, span, radius, width);
    area
}
