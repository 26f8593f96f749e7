use crate::area::Area;
use crate::computing::arc_area;
use crate::computing::ArcSpan;
use crate::computing::Float;
use crate::computing::Point;

use rgb::RGB8;

pub type Opacity = u8;

pub const OPA_TRANSP: Opacity = 0;
pub const OPA_COVER: Opacity = 255;

pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Handle to an image owned outside of this crate.
///
/// See [`ImageSource`](crate::rendering::ImageSource).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// What a primitive is painted with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fill {
	Color(RGB8),
	Image(ImageId),
}

impl Default for Fill {
	fn default() -> Self {
		Fill::Color(WHITE)
	}
}

/// Describes how to draw an arc.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcDescriptor {
	pub fill: Fill,
	/// Thickness of the stroke, measured inward from `radius`
	pub width: i32,
	/// Degrees, 0° is the 3 o'clock position, 90° is 6 o'clock.
	/// Negative values and values past 360° are accepted.
	pub start_angle: Float,
	pub end_angle: Float,
	pub center: Point,
	/// Outer radius
	pub radius: u16,
	pub opacity: Opacity,
	/// Semicircular caps at both ends
	pub rounded: bool,
}

impl ArcDescriptor {
	/// Opaque white, zero width, zero-length span, square ends.
	pub const fn new() -> Self {
		Self {
			fill: Fill::Color(WHITE),
			width: 0,
			start_angle: 0.0,
			end_angle: 0.0,
			center: Point::new(0, 0),
			radius: 0,
			opacity: OPA_COVER,
			rounded: false,
		}
	}

	pub fn color(&self) -> Option<RGB8> {
		match self.fill {
			Fill::Color(color) => Some(color),
			Fill::Image(_) => None,
		}
	}

	pub fn image(&self) -> Option<ImageId> {
		match self.fill {
			Fill::Image(id) => Some(id),
			Fill::Color(_) => None,
		}
	}

	pub fn span(&self) -> ArcSpan {
		ArcSpan::new(self.start_angle, self.end_angle)
	}

	pub fn area(&self) -> Area {
		arc_area(
			self.center,
			self.radius,
			self.start_angle,
			self.end_angle,
			self.width,
			self.rounded,
		)
	}
}

impl Default for ArcDescriptor {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineDescriptor {
	pub points: [Point; 2],
	pub width: i32,
	pub color: RGB8,
	pub opacity: Opacity,
}

impl LineDescriptor {
	pub const fn new(p1: Point, p2: Point) -> Self {
		Self {
			points: [p1, p2],
			width: 1,
			color: BLACK,
			opacity: OPA_COVER,
		}
	}

	pub fn area(&self) -> Area {
		let [p1, p2] = self.points;
		// round up for odd widths
		let half = (self.width.max(0) + 1) / 2;
		Area::new(
			p1.x.min(p2.x) - half,
			p1.y.min(p2.y) - half,
			p1.x.max(p2.x) + half,
			p1.y.max(p2.y) + half,
		)
	}
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectDescriptor {
	pub area: Area,
	pub color: RGB8,
	pub opacity: Opacity,
}

impl RectDescriptor {
	pub const fn new(area: Area, color: RGB8) -> Self {
		Self {
			area,
			color,
			opacity: OPA_COVER,
		}
	}
}
