//! Connection curve geometry.

use super::types::Point;

/// Curve intensities for the two kinds of link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePolicy {
	/// Links that start at the center node.
	pub center: f64,
	/// Links between two satellites; bowed harder so they read as cross links.
	pub cross: f64,
}

impl Default for CurvePolicy {
	fn default() -> Self {
		Self {
			center: 0.2,
			cross: 0.35,
		}
	}
}

impl CurvePolicy {
	/// Intensity for a link, by whether it starts at the center node.
	pub fn intensity(&self, from_center: bool) -> f64 {
		if from_center { self.center } else { self.cross }
	}
}

/// Halfway between `a` and `b`.
pub fn midpoint(a: Point, b: Point) -> Point {
	Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Rotate a direction vector by 90 degrees.
pub fn perpendicular(d: Point) -> Point {
	Point::new(-d.y, d.x)
}

/// Quadratic Bezier between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadCurve {
	/// Start point.
	pub from: Point,
	/// Control point the curve bows towards.
	pub control: Point,
	/// End point.
	pub to: Point,
}

impl QuadCurve {
	/// Control point sits on the perpendicular bisector of `from`-`to`,
	/// displaced by `intensity` times the segment length.
	pub fn between(from: Point, to: Point, intensity: f64) -> Self {
		let d = to - from;
		let control = midpoint(from, to) - perpendicular(d) * intensity;
		Self { from, control, to }
	}

	/// Point at parameter `t` in `[0, 1]`.
	pub fn point_at(&self, t: f64) -> Point {
		let u = 1.0 - t;
		self.from * (u * u) + self.control * (2.0 * u * t) + self.to * (t * t)
	}

	/// SVG path data (`M .. Q ..`).
	pub fn svg_path(&self) -> String {
		format!(
			"M {} {} Q {} {} {} {}",
			self.from.x, self.from.y, self.control.x, self.control.y, self.to.x, self.to.y
		)
	}
}
