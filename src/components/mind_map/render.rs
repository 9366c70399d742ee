use super::geometry::{CurvePolicy, QuadCurve};
use super::state::MindMapState;
use super::types::{ConnectionColor, Point};

// stroke and dot sizes, in pixels
pub const GLOW_WIDTH: f64 = 4.0;
pub const GLOW_OPACITY: f64 = 0.3;
pub const LINE_WIDTH: f64 = 2.0;
pub const DOT_RADIUS: f64 = 4.0;
pub const MID_DOT_RADIUS: f64 = 2.5;

/// One connection, resolved against current visual positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionSegment {
	/// Stable per-link key: `from-to-index`.
	pub key: String,
	/// Palette entry for strokes and dots.
	pub color: ConnectionColor,
	/// Curve in visual coordinates.
	pub curve: QuadCurve,
	/// SVG path data of `curve`.
	pub path: String,
	/// Curve midpoint when midpoint dots are on.
	pub mid_dot: Option<Point>,
}

impl ConnectionSegment {
	/// Dot at the source end.
	pub fn start_dot(&self) -> Point {
		self.curve.from
	}

	/// Dot at the target end.
	pub fn end_dot(&self) -> Point {
		self.curve.to
	}
}

/// Derive every connection's curve from the current state. Pure; safe to
/// call on every redraw.
pub fn connection_segments(
	state: &MindMapState,
	curves: &CurvePolicy,
	show_midpoints: bool,
) -> Vec<ConnectionSegment> {
	state
		.connections()
		.iter()
		.enumerate()
		.map(|(i, conn)| {
			let from_center = state.node(&conn.from).is_some_and(|n| n.is_center());
			let curve = QuadCurve::between(
				state.endpoint(&conn.from),
				state.endpoint(&conn.to),
				curves.intensity(from_center),
			);
			ConnectionSegment {
				key: format!("{}-{}-{}", conn.from, conn.to, i),
				color: conn.color,
				path: curve.svg_path(),
				mid_dot: show_midpoints.then(|| curve.point_at(0.5)),
				curve,
			}
		})
		.collect()
}
