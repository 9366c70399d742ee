//! Data model: nodes, connections, group overlays and the palette.

use std::collections::HashSet;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use thiserror::Error;

/// A position in canvas-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal, growing rightwards.
	pub x: f64,
	/// Vertical, growing downwards.
	pub y: f64,
}

impl Point {
	/// Top-left corner of the canvas.
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, k: f64) -> Point {
		Point::new(self.x * k, self.y * k)
	}
}

/// What a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
	/// A person.
	People,
	/// A place.
	Places,
	/// Something that happens.
	Events,
	/// A feeling.
	Emotions,
	/// The single anchor everything links out from.
	Center,
}

impl NodeCategory {
	/// Lowercase name, also used as a CSS class suffix.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeCategory::People => "people",
			NodeCategory::Places => "places",
			NodeCategory::Events => "events",
			NodeCategory::Emotions => "emotions",
			NodeCategory::Center => "center",
		}
	}
}

impl fmt::Display for NodeCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Badge shown under a satellite node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
	/// Comes up often.
	Frequent,
	/// Came up lately.
	Recent,
	/// Rarely comes up.
	Quiet,
	/// Needs attention soon.
	TimeSensitive,
}

impl NodeStatus {
	/// Kebab-case name, as shown on the badge.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeStatus::Frequent => "frequent",
			NodeStatus::Recent => "recent",
			NodeStatus::Quiet => "quiet",
			NodeStatus::TimeSensitive => "time-sensitive",
		}
	}
}

impl fmt::Display for NodeStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Palette key of a connection. Each key maps to a start and end color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectionColor {
	/// People links.
	Orange,
	/// Emotion links.
	Pink,
	/// Place links.
	Blue,
	/// Event links.
	Coral,
}

impl ConnectionColor {
	/// Every palette entry.
	pub const ALL: [ConnectionColor; 4] = [
		ConnectionColor::Orange,
		ConnectionColor::Pink,
		ConnectionColor::Blue,
		ConnectionColor::Coral,
	];

	/// Lowercase palette key.
	pub fn key(self) -> &'static str {
		match self {
			ConnectionColor::Orange => "orange",
			ConnectionColor::Pink => "pink",
			ConnectionColor::Blue => "blue",
			ConnectionColor::Coral => "coral",
		}
	}

	/// Color at the ends of a link.
	pub fn start(self) -> &'static str {
		match self {
			ConnectionColor::Orange => "#f97316",
			ConnectionColor::Pink => "#ec4899",
			ConnectionColor::Blue => "#3b82f6",
			ConnectionColor::Coral => "#f87171",
		}
	}

	/// Color in the middle of a link.
	pub fn end(self) -> &'static str {
		match self {
			ConnectionColor::Orange => "#ea580c",
			ConnectionColor::Pink => "#db2777",
			ConnectionColor::Blue => "#2563eb",
			ConnectionColor::Coral => "#ef4444",
		}
	}

	/// Id of the SVG gradient definition for this palette entry.
	pub fn gradient_id(self) -> String {
		format!("gradient-{}", self.key())
	}
}

/// A labelled point on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct MindMapNode {
	/// Unique id, referenced by connections.
	pub id: String,
	/// Text on the card.
	pub label: String,
	/// What the node stands for.
	pub category: NodeCategory,
	/// Icon key; styling picks the glyph.
	pub icon: String,
	/// Optional badge.
	pub status: Option<NodeStatus>,
	/// Optional second line under the card.
	pub sub_label: Option<String>,
	/// Stored position; never includes the pan offset.
	pub position: Point,
}

impl MindMapNode {
	/// Node without status or sub-label.
	pub fn new(id: &str, label: &str, category: NodeCategory, icon: &str, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			category,
			icon: icon.into(),
			status: None,
			sub_label: None,
			position: Point::new(x, y),
		}
	}

	/// Attach a status badge.
	pub fn with_status(mut self, status: NodeStatus) -> Self {
		self.status = Some(status);
		self
	}

	/// Attach a sub-label.
	pub fn with_sub_label(mut self, sub_label: &str) -> Self {
		self.sub_label = Some(sub_label.into());
		self
	}

	/// True for the anchor node.
	pub fn is_center(&self) -> bool {
		self.category == NodeCategory::Center
	}
}

/// Directed, colored link between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
	/// Palette entry.
	pub color: ConnectionColor,
}

impl Connection {
	/// Link `from` -> `to` drawn in `color`.
	pub fn new(from: &str, to: &str, color: ConnectionColor) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
			color,
		}
	}
}

/// Hand-placed dashed region labelling a cluster of nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup {
	/// Caption on the top edge.
	pub label: String,
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl CategoryGroup {
	/// Group box with its top-left corner at `(x, y)`.
	pub fn new(label: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			label: label.into(),
			x,
			y,
			width,
			height,
		}
	}

	/// Top-left corner.
	pub fn origin(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

/// Inconsistency found by [`MapData::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
	/// A connection names a node that does not exist.
	#[error("connection {from} -> {to} references missing node `{missing}`")]
	DanglingEndpoint {
		/// Source id of the connection.
		from: String,
		/// Target id of the connection.
		to: String,
		/// The endpoint that was not found.
		missing: String,
	},
	/// Two nodes share an id.
	#[error("node id `{0}` is used more than once")]
	DuplicateId(String),
	/// Zero or several center nodes.
	#[error("expected exactly one center node, found {0}")]
	CenterCount(usize),
}

/// Everything a map is built from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapData {
	/// Exactly one of them is the center.
	pub nodes: Vec<MindMapNode>,
	/// Links between node ids.
	pub connections: Vec<Connection>,
	/// Dashed overlays; independent of node membership.
	pub groups: Vec<CategoryGroup>,
}

impl MapData {
	/// Checks node id uniqueness, the single center node, and that every
	/// connection endpoint names an existing node.
	pub fn validate(&self) -> Result<(), SeedError> {
		let mut ids = HashSet::new();
		for node in &self.nodes {
			if !ids.insert(node.id.as_str()) {
				return Err(SeedError::DuplicateId(node.id.clone()));
			}
		}

		let centers = self.nodes.iter().filter(|n| n.is_center()).count();
		if centers != 1 {
			return Err(SeedError::CenterCount(centers));
		}

		for conn in &self.connections {
			for end in [&conn.from, &conn.to] {
				if !ids.contains(end.as_str()) {
					return Err(SeedError::DanglingEndpoint {
						from: conn.from.clone(),
						to: conn.to.clone(),
						missing: end.clone(),
					});
				}
			}
		}
		Ok(())
	}
}
