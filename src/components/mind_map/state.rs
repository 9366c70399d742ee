//! Node store, selection and the pan/drag gesture machines.

use log::{debug, info};

use super::notify::Notification;
use super::types::{CategoryGroup, Connection, MapData, MindMapNode, Point};

/// Background drag gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PanState {
	#[default]
	Idle,
	Panning {
		pointer_start: Point,
		offset_start: Point,
	},
}

/// Node drag gesture. Only one pointer exists, so one node drags at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
	#[default]
	Idle,
	Dragging {
		node_id: String,
		/// Pointer minus the node's visual center at gesture start.
		grab_offset: Point,
		moved: bool,
	},
}

/// Owns every node position plus the view and gesture state around them.
///
/// Two coordinate spaces are kept apart: *stored* positions live on the
/// nodes and groups and never include panning; *visual* positions are
/// `stored + pan_offset` and are only ever computed on read.
#[derive(Clone, Debug, Default)]
pub struct MindMapState {
	nodes: Vec<MindMapNode>,
	connections: Vec<Connection>,
	groups: Vec<CategoryGroup>,
	pan_offset: Point,
	pan: PanState,
	drag: DragState,
	selected: Option<String>,
	suppress_click: bool,
}

impl MindMapState {
	/// Fresh state at the initial layout, unpanned and with nothing selected.
	pub fn new(data: &MapData) -> Self {
		Self {
			nodes: data.nodes.clone(),
			connections: data.connections.clone(),
			groups: data.groups.clone(),
			..Self::default()
		}
	}

	/// All nodes, in seed order.
	pub fn nodes(&self) -> &[MindMapNode] {
		&self.nodes
	}

	/// All connections.
	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	/// Group overlays at their stored positions.
	pub fn groups(&self) -> &[CategoryGroup] {
		&self.groups
	}

	/// Node by id.
	pub fn node(&self, id: &str) -> Option<&MindMapNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Stored position of `id`.
	pub fn position(&self, id: &str) -> Option<Point> {
		self.node(id).map(|n| n.position)
	}

	/// Replace the stored position of `id`. Unknown ids are ignored.
	pub fn move_node(&mut self, id: &str, to: Point) -> bool {
		match self.nodes.iter_mut().find(|n| n.id == id) {
			Some(node) => {
				node.position = to;
				true
			}
			None => false,
		}
	}

	/// Current pan offset.
	pub fn pan_offset(&self) -> Point {
		self.pan_offset
	}

	/// Stored to on-screen coordinates.
	pub fn to_visual(&self, stored: Point) -> Point {
		stored + self.pan_offset
	}

	/// On-screen to stored coordinates.
	pub fn to_stored(&self, visual: Point) -> Point {
		visual - self.pan_offset
	}

	/// On-screen position of `id`.
	pub fn visual_position(&self, id: &str) -> Option<Point> {
		self.position(id).map(|p| self.to_visual(p))
	}

	/// Visual position of a connection endpoint. A missing node resolves to
	/// the canvas origin.
	pub fn endpoint(&self, id: &str) -> Point {
		self.visual_position(id).unwrap_or(Point::ORIGIN)
	}

	/// Group overlays shifted by the pan offset.
	pub fn visual_groups(&self) -> Vec<CategoryGroup> {
		self.groups
			.iter()
			.map(|g| {
				let origin = self.to_visual(g.origin());
				CategoryGroup {
					x: origin.x,
					y: origin.y,
					..g.clone()
				}
			})
			.collect()
	}

	/// Id of the selected node.
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// True when `id` is the selected node.
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}

	/// Select `id`, or clear the selection if it is already selected.
	/// Returns the notice to show when `id` names an existing node.
	pub fn toggle_selection(&mut self, id: &str) -> Option<Notification> {
		if self.is_selected(id) {
			self.selected = None;
		} else {
			self.selected = Some(id.to_string());
		}
		info!("selection: {:?}", self.selected);
		self.node(id).map(Notification::for_selection)
	}

	/// True between a background press and the next release.
	pub fn is_panning(&self) -> bool {
		matches!(self.pan, PanState::Panning { .. })
	}

	/// Start panning from canvas-local `pointer`.
	pub fn begin_pan(&mut self, pointer: Point) {
		debug!("pan start at ({}, {})", pointer.x, pointer.y);
		self.pan = PanState::Panning {
			pointer_start: pointer,
			offset_start: self.pan_offset,
		};
	}

	/// Follow the pointer while panning. Ignored when idle.
	pub fn pan_to(&mut self, pointer: Point) -> bool {
		let PanState::Panning {
			pointer_start,
			offset_start,
		} = self.pan
		else {
			return false;
		};
		self.pan_offset = pointer - (pointer_start - offset_start);
		true
	}

	/// Id of the node being dragged.
	pub fn dragging_id(&self) -> Option<&str> {
		match &self.drag {
			DragState::Dragging { node_id, .. } => Some(node_id.as_str()),
			DragState::Idle => None,
		}
	}

	/// Start dragging `id` from canvas-local `pointer`. Cancels any pan.
	pub fn begin_drag(&mut self, id: &str, pointer: Point) -> bool {
		let Some(center) = self.visual_position(id) else {
			return false;
		};
		debug!("drag start: {id}");
		self.pan = PanState::Idle;
		self.suppress_click = false;
		self.drag = DragState::Dragging {
			node_id: id.to_string(),
			grab_offset: pointer - center,
			moved: false,
		};
		true
	}

	/// Move the dragged node so the grab point stays under the pointer.
	/// Ignored when idle.
	pub fn drag_to(&mut self, pointer: Point) -> bool {
		let stored = match &self.drag {
			DragState::Dragging { grab_offset, .. } => self.to_stored(pointer - *grab_offset),
			DragState::Idle => return false,
		};
		let DragState::Dragging { node_id, moved, .. } = &mut self.drag else {
			return false;
		};
		let Some(node) = self.nodes.iter_mut().find(|n| n.id == *node_id) else {
			return false;
		};
		if node.position != stored {
			node.position = stored;
			*moved = true;
		}
		true
	}

	/// Pointer released anywhere: both gestures return to idle.
	pub fn end_gestures(&mut self) {
		if let DragState::Dragging { node_id, moved, .. } = std::mem::take(&mut self.drag) {
			debug!("drag end: {node_id} (moved: {moved})");
			self.suppress_click = moved;
		}
		if self.is_panning() {
			debug!(
				"pan end at offset ({}, {})",
				self.pan_offset.x, self.pan_offset.y
			);
			self.pan = PanState::Idle;
		}
	}

	/// True once after a drag that moved its node; the click that follows
	/// the release should not toggle selection.
	pub fn take_click_suppression(&mut self) -> bool {
		std::mem::take(&mut self.suppress_click)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::mind_map::seed::initial_map;

	fn state() -> MindMapState {
		MindMapState::new(&initial_map())
	}

	#[test]
	fn move_node_replaces_position() {
		let mut s = state();
		assert!(s.move_node("boss", Point::new(12.5, -3.0)));
		assert_eq!(s.position("boss"), Some(Point::new(12.5, -3.0)));
	}

	#[test]
	fn move_unknown_node_is_noop() {
		let mut s = state();
		let before: Vec<_> = s.nodes().iter().map(|n| n.position).collect();
		assert!(!s.move_node("nobody", Point::new(1.0, 1.0)));
		let after: Vec<_> = s.nodes().iter().map(|n| n.position).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn missing_endpoint_resolves_to_origin() {
		let mut s = state();
		s.begin_pan(Point::ORIGIN);
		s.pan_to(Point::new(30.0, 40.0));
		s.end_gestures();
		assert_eq!(s.endpoint("ghost"), Point::ORIGIN);
		assert_eq!(s.endpoint("you"), Point::new(530.0, 390.0));
	}

	#[test]
	fn selection_toggles() {
		let mut s = state();
		let notice = s.toggle_selection("wife");
		assert!(s.is_selected("wife"));
		assert_eq!(notice.map(|n| n.detail), Some("Status: recent".into()));
		s.toggle_selection("wife");
		assert_eq!(s.selected(), None);
	}

	#[test]
	fn selecting_another_node_replaces_selection() {
		let mut s = state();
		s.toggle_selection("wife");
		s.toggle_selection("boss");
		assert_eq!(s.selected(), Some("boss"));
	}

	#[test]
	fn selecting_unknown_id_has_no_notice() {
		let mut s = state();
		assert_eq!(s.toggle_selection("ghost"), None);
	}

	#[test]
	fn pan_accumulates_across_gestures() {
		let mut s = state();
		s.begin_pan(Point::new(100.0, 100.0));
		s.pan_to(Point::new(110.0, 95.0));
		s.pan_to(Point::new(120.0, 90.0));
		s.end_gestures();
		assert_eq!(s.pan_offset(), Point::new(20.0, -10.0));
		assert!(!s.is_panning());

		s.begin_pan(Point::new(0.0, 0.0));
		s.pan_to(Point::new(5.0, 5.0));
		s.end_gestures();
		assert_eq!(s.pan_offset(), Point::new(25.0, -5.0));
	}

	#[test]
	fn pan_does_not_touch_stored_positions() {
		let mut s = state();
		let before = s.position("home");
		s.begin_pan(Point::ORIGIN);
		s.pan_to(Point::new(-50.0, 70.0));
		assert_eq!(s.position("home"), before);
		assert_eq!(
			s.visual_position("home"),
			before.map(|p| p + Point::new(-50.0, 70.0))
		);
		assert_eq!(s.visual_groups()[0].x, s.groups()[0].x - 50.0);
	}

	#[test]
	fn pan_move_without_gesture_is_ignored() {
		let mut s = state();
		assert!(!s.pan_to(Point::new(9.0, 9.0)));
		assert_eq!(s.pan_offset(), Point::ORIGIN);
	}

	#[test]
	fn pan_then_drag_stores_pan_independent_position() {
		let mut s = state();
		let (dx, dy) = (40.0, -25.0);
		s.begin_pan(Point::new(10.0, 10.0));
		s.pan_to(Point::new(10.0 + dx, 10.0 + dy));
		s.end_gestures();

		let center = s.visual_position("peers").unwrap();
		assert!(s.begin_drag("peers", center));
		s.drag_to(Point::new(300.0, 310.0));
		s.end_gestures();
		assert_eq!(s.position("peers"), Some(Point::new(300.0 - dx, 310.0 - dy)));
	}

	#[test]
	fn drag_keeps_grab_offset() {
		let mut s = state();
		// grab the center node 6px right of and 4px below its center
		assert!(s.begin_drag("you", Point::new(506.0, 354.0)));
		s.drag_to(Point::new(606.0, 454.0));
		assert_eq!(s.position("you"), Some(Point::new(600.0, 450.0)));
		assert_eq!(s.dragging_id(), Some("you"));
	}

	#[test]
	fn drag_cancels_pan_and_unknown_node_does_not_start() {
		let mut s = state();
		s.begin_pan(Point::ORIGIN);
		assert!(!s.begin_drag("ghost", Point::ORIGIN));
		assert!(s.is_panning());
		assert!(s.begin_drag("boss", Point::new(180.0, 160.0)));
		assert!(!s.is_panning());
	}

	#[test]
	fn click_after_moving_drag_is_suppressed_once() {
		let mut s = state();
		s.begin_drag("boss", Point::new(180.0, 160.0));
		s.drag_to(Point::new(200.0, 160.0));
		s.end_gestures();
		assert!(s.take_click_suppression());
		assert!(!s.take_click_suppression());
	}

	#[test]
	fn click_without_movement_is_not_suppressed() {
		let mut s = state();
		s.begin_drag("boss", Point::new(180.0, 160.0));
		s.drag_to(Point::new(180.0, 160.0));
		s.end_gestures();
		assert!(!s.take_click_suppression());
		assert_eq!(s.drag, DragState::Idle);
	}
}
