//! Static initial layout. Positions reset to this on every page load.

use super::types::{
	CategoryGroup, Connection, ConnectionColor as C, MapData, MindMapNode, NodeCategory as Cat,
	NodeStatus as S,
};

pub const CENTER_ID: &str = "you";

/// Build the initial map: one center node, eleven satellites, the
/// center-to-satellite links, a few cross links, and the group overlays.
pub fn initial_map() -> MapData {
	let nodes = vec![
		MindMapNode::new(CENTER_ID, "You", Cat::Center, "user", 500.0, 350.0),
		// People
		MindMapNode::new("boss", "Boss", Cat::People, "briefcase", 180.0, 160.0)
			.with_status(S::Frequent),
		MindMapNode::new("wife", "Wife", Cat::People, "heart", 160.0, 280.0).with_status(S::Recent),
		MindMapNode::new("peers", "Peers", Cat::People, "users", 200.0, 400.0)
			.with_status(S::Quiet),
		// Places
		MindMapNode::new("workplace", "Workplace", Cat::Places, "building", 180.0, 520.0),
		MindMapNode::new("home", "Home", Cat::Places, "home", 240.0, 620.0).with_status(S::Quiet),
		// Events
		MindMapNode::new("interview", "Upcoming Interview", Cat::Events, "alert", 780.0, 140.0)
			.with_status(S::TimeSensitive),
		// Emotions
		MindMapNode::new("fear1", "Fear", Cat::Emotions, "flame", 800.0, 280.0)
			.with_status(S::Frequent),
		MindMapNode::new("fear2", "Fear", Cat::Emotions, "alert", 820.0, 380.0)
			.with_status(S::Frequent)
			.with_sub_label("Together in the bedroom"),
		MindMapNode::new("pain", "Pain", Cat::Emotions, "heart", 780.0, 520.0),
		MindMapNode::new("anger", "Anger", Cat::Emotions, "brain", 700.0, 600.0),
		MindMapNode::new("overwhelmed", "Overwhelmed", Cat::Emotions, "frown", 820.0, 660.0),
	];

	let connections = vec![
		Connection::new(CENTER_ID, "boss", C::Orange),
		Connection::new(CENTER_ID, "wife", C::Orange),
		Connection::new(CENTER_ID, "peers", C::Orange),
		Connection::new(CENTER_ID, "workplace", C::Blue),
		Connection::new(CENTER_ID, "home", C::Blue),
		Connection::new(CENTER_ID, "interview", C::Coral),
		Connection::new(CENTER_ID, "fear1", C::Pink),
		Connection::new(CENTER_ID, "fear2", C::Pink),
		Connection::new(CENTER_ID, "pain", C::Pink),
		Connection::new(CENTER_ID, "anger", C::Pink),
		Connection::new(CENTER_ID, "overwhelmed", C::Pink),
		// cross links
		Connection::new("boss", "interview", C::Coral),
		Connection::new("wife", "fear2", C::Pink),
		Connection::new("workplace", "anger", C::Blue),
	];

	let groups = vec![
		CategoryGroup::new("People", 80.0, 100.0, 240.0, 360.0),
		CategoryGroup::new("Places", 80.0, 470.0, 260.0, 210.0),
		CategoryGroup::new("Events", 660.0, 80.0, 260.0, 120.0),
		CategoryGroup::new("Emotions", 640.0, 230.0, 300.0, 480.0),
	];

	MapData {
		nodes,
		connections,
		groups,
	}
}
