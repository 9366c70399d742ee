//! The mind map widget: model, layout state, curve geometry and views.

mod component;
mod geometry;
mod node;
mod notify;
mod render;
mod seed;
mod state;
mod types;

pub use component::MindMapCanvas;
pub use geometry::{CurvePolicy, QuadCurve};
pub use notify::{Notification, Notifier, Toast, ToastQueue};
pub use render::{ConnectionSegment, connection_segments};
pub use seed::initial_map;
pub use state::MindMapState;
pub use types::{
	CategoryGroup, Connection, ConnectionColor, MapData, MindMapNode, NodeCategory, NodeStatus,
	Point, SeedError,
};
