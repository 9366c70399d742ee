use leptos::prelude::*;
use leptos::{ev, html};
use log::warn;
use web_sys::MouseEvent;

use super::geometry::CurvePolicy;
use super::node::MindMapNodeCard;
use super::notify::{Toast, ToastQueue};
use super::render::{
	self, ConnectionSegment, DOT_RADIUS, GLOW_OPACITY, GLOW_WIDTH, LINE_WIDTH, MID_DOT_RADIUS,
};
use super::state::MindMapState;
use super::types::{ConnectionColor, MapData, MindMapNode, Point};

/// Pointer position relative to the canvas element.
pub(super) fn canvas_point(canvas_ref: NodeRef<html::Div>, ev: &MouseEvent) -> Option<Point> {
	let canvas = canvas_ref.get_untracked()?;
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Validate `map`, logging any inconsistency, and build the state for it.
/// Dangling ids still render; they resolve to the canvas origin.
fn load(map: &MapData) -> MindMapState {
	if let Err(err) = map.validate() {
		warn!("mind map data is inconsistent: {err}");
	}
	MindMapState::new(map)
}

/// Interactive mind map: draggable nodes, a pannable background, curved
/// connections and dashed category groups.
#[component]
pub fn MindMapCanvas(
	/// Nodes, connections and groups to show. A change resets the layout.
	#[prop(into)]
	data: Signal<MapData>,
	/// Fill the whole window.
	#[prop(default = false)]
	fullscreen: bool,
	/// Width in pixels; the parent's width when unset.
	#[prop(default = None)]
	width: Option<f64>,
	/// Height in pixels; the parent's height when unset.
	#[prop(default = None)]
	height: Option<f64>,
	/// How strongly connections bow.
	#[prop(optional)]
	curves: CurvePolicy,
	/// Draw a dot at the middle of each connection.
	#[prop(default = true)]
	show_midpoints: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<html::Div>::new();
	let state = RwSignal::new(load(&data.get_untracked()));
	let toasts = ToastQueue::new();

	// The initial map is already loaded; only later changes rebuild the state.
	Effect::new(move |prev: Option<()>| {
		let map = data.get();
		if prev.is_some() {
			state.set(load(&map));
		}
	});

	let gesture_active =
		move || state.with_untracked(|s| s.is_panning() || s.dragging_id().is_some());

	// Moves and releases are tracked on the window so a gesture keeps going
	// when the pointer leaves the canvas.
	let move_handle = window_event_listener(ev::mousemove, move |ev| {
		if !gesture_active() {
			return;
		}
		let Some(pointer) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		state.update(|s| {
			if s.is_panning() {
				s.pan_to(pointer);
			} else {
				s.drag_to(pointer);
			}
		});
	});
	let up_handle = window_event_listener(ev::mouseup, move |_| {
		if gesture_active() {
			state.update(MindMapState::end_gestures);
		}
	});
	let blur_handle = window_event_listener(ev::blur, move |_| {
		if gesture_active() {
			state.update(MindMapState::end_gestures);
		}
	});
	on_cleanup(move || {
		move_handle.remove();
		up_handle.remove();
		blur_handle.remove();
	});

	// Only reached for presses on the background; nodes stop propagation.
	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let Some(pointer) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		state.update(|s| s.begin_pan(pointer));
	};

	let size = if fullscreen {
		"width: 100vw; height: 100vh;".to_string()
	} else {
		let px = |v: Option<f64>| v.map_or_else(|| "100%".to_string(), |v| format!("{v}px"));
		format!("width: {}; height: {};", px(width), px(height))
	};
	let style = move || {
		let cursor = if state.with(|s| s.is_panning()) { "grabbing" } else { "grab" };
		format!("{size} cursor: {cursor};")
	};

	let segments = move || state.with(|s| render::connection_segments(s, &curves, show_midpoints));
	let groups = move || state.with(|s| s.visual_groups());
	let nodes = move || state.with(|s| s.nodes().to_vec());

	view! {
		<div node_ref=canvas_ref class="mind-map-canvas" style=style on:mousedown=on_mousedown>
			<div class="stars" />

			<svg class="connection-layer">
				<defs>
					{ConnectionColor::ALL.iter().map(|&c| gradient_def(c)).collect_view()}
					<filter id="glow">
						<feGaussianBlur stdDeviation="3" result="coloredBlur" />
						<feMerge>
							<feMergeNode in="coloredBlur" />
							<feMergeNode in="SourceGraphic" />
						</feMerge>
					</filter>
				</defs>
				{move || segments().into_iter().map(connection_view).collect_view()}
			</svg>

			{move || {
				groups()
					.into_iter()
					.map(|g| {
						let style = format!(
							"left: {}px; top: {}px; width: {}px; height: {}px;",
							g.x, g.y, g.width, g.height
						);
						view! {
							<div class="category-group" style=style>
								<div class="category-group-label">{g.label}</div>
							</div>
						}
					})
					.collect_view()
			}}

			<For
				each=nodes
				key=|n: &MindMapNode| n.id.clone()
				children=move |node: MindMapNode| {
					view! { <MindMapNodeCard node=node state=state canvas_ref=canvas_ref toasts=toasts /> }
				}
			/>

			<div class="instructions">
				"Click to select, drag to move nodes, drag the background to pan"
			</div>
			<Toast queue=toasts />
		</div>
	}
}

fn gradient_def(color: ConnectionColor) -> impl IntoView {
	view! {
		<linearGradient id=color.gradient_id() x1="0%" y1="0%" x2="100%" y2="0%">
			<stop offset="0%" stop-color=color.start() stop-opacity="0.8" />
			<stop offset="50%" stop-color=color.end() stop-opacity="1" />
			<stop offset="100%" stop-color=color.start() stop-opacity="0.8" />
		</linearGradient>
	}
}

fn connection_view(seg: ConnectionSegment) -> impl IntoView {
	let color = seg.color;
	let stroke = format!("url(#{})", color.gradient_id());
	let (start, end) = (seg.start_dot(), seg.end_dot());
	view! {
		<g data-link=seg.key>
			<path
				d=seg.path.clone()
				fill="none"
				stroke=stroke.clone()
				stroke-width=GLOW_WIDTH.to_string()
				stroke-linecap="round"
				opacity=GLOW_OPACITY.to_string()
				filter="url(#glow)"
			/>
			<path
				d=seg.path
				fill="none"
				stroke=stroke
				stroke-width=LINE_WIDTH.to_string()
				stroke-linecap="round"
				class="pulse-glow"
			/>
			<circle
				cx=start.x.to_string()
				cy=start.y.to_string()
				r=DOT_RADIUS.to_string()
				fill=color.start()
			/>
			<circle cx=end.x.to_string() cy=end.y.to_string() r=DOT_RADIUS.to_string() fill=color.end() />
			{seg.mid_dot.map(|m| {
				view! {
					<circle
						cx=m.x.to_string()
						cy=m.y.to_string()
						r=MID_DOT_RADIUS.to_string()
						fill=color.end()
						opacity="0.8"
					/>
				}
			})}
		</g>
	}
}
