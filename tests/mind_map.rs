#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use leptos::mount::mount_to;
use leptos::prelude::*;
use mind_map_canvas::{
	CurvePolicy, MindMapCanvas, MindMapState, Notifier, Point, Toast, ToastQueue,
	connection_segments, initial_map,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> HtmlElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
	document.body().unwrap().append_child(&host).unwrap();
	host
}

async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn current_message(queue: &ToastQueue) -> Option<String> {
	queue.current().map(|n| n.message)
}

#[wasm_bindgen_test]
fn initial_load_matches_seed() {
	let map = initial_map();
	let state = MindMapState::new(&map);
	assert_eq!(state.nodes().len(), map.nodes.len());
	assert_eq!(state.connections().len(), map.connections.len());
	assert!(map.validate().is_ok());

	let segs = connection_segments(&state, &CurvePolicy::default(), true);
	assert_eq!(segs.len(), map.connections.len());
	assert!(segs.iter().all(|s| s.start_dot() != Point::ORIGIN));
}

#[wasm_bindgen_test]
fn pan_drag_select_session() {
	let mut state = MindMapState::new(&initial_map());

	state.begin_pan(Point::new(400.0, 300.0));
	state.pan_to(Point::new(430.0, 280.0));
	state.end_gestures();

	let grab = state.visual_position("anger").unwrap();
	state.begin_drag("anger", grab);
	state.drag_to(Point::new(650.0, 500.0));
	state.end_gestures();
	assert_eq!(state.position("anger"), Some(Point::new(620.0, 520.0)));
	assert!(state.take_click_suppression());

	let notice = state.toggle_selection("interview").unwrap();
	assert_eq!(notice.message, "Selected: Upcoming Interview");
	assert_eq!(notice.detail, "Status: time-sensitive");
	state.toggle_selection("interview");
	assert_eq!(state.selected(), None);
}

#[wasm_bindgen_test]
fn first_frame_shows_every_node() {
	let host = host();
	let map = initial_map();
	let count = map.nodes.len();
	let data = Signal::derive(move || map.clone());
	let _mounted = mount_to(host.clone(), move || {
		view! { <MindMapCanvas data=data width=Some(800.0) height=Some(600.0) /> }
	});

	// no await: the nodes must be there before any effect has run
	let nodes = host.query_selector_all(".mind-map-node").unwrap();
	assert_eq!(nodes.length() as usize, count);
	assert!(host.query_selector(".mind-map-node.center").unwrap().is_some());
}

#[wasm_bindgen_test]
fn second_notice_replaces_first() {
	let queue = ToastQueue::new();
	queue.notify("Selected: Boss", "Status: frequent");
	queue.notify("Selected: Pain", "Category: emotions");
	assert_eq!(current_message(&queue), Some("Selected: Pain".into()));
}

#[wasm_bindgen_test]
async fn earlier_timeout_keeps_newer_notice() {
	let queue = ToastQueue::with_lifetime(Duration::from_millis(200));
	queue.notify("first", "");
	sleep(120).await;
	queue.notify("second", "");

	// the first notice's timer has fired by now, the second's has not
	sleep(120).await;
	assert_eq!(current_message(&queue), Some("second".into()));

	sleep(200).await;
	assert_eq!(current_message(&queue), None);
}

#[wasm_bindgen_test]
async fn pressing_toast_does_not_reach_canvas() {
	let host = host();
	let queue = ToastQueue::new();
	let presses = RwSignal::new(0);
	let _mounted = mount_to(host.clone(), move || {
		view! {
			<div class="backdrop" on:mousedown=move |_| presses.update(|n| *n += 1)>
				<Toast queue=queue />
			</div>
		}
	});

	queue.notify("Selected: Boss", "Status: frequent");
	sleep(20).await;

	let init = MouseEventInit::new();
	init.set_bubbles(true);
	let press = || MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();

	let toast = host.query_selector(".toast").unwrap().unwrap();
	toast.dispatch_event(&press()).unwrap();
	assert_eq!(presses.get_untracked(), 0);

	let backdrop = host.query_selector(".backdrop").unwrap().unwrap();
	backdrop.dispatch_event(&press()).unwrap();
	assert_eq!(presses.get_untracked(), 1);
}
