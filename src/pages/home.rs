use leptos::prelude::*;

use crate::components::mind_map::{MindMapCanvas, initial_map};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let map = Signal::derive(initial_map);

	view! {
		<div class="fullscreen-map">
			<MindMapCanvas data=map fullscreen=true />
		</div>
	}
}
