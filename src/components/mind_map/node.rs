use leptos::html;
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::component::canvas_point;
use super::notify::{Notifier, ToastQueue};
use super::state::MindMapState;
use super::types::MindMapNode;

/// One draggable, selectable node. Positioned by its visual center.
#[component]
pub fn MindMapNodeCard(
	node: MindMapNode,
	state: RwSignal<MindMapState>,
	canvas_ref: NodeRef<html::Div>,
	toasts: ToastQueue,
) -> impl IntoView {
	let id = StoredValue::new(node.id.clone());
	let is_center = node.is_center();
	let category = node.category.as_str();

	let style = move || {
		id.with_value(|id| {
			let p = state.with(|s| s.visual_position(id)).unwrap_or_default();
			format!("left: {}px; top: {}px;", p.x, p.y)
		})
	};

	let class = move || {
		id.with_value(|id| {
			state.with(|s| {
				let mut class = format!("mind-map-node node-{category}");
				if is_center {
					class.push_str(" center");
				}
				if s.is_selected(id) {
					class.push_str(" selected");
				}
				if s.dragging_id() == Some(id.as_str()) {
					class.push_str(" dragging");
				}
				class
			})
		})
	};

	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		ev.prevent_default();
		// keep the background from starting a pan
		ev.stop_propagation();
		let Some(pointer) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		state.update(|s| {
			id.with_value(|id| s.begin_drag(id, pointer));
		});
	};

	let on_click = move |ev: MouseEvent| {
		ev.stop_propagation();
		let mut notice = None;
		state.update(|s| {
			if !s.take_click_suppression() {
				notice = id.with_value(|id| s.toggle_selection(id));
			}
		});
		if let Some(n) = notice {
			toasts.notify(&n.message, &n.detail);
		}
	};

	let icon = view! { <span class=format!("node-icon icon-{}", node.icon) aria-hidden="true"></span> };

	let body = if is_center {
		view! {
			<div class="node-card node-card-center">
				{icon}
				<span class="node-label">{node.label}</span>
			</div>
		}
		.into_any()
	} else {
		view! {
			<div class="node-stack">
				<div class="node-card">
					{icon}
					<span class="node-label">{node.label}</span>
				</div>
				{node.status.map(|status| {
					view! {
						<div class=format!("status-badge status-{status}")>{status.as_str()}</div>
					}
				})}
				{node.sub_label.map(|sub| view! { <span class="sub-label">{sub}</span> })}
			</div>
		}
		.into_any()
	};

	view! {
		<div class=class style=style on:mousedown=on_mousedown on:click=on_click>
			{body}
		</div>
	}
}
