//! Notification side channel and the toast overlay that displays it.

use std::time::Duration;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::types::MindMapNode;

const TOAST_LIFETIME: Duration = Duration::from_millis(3000);

/// A short human readable notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
	/// Headline, e.g. `Selected: Boss`.
	pub message: String,
	/// Secondary line under the headline.
	pub detail: String,
}

impl Notification {
	/// Message shown when `node` becomes (or stops being) selected.
	pub fn for_selection(node: &MindMapNode) -> Self {
		let detail = match node.status {
			Some(status) => format!("Status: {status}"),
			None => format!("Category: {}", node.category),
		};
		Self {
			message: format!("Selected: {}", node.label),
			detail,
		}
	}
}

/// Side channel for human readable notices.
pub trait Notifier {
	/// Show `message` with `detail` underneath.
	fn notify(&self, message: &str, detail: &str);
}

#[derive(Clone, Debug, PartialEq)]
struct ActiveToast {
	seq: u64,
	notification: Notification,
}

/// Single-slot toast queue: a newer notice replaces the visible one, and
/// each notice dismisses itself after its lifetime.
#[derive(Clone, Copy)]
pub struct ToastQueue {
	current: RwSignal<Option<ActiveToast>>,
	seq: StoredValue<u64>,
	lifetime: Duration,
}

impl ToastQueue {
	/// Queue whose notices last three seconds.
	pub fn new() -> Self {
		Self::with_lifetime(TOAST_LIFETIME)
	}

	/// Queue whose notices last `lifetime`.
	pub fn with_lifetime(lifetime: Duration) -> Self {
		Self {
			current: RwSignal::new(None),
			seq: StoredValue::new(0),
			lifetime,
		}
	}

	/// The notice on screen, if any.
	pub fn current(&self) -> Option<Notification> {
		self.current.with(|t| t.as_ref().map(|t| t.notification.clone()))
	}

	/// Hide the visible notice now.
	pub fn dismiss(&self) {
		self.current.set(None);
	}

	fn show(&self, notification: Notification) -> u64 {
		self.seq.update_value(|s| *s += 1);
		let seq = self.seq.get_value();
		self.current.set(Some(ActiveToast { seq, notification }));
		seq
	}

	/// Clear the notice numbered `seq`; a newer notice is left alone.
	fn expire(&self, seq: u64) {
		self.current.update(|t| {
			if t.as_ref().is_some_and(|t| t.seq == seq) {
				*t = None;
			}
		});
	}
}

impl Default for ToastQueue {
	fn default() -> Self {
		Self::new()
	}
}

impl Notifier for ToastQueue {
	fn notify(&self, message: &str, detail: &str) {
		let seq = self.show(Notification {
			message: message.into(),
			detail: detail.into(),
		});
		let queue = *self;
		set_timeout(move || queue.expire(seq), self.lifetime);
	}
}

/// Overlay showing the current notice of `queue`. Clicking it dismisses it.
#[component]
pub fn Toast(
	/// Queue to display.
	queue: ToastQueue,
) -> impl IntoView {
	move || {
		queue.current().map(|n| {
			view! {
				<div
					class="toast"
					role="status"
					// presses here must not start a canvas pan
					on:mousedown=|ev: MouseEvent| ev.stop_propagation()
					on:click=move |_| queue.dismiss()
				>
					<div class="toast-message">{n.message}</div>
					<div class="toast-detail">{n.detail}</div>
				</div>
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::mind_map::types::{NodeCategory, NodeStatus};

	#[test]
	fn selection_notice_prefers_status() {
		let node = MindMapNode::new("boss", "Boss", NodeCategory::People, "briefcase", 0.0, 0.0)
			.with_status(NodeStatus::Frequent);
		let n = Notification::for_selection(&node);
		assert_eq!(n.message, "Selected: Boss");
		assert_eq!(n.detail, "Status: frequent");
	}

	#[test]
	fn selection_notice_falls_back_to_category() {
		let node = MindMapNode::new("pain", "Pain", NodeCategory::Emotions, "heart", 0.0, 0.0);
		let n = Notification::for_selection(&node);
		assert_eq!(n.detail, "Category: emotions");
	}

	#[test]
	fn newer_notice_replaces_older() {
		let queue = ToastQueue::new();
		queue.show(Notification {
			message: "a".into(),
			detail: String::new(),
		});
		queue.show(Notification {
			message: "b".into(),
			detail: String::new(),
		});
		assert_eq!(queue.current().map(|n| n.message), Some("b".into()));
	}

	#[test]
	fn stale_expiry_keeps_newer_notice() {
		let queue = ToastQueue::new();
		let first = queue.show(Notification {
			message: "a".into(),
			detail: String::new(),
		});
		let second = queue.show(Notification {
			message: "b".into(),
			detail: String::new(),
		});
		queue.expire(first);
		assert_eq!(queue.current().map(|n| n.message), Some("b".into()));
		queue.expire(second);
		assert_eq!(queue.current(), None);
	}
}
