//! Scroll offset and active-section tracking.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::section::{Section, SectionBounds, section_in_view};
use crate::config::ScrollConfig;
use crate::platform::{Subscription, Viewport, ViewportEvent, ViewportEvents};

/// What the page derives from the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
	/// Vertical scroll offset in pixels.
	pub offset: f64,
	/// Section currently considered in view.
	pub active: Section,
}

impl ScrollState {
	/// Records a new offset and rescans for the active section. When no
	/// section straddles the probe line the previous active section is kept.
	///
	/// Returns whether anything changed.
	pub fn update(
		&mut self,
		offset: f64,
		probe_line: f64,
		bounds_of: impl FnMut(Section) -> Option<SectionBounds>,
	) -> bool {
		let before = *self;
		self.offset = offset;
		if let Some(section) = section_in_view(probe_line, bounds_of) {
			if section != self.active {
				debug!("portfolio: active section {}", section.id());
			}
			self.active = section;
		}
		*self != before
	}

	/// Whether the navigation bar shows its backdrop.
	pub fn nav_backdrop(&self, config: &ScrollConfig) -> bool {
		self.offset > config.nav_threshold
	}

	/// Target opacity of the particle background.
	pub fn background_opacity(&self, config: &ScrollConfig) -> f64 {
		if self.offset > config.dim_threshold {
			config.dimmed_opacity
		} else {
			config.resting_opacity
		}
	}
}

/// A mounted scroll listener. Dropping it deregisters the listener.
pub struct ScrollObserver {
	state: Rc<RefCell<ScrollState>>,
	listener: Option<Subscription>,
}

impl ScrollObserver {
	/// Latest state seen by the listener.
	pub fn state(&self) -> ScrollState {
		*self.state.borrow()
	}

	/// Whether the scroll listener is still registered.
	pub fn is_listening(&self) -> bool {
		self.listener.is_some()
	}

	/// Deregisters the scroll listener. Idempotent.
	pub fn teardown(&mut self) {
		if let Some(listener) = self.listener.take() {
			listener.detach();
			debug!("portfolio: scroll observer detached");
		}
	}
}

impl Drop for ScrollObserver {
	fn drop(&mut self) {
		self.teardown();
	}
}

/// Listens for scroll events and keeps a [`ScrollState`] current.
/// `on_change` runs after every scroll event that changed the state.
pub fn mount_scroll_observer<V, E>(
	viewport: &V,
	events: &E,
	config: ScrollConfig,
	mut on_change: impl FnMut(ScrollState) + 'static,
) -> ScrollObserver
where
	V: Viewport + Clone + 'static,
	E: ViewportEvents + ?Sized,
{
	let state = Rc::new(RefCell::new(ScrollState::default()));
	let (handler_state, handler_viewport) = (state.clone(), viewport.clone());

	let listener = events.listen(
		ViewportEvent::Scroll,
		Box::new(move || {
			let offset = handler_viewport.scroll_offset();
			let changed = handler_state.borrow_mut().update(offset, config.probe_line, |s| {
				handler_viewport.section_bounds(s)
			});
			if changed {
				let snapshot = *handler_state.borrow();
				on_change(snapshot);
			}
		}),
	);

	ScrollObserver {
		state,
		listener: Some(listener),
	}
}
