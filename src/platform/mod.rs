//! Host abstraction for everything the page reads from or subscribes to in the
//! browser window.
//!
//! The particle loop and scroll observer only talk to the host through these
//! traits, so the same logic runs against a real `web_sys::Window` in the
//! browser and against the simulated host in tests.

mod browser;

pub use browser::BrowserViewport;

use crate::components::scroll::{Section, SectionBounds};

/// Width and height of a drawing surface or of the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl SurfaceSize {
	/// Size from explicit dimensions.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Read-only viewport signals.
pub trait Viewport {
	/// Current window inner dimensions, if the host can report them.
	fn inner_size(&self) -> Option<SurfaceSize>;

	/// Current vertical scroll offset.
	fn scroll_offset(&self) -> f64;

	/// Viewport-relative bounds of a section element, or `None` when the
	/// element is not in the document.
	fn section_bounds(&self, section: Section) -> Option<SectionBounds>;
}

/// Window events the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
	/// The window's inner size changed.
	Resize,
	/// The document scrolled.
	Scroll,
}

impl ViewportEvent {
	/// DOM event name.
	pub const fn name(self) -> &'static str {
		match self {
			ViewportEvent::Resize => "resize",
			ViewportEvent::Scroll => "scroll",
		}
	}
}

/// Registration of window event listeners.
pub trait ViewportEvents {
	/// Registers `handler` for `event`. The listener stays registered until the
	/// returned [`Subscription`] is detached or dropped.
	fn listen(&self, event: ViewportEvent, handler: Box<dyn FnMut()>) -> Subscription;
}

/// Keeps a listener registered. Dropping it deregisters the listener.
#[must_use = "dropping a subscription removes its listener immediately"]
pub struct Subscription {
	detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Runs `detach` on drop or on [`Subscription::detach`], whichever comes first.
	pub fn new(detach: impl FnOnce() + 'static) -> Self {
		Self {
			detach: Some(Box::new(detach)),
		}
	}

	/// A subscription that was never registered (e.g. registration failed).
	pub fn inert() -> Self {
		Self { detach: None }
	}

	/// Removes the listener now.
	pub fn detach(mut self) {
		self.run_detach();
	}

	fn run_detach(&mut self) {
		if let Some(detach) = self.detach.take() {
			detach();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.run_detach();
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("attached", &self.detach.is_some())
			.finish()
	}
}
