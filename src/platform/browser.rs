//! `web-sys` implementation of the host traits.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::{Subscription, SurfaceSize, Viewport, ViewportEvent, ViewportEvents};
use crate::components::scroll::{Section, SectionBounds};

/// The browser window as seen by the page.
#[derive(Clone, Debug)]
pub struct BrowserViewport {
	window: Window,
}

impl BrowserViewport {
	/// Wraps a specific window.
	pub fn new(window: Window) -> Self {
		Self { window }
	}

	/// The global window, if running in a browsing context.
	pub fn current() -> Option<Self> {
		web_sys::window().map(Self::new)
	}

	/// The wrapped window.
	pub fn window(&self) -> &Window {
		&self.window
	}
}

impl Viewport for BrowserViewport {
	fn inner_size(&self) -> Option<SurfaceSize> {
		Some(SurfaceSize::new(
			self.window.inner_width().ok()?.as_f64()?,
			self.window.inner_height().ok()?.as_f64()?,
		))
	}

	fn scroll_offset(&self) -> f64 {
		self.window.scroll_y().unwrap_or(0.0)
	}

	fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
		let element = self.window.document()?.get_element_by_id(section.id())?;
		let rect = element.get_bounding_client_rect();
		Some(SectionBounds::new(rect.top(), rect.bottom()))
	}
}

impl ViewportEvents for BrowserViewport {
	fn listen(&self, event: ViewportEvent, handler: Box<dyn FnMut()>) -> Subscription {
		let closure: Closure<dyn FnMut()> = Closure::wrap(handler);
		if let Err(e) = self
			.window
			.add_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref())
		{
			warn!("portfolio: failed to listen for {}: {:?}", event.name(), e);
			return Subscription::inert();
		}

		let window = self.window.clone();
		Subscription::new(move || {
			let _ = window
				.remove_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref());
		})
	}
}
