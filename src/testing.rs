//! Deterministic stand-ins for the browser: a viewport with synthetic
//! resize/scroll dispatch, a manually advanced frame clock and a drawing
//! surface that records every call.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::components::particle_field::{Color, DrawSurface, FrameHandle, FrameScheduler};
use crate::components::scroll::{Section, SectionBounds};
use crate::platform::{Subscription, SurfaceSize, Viewport, ViewportEvent, ViewportEvents};

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

/// A drawing call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear { width: f64, height: f64 },
	Fill(Color),
	Circle { x: f64, y: f64, radius: f64 },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub size: SurfaceSize,
	pub resizes: Vec<SurfaceSize>,
	pub ops: Vec<DrawOp>,
}

impl DrawSurface for RecordingSurface {
	fn size(&self) -> SurfaceSize {
		self.size
	}

	fn set_size(&mut self, size: SurfaceSize) {
		self.size = size;
		self.resizes.push(size);
		self.ops.clear();
	}

	fn clear_rect(&mut self, _x: f64, _y: f64, width: f64, height: f64) {
		self.ops.push(DrawOp::Clear { width, height });
	}

	fn set_fill(&mut self, color: Color) {
		self.ops.push(DrawOp::Fill(color));
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.ops.push(DrawOp::Circle { x, y, radius });
	}
}

#[derive(Default)]
struct FrameQueue {
	callback: Option<Handler>,
	pending: Vec<i32>,
	next_id: i32,
	delivered: u64,
	cancelled: u64,
}

/// Frame clock that only ticks when [`SimFrames::advance`] is called.
#[derive(Clone, Default)]
pub struct SimFrames {
	inner: Rc<RefCell<FrameQueue>>,
}

impl SimFrames {
	/// One display refresh: runs the bound callback once for every request
	/// pending when the refresh starts. Returns the number of callbacks run.
	pub fn advance(&self) -> usize {
		let (ids, callback) = {
			let mut q = self.inner.borrow_mut();
			(std::mem::take(&mut q.pending), q.callback.clone())
		};
		let Some(callback) = callback else {
			return 0;
		};
		for _ in &ids {
			self.inner.borrow_mut().delivered += 1;
			let mut handler = callback.borrow_mut();
			(&mut *handler)();
		}
		ids.len()
	}

	pub fn advance_by(&self, refreshes: usize) -> usize {
		(0..refreshes).map(|_| self.advance()).sum()
	}

	pub fn pending_count(&self) -> usize {
		self.inner.borrow().pending.len()
	}

	/// Callbacks delivered so far.
	pub fn delivered(&self) -> u64 {
		self.inner.borrow().delivered
	}

	pub fn cancelled(&self) -> u64 {
		self.inner.borrow().cancelled
	}

	pub fn is_bound(&self) -> bool {
		self.inner.borrow().callback.is_some()
	}
}

impl FrameScheduler for SimFrames {
	fn bind(&mut self, on_frame: Box<dyn FnMut()>) {
		self.inner.borrow_mut().callback = Some(Rc::new(RefCell::new(on_frame)));
	}

	fn request_frame(&mut self) -> Option<FrameHandle> {
		let mut q = self.inner.borrow_mut();
		q.callback.as_ref()?;
		q.next_id += 1;
		let id = q.next_id;
		q.pending.push(id);
		Some(FrameHandle(id))
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		let mut q = self.inner.borrow_mut();
		if let Some(pos) = q.pending.iter().position(|&id| id == handle.0) {
			q.pending.remove(pos);
			q.cancelled += 1;
		}
	}

	fn unbind(&mut self) {
		self.inner.borrow_mut().callback = None;
	}
}

struct Listener {
	id: u64,
	event: ViewportEvent,
	handler: Handler,
}

#[derive(Default)]
struct SimHost {
	size: Option<SurfaceSize>,
	scroll: f64,
	sections: HashMap<Section, SectionBounds>,
	listeners: Vec<Listener>,
	next_id: u64,
	delivered: HashMap<ViewportEvent, u64>,
}

/// Simulated window: settable size, scroll offset and section layout, plus
/// synchronous event dispatch.
#[derive(Clone, Default)]
pub struct SimViewport {
	inner: Rc<RefCell<SimHost>>,
}

impl SimViewport {
	pub fn sized(width: f64, height: f64) -> Self {
		let viewport = Self::default();
		viewport.inner.borrow_mut().size = Some(SurfaceSize::new(width, height));
		viewport
	}

	pub fn place_section(&self, section: Section, top: f64, bottom: f64) {
		self.inner
			.borrow_mut()
			.sections
			.insert(section, SectionBounds::new(top, bottom));
	}

	pub fn remove_section(&self, section: Section) {
		self.inner.borrow_mut().sections.remove(&section);
	}

	pub fn clear_sections(&self) {
		self.inner.borrow_mut().sections.clear();
	}

	/// Changes the window size and dispatches a resize event.
	pub fn resize_to(&self, width: f64, height: f64) -> usize {
		self.inner.borrow_mut().size = Some(SurfaceSize::new(width, height));
		self.fire(ViewportEvent::Resize)
	}

	/// Changes the scroll offset and dispatches a scroll event.
	pub fn scroll_to(&self, offset: f64) -> usize {
		self.inner.borrow_mut().scroll = offset;
		self.fire(ViewportEvent::Scroll)
	}

	/// Runs every handler registered for `event`; returns how many ran.
	pub fn fire(&self, event: ViewportEvent) -> usize {
		let handlers: Vec<Handler> = self
			.inner
			.borrow()
			.listeners
			.iter()
			.filter(|l| l.event == event)
			.map(|l| l.handler.clone())
			.collect();
		*self.inner.borrow_mut().delivered.entry(event).or_default() += handlers.len() as u64;
		for handler in &handlers {
			let mut handler = handler.borrow_mut();
			(&mut *handler)();
		}
		handlers.len()
	}

	pub fn listener_count(&self, event: ViewportEvent) -> usize {
		self.inner
			.borrow()
			.listeners
			.iter()
			.filter(|l| l.event == event)
			.count()
	}

	/// Handler invocations delivered for `event` so far.
	pub fn delivered(&self, event: ViewportEvent) -> u64 {
		self.inner
			.borrow()
			.delivered
			.get(&event)
			.copied()
			.unwrap_or(0)
	}
}

impl Viewport for SimViewport {
	fn inner_size(&self) -> Option<SurfaceSize> {
		self.inner.borrow().size
	}

	fn scroll_offset(&self) -> f64 {
		self.inner.borrow().scroll
	}

	fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
		self.inner.borrow().sections.get(&section).copied()
	}
}

impl ViewportEvents for SimViewport {
	fn listen(&self, event: ViewportEvent, handler: Box<dyn FnMut()>) -> Subscription {
		let id = {
			let mut host = self.inner.borrow_mut();
			host.next_id += 1;
			let id = host.next_id;
			host.listeners.push(Listener {
				id,
				event,
				handler: Rc::new(RefCell::new(handler)),
			});
			id
		};
		let host = Rc::downgrade(&self.inner);
		Subscription::new(move || {
			if let Some(host) = host.upgrade() {
				host.borrow_mut().listeners.retain(|l| l.id != id);
			}
		})
	}
}
