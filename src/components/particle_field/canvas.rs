//! Canvas 2D surface and `requestAnimationFrame` scheduler.

use std::f64::consts::TAU;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::scheduler::{FrameHandle, FrameScheduler};
use super::surface::DrawSurface;
use super::theme::Color;
use crate::platform::SurfaceSize;

/// An HTML canvas with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// `None` when the canvas has no 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		Some(Self { canvas, ctx })
	}
}

impl DrawSurface for CanvasSurface {
	fn size(&self) -> SurfaceSize {
		SurfaceSize::new(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn set_size(&mut self, size: SurfaceSize) {
		self.canvas.set_width(size.width as u32);
		self.canvas.set_height(size.height as u32);
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn set_fill(&mut self, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
	}
}

/// `requestAnimationFrame` driven scheduler.
pub struct AnimationFrames {
	window: Window,
	callback: Option<Closure<dyn FnMut()>>,
	pending: Option<i32>,
}

impl AnimationFrames {
	/// Unbound scheduler for `window`; call `bind` before requesting frames.
	pub fn new(window: Window) -> Self {
		Self {
			window,
			callback: None,
			pending: None,
		}
	}
}

impl FrameScheduler for AnimationFrames {
	fn bind(&mut self, on_frame: Box<dyn FnMut()>) {
		self.callback = Some(Closure::wrap(on_frame));
	}

	fn request_frame(&mut self) -> Option<FrameHandle> {
		let callback = self.callback.as_ref()?;
		match self
			.window
			.request_animation_frame(callback.as_ref().unchecked_ref())
		{
			Ok(id) => {
				self.pending = Some(id);
				Some(FrameHandle(id))
			}
			Err(e) => {
				warn!("portfolio: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle.0);
		if self.pending == Some(handle.0) {
			self.pending = None;
		}
	}

	fn unbind(&mut self) {
		if let Some(id) = self.pending.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.callback = None;
	}
}

impl Drop for AnimationFrames {
	fn drop(&mut self) {
		self.unbind();
	}
}
