//! Render Surface Manager: keeps a drawing surface sized to the viewport.

use log::debug;

use super::theme::Color;
use crate::platform::SurfaceSize;

/// The drawing operations the particle loop needs from a surface.
pub trait DrawSurface {
	/// Current pixel dimensions of the surface.
	fn size(&self) -> SurfaceSize;
	/// Resizes the backing buffer. Implementations may clear pixel content.
	fn set_size(&mut self, size: SurfaceSize);
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn set_fill(&mut self, color: Color);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

/// Owns a drawing surface and its current dimensions.
///
/// Dimensions are written only by [`RenderSurface::attach`] and
/// [`RenderSurface::resync`]; the particle loop reads them every frame for
/// wraparound bounds.
#[derive(Debug)]
pub struct RenderSurface<S> {
	surface: S,
	size: SurfaceSize,
	resyncs: u64,
}

impl<S: DrawSurface> RenderSurface<S> {
	/// Takes ownership of `surface` and sizes it to the viewport.
	pub fn attach(mut surface: S, viewport: SurfaceSize) -> Self {
		surface.set_size(viewport);
		let size = surface.size();
		Self {
			surface,
			size,
			resyncs: 0,
		}
	}

	/// Resizes the surface after a viewport resize.
	pub fn resync(&mut self, viewport: SurfaceSize) {
		self.surface.set_size(viewport);
		self.size = self.surface.size();
		self.resyncs += 1;
		debug!(
			"portfolio: surface resized to {}x{}",
			self.size.width, self.size.height
		);
	}

	/// Last dimensions assigned to the surface.
	pub fn size(&self) -> SurfaceSize {
		self.size
	}

	/// Number of resyncs since the surface was attached.
	pub fn resync_count(&self) -> u64 {
		self.resyncs
	}

	/// Clears the whole surface.
	pub fn clear(&mut self) {
		self.surface
			.clear_rect(0.0, 0.0, self.size.width, self.size.height);
	}

	/// The wrapped drawing surface.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Mutable access for drawing.
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}
}
