//! The per-frame update-and-draw cycle.

use log::{debug, info};
use rand::Rng;

use super::particles::ParticleField;
use super::scheduler::{FrameHandle, FrameScheduler};
use super::surface::{DrawSurface, RenderSurface};
use super::theme::ParticleStyle;
use crate::platform::SurfaceSize;

/// Lifecycle of a [`ParticleLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
	/// Constructed, no particles yet.
	Uninitialized,
	/// Particles seeded and frames self-scheduling.
	Running,
	/// Torn down; no frame will ever be scheduled again.
	Terminated,
}

/// Owns the particle batch, the render surface and the frame scheduler.
pub struct ParticleLoop<S, F> {
	surface: RenderSurface<S>,
	scheduler: F,
	style: ParticleStyle,
	field: Option<ParticleField>,
	pending: Option<FrameHandle>,
	phase: LoopPhase,
	frames: u64,
}

impl<S: DrawSurface, F: FrameScheduler> ParticleLoop<S, F> {
	/// A loop in [`LoopPhase::Uninitialized`]. The scheduler should be bound
	/// before [`ParticleLoop::start`], otherwise no frame after the first runs.
	pub fn new(surface: RenderSurface<S>, scheduler: F, style: ParticleStyle) -> Self {
		Self {
			surface,
			scheduler,
			style,
			field: None,
			pending: None,
			phase: LoopPhase::Uninitialized,
			frames: 0,
		}
	}

	/// Seeds the batch, renders the first frame and schedules the next one.
	/// Does nothing unless the loop is still uninitialized.
	pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		if self.phase != LoopPhase::Uninitialized {
			return;
		}
		let bounds = self.surface.size();
		let field = ParticleField::seed(rng, &self.style, bounds);
		info!(
			"portfolio: seeded {} particles on {}x{} surface",
			field.len(),
			bounds.width,
			bounds.height
		);
		self.field = Some(field);
		self.phase = LoopPhase::Running;
		self.on_frame();
	}

	/// One frame: clear, advance and draw every particle, schedule the next
	/// frame. Ignored outside [`LoopPhase::Running`].
	pub fn on_frame(&mut self) {
		self.pending = None;
		if self.phase != LoopPhase::Running {
			return;
		}
		let Some(field) = self.field.as_mut() else {
			return;
		};

		let bounds = self.surface.size();
		self.surface.clear();
		field.step_and_draw(bounds, self.surface.surface_mut());
		self.frames += 1;

		self.pending = self.scheduler.request_frame();
	}

	/// Resynchronizes the surface to new viewport dimensions. Particles are not
	/// moved; they wrap into the new bounds on their next step.
	pub fn resize(&mut self, viewport: SurfaceSize) {
		if self.phase == LoopPhase::Terminated {
			return;
		}
		self.surface.resync(viewport);
	}

	/// Cancels the pending frame and releases the particle batch. Idempotent.
	pub fn teardown(&mut self) {
		if self.phase == LoopPhase::Terminated {
			return;
		}
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		self.scheduler.unbind();
		self.field = None;
		self.phase = LoopPhase::Terminated;
		debug!("portfolio: particle loop stopped after {} frames", self.frames);
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> LoopPhase {
		self.phase
	}

	/// The particle batch while running.
	pub fn field(&self) -> Option<&ParticleField> {
		self.field.as_ref()
	}

	/// The managed render surface.
	pub fn surface(&self) -> &RenderSurface<S> {
		&self.surface
	}

	/// Used once at mount to bind the frame callback.
	pub fn scheduler_mut(&mut self) -> &mut F {
		&mut self.scheduler
	}

	/// Frames rendered so far, including the first synchronous one.
	pub fn frames_rendered(&self) -> u64 {
		self.frames
	}

	/// Handle of the next scheduled frame, if any.
	pub fn pending_frame(&self) -> Option<FrameHandle> {
		self.pending
	}
}
