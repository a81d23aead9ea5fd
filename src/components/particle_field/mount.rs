//! Wires the particle loop to a host: surface sizing, the resize listener and
//! the frame callback, plus their teardown.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rand::Rng;

use super::field_loop::ParticleLoop;
use super::scheduler::FrameScheduler;
use super::surface::{DrawSurface, RenderSurface};
use super::theme::ParticleStyle;
use crate::platform::{Subscription, Viewport, ViewportEvent, ViewportEvents};

/// A mounted animated background. Dropping it tears it down.
pub struct BackgroundView<S: DrawSurface, F: FrameScheduler> {
	particles: Option<Rc<RefCell<ParticleLoop<S, F>>>>,
	listeners: Vec<Subscription>,
}

impl<S: DrawSurface, F: FrameScheduler> BackgroundView<S, F> {
	fn inert() -> Self {
		Self {
			particles: None,
			listeners: Vec::new(),
		}
	}

	/// Whether the animation actually started.
	pub fn is_active(&self) -> bool {
		self.particles.is_some()
	}

	/// The running loop, `None` once torn down or when mounted inert.
	pub fn particles(&self) -> Option<&Rc<RefCell<ParticleLoop<S, F>>>> {
		self.particles.as_ref()
	}

	/// Deregisters the resize listener, cancels the pending frame and drops the
	/// particle batch. Safe to call more than once.
	pub fn teardown(&mut self) {
		self.listeners.clear();
		if let Some(particles) = self.particles.take() {
			particles.borrow_mut().teardown();
			debug!("portfolio: animated background torn down");
		}
	}
}

impl<S: DrawSurface, F: FrameScheduler> Drop for BackgroundView<S, F> {
	fn drop(&mut self) {
		self.teardown();
	}
}

/// Mounts the animated background.
///
/// With no drawing surface, or a viewport that cannot report its size, nothing
/// is started and an inert view is returned.
pub fn mount_background<S, F, V, E, R>(
	surface: Option<S>,
	scheduler: F,
	viewport: &V,
	events: &E,
	style: ParticleStyle,
	rng: &mut R,
) -> BackgroundView<S, F>
where
	S: DrawSurface + 'static,
	F: FrameScheduler + 'static,
	V: Viewport + Clone + 'static,
	E: ViewportEvents + ?Sized,
	R: Rng + ?Sized,
{
	let Some(surface) = surface else {
		debug!("portfolio: no drawing surface, animated background disabled");
		return BackgroundView::inert();
	};
	let Some(size) = viewport.inner_size() else {
		debug!("portfolio: viewport size unavailable, animated background disabled");
		return BackgroundView::inert();
	};

	let particles = Rc::new(RefCell::new(ParticleLoop::new(
		RenderSurface::attach(surface, size),
		scheduler,
		style,
	)));

	let frame_target = Rc::downgrade(&particles);
	particles
		.borrow_mut()
		.scheduler_mut()
		.bind(Box::new(move || {
			if let Some(particles) = frame_target.upgrade() {
				particles.borrow_mut().on_frame();
			}
		}));
	particles.borrow_mut().start(rng);

	let (resize_target, resize_viewport) = (Rc::downgrade(&particles), viewport.clone());
	let on_resize = events.listen(
		ViewportEvent::Resize,
		Box::new(move || {
			if let (Some(particles), Some(size)) =
				(resize_target.upgrade(), resize_viewport.inner_size())
			{
				particles.borrow_mut().resize(size);
			}
		}),
	);

	BackgroundView {
		particles: Some(particles),
		listeners: vec![on_resize],
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_pcg::Pcg32;

	use super::*;
	use crate::components::particle_field::LoopPhase;
	use crate::platform::SurfaceSize;
	use crate::testing::{RecordingSurface, SimFrames, SimViewport};

	type SimBackground = BackgroundView<RecordingSurface, SimFrames>;

	fn mount(viewport: &SimViewport, frames: &SimFrames) -> SimBackground {
		mount_background(
			Some(RecordingSurface::default()),
			frames.clone(),
			viewport,
			viewport,
			ParticleStyle::default(),
			&mut Pcg32::seed_from_u64(2024),
		)
	}

	#[test]
	fn particle_count_is_fixed_while_running() {
		let (viewport, frames) = (SimViewport::sized(800.0, 600.0), SimFrames::default());
		let view = mount(&viewport, &frames);
		let particles = view.particles().unwrap().clone();

		for _ in 0..120 {
			assert_eq!(frames.advance(), 1);
			assert_eq!(particles.borrow().field().unwrap().len(), 40);
		}
		assert_eq!(particles.borrow().frames_rendered(), 121);
	}

	#[test]
	fn frames_never_overlap() {
		let (viewport, frames) = (SimViewport::sized(800.0, 600.0), SimFrames::default());
		let _view = mount(&viewport, &frames);
		for _ in 0..10 {
			assert_eq!(frames.pending_count(), 1);
			frames.advance();
		}
	}

	#[test]
	fn resize_resyncs_surface_without_moving_particles() {
		let (viewport, frames) = (SimViewport::sized(800.0, 600.0), SimFrames::default());
		let view = mount(&viewport, &frames);
		let particles = view.particles().unwrap().clone();
		let before = particles.borrow().field().unwrap().particles().to_vec();

		assert_eq!(viewport.resize_to(400.0, 300.0), 1);

		let lp = particles.borrow();
		assert_eq!(lp.surface().size(), SurfaceSize::new(400.0, 300.0));
		assert_eq!(lp.surface().resync_count(), 1);
		assert_eq!(
			lp.surface().surface().resizes.last(),
			Some(&SurfaceSize::new(400.0, 300.0))
		);
		assert_eq!(lp.field().unwrap().particles(), before.as_slice());
	}

	#[test]
	fn particles_wrap_into_shrunk_surface_on_next_frame() {
		let (viewport, frames) = (SimViewport::sized(800.0, 600.0), SimFrames::default());
		let view = mount(&viewport, &frames);
		viewport.resize_to(400.0, 300.0);
		frames.advance();

		let particles = view.particles().unwrap().borrow();
		for p in particles.field().unwrap().particles() {
			assert!(p.x >= 0.0 && p.x < 400.0);
			assert!(p.y >= 0.0 && p.y < 300.0);
		}
	}

	#[test]
	fn missing_surface_mounts_inert() {
		let (viewport, frames) = (SimViewport::sized(800.0, 600.0), SimFrames::default());
		let view: SimBackground = mount_background(
			None,
			frames.clone(),
			&viewport,
			&viewport,
			ParticleStyle::default(),
			&mut Pcg32::seed_from_u64(0),
		);

		assert!(!view.is_active());
		assert_eq!(viewport.listener_count(ViewportEvent::Resize), 0);
		assert!(!frames.is_bound());
		assert_eq!(frames.advance(), 0);
	}

	#[test]
	fn unsized_viewport_mounts_inert() {
		let (viewport, frames) = (SimViewport::default(), SimFrames::default());
		let view = mount(&viewport, &frames);

		assert!(!view.is_active());
		assert!(view.particles().is_none());
		assert_eq!(viewport.listener_count(ViewportEvent::Resize), 0);
		assert!(!frames.is_bound());
		assert_eq!(frames.pending_count(), 0);
	}

	#[test]
	fn teardown_stops_frames_and_resize_handling() {
		let (viewport, frames) = (SimViewport::sized(800.0, 600.0), SimFrames::default());
		let mut view = mount(&viewport, &frames);
		let particles = view.particles().unwrap().clone();
		frames.advance_by(3);
		let delivered = frames.delivered();

		view.teardown();

		assert_eq!(frames.advance_by(5), 0);
		assert_eq!(frames.delivered(), delivered);
		assert_eq!(viewport.resize_to(100.0, 100.0), 0);
		assert_eq!(viewport.delivered(ViewportEvent::Resize), 0);

		let lp = particles.borrow();
		assert_eq!(lp.phase(), LoopPhase::Terminated);
		assert_eq!(lp.frames_rendered(), 4);
		assert_eq!(lp.surface().size(), SurfaceSize::new(800.0, 600.0));

		drop(lp);
		view.teardown();
		assert_eq!(frames.cancelled(), 1);
	}

	#[test]
	fn dropping_the_view_tears_down() {
		let (viewport, frames) = (SimViewport::sized(800.0, 600.0), SimFrames::default());
		let view = mount(&viewport, &frames);
		drop(view);

		assert_eq!(viewport.listener_count(ViewportEvent::Resize), 0);
		assert_eq!(frames.pending_count(), 0);
		assert_eq!(frames.advance(), 0);
	}
}
