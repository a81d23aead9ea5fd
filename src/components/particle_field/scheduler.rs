//! "Run this before the next repaint" capability.

/// Identifies a pending frame request so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Schedules a single bound callback once per display refresh.
///
/// The browser implementation wraps `requestAnimationFrame`; tests use a
/// manually advanced clock. Callbacks run to completion one at a time, so the
/// bound callback may call back into whatever owns the scheduler.
pub trait FrameScheduler {
	/// Installs the callback every requested frame will run.
	fn bind(&mut self, on_frame: Box<dyn FnMut()>);

	/// Requests one invocation of the bound callback on the next frame.
	/// Returns `None` when nothing is bound or the host refused.
	fn request_frame(&mut self) -> Option<FrameHandle>;

	/// Cancels a pending request. A cancelled request never runs.
	fn cancel_frame(&mut self, handle: FrameHandle);

	/// Drops the bound callback.
	fn unbind(&mut self);
}
