//! Animated particle background.
//!
//! A fixed batch of points drifts across a full-viewport canvas:
//! - [`RenderSurface`] keeps the drawing surface sized to the window
//! - [`ParticleLoop`] seeds the batch and runs the per-frame update and draw
//! - [`FrameScheduler`] abstracts `requestAnimationFrame` so the loop can be
//!   driven by a simulated clock
//! - [`mount_background`] wires all of it to a host and returns a handle whose
//!   teardown stops every callback
//!
//! # Example
//!
//! ```ignore
//! view! { <ParticleBackground scroll=scroll_state /> }
//! ```

mod canvas;
mod component;
mod field_loop;
mod mount;
mod particles;
mod scheduler;
mod surface;
mod theme;

pub use canvas::{AnimationFrames, CanvasSurface};
pub use component::ParticleBackground;
pub use field_loop::{LoopPhase, ParticleLoop};
pub use mount::{BackgroundView, mount_background};
pub use particles::{Particle, ParticleField, wrap};
pub use scheduler::{FrameHandle, FrameScheduler};
pub use surface::{DrawSurface, RenderSurface};
pub use theme::{Color, ParticleStyle};
