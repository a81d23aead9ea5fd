//! Ambient drifting particles.

use rand::Rng;
use rand::distr::Uniform;

use super::surface::DrawSurface;
use super::theme::{Color, ParticleStyle};
use crate::platform::SurfaceSize;

/// A single drifting point. Only the position changes after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Radius.
	pub size: f64,
	/// Pixels per frame along x.
	pub speed_x: f64,
	/// Pixels per frame along y.
	pub speed_y: f64,
	/// Alpha used when drawing.
	pub opacity: f64,
}

impl Particle {
	/// Draws a particle uniformly placed within `bounds`.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, style: &ParticleStyle, bounds: SurfaceSize) -> Self {
		Self {
			x: sample(rng, 0.0, bounds.width),
			y: sample(rng, 0.0, bounds.height),
			size: sample(rng, style.size_min, style.size_max),
			speed_x: sample(rng, -style.speed, style.speed),
			speed_y: sample(rng, -style.speed, style.speed),
			opacity: sample(rng, style.opacity_min, style.opacity_max),
		}
	}

	/// Moves by one frame of velocity, wrapping around the surface edges.
	pub fn advance(&mut self, bounds: SurfaceSize) {
		self.x = wrap(self.x + self.speed_x, bounds.width);
		self.y = wrap(self.y + self.speed_y, bounds.height);
	}

	/// Fills a circle of the particle's radius at its own opacity.
	pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, color: Color) {
		surface.set_fill(color.with_alpha(self.opacity));
		surface.fill_circle(self.x, self.y, self.size);
	}
}

/// Wraps a coordinate into `[0, extent)`.
///
/// Past the far edge lands on zero; below zero re-enters from the far edge.
/// A collapsed axis (`extent <= 0`) pins the coordinate to zero.
pub fn wrap(value: f64, extent: f64) -> f64 {
	if extent <= 0.0 || value >= extent {
		0.0
	} else if value < 0.0 {
		let wrapped = value.rem_euclid(extent);
		// rem_euclid can round up to `extent` for tiny negative inputs
		if wrapped < extent { wrapped } else { 0.0 }
	} else {
		value
	}
}

/// Uniform in `[low, high)`. An empty or non-finite span yields `low`, or zero
/// when `low` itself is not finite.
fn sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
	match Uniform::new(low, high) {
		Ok(range) => rng.sample(range),
		Err(_) if low.is_finite() => low,
		Err(_) => 0.0,
	}
}

/// The fixed-size particle batch.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	color: Color,
}

impl ParticleField {
	/// Creates `style.count` particles scattered over `bounds`.
	pub fn seed<R: Rng + ?Sized>(rng: &mut R, style: &ParticleStyle, bounds: SurfaceSize) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::random(rng, style, bounds))
			.collect();
		Self {
			particles,
			color: style.color,
		}
	}

	/// Advances every particle and draws it in its new position.
	pub fn step_and_draw<S: DrawSurface + ?Sized>(&mut self, bounds: SurfaceSize, surface: &mut S) {
		for p in &mut self.particles {
			p.advance(bounds);
			p.draw(surface, self.color);
		}
	}

	/// The batch in creation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the batch has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
