//! Colour and particle styling for the animated background.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`, opaque when omitted.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque white.
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	/// Opaque color from channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha in `[0, 1]`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `rgba(r, g, b, a)` for canvas fill styles.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Particle population and the ranges each particle's attributes are drawn from.
///
/// Every range is half-open: a particle's radius lies in `[size_min, size_max)`,
/// each velocity component in `[-speed, speed)` and its opacity in
/// `[opacity_min, opacity_max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles in the batch
	pub count: usize,
	/// Fill color; alpha is replaced by each particle's opacity
	pub color: Color,
	/// Smallest radius, inclusive.
	pub size_min: f64,
	/// Largest radius, exclusive.
	pub size_max: f64,
	/// Maximum per-axis drift in pixels per frame
	pub speed: f64,
	/// Lowest alpha, inclusive.
	pub opacity_min: f64,
	/// Highest alpha, exclusive.
	pub opacity_max: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 40,
			color: Color::WHITE,
			size_min: 1.0,
			size_max: 3.0,
			speed: 0.15,
			opacity_min: 0.2,
			opacity_max: 0.6,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_switches_on_alpha() {
		assert_eq!(Color::WHITE.to_css(), "#ffffff");
		assert_eq!(
			Color::WHITE.with_alpha(0.25).to_css(),
			"rgba(255, 255, 255, 0.25)"
		);
	}

	#[test]
	fn style_overrides_keep_unspecified_defaults() {
		let style: ParticleStyle = serde_json::from_str(r#"{ "count": 12 }"#).unwrap();
		assert_eq!(style.count, 12);
		assert_eq!(style.speed, ParticleStyle::default().speed);
		assert_eq!(style.color, Color::WHITE);
	}
}
