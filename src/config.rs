//! Page configuration.
//!
//! Every field has a default; a page can override any subset through the
//! `config` object of its content JSON.

use serde::Deserialize;

use crate::components::particle_field::ParticleStyle;

/// Scroll-driven presentation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
	/// Distance from the viewport top, in pixels, of the line a section must
	/// straddle to become the active section.
	pub probe_line: f64,
	/// Scroll offset past which the background dims.
	pub dim_threshold: f64,
	/// Scroll offset past which the navigation bar gets its backdrop.
	pub nav_threshold: f64,
	/// Background opacity at the top of the page.
	pub resting_opacity: f64,
	/// Background opacity once scrolled past `dim_threshold`.
	pub dimmed_opacity: f64,
	/// Duration of the background opacity transition.
	pub background_transition_secs: f64,
	/// Duration of the navigation bar transition.
	pub nav_transition_secs: f64,
}

impl Default for ScrollConfig {
	fn default() -> Self {
		Self {
			probe_line: 100.0,
			dim_threshold: 100.0,
			nav_threshold: 100.0,
			resting_opacity: 0.6,
			dimmed_opacity: 0.4,
			background_transition_secs: 0.6,
			nav_transition_secs: 0.3,
		}
	}
}

/// Complete page configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	/// Particle background appearance.
	pub particles: ParticleStyle,
	/// Scroll thresholds and transitions.
	pub scroll: ScrollConfig,
	/// Fixed particle seed; drawn from browser entropy when absent.
	pub seed: Option<u64>,
}
