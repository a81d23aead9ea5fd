//! Leptos component wrapping the particle background canvas.
//!
//! The canvas is fixed behind the page and ignores pointer events. Once the
//! canvas node exists an effect mounts the particle loop against the browser
//! window; the loop is torn down when the component is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use web_sys::HtmlCanvasElement;

use super::canvas::{AnimationFrames, CanvasSurface};
use super::mount::{BackgroundView, mount_background};
use super::theme::ParticleStyle;
use crate::components::scroll::ScrollState;
use crate::config::ScrollConfig;
use crate::platform::BrowserViewport;

type BrowserBackground = BackgroundView<CanvasSurface, AnimationFrames>;

/// Seed from browser entropy when the page does not pin one.
fn entropy_seed() -> u64 {
	let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let low = js_sys::Date::now() as u64;
	(high << 32) ^ low
}

/// Full-viewport animated particle background.
///
/// Opacity follows the scroll state: the resting opacity near the top of the
/// page, the dimmed opacity once scrolled past the configured threshold, with
/// a CSS transition between the two.
#[component]
pub fn ParticleBackground(
	#[prop(into)] scroll: Signal<ScrollState>,
	#[prop(default = ParticleStyle::default())] particles: ParticleStyle,
	#[prop(default = ScrollConfig::default())] scroll_config: ScrollConfig,
	#[prop(default = None)] seed: Option<u64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Rc<RefCell<Option<BrowserBackground>>> = Rc::new(RefCell::new(None));
	let cleanup_slot = StoredValue::new_local(mounted.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(viewport) = BrowserViewport::current() else {
			return;
		};

		let mut rng = Pcg32::seed_from_u64(seed.unwrap_or_else(entropy_seed));
		let view = mount_background(
			CanvasSurface::new(canvas),
			AnimationFrames::new(viewport.window().clone()),
			&viewport,
			&viewport,
			particles,
			&mut rng,
		);
		*mounted.borrow_mut() = Some(view);
	});

	on_cleanup(move || {
		cleanup_slot.try_with_value(|slot| slot.borrow_mut().take());
	});

	let canvas_style = move || {
		let state = scroll.get();
		format!(
			"position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
			 pointer-events: none; z-index: 0; opacity: {}; transition: opacity {}s ease;",
			state.background_opacity(&scroll_config),
			scroll_config.background_transition_secs
		)
	};

	view! { <canvas node_ref=canvas_ref class="particle-background" style=canvas_style /> }
}
