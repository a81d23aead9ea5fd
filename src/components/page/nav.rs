//! Fixed navigation bar.

use leptos::prelude::*;

use crate::components::scroll::{ScrollState, Section};
use crate::config::ScrollConfig;

/// Brand on the left, in-page links on the right. The link for the active
/// section is highlighted; the bar gains a blurred backdrop once scrolled.
#[component]
pub fn NavBar(
	brand: String,
	#[prop(into)] scroll: Signal<ScrollState>,
	#[prop(default = ScrollConfig::default())] config: ScrollConfig,
) -> impl IntoView {
	let nav_class = move || {
		if scroll.get().nav_backdrop(&config) {
			"site-nav scrolled"
		} else {
			"site-nav"
		}
	};
	let nav_style = format!("transition: all {}s ease;", config.nav_transition_secs);

	let links = Section::NAV
		.into_iter()
		.map(|section| {
			let class = move || {
				if scroll.get().active == section {
					"nav-link active"
				} else {
					"nav-link"
				}
			};
			view! {
				<a href=format!("#{}", section.id()) class=class>
					{section.label()}
				</a>
			}
		})
		.collect_view();

	view! {
		<nav class=nav_class style=nav_style>
			<div class="brand">{brand.to_uppercase()}</div>
			<div class="nav-links">{links}</div>
		</nav>
	}
}
