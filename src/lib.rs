//! portfolio-site: single-page personal portfolio rendered client-side.
//!
//! The page is static content (biography, research, projects, skills, contact)
//! over an animated particle background. The background and the scroll-driven
//! navigation state are the only moving parts; both run against the host
//! abstraction in [`platform`] so they can be exercised without a browser.

use leptos::prelude::*;
use leptos_meta::{Html, Meta, Style, Title, provide_meta_context};
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod content;
pub mod platform;

#[cfg(test)]
mod testing;

use components::page::{About, Contact, Footer, Hero, NavBar, PAGE_CSS, ProjectSection, Skills};
use components::particle_field::ParticleBackground;
use components::scroll::{Section, use_scroll_state};
pub use config::{PageConfig, ScrollConfig};
pub use content::{PortfolioData, Profile, Project, SkillGroup};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Load page content from a script element with id="portfolio-data".
fn load_portfolio_data() -> Option<PortfolioData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PortfolioData>(&json_text) {
		Ok(data) => {
			info!(
				"portfolio: loaded {} research projects, {} projects, {} skill groups",
				data.research.len(),
				data.projects.len(),
				data.skills.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("portfolio: failed to parse page data: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let PortfolioData {
		profile,
		research,
		projects,
		skills,
		config,
	} = load_portfolio_data().unwrap_or_default();
	let scroll = use_scroll_state(config.scroll);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=profile.name.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{PAGE_CSS}</Style>

		<div class="page">
			<ParticleBackground
				scroll=scroll
				particles=config.particles
				scroll_config=config.scroll
				seed=config.seed
			/>
			<div class="grid-overlay"></div>
			<NavBar brand=profile.name.clone() scroll=scroll config=config.scroll />

			<Hero profile=profile.clone() />
			<About profile=profile.clone() />
			<ProjectSection
				section=Section::Research
				eyebrow="Research Experience"
				title="Published Work & Research"
				projects=research
			/>
			<ProjectSection
				section=Section::Projects
				eyebrow="Projects"
				title="Course & Personal Projects"
				projects=projects
			/>
			<Skills skills=skills />
			<Contact profile=profile.clone() />
			<Footer name=profile.name />
		</div>
	}
}
