//! Card for a single research or course project.

use leptos::prelude::*;

use crate::content::Project;

/// One project: heading block with optional external link, description,
/// metric chips and tags. `index` staggers the entry animation.
#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
	let Project {
		title,
		role,
		location,
		period,
		description,
		metrics,
		tags,
		link,
	} = project;

	let link = link.map(|href| {
		view! {
			<a href=href target="_blank" rel="noopener noreferrer" class="social-link">
				"↗"
			</a>
		}
	});

	view! {
		<article class="card" style=format!("animation-delay: {:.1}s;", index as f64 * 0.1)>
			<div class="card-header">
				<div>
					<h3>{title}</h3>
					<div class="card-role">{format!("{} • {}", role, location)}</div>
					<div class="card-period">{period}</div>
				</div>
				{link}
			</div>
			<p class="card-description">{description}</p>
			<div class="metrics">
				{metrics.into_iter().map(|m| view! { <div class="metric">{m}</div> }).collect_view()}
			</div>
			<div class="tags">
				{tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
			</div>
		</article>
	}
}
