//! Content sections. Each renders its data verbatim under the element id the
//! scroll observer looks for.

use leptos::prelude::*;

use super::project_card::ProjectCard;
use crate::components::scroll::Section;
use crate::content::{Profile, Project, SkillGroup};

#[component]
fn SectionHeading(#[prop(into)] eyebrow: String, #[prop(into)] title: String) -> impl IntoView {
	view! {
		<div class="eyebrow">{eyebrow}</div>
		<h2>{title}</h2>
	}
}

/// GitHub and LinkedIn links, abbreviated when `compact`.
fn social_links(profile: &Profile, compact: bool) -> impl IntoView + use<> {
	let link = move |href: String, full: &'static str, short: &'static str| {
		view! {
			<a href=href target="_blank" rel="noopener noreferrer" class="social-link">
				{if compact { short } else { full }}
			</a>
		}
	};
	view! {
		{profile.github.clone().map(|href| link(href, "GitHub", "GH"))}
		{profile.linkedin.clone().map(|href| link(href, "LinkedIn", "in"))}
	}
}

/// Landing block: name, tagline, call to action and social links.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
	let socials = social_links(&profile, true);
	let mailto = format!("mailto:{}", profile.email);
	view! {
		<section id=Section::Hero.id() class="hero">
			<div class="hero-body">
				<div class="eyebrow">{profile.eyebrow}</div>
				<h1>{profile.name}</h1>
				<p class="tagline">{profile.tagline}</p>
				<p class="summary">{profile.summary}</p>
				<div class="hero-actions">
					<a href=format!("#{}", Section::Contact.id()) class="cta-button">
						"GET IN TOUCH"
					</a>
					<div class="socials">
						{socials}
						<a href=mailto class="social-link">"@"</a>
					</div>
				</div>
			</div>
			<a href=format!("#{}", Section::About.id()) class="scroll-hint">"⌄"</a>
		</section>
	}
}

/// Headline and biography split over two columns.
#[component]
pub fn About(profile: Profile) -> impl IntoView {
	let half = profile.bio.len().div_ceil(2);
	let mut left = profile.bio;
	let right = left.split_off(half);
	let column = |paragraphs: Vec<String>| {
		view! {
			<div>{paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}</div>
		}
	};

	view! {
		<section id=Section::About.id() class="about">
			<div class="about-body">
				<SectionHeading eyebrow="About" title=profile.headline />
				<div class="about-columns">{column(left)} {column(right)}</div>
			</div>
		</section>
	}
}

/// A list of project cards under a heading.
#[component]
pub fn ProjectSection(
	section: Section,
	eyebrow: &'static str,
	title: &'static str,
	projects: Vec<Project>,
) -> impl IntoView {
	view! {
		<section id=section.id() class="content-section">
			<div class="content-body">
				<SectionHeading eyebrow=eyebrow title=title />
				<div class="cards">
					{projects
						.into_iter()
						.enumerate()
						.map(|(index, project)| view! { <ProjectCard project=project index=index /> })
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

/// One card per skill category, in page order.
#[component]
pub fn Skills(skills: Vec<SkillGroup>) -> impl IntoView {
	let groups = skills
		.into_iter()
		.enumerate()
		.map(|(index, group)| {
			view! {
				<div class="card skill-group" style=format!("animation-delay: {:.1}s;", index as f64 * 0.1)>
					<h3>{group.category}</h3>
					<div class="skill-list">
						{group
							.skills
							.into_iter()
							.map(|s| view! { <span class="skill">{s}</span> })
							.collect_view()}
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id=Section::Skills.id() class="content-section">
			<div class="content-body">
				<SectionHeading eyebrow="Technical Skills" title="Tools & Technologies" />
				<div class="skill-grid">{groups}</div>
			</div>
		</section>
	}
}

/// Pitch, email call to action, optional phone and social links.
#[component]
pub fn Contact(profile: Profile) -> impl IntoView {
	let socials = social_links(&profile, false);
	let phone = profile
		.phone
		.map(|phone| view! { <div class="contact-phone">{phone}</div> });

	view! {
		<section id=Section::Contact.id() class="contact">
			<div class="contact-body">
				<SectionHeading eyebrow="Get In Touch" title="Let's Build Something" />
				<p class="pitch">{profile.pitch}</p>
				<div class="contact-actions">
					<a href=format!("mailto:{}", profile.email) class="cta-button large">
						{profile.email.clone()}
					</a>
					{phone}
				</div>
				<div class="socials centered">{socials}</div>
			</div>
		</section>
	}
}

/// Copyright line.
#[component]
pub fn Footer(name: String) -> impl IntoView {
	view! {
		<footer class="site-footer">
			<div>{format!("© {}", name)}</div>
			<div class="built-with">"Built with Rust + Leptos"</div>
		</footer>
	}
}
