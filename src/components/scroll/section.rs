//! Page sections and the "which one is in view" scan.

/// The content sections of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
	/// Landing block at the top of the page.
	#[default]
	Hero,
	/// Biography.
	About,
	/// Research experience.
	Research,
	/// Course and personal projects.
	Projects,
	/// Skill categories.
	Skills,
	/// Contact details.
	Contact,
}

impl Section {
	/// Scan order.
	pub const ALL: [Section; 6] = [
		Section::Hero,
		Section::About,
		Section::Research,
		Section::Projects,
		Section::Skills,
		Section::Contact,
	];

	/// Sections linked from the navigation bar.
	pub const NAV: [Section; 5] = [
		Section::About,
		Section::Research,
		Section::Projects,
		Section::Skills,
		Section::Contact,
	];

	/// Element id of the section.
	pub const fn id(self) -> &'static str {
		match self {
			Section::Hero => "hero",
			Section::About => "about",
			Section::Research => "research",
			Section::Projects => "projects",
			Section::Skills => "skills",
			Section::Contact => "contact",
		}
	}

	/// Navigation link text.
	pub const fn label(self) -> &'static str {
		match self {
			Section::Hero => "Home",
			Section::About => "About",
			Section::Research => "Research",
			Section::Projects => "Projects",
			Section::Skills => "Skills",
			Section::Contact => "Contact",
		}
	}
}

/// Viewport-relative vertical extent of a section element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
	/// Top edge, relative to the viewport top.
	pub top: f64,
	/// Bottom edge, relative to the viewport top.
	pub bottom: f64,
}

impl SectionBounds {
	/// Bounds from viewport-relative edges.
	pub const fn new(top: f64, bottom: f64) -> Self {
		Self { top, bottom }
	}

	/// Whether the section straddles the horizontal line `line` (inclusive).
	pub fn spans(&self, line: f64) -> bool {
		self.top <= line && self.bottom >= line
	}
}

/// First section, in [`Section::ALL`] order, straddling `probe_line`.
/// Sections whose bounds are unknown are skipped.
pub fn section_in_view(
	probe_line: f64,
	mut bounds_of: impl FnMut(Section) -> Option<SectionBounds>,
) -> Option<Section> {
	Section::ALL
		.into_iter()
		.find(|&section| bounds_of(section).is_some_and(|b| b.spans(probe_line)))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn layout(section: Section) -> Option<SectionBounds> {
		match section {
			Section::About => Some(SectionBounds::new(50.0, 400.0)),
			Section::Research => Some(SectionBounds::new(420.0, 900.0)),
			_ => None,
		}
	}

	#[test]
	fn picks_section_straddling_probe() {
		assert_eq!(section_in_view(100.0, layout), Some(Section::About));
	}

	#[test]
	fn boundaries_are_inclusive() {
		let edge = |s: Section| (s == Section::Skills).then_some(SectionBounds::new(100.0, 100.0));
		assert_eq!(section_in_view(100.0, edge), Some(Section::Skills));
	}

	#[test]
	fn first_match_in_document_order_wins() {
		let overlapping = |s: Section| match s {
			Section::Projects | Section::Contact => Some(SectionBounds::new(0.0, 500.0)),
			_ => None,
		};
		assert_eq!(section_in_view(100.0, overlapping), Some(Section::Projects));
	}

	#[test]
	fn missing_elements_do_not_abort_scan() {
		let only_contact = |s: Section| (s == Section::Contact).then_some(SectionBounds::new(-20.0, 700.0));
		assert_eq!(section_in_view(100.0, only_contact), Some(Section::Contact));
		assert_eq!(section_in_view(100.0, |_| None), None);
	}

	#[test]
	fn nav_links_cover_every_section_but_hero() {
		assert_eq!(Section::NAV.len(), Section::ALL.len() - 1);
		assert!(!Section::NAV.contains(&Section::Hero));
	}
}
