//! Static page content: profile, project records and skills.
//!
//! Content is rendered verbatim. Pages supply it as JSON in a
//! `<script id="portfolio-data" type="application/json">` element; the
//! built-in sample content is used when that element is missing or invalid.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::config::PageConfig;

/// Who the page is about and how to reach them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
	/// Full name, also the page title.
	pub name: String,
	/// Small uppercase line above the name.
	pub eyebrow: String,
	/// One-line pitch under the name.
	pub tagline: String,
	/// Short hero paragraph.
	pub summary: String,
	/// About section heading.
	pub headline: String,
	/// About section paragraphs, laid out in two columns.
	#[serde(default)]
	pub bio: Vec<String>,
	/// Contact address.
	pub email: String,
	/// Shown in the contact section when present.
	#[serde(default)]
	pub phone: Option<String>,
	/// Profile URL.
	#[serde(default)]
	pub github: Option<String>,
	/// Profile URL.
	#[serde(default)]
	pub linkedin: Option<String>,
	/// Contact section pitch.
	pub pitch: String,
}

/// A research or course project card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	/// Card heading.
	pub title: String,
	/// Role held.
	pub role: String,
	/// Lab, course or organisation.
	pub location: String,
	/// Free-form date range.
	pub period: String,
	/// Body text.
	pub description: String,
	/// Highlighted results.
	#[serde(default)]
	pub metrics: Vec<String>,
	/// Technology tags.
	#[serde(default)]
	pub tags: Vec<String>,
	/// External link, rendered as an arrow.
	#[serde(default)]
	pub link: Option<String>,
}

/// One skill category and its entries.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillGroup {
	/// Category name.
	pub category: String,
	/// Skill names, in order.
	pub skills: Vec<String>,
}

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PortfolioData {
	/// Personal details.
	pub profile: Profile,
	/// Research experience cards.
	#[serde(default)]
	pub research: Vec<Project>,
	/// Course and personal project cards.
	#[serde(default)]
	pub projects: Vec<Project>,
	/// JSON object of category to skill names; category order is kept.
	#[serde(default, deserialize_with = "skill_groups")]
	pub skills: Vec<SkillGroup>,
	/// Background and scroll settings.
	#[serde(default)]
	pub config: PageConfig,
}

fn skill_groups<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<SkillGroup>, D::Error> {
	struct GroupsVisitor;

	impl<'de> Visitor<'de> for GroupsVisitor {
		type Value = Vec<SkillGroup>;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("a map of skill category to skill names")
		}

		fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
			let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
			while let Some((category, skills)) = map.next_entry::<String, Vec<String>>()? {
				groups.push(SkillGroup { category, skills });
			}
			Ok(groups)
		}
	}

	deserializer.deserialize_map(GroupsVisitor)
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

fn group(category: &str, skills: &[&str]) -> SkillGroup {
	SkillGroup {
		category: category.to_string(),
		skills: strings(skills),
	}
}

impl Default for PortfolioData {
	fn default() -> Self {
		Self {
			profile: Profile {
				name: "Your Name".into(),
				eyebrow: "Computer Science Student".into(),
				tagline: "Building intelligent systems with computer vision, machine learning, and cloud infrastructure.".into(),
				summary: "Student focused on DevOps, cloud computing, and scalable ML systems, with research experience in VR/AR and computer vision.".into(),
				headline: "Research-Driven Engineer".into(),
				bio: strings(&[
					"Computer Science student whose research spans computer vision, VR/AR, and machine learning systems.",
					"Currently building CNN-based quality control pipelines for image data.",
					"First-author publication on neural 3D representations for mobile VR, plus hardware security research experience.",
					"Now moving toward DevOps and cloud computing: containers, CI/CD pipelines, and infrastructure as code.",
				]),
				email: "hello@example.com".into(),
				phone: None,
				github: Some("https://github.com/".into()),
				linkedin: Some("https://www.linkedin.com/".into()),
				pitch: "Currently seeking opportunities in DevOps, cloud computing, and ML infrastructure. Open to internships, research collaborations, and full-time roles.".into(),
			},
			research: vec![
				Project {
					title: "Multi-Task CNN for Biological Sample QC".into(),
					role: "Undergraduate Student Researcher".into(),
					location: "University Lab".into(),
					period: "2025 – Present".into(),
					description: "ResNet-18 classifier for automated quality control with on-device freshness estimation via TensorFlow Lite.".into(),
					metrics: strings(&["99.5% accuracy", "MAE 1.4 hours", "R² = 0.997"]),
					tags: strings(&["PyTorch", "TensorFlow Lite", "Computer Vision", "OpenCV"]),
					link: None,
				},
				Project {
					title: "VR Hardware Security Testbed".into(),
					role: "Research Assistant".into(),
					location: "Security Research Group".into(),
					period: "Summer 2024".into(),
					description: "Real-time DAQ architecture for probing acoustic interference in MEMS sensors used by VR headsets.".into(),
					metrics: strings(&["120 Hz synchronization", "Real-time fault detection"]),
					tags: strings(&["Python", "Hardware Security", "Signal Processing"]),
					link: None,
				},
				Project {
					title: "Neural 3D Representations in VR".into(),
					role: "Research Assistant & First Author".into(),
					location: "Graphics Lab".into(),
					period: "2023 – 2024".into(),
					description: "Evaluated 3D Gaussian Splatting for mobile VR, trading a small quality loss for large gains in frame rate and storage.".into(),
					metrics: strings(&["72 FPS vs 9 FPS", "99% storage reduction"]),
					tags: strings(&["Unity", "3D Gaussian Splatting", "VR/AR", "C#"]),
					link: Some("https://ieeexplore.ieee.org/document/10708024".into()),
				},
			],
			projects: vec![
				Project {
					title: "Air Quality Monitoring System".into(),
					role: "Project Team Member".into(),
					location: "Engineering Design Course".into(),
					period: "Fall 2025".into(),
					description: "Sensor array prototype for environmental monitoring, modelled in SolidWorks and automated with Arduino.".into(),
					metrics: strings(&["3 design iterations", "Team of 4"]),
					tags: strings(&["Arduino", "SolidWorks", "IoT", "C++"]),
					link: None,
				},
				Project {
					title: "Autonomous Drones for Wildlife Protection".into(),
					role: "Team Lead".into(),
					location: "Student Competition".into(),
					period: "Spring 2021".into(),
					description: "Autonomous drone tracking built on YOLOv5, tested in a simulated reserve.".into(),
					metrics: strings(&["7+ concurrent targets", "38% improvement"]),
					tags: strings(&["YOLOv5", "Unreal Engine 4", "Python", "Computer Vision"]),
					link: None,
				},
			],
			skills: vec![
				group("Languages", &["Python", "C", "C++", "JavaScript", "R", "C#", "MATLAB"]),
				group("ML & CV", &["PyTorch", "TensorFlow", "OpenCV", "Pandas", "NumPy", "SciPy"]),
				group("Tools & Platforms", &["React", "Unity", "Unreal Engine", "SolidWorks", "Git", "Linux"]),
				group("Learning", &["AWS", "Docker", "Kubernetes", "CI/CD", "Terraform"]),
			],
			config: PageConfig::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const MINIMAL: &str = r#"{
		"profile": {
			"name": "Ada",
			"eyebrow": "Engineer",
			"tagline": "t",
			"summary": "s",
			"headline": "h",
			"email": "ada@example.com",
			"pitch": "p"
		},
		"research": [
			{ "title": "A", "role": "r", "location": "l", "period": "p", "description": "d" }
		],
		"skills": { "Zeta": ["z"], "Alpha": ["a", "b"] }
	}"#;

	#[test]
	fn optional_fields_default() {
		let data: PortfolioData = serde_json::from_str(MINIMAL).unwrap();
		let project = &data.research[0];
		assert!(project.metrics.is_empty());
		assert!(project.tags.is_empty());
		assert_eq!(project.link, None);
		assert!(data.projects.is_empty());
		assert_eq!(data.profile.phone, None);
		assert_eq!(data.config, PageConfig::default());
	}

	#[test]
	fn skill_categories_keep_document_order() {
		let data: PortfolioData = serde_json::from_str(MINIMAL).unwrap();
		let categories: Vec<&str> = data.skills.iter().map(|g| g.category.as_str()).collect();
		assert_eq!(categories, ["Zeta", "Alpha"]);
		assert_eq!(data.skills[1].skills, ["a", "b"]);
	}

	#[test]
	fn skills_must_be_a_map() {
		let bad = MINIMAL.replace(r#"{ "Zeta": ["z"], "Alpha": ["a", "b"] }"#, r#"["z"]"#);
		assert!(serde_json::from_str::<PortfolioData>(&bad).is_err());
	}

	#[test]
	fn sample_content_is_complete() {
		let data = PortfolioData::default();
		assert_eq!(data.research.len(), 3);
		assert_eq!(data.projects.len(), 2);
		assert_eq!(data.skills.len(), 4);
		assert!(data.research.iter().any(|p| p.link.is_some()));
	}
}
