//! Static page layout: navigation, content sections and stylesheet.

mod nav;
mod project_card;
mod sections;
mod style;

pub use nav::NavBar;
pub use project_card::ProjectCard;
pub use sections::{About, Contact, Footer, Hero, ProjectSection, Skills};
pub use style::PAGE_CSS;
