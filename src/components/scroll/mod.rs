//! Scroll/section observer.
//!
//! Tracks the vertical scroll offset and which content section is in view,
//! for navigation highlighting and background dimming.

mod hook;
mod observer;
mod section;

pub use hook::use_scroll_state;
pub use observer::{ScrollObserver, ScrollState, mount_scroll_observer};
pub use section::{Section, SectionBounds, section_in_view};
