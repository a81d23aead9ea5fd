//! Page components: the static layout, the particle background and scroll
//! tracking.

pub mod page;
pub mod particle_field;
pub mod scroll;
