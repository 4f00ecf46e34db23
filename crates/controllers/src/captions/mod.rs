//! Caption settings
//!
//! Caption style persists across several keys: an enabled flag, a
//! preset selector, and, when the preset is custom, per-channel
//! packed color values plus edge, typeface and scale settings.

mod controllers;
mod style;

pub use controllers::*;
pub use style::*;
