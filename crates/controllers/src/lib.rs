//! Preference controllers for the Claro accessibility surface
//!
//! Each controller binds one UI control to one or more persisted
//! settings: it computes availability from device capability flags,
//! pushes the stored state into its widget at screen-build time, and
//! forwards user edits back into the store.
//!
//! Key design decisions:
//! - Composition over inheritance: two generic binding shapes
//!   (`ToggleBinding`, `ListBinding`) plus small capability traits
//!   (`Checkable`, `Selectable`, `Summarizable`) replace a controller
//!   class hierarchy.
//! - The store handle is explicit: every binding takes
//!   `Rc<dyn SettingsStore>` at construction. No globals.
//! - Labels are declared data (`OptionSet`, `strings`), resolved at the
//!   UI boundary, never looked up by numeric id inside binding logic.

pub mod availability;
pub mod captions;
pub mod catalog;
pub mod controller;
pub mod display;
pub mod interaction;
pub mod list;
pub mod options;
pub mod screen;
pub mod sound;
pub mod strings;
pub mod toggle;

pub use availability::{AvailabilityStatus, DeviceCapabilities};
pub use controller::{Checkable, PreferenceController, Selectable, Summarizable};
pub use list::ListBinding;
pub use options::{ListOption, OptionSet};
pub use screen::{display_all, PreferenceScreen, PreferenceWidget};
pub use toggle::ToggleBinding;
