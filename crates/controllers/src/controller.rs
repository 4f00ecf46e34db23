//! The generic preference-controller contract
//!
//! Controllers are composed from a small capability set rather than a
//! subclass hierarchy: every binding implements `PreferenceController`,
//! then adds `Checkable`, `Selectable` or `Summarizable` as its control
//! shape requires.

use crate::availability::AvailabilityStatus;
use crate::screen::PreferenceScreen;

/// Uniform lifecycle for binding one UI control to persisted state.
///
/// A controller is constructed when its settings screen is built, holds
/// nothing beyond its key(s), option declarations and handles, and is
/// dropped when the screen is torn down.
pub trait PreferenceController {
    /// The preference identifier this controller owns. Matches the
    /// widget id on the screen and, for single-key bindings, the
    /// setting key.
    fn preference_key(&self) -> &str;

    /// Recompute availability from the captured capability flags.
    ///
    /// Pure and side-effect free; stable within one display pass.
    fn availability(&self) -> AvailabilityStatus;

    /// One-time store-to-UI sync at screen-build time.
    ///
    /// Applies the availability policy to the bound widget and pushes
    /// the current stored state into it. Sync is one-directional here;
    /// user edits come back through `Checkable`/`Selectable`.
    fn display(&self, screen: &mut PreferenceScreen);
}

/// A control with a two-state checked value.
pub trait Checkable {
    /// Read the bound setting, or the documented default when unset.
    /// Never fails on a missing key.
    fn is_checked(&self) -> bool;

    /// Persist a new checked state. Returns whether the write stuck.
    fn set_checked(&self, checked: bool) -> bool;
}

/// A control choosing one of a finite, ordered set of legal values.
pub trait Selectable {
    type Value;

    /// The currently selected declared value. A stored value outside
    /// the declared set resolves to the first option.
    fn value(&self) -> Self::Value;

    /// Persist a new value. Values outside the declared set are
    /// rejected without touching the store.
    fn set_value(&self, value: Self::Value) -> bool;
}

/// A control with a display string derived from its stored value.
pub trait Summarizable {
    fn summary(&self) -> String;
}
