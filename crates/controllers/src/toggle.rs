//! Toggle bindings (boolean settings)

use std::rc::Rc;

use claro_store::SettingsStore;

use crate::availability::{
    always_available, AvailabilityFn, AvailabilityStatus, DeviceCapabilities,
};
use crate::controller::{Checkable, PreferenceController, Summarizable};
use crate::screen::PreferenceScreen;

/// Summary pair shown for the two checked states.
#[derive(Debug, Clone, Copy)]
pub struct ToggleSummary {
    pub on: &'static str,
    pub off: &'static str,
}

/// Generic binding from one switch control to one boolean setting key.
///
/// Concrete controllers are constructor calls, not subtypes: the key,
/// default, availability rule and optional summary pair fully describe
/// a toggle.
pub struct ToggleBinding {
    store: Rc<dyn SettingsStore>,
    key: &'static str,
    default: bool,
    caps: DeviceCapabilities,
    availability: AvailabilityFn,
    summary: Option<ToggleSummary>,
}

impl ToggleBinding {
    pub fn new(
        store: Rc<dyn SettingsStore>,
        key: &'static str,
        default: bool,
        caps: DeviceCapabilities,
    ) -> Self {
        ToggleBinding {
            store,
            key,
            default,
            caps,
            availability: always_available,
            summary: None,
        }
    }

    pub fn with_availability(mut self, rule: AvailabilityFn) -> Self {
        self.availability = rule;
        self
    }

    /// Show a state-dependent summary line under the toggle.
    pub fn with_summary(mut self, on: &'static str, off: &'static str) -> Self {
        self.summary = Some(ToggleSummary { on, off });
        self
    }
}

impl PreferenceController for ToggleBinding {
    fn preference_key(&self) -> &str {
        self.key
    }

    fn availability(&self) -> AvailabilityStatus {
        (self.availability)(&self.caps)
    }

    fn display(&self, screen: &mut PreferenceScreen) {
        let status = self.availability();
        let checked = self.is_checked();
        if let Some(widget) = screen.find_preference_mut(self.key) {
            widget.visible = status.is_shown();
            widget.enabled = status.is_available();
            widget.checked = Some(checked);
            if let Some(s) = self.summary {
                widget.summary = Some(if checked { s.on } else { s.off }.to_string());
            }
        }
    }
}

impl Checkable for ToggleBinding {
    fn is_checked(&self) -> bool {
        self.store.get_bool(self.key, self.default)
    }

    fn set_checked(&self, checked: bool) -> bool {
        let ok = self.store.put_bool(self.key, checked);
        if !ok {
            log::warn!("write to {} failed", self.key);
        }
        ok
    }
}

impl Summarizable for ToggleBinding {
    /// Empty for toggles declared without a summary pair.
    fn summary(&self) -> String {
        match self.summary {
            Some(s) => (if self.is_checked() { s.on } else { s.off }).to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claro_store::MemoryStore;

    fn store() -> Rc<dyn SettingsStore> {
        Rc::new(MemoryStore::new())
    }

    #[test]
    fn unset_key_reads_the_default() {
        let toggle = ToggleBinding::new(store(), "t", false, DeviceCapabilities::default());
        assert!(!toggle.is_checked());

        let toggle = ToggleBinding::new(store(), "t", true, DeviceCapabilities::default());
        assert!(toggle.is_checked());
    }

    #[test]
    fn checked_roundtrip() {
        let toggle = ToggleBinding::new(store(), "t", false, DeviceCapabilities::default());
        assert!(toggle.set_checked(true));
        assert!(toggle.is_checked());
        assert!(toggle.set_checked(false));
        assert!(!toggle.is_checked());
    }

    #[test]
    fn summary_follows_state() {
        let toggle = ToggleBinding::new(store(), "t", false, DeviceCapabilities::default())
            .with_summary("On", "Off");
        assert_eq!(toggle.summary(), "Off");
        toggle.set_checked(true);
        assert_eq!(toggle.summary(), "On");
    }

    #[test]
    fn display_pushes_state_into_widget() {
        let mut screen = PreferenceScreen::new();
        screen.add(crate::screen::PreferenceWidget::new("t", "Toggle"));

        let toggle = ToggleBinding::new(store(), "t", false, DeviceCapabilities::default())
            .with_summary("On", "Off");
        toggle.set_checked(true);
        toggle.display(&mut screen);

        let widget = screen.find_preference("t").unwrap();
        assert_eq!(widget.checked, Some(true));
        assert_eq!(widget.summary.as_deref(), Some("On"));
        assert!(widget.enabled);
        assert!(widget.visible);
    }

    #[test]
    fn unsupported_toggle_is_hidden() {
        fn never(_: &DeviceCapabilities) -> AvailabilityStatus {
            AvailabilityStatus::UnsupportedOnDevice
        }

        let mut screen = PreferenceScreen::new();
        screen.add(crate::screen::PreferenceWidget::new("t", "Toggle"));

        let toggle = ToggleBinding::new(store(), "t", false, DeviceCapabilities::default())
            .with_availability(never);
        toggle.display(&mut screen);

        let widget = screen.find_preference("t").unwrap();
        assert!(!widget.visible);
        assert!(!widget.enabled);
    }
}
