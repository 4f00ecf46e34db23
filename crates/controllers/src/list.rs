//! List bindings (enumerated settings)

use std::rc::Rc;

use claro_store::SettingsStore;

use crate::availability::{
    always_available, AvailabilityFn, AvailabilityStatus, DeviceCapabilities,
};
use crate::controller::{PreferenceController, Selectable, Summarizable};
use crate::options::{OptionSet, OptionValue};
use crate::screen::PreferenceScreen;

/// Generic binding from one selector control to one setting key over a
/// declared option set.
///
/// The value type follows the stored encoding: `i32` for enumerated
/// settings, `f32` for scale factors, `String` for names.
pub struct ListBinding<T: OptionValue> {
    store: Rc<dyn SettingsStore>,
    key: &'static str,
    options: OptionSet<T>,
    caps: DeviceCapabilities,
    availability: AvailabilityFn,
}

impl<T: OptionValue> ListBinding<T> {
    pub fn new(
        store: Rc<dyn SettingsStore>,
        key: &'static str,
        options: OptionSet<T>,
        caps: DeviceCapabilities,
    ) -> Self {
        ListBinding {
            store,
            key,
            options,
            caps,
            availability: always_available,
        }
    }

    pub fn with_availability(mut self, rule: AvailabilityFn) -> Self {
        self.availability = rule;
        self
    }

    /// The declared options, for rendering a selector dialog.
    pub fn options(&self) -> &OptionSet<T> {
        &self.options
    }

    /// Index of the current selection in the declared order. An
    /// out-of-range stored value resolves to 0.
    pub fn selected_index(&self) -> usize {
        self.options.index_of(&self.raw_value())
    }

    /// The stored value before set membership is applied.
    fn raw_value(&self) -> T {
        T::read(&*self.store, self.key, self.options.default_value())
    }
}

impl<T: OptionValue> PreferenceController for ListBinding<T> {
    fn preference_key(&self) -> &str {
        self.key
    }

    fn availability(&self) -> AvailabilityStatus {
        (self.availability)(&self.caps)
    }

    fn display(&self, screen: &mut PreferenceScreen) {
        let status = self.availability();
        let summary = self.summary();
        if let Some(widget) = screen.find_preference_mut(self.key) {
            widget.visible = status.is_shown();
            widget.enabled = status.is_available();
            widget.summary = Some(summary);
        }
    }
}

impl<T: OptionValue> Selectable for ListBinding<T> {
    type Value = T;

    fn value(&self) -> T {
        let raw = self.raw_value();
        self.options.value_at(self.options.index_of(&raw)).clone()
    }

    fn set_value(&self, value: T) -> bool {
        if !self.options.contains(&value) {
            log::warn!("rejected undeclared value for {}", self.key);
            return false;
        }
        let ok = value.write(&*self.store, self.key);
        if !ok {
            log::warn!("write to {} failed", self.key);
        }
        ok
    }
}

impl<T: OptionValue> Summarizable for ListBinding<T> {
    fn summary(&self) -> String {
        self.options.label_of(&self.raw_value()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claro_store::{MemoryStore, StoredValue};

    fn intensities() -> OptionSet<i32> {
        OptionSet::new(vec![(0, "Off"), (1, "Low"), (2, "Medium"), (3, "High")])
    }

    fn binding(store: MemoryStore) -> ListBinding<i32> {
        ListBinding::new(
            Rc::new(store),
            "k",
            intensities(),
            DeviceCapabilities::default(),
        )
    }

    #[test]
    fn unset_key_selects_the_first_option() {
        let list = binding(MemoryStore::new());
        assert_eq!(list.value(), 0);
        assert_eq!(list.summary(), "Off");
    }

    #[test]
    fn stored_value_roundtrip() {
        let list = binding(MemoryStore::new());
        assert!(list.set_value(2));
        assert_eq!(list.value(), 2);
        assert_eq!(list.summary(), "Medium");
        assert_eq!(list.selected_index(), 2);
    }

    #[test]
    fn out_of_range_stored_value_maps_to_first_option() {
        let store = MemoryStore::new().with("k", StoredValue::Int(77));
        let list = binding(store);
        assert_eq!(list.value(), 0);
        assert_eq!(list.summary(), "Off");
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn undeclared_value_is_rejected_without_a_write() {
        let list = binding(MemoryStore::new());
        assert!(!list.set_value(42));
        assert_eq!(list.value(), 0);
    }

    #[test]
    fn float_options() {
        let scales = OptionSet::new(vec![(0.5f32, "Small"), (1.0, "Default"), (2.0, "Large")]);
        let list = ListBinding::new(
            Rc::new(MemoryStore::new()),
            "scale",
            scales,
            DeviceCapabilities::default(),
        );
        assert_eq!(list.summary(), "Small");
        assert!(list.set_value(2.0));
        assert_eq!(list.value(), 2.0);
        assert_eq!(list.summary(), "Large");
    }

    #[test]
    fn string_options() {
        let faces = OptionSet::new(vec![
            (String::new(), "Default"),
            ("serif".to_string(), "Serif"),
        ]);
        let list = ListBinding::new(
            Rc::new(MemoryStore::new()),
            "face",
            faces,
            DeviceCapabilities::default(),
        );
        assert!(list.set_value("serif".to_string()));
        assert_eq!(list.summary(), "Serif");
        assert!(!list.set_value("comic-sans".to_string()));
    }

    #[test]
    fn display_pushes_summary_and_availability() {
        fn gated(_: &DeviceCapabilities) -> AvailabilityStatus {
            AvailabilityStatus::ConditionallyUnavailable
        }

        let mut screen = PreferenceScreen::new();
        screen.add(crate::screen::PreferenceWidget::new("k", "Intensity"));

        let list = binding(MemoryStore::new()).with_availability(gated);
        list.display(&mut screen);

        let widget = screen.find_preference("k").unwrap();
        assert_eq!(widget.summary.as_deref(), Some("Off"));
        assert!(widget.visible);
        assert!(!widget.enabled);
    }
}
