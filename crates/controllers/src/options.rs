//! Declared option sets
//!
//! Each list control declares its legal values and labels exactly once;
//! the same declaration drives the options display, the summary string
//! and persistence. Index 0 is the default entry: any stored value
//! outside the declared set resolves there instead of failing.

use claro_store::SettingsStore;

/// A settings value type a list control can bind: how the type reads
/// and writes itself through the store's typed accessors.
pub trait OptionValue: Clone + PartialEq {
    fn read(store: &dyn SettingsStore, key: &str, default: &Self) -> Self;
    fn write(&self, store: &dyn SettingsStore, key: &str) -> bool;
}

impl OptionValue for i32 {
    fn read(store: &dyn SettingsStore, key: &str, default: &Self) -> Self {
        store.get_int(key, *default)
    }

    fn write(&self, store: &dyn SettingsStore, key: &str) -> bool {
        store.put_int(key, *self)
    }
}

impl OptionValue for f32 {
    fn read(store: &dyn SettingsStore, key: &str, default: &Self) -> Self {
        store.get_float(key, *default)
    }

    fn write(&self, store: &dyn SettingsStore, key: &str) -> bool {
        store.put_float(key, *self)
    }
}

impl OptionValue for String {
    fn read(store: &dyn SettingsStore, key: &str, default: &Self) -> Self {
        store.get_string(key, default)
    }

    fn write(&self, store: &dyn SettingsStore, key: &str) -> bool {
        store.put_string(key, self)
    }
}

/// One declared legal value with its display label.
#[derive(Debug, Clone)]
pub struct ListOption<T> {
    pub value: T,
    pub label: &'static str,
}

/// A finite ordered set of legal values for one list control.
#[derive(Debug, Clone)]
pub struct OptionSet<T> {
    options: Vec<ListOption<T>>,
}

impl<T: Clone + PartialEq> OptionSet<T> {
    /// Build from `(value, label)` pairs in display order.
    ///
    /// The set must be non-empty; a list control without options is a
    /// programming error, not a runtime condition.
    pub fn new(pairs: Vec<(T, &'static str)>) -> Self {
        assert!(!pairs.is_empty(), "option set must declare at least one value");
        OptionSet {
            options: pairs
                .into_iter()
                .map(|(value, label)| ListOption { value, label })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn options(&self) -> &[ListOption<T>] {
        &self.options
    }

    pub fn contains(&self, value: &T) -> bool {
        self.options.iter().any(|o| o.value == *value)
    }

    /// Index of a value in the declared order, or 0 when unknown.
    pub fn index_of(&self, value: &T) -> usize {
        self.options
            .iter()
            .position(|o| o.value == *value)
            .unwrap_or(0)
    }

    /// The declared value at an index, clamped into range.
    pub fn value_at(&self, index: usize) -> &T {
        let index = index.min(self.options.len() - 1);
        &self.options[index].value
    }

    /// The label for a value, falling back to the first entry's label
    /// for values outside the set.
    pub fn label_of(&self, value: &T) -> &'static str {
        self.options[self.index_of(value)].label
    }

    /// The first declared value, which doubles as the fallback.
    pub fn default_value(&self) -> &T {
        &self.options[0].value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intensities() -> OptionSet<i32> {
        OptionSet::new(vec![(0, "Off"), (1, "Low"), (2, "Medium"), (3, "High")])
    }

    #[test]
    fn index_of_known_value() {
        assert_eq!(intensities().index_of(&2), 2);
    }

    #[test]
    fn unknown_value_falls_back_to_first() {
        let set = intensities();
        assert_eq!(set.index_of(&99), 0);
        assert_eq!(set.label_of(&99), "Off");
    }

    #[test]
    fn value_at_clamps() {
        let set = intensities();
        assert_eq!(*set.value_at(3), 3);
        assert_eq!(*set.value_at(100), 3);
    }

    #[test]
    fn string_options() {
        let set = OptionSet::new(vec![
            (String::new(), "Default"),
            ("serif".to_string(), "Serif"),
        ]);
        assert_eq!(set.label_of(&"serif".to_string()), "Serif");
        assert_eq!(set.label_of(&"unknown".to_string()), "Default");
    }

    #[test]
    #[should_panic]
    fn empty_set_is_rejected() {
        OptionSet::<i32>::new(vec![]);
    }
}
