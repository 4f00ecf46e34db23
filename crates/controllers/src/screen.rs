//! Preference-screen host
//!
//! A screen is an ordered collection of widget state. Controllers push
//! stored state and availability into it once per screen build;
//! rendering the widgets is the embedding application's job.

use crate::controller::PreferenceController;

/// Display state for one preference control.
#[derive(Debug, Clone)]
pub struct PreferenceWidget {
    pub id: String,
    pub title: String,
    pub summary: Option<String>,
    /// Two-state controls only; `None` for selector rows and links.
    pub checked: Option<bool>,
    pub enabled: bool,
    pub visible: bool,
}

impl PreferenceWidget {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        PreferenceWidget {
            id: id.into(),
            title: title.into(),
            summary: None,
            checked: None,
            enabled: true,
            visible: true,
        }
    }
}

/// Ordered widget collection with id lookup.
#[derive(Debug, Default)]
pub struct PreferenceScreen {
    widgets: Vec<PreferenceWidget>,
}

impl PreferenceScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a widget. Ids are expected to be unique; lookup returns
    /// the first match.
    pub fn add(&mut self, widget: PreferenceWidget) {
        self.widgets.push(widget);
    }

    pub fn find_preference(&self, id: &str) -> Option<&PreferenceWidget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn find_preference_mut(&mut self, id: &str) -> Option<&mut PreferenceWidget> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }

    /// All widgets in declared order.
    pub fn widgets(&self) -> &[PreferenceWidget] {
        &self.widgets
    }

    /// Widgets currently shown, in declared order.
    pub fn visible_widgets(&self) -> impl Iterator<Item = &PreferenceWidget> {
        self.widgets.iter().filter(|w| w.visible)
    }
}

/// Run every controller's display pass against the screen, in order.
/// Called once per screen build.
pub fn display_all(controllers: &[Box<dyn PreferenceController>], screen: &mut PreferenceScreen) {
    for controller in controllers {
        controller.display(screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let mut screen = PreferenceScreen::new();
        screen.add(PreferenceWidget::new("a", "First"));
        screen.add(PreferenceWidget::new("b", "Second"));

        assert_eq!(screen.find_preference("b").unwrap().title, "Second");
        assert!(screen.find_preference("missing").is_none());
    }

    #[test]
    fn visible_widgets_filters_hidden() {
        let mut screen = PreferenceScreen::new();
        screen.add(PreferenceWidget::new("a", "First"));
        screen.add(PreferenceWidget::new("b", "Second"));
        screen.find_preference_mut("a").unwrap().visible = false;

        let shown: Vec<_> = screen.visible_widgets().map(|w| w.id.as_str()).collect();
        assert_eq!(shown, vec!["b"]);
    }
}
