//! The accessibility controller catalog
//!
//! The ordered controller list and the matching default widget set for
//! the accessibility settings screen. An embedder builds both, runs
//! `display_all`, renders the visible widgets, and routes edits back
//! through the individual bindings.

use std::rc::Rc;

use claro_store::{keys, SettingsStore};

use crate::availability::DeviceCapabilities;
use crate::captions;
use crate::controller::PreferenceController;
use crate::display;
use crate::interaction;
use crate::screen::{PreferenceScreen, PreferenceWidget};
use crate::sound;
use crate::strings::titles;

/// Every accessibility controller, in screen order.
pub fn accessibility_controllers(
    store: &Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> Vec<Box<dyn PreferenceController>> {
    vec![
        // Sound & vibration
        Box::new(sound::vibration_intensity(store.clone(), caps)),
        Box::new(sound::mono_audio(store.clone(), caps)),
        Box::new(sound::audio_balance(store.clone(), caps)),
        Box::new(sound::hearing_ringtone_routing(store.clone(), caps)),
        Box::new(sound::hearing_call_routing(store.clone(), caps)),
        Box::new(sound::hearing_media_routing(store.clone(), caps)),
        // Display
        Box::new(display::magnification_mode(store.clone(), caps)),
        Box::new(display::magnification_follow_typing(store.clone(), caps)),
        Box::new(display::high_contrast_text(store.clone(), caps)),
        Box::new(display::color_correction_enabled(store.clone(), caps)),
        Box::new(display::color_correction_mode(store.clone(), caps)),
        Box::new(display::large_pointer_icon(store.clone(), caps)),
        // Interaction
        Box::new(interaction::interaction_timeout(store.clone(), caps)),
        Box::new(interaction::autoclick_enabled(store.clone(), caps)),
        Box::new(interaction::autoclick_delay(store.clone(), caps)),
        Box::new(interaction::camera_flash_notification(store.clone(), caps)),
        Box::new(interaction::screen_flash_notification(store.clone(), caps)),
        Box::new(interaction::screen_flash_color(store.clone(), caps)),
        // Captions
        Box::new(captions::captions_enabled(store.clone(), caps)),
        Box::new(captions::caption_preset(store.clone(), caps)),
        Box::new(captions::caption_font_scale(store.clone(), caps)),
        Box::new(captions::caption_typeface(store.clone(), caps)),
        Box::new(captions::caption_edge_type(store.clone(), caps)),
        Box::new(captions::caption_edge_color(store.clone(), caps)),
        Box::new(captions::caption_foreground(store.clone(), caps)),
        Box::new(captions::caption_background(store.clone(), caps)),
        Box::new(captions::caption_window(store.clone(), caps)),
    ]
}

/// The default widget set matching `accessibility_controllers`, with
/// English titles.
pub fn accessibility_screen() -> PreferenceScreen {
    let mut screen = PreferenceScreen::new();

    // Sound & vibration
    screen.add(PreferenceWidget::new(keys::VIBRATION_INTENSITY, titles::VIBRATION_INTENSITY));
    screen.add(PreferenceWidget::new(keys::MONO_AUDIO, titles::MONO_AUDIO));
    screen.add(PreferenceWidget::new(keys::AUDIO_BALANCE, titles::AUDIO_BALANCE));
    screen.add(PreferenceWidget::new(keys::HEARING_RINGTONE_ROUTING, titles::HEARING_RINGTONE_ROUTING));
    screen.add(PreferenceWidget::new(keys::HEARING_CALL_ROUTING, titles::HEARING_CALL_ROUTING));
    screen.add(PreferenceWidget::new(keys::HEARING_MEDIA_ROUTING, titles::HEARING_MEDIA_ROUTING));

    // Display
    screen.add(PreferenceWidget::new(keys::MAGNIFICATION_MODE, titles::MAGNIFICATION_MODE));
    screen.add(PreferenceWidget::new(keys::MAGNIFICATION_FOLLOW_TYPING, titles::MAGNIFICATION_FOLLOW_TYPING));
    screen.add(PreferenceWidget::new(keys::HIGH_CONTRAST_TEXT, titles::HIGH_CONTRAST_TEXT));
    screen.add(PreferenceWidget::new(keys::COLOR_CORRECTION_ENABLED, titles::COLOR_CORRECTION_ENABLED));
    screen.add(PreferenceWidget::new(keys::COLOR_CORRECTION_MODE, titles::COLOR_CORRECTION_MODE));
    screen.add(PreferenceWidget::new(keys::LARGE_POINTER_ICON, titles::LARGE_POINTER_ICON));

    // Interaction
    screen.add(PreferenceWidget::new(keys::INTERACTION_TIMEOUT_MS, titles::INTERACTION_TIMEOUT));
    screen.add(PreferenceWidget::new(keys::AUTOCLICK_ENABLED, titles::AUTOCLICK_ENABLED));
    screen.add(PreferenceWidget::new(keys::AUTOCLICK_DELAY_MS, titles::AUTOCLICK_DELAY));
    screen.add(PreferenceWidget::new(keys::FLASH_NOTIFICATION_CAMERA, titles::FLASH_NOTIFICATION_CAMERA));
    screen.add(PreferenceWidget::new(keys::FLASH_NOTIFICATION_SCREEN, titles::FLASH_NOTIFICATION_SCREEN));
    screen.add(PreferenceWidget::new(keys::FLASH_NOTIFICATION_SCREEN_COLOR, titles::FLASH_NOTIFICATION_SCREEN_COLOR));

    // Captions
    screen.add(PreferenceWidget::new(keys::CAPTIONS_ENABLED, titles::CAPTIONS_ENABLED));
    screen.add(PreferenceWidget::new(keys::CAPTION_PRESET, titles::CAPTION_PRESET));
    screen.add(PreferenceWidget::new(keys::CAPTION_FONT_SCALE, titles::CAPTION_FONT_SCALE));
    screen.add(PreferenceWidget::new(keys::CAPTION_TYPEFACE, titles::CAPTION_TYPEFACE));
    screen.add(PreferenceWidget::new(keys::CAPTION_EDGE_TYPE, titles::CAPTION_EDGE_TYPE));
    screen.add(PreferenceWidget::new(keys::CAPTION_EDGE_COLOR, titles::CAPTION_EDGE_COLOR));
    screen.add(PreferenceWidget::new(captions::EDGE_OPACITY_ID, titles::CAPTION_EDGE_OPACITY));
    screen.add(PreferenceWidget::new(keys::CAPTION_FOREGROUND_COLOR, titles::CAPTION_FOREGROUND_COLOR));
    screen.add(PreferenceWidget::new(captions::FOREGROUND_OPACITY_ID, titles::CAPTION_FOREGROUND_OPACITY));
    screen.add(PreferenceWidget::new(keys::CAPTION_BACKGROUND_COLOR, titles::CAPTION_BACKGROUND_COLOR));
    screen.add(PreferenceWidget::new(captions::BACKGROUND_OPACITY_ID, titles::CAPTION_BACKGROUND_OPACITY));
    screen.add(PreferenceWidget::new(keys::CAPTION_WINDOW_COLOR, titles::CAPTION_WINDOW_COLOR));
    screen.add(PreferenceWidget::new(captions::WINDOW_OPACITY_ID, titles::CAPTION_WINDOW_OPACITY));

    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use claro_store::MemoryStore;

    #[test]
    fn every_controller_has_a_widget() {
        let store: Rc<dyn SettingsStore> = Rc::new(MemoryStore::new());
        let controllers = accessibility_controllers(&store, DeviceCapabilities::default());
        let screen = accessibility_screen();

        for controller in &controllers {
            assert!(
                screen.find_preference(controller.preference_key()).is_some(),
                "no widget for {}",
                controller.preference_key()
            );
        }
    }

    #[test]
    fn widget_ids_are_unique() {
        let screen = accessibility_screen();
        let mut seen = std::collections::HashSet::new();
        for widget in screen.widgets() {
            assert!(seen.insert(widget.id.clone()), "duplicate id {}", widget.id);
        }
    }
}
