//! Display controllers: magnification, color correction, text and
//! pointer rendering.

use std::rc::Rc;

use claro_store::{keys, SettingsStore};

use crate::availability::{AvailabilityStatus, DeviceCapabilities};
use crate::list::ListBinding;
use crate::options::OptionSet;
use crate::toggle::ToggleBinding;

// Magnification activation areas.
pub const MAGNIFY_FULL_SCREEN: i32 = 1;
pub const MAGNIFY_WINDOW: i32 = 2;
pub const MAGNIFY_SWITCH: i32 = 3;

// Color correction transforms.
pub const CORRECTION_GRAYSCALE: i32 = 0;
pub const CORRECTION_PROTANOMALY: i32 = 11;
pub const CORRECTION_DEUTERANOMALY: i32 = 12;
pub const CORRECTION_TRITANOMALY: i32 = 13;

/// Full-screen magnification always works; the window and switch modes
/// need compositor support, so without it the selector is shown but
/// locked to its default.
fn window_magnification_gate(caps: &DeviceCapabilities) -> AvailabilityStatus {
    if caps.window_magnification {
        AvailabilityStatus::Available
    } else {
        AvailabilityStatus::ConditionallyUnavailable
    }
}

fn requires_color_correction(caps: &DeviceCapabilities) -> AvailabilityStatus {
    if caps.color_correction {
        AvailabilityStatus::Available
    } else {
        AvailabilityStatus::UnsupportedOnDevice
    }
}

pub fn magnification_mode(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    let modes = OptionSet::new(vec![
        (MAGNIFY_FULL_SCREEN, "Full screen"),
        (MAGNIFY_WINDOW, "Window"),
        (MAGNIFY_SWITCH, "Switch between full screen and window"),
    ]);
    ListBinding::new(store, keys::MAGNIFICATION_MODE, modes, caps)
        .with_availability(window_magnification_gate)
}

pub fn magnification_follow_typing(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ToggleBinding {
    ToggleBinding::new(store, keys::MAGNIFICATION_FOLLOW_TYPING, true, caps)
}

pub fn high_contrast_text(store: Rc<dyn SettingsStore>, caps: DeviceCapabilities) -> ToggleBinding {
    ToggleBinding::new(store, keys::HIGH_CONTRAST_TEXT, false, caps)
}

pub fn color_correction_enabled(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ToggleBinding {
    ToggleBinding::new(store, keys::COLOR_CORRECTION_ENABLED, false, caps)
        .with_availability(requires_color_correction)
        .with_summary(crate::strings::ON, crate::strings::OFF)
}

pub fn color_correction_mode(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    let modes = OptionSet::new(vec![
        (CORRECTION_DEUTERANOMALY, "Deuteranomaly (red-green)"),
        (CORRECTION_PROTANOMALY, "Protanomaly (red-green)"),
        (CORRECTION_TRITANOMALY, "Tritanomaly (blue-yellow)"),
        (CORRECTION_GRAYSCALE, "Grayscale"),
    ]);
    ListBinding::new(store, keys::COLOR_CORRECTION_MODE, modes, caps)
        .with_availability(requires_color_correction)
}

pub fn large_pointer_icon(store: Rc<dyn SettingsStore>, caps: DeviceCapabilities) -> ToggleBinding {
    ToggleBinding::new(store, keys::LARGE_POINTER_ICON, false, caps)
}
