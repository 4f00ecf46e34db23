//! Interaction controllers: timeouts, autoclick, flash notifications.

use std::rc::Rc;

use claro_store::{keys, SettingsStore};

use crate::availability::{AvailabilityStatus, DeviceCapabilities};
use crate::list::ListBinding;
use crate::options::OptionSet;
use crate::toggle::ToggleBinding;

/// Stored timeout meaning "use the system default".
pub const TIMEOUT_DEFAULT: i32 = 0;

fn requires_camera_flash(caps: &DeviceCapabilities) -> AvailabilityStatus {
    if caps.camera_flash {
        AvailabilityStatus::Available
    } else {
        AvailabilityStatus::UnsupportedOnDevice
    }
}

/// The color selector ships behind a feature flag; the plain screen
/// flash toggle does not.
fn screen_flash_color_gate(caps: &DeviceCapabilities) -> AvailabilityStatus {
    if caps.screen_flash_color {
        AvailabilityStatus::Available
    } else {
        AvailabilityStatus::ConditionallyUnavailable
    }
}

pub fn interaction_timeout(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    let timeouts = OptionSet::new(vec![
        (TIMEOUT_DEFAULT, "Default"),
        (10_000, "10 seconds"),
        (30_000, "30 seconds"),
        (60_000, "1 minute"),
        (120_000, "2 minutes"),
    ]);
    ListBinding::new(store, keys::INTERACTION_TIMEOUT_MS, timeouts, caps)
}

pub fn autoclick_enabled(store: Rc<dyn SettingsStore>, caps: DeviceCapabilities) -> ToggleBinding {
    ToggleBinding::new(store, keys::AUTOCLICK_ENABLED, false, caps)
        .with_summary(crate::strings::ON, crate::strings::OFF)
}

pub fn autoclick_delay(store: Rc<dyn SettingsStore>, caps: DeviceCapabilities) -> ListBinding<i32> {
    let delays = OptionSet::new(vec![
        (600, "0.6 seconds (default)"),
        (200, "0.2 seconds"),
        (400, "0.4 seconds"),
        (800, "0.8 seconds"),
        (1_000, "1 second"),
    ]);
    ListBinding::new(store, keys::AUTOCLICK_DELAY_MS, delays, caps)
}

pub fn camera_flash_notification(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ToggleBinding {
    ToggleBinding::new(store, keys::FLASH_NOTIFICATION_CAMERA, false, caps)
        .with_availability(requires_camera_flash)
        .with_summary(crate::strings::ON, crate::strings::OFF)
}

pub fn screen_flash_notification(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ToggleBinding {
    ToggleBinding::new(store, keys::FLASH_NOTIFICATION_SCREEN, false, caps)
        .with_summary(crate::strings::ON, crate::strings::OFF)
}

pub fn screen_flash_color(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    // Packed color+opacity values, all at 40% alpha.
    let colors = OptionSet::new(vec![
        (0x66_00_00_FEu32 as i32, "Blue"),
        (0x66_00_7F_FFu32 as i32, "Azure"),
        (0x66_00_FF_FFu32 as i32, "Cyan"),
        (0x66_00_7F_3Fu32 as i32, "Teal"),
        (0x66_FF_D7_00u32 as i32, "Gold"),
        (0x66_FF_00_00u32 as i32, "Red"),
    ]);
    ListBinding::new(store, keys::FLASH_NOTIFICATION_SCREEN_COLOR, colors, caps)
        .with_availability(screen_flash_color_gate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{PreferenceController, Selectable, Summarizable};
    use claro_store::MemoryStore;

    fn shared_store() -> Rc<dyn SettingsStore> {
        Rc::new(MemoryStore::new())
    }

    #[test]
    fn timeout_summary_lookup() {
        let store = shared_store();
        let binding = interaction_timeout(store.clone(), DeviceCapabilities::default());
        assert_eq!(binding.summary(), "Default");

        assert!(binding.set_value(30_000));
        assert_eq!(binding.summary(), "30 seconds");

        // A stale value written by an older build maps to the default.
        store.put_int(keys::INTERACTION_TIMEOUT_MS, 45_000);
        assert_eq!(binding.summary(), "Default");
    }

    #[test]
    fn camera_flash_hidden_without_hardware() {
        let caps = DeviceCapabilities {
            camera_flash: false,
            ..Default::default()
        };
        let toggle = camera_flash_notification(shared_store(), caps);
        assert!(!toggle.availability().is_shown());
    }

    #[test]
    fn screen_flash_color_is_feature_gated() {
        let caps = DeviceCapabilities {
            screen_flash_color: false,
            ..Default::default()
        };
        let list = screen_flash_color(shared_store(), caps);
        assert_eq!(
            list.availability(),
            AvailabilityStatus::ConditionallyUnavailable
        );
        assert_eq!(list.summary(), "Blue");
    }

    #[test]
    fn autoclick_delay_defaults_to_600ms() {
        let binding = autoclick_delay(shared_store(), DeviceCapabilities::default());
        assert_eq!(binding.value(), 600);
    }
}
