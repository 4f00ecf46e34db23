//! Sound & vibration controllers

use std::rc::Rc;

use claro_store::{keys, SettingsStore};

use crate::availability::{AvailabilityStatus, DeviceCapabilities};
use crate::list::ListBinding;
use crate::options::OptionSet;
use crate::toggle::ToggleBinding;

// Hearing-device routing values, shared by the three routing keys.
pub const ROUTING_AUTOMATIC: i32 = 0;
pub const ROUTING_HEARING_DEVICE: i32 = 1;
pub const ROUTING_DEVICE_SPEAKER: i32 = 2;

fn requires_vibrator(caps: &DeviceCapabilities) -> AvailabilityStatus {
    if caps.vibrator {
        AvailabilityStatus::Available
    } else {
        AvailabilityStatus::UnsupportedOnDevice
    }
}

fn requires_hearing_support(caps: &DeviceCapabilities) -> AvailabilityStatus {
    if caps.hearing_device_support {
        AvailabilityStatus::Available
    } else {
        AvailabilityStatus::UnsupportedOnDevice
    }
}

pub fn vibration_intensity(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    let intensities = OptionSet::new(vec![
        (0, "Off"),
        (1, "Low"),
        (2, "Medium"),
        (3, "High"),
    ]);
    ListBinding::new(store, keys::VIBRATION_INTENSITY, intensities, caps)
        .with_availability(requires_vibrator)
}

pub fn mono_audio(store: Rc<dyn SettingsStore>, caps: DeviceCapabilities) -> ToggleBinding {
    ToggleBinding::new(store, keys::MONO_AUDIO, false, caps)
}

pub fn audio_balance(store: Rc<dyn SettingsStore>, caps: DeviceCapabilities) -> ListBinding<f32> {
    let positions = OptionSet::new(vec![
        (0.0f32, "Center"),
        (-1.0, "Left"),
        (1.0, "Right"),
    ]);
    ListBinding::new(store, keys::AUDIO_BALANCE, positions, caps)
}

fn routing_options() -> OptionSet<i32> {
    OptionSet::new(vec![
        (ROUTING_AUTOMATIC, "Automatic"),
        (ROUTING_HEARING_DEVICE, "Hearing device"),
        (ROUTING_DEVICE_SPEAKER, "Device speaker"),
    ])
}

fn hearing_routing(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
    key: &'static str,
) -> ListBinding<i32> {
    ListBinding::new(store, key, routing_options(), caps)
        .with_availability(requires_hearing_support)
}

pub fn hearing_ringtone_routing(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    hearing_routing(store, caps, keys::HEARING_RINGTONE_ROUTING)
}

pub fn hearing_call_routing(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    hearing_routing(store, caps, keys::HEARING_CALL_ROUTING)
}

pub fn hearing_media_routing(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    hearing_routing(store, caps, keys::HEARING_MEDIA_ROUTING)
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
    fn vibration_requires_a_vibrator() {
        let caps = DeviceCapabilities {
            vibrator: false,
            ..Default::default()
        };
        let binding = vibration_intensity(shared_store(), caps);
        assert_eq!(binding.availability(), AvailabilityStatus::UnsupportedOnDevice);

        let binding = vibration_intensity(shared_store(), DeviceCapabilities::default());
        assert_eq!(binding.availability(), AvailabilityStatus::Available);
    }

    #[test]
    fn vibration_summary_tracks_the_stored_intensity() {
        let store = shared_store();
        store.put_int(keys::VIBRATION_INTENSITY, 2);
        let binding = vibration_intensity(store, DeviceCapabilities::default());
        assert_eq!(binding.summary(), "Medium");
    }

    #[test]
    fn routing_controllers_share_values_but_not_keys() {
        let store = shared_store();
        let ringtone = hearing_ringtone_routing(store.clone(), DeviceCapabilities::default());
        let media = hearing_media_routing(store.clone(), DeviceCapabilities::default());

        assert!(ringtone.set_value(ROUTING_HEARING_DEVICE));
        assert_eq!(ringtone.value(), ROUTING_HEARING_DEVICE);
        // The media key is untouched.
        assert_eq!(media.value(), ROUTING_AUTOMATIC);
    }

    #[test]
    fn balance_defaults_to_center() {
        let binding = audio_balance(shared_store(), DeviceCapabilities::default());
        assert_eq!(binding.value(), 0.0);
        assert_eq!(binding.summary(), "Center");
        assert!(binding.set_value(-1.0));
        assert_eq!(binding.summary(), "Left");
    }
}
