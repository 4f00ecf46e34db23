//! Availability gating
//!
//! Whether a control is shown and enabled is a pure function of static
//! device capability flags. It is recomputed on every display pass and
//! never cached across a controller's lifetime, so there is no
//! invalidation logic anywhere in this crate.

/// Tri-state capability gate for one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    /// Supported and actionable.
    Available,
    /// Supported on this device but not actionable right now; the
    /// widget is shown disabled.
    ConditionallyUnavailable,
    /// Not supported by this device; the widget is not shown at all.
    UnsupportedOnDevice,
}

impl AvailabilityStatus {
    /// Whether the control accepts input.
    pub fn is_available(self) -> bool {
        matches!(self, AvailabilityStatus::Available)
    }

    /// Whether the widget appears on screen at all.
    pub fn is_shown(self) -> bool {
        !matches!(self, AvailabilityStatus::UnsupportedOnDevice)
    }
}

/// Static device capability and feature flags.
///
/// Captured once when a screen is built and treated as opaque inputs by
/// availability functions. The default is a fully equipped device;
/// embedders clear the flags their hardware lacks.
#[derive(Debug, Clone, Copy)]
pub struct DeviceCapabilities {
    /// A vibrator motor is present.
    pub vibrator: bool,
    /// A camera flash is present.
    pub camera_flash: bool,
    /// The audio stack can route to hearing devices.
    pub hearing_device_support: bool,
    /// The compositor supports window (partial-screen) magnification.
    pub window_magnification: bool,
    /// The display pipeline supports color correction transforms.
    pub color_correction: bool,
    /// Feature flag: the screen-flash color selector is rolled out.
    pub screen_flash_color: bool,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        DeviceCapabilities {
            vibrator: true,
            camera_flash: true,
            hearing_device_support: true,
            window_magnification: true,
            color_correction: true,
            screen_flash_color: true,
        }
    }
}

/// An availability rule: capability flags in, tri-state out.
///
/// Plain function pointers keep rules pure; a rule has nothing to close
/// over beyond the flags it is handed.
pub type AvailabilityFn = fn(&DeviceCapabilities) -> AvailabilityStatus;

/// The rule for controls with no capability requirement.
pub fn always_available(_caps: &DeviceCapabilities) -> AvailabilityStatus {
    AvailabilityStatus::Available
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_predicates() {
        assert!(AvailabilityStatus::Available.is_available());
        assert!(AvailabilityStatus::Available.is_shown());
        assert!(!AvailabilityStatus::ConditionallyUnavailable.is_available());
        assert!(AvailabilityStatus::ConditionallyUnavailable.is_shown());
        assert!(!AvailabilityStatus::UnsupportedOnDevice.is_available());
        assert!(!AvailabilityStatus::UnsupportedOnDevice.is_shown());
    }

    #[test]
    fn rules_are_deterministic_for_fixed_flags() {
        let caps = DeviceCapabilities {
            vibrator: false,
            ..Default::default()
        };
        let rule: AvailabilityFn = |c| {
            if c.vibrator {
                AvailabilityStatus::Available
            } else {
                AvailabilityStatus::UnsupportedOnDevice
            }
        };
        let first = rule(&caps);
        for _ in 0..10 {
            assert_eq!(rule(&caps), first);
        }
    }
}
