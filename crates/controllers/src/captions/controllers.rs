//! Caption preference controllers
//!
//! Most caption controls are ordinary toggle/list bindings. The color
//! channels are the exception: each drives two widgets (a color list
//! and an opacity list) that persist into a single packed key.

use std::rc::Rc;

use claro_store::{keys, SettingsStore};

use crate::availability::{
    always_available, AvailabilityFn, AvailabilityStatus, DeviceCapabilities,
};
use crate::captions::style::{self, merge, parse};
use crate::controller::PreferenceController;
use crate::list::ListBinding;
use crate::options::OptionSet;
use crate::screen::PreferenceScreen;
use crate::strings;
use crate::toggle::ToggleBinding;

// Widget ids for the opacity halves of the packed color bindings. The
// color half uses the setting key itself, like every other control.
pub const FOREGROUND_OPACITY_ID: &str = "accessibility_captioning_foreground_opacity";
pub const BACKGROUND_OPACITY_ID: &str = "accessibility_captioning_background_opacity";
pub const WINDOW_OPACITY_ID: &str = "accessibility_captioning_window_opacity";
pub const EDGE_OPACITY_ID: &str = "accessibility_captioning_edge_opacity";

/// Binding from a color list and an opacity list to one packed key.
///
/// Reads decompose the stored value with `parse`, snapping each channel
/// into its declared set (index 0 on an unknown channel value). Writes
/// recompose with `merge`, carrying the other channel along unchanged.
pub struct PackedColorBinding {
    store: Rc<dyn SettingsStore>,
    key: &'static str,
    opacity_id: &'static str,
    colors: OptionSet<u32>,
    opacities: OptionSet<u8>,
    default_packed: u32,
    caps: DeviceCapabilities,
    availability: AvailabilityFn,
}

impl PackedColorBinding {
    pub fn new(
        store: Rc<dyn SettingsStore>,
        key: &'static str,
        opacity_id: &'static str,
        colors: OptionSet<u32>,
        opacities: OptionSet<u8>,
        default_packed: u32,
        caps: DeviceCapabilities,
    ) -> Self {
        PackedColorBinding {
            store,
            key,
            opacity_id,
            colors,
            opacities,
            default_packed,
            caps,
            availability: always_available,
        }
    }

    pub fn colors(&self) -> &OptionSet<u32> {
        &self.colors
    }

    pub fn opacities(&self) -> &OptionSet<u8> {
        &self.opacities
    }

    fn packed(&self) -> u32 {
        self.store.get_int(self.key, self.default_packed as i32) as u32
    }

    /// The stored color, snapped into the declared set.
    pub fn selected_color(&self) -> u32 {
        let raw = parse(self.packed()).color;
        *self.colors.value_at(self.colors.index_of(&raw))
    }

    /// The stored opacity, snapped into the declared set.
    pub fn selected_opacity(&self) -> u8 {
        let raw = parse(self.packed()).opacity;
        *self.opacities.value_at(self.opacities.index_of(&raw))
    }

    /// Persist a new color, keeping the current opacity channel.
    pub fn set_color(&self, color: u32) -> bool {
        if !self.colors.contains(&color) {
            log::warn!("rejected undeclared color for {}", self.key);
            return false;
        }
        self.write_packed(merge(color, self.selected_opacity()))
    }

    /// Persist a new opacity, keeping the current color channel.
    pub fn set_opacity(&self, opacity: u8) -> bool {
        if !self.opacities.contains(&opacity) {
            log::warn!("rejected undeclared opacity for {}", self.key);
            return false;
        }
        self.write_packed(merge(self.selected_color(), opacity))
    }

    fn write_packed(&self, packed: u32) -> bool {
        let ok = self.store.put_int(self.key, packed as i32);
        if !ok {
            log::warn!("write to {} failed", self.key);
        }
        ok
    }
}

impl PreferenceController for PackedColorBinding {
    fn preference_key(&self) -> &str {
        self.key
    }

    fn availability(&self) -> AvailabilityStatus {
        (self.availability)(&self.caps)
    }

    fn display(&self, screen: &mut PreferenceScreen) {
        let status = self.availability();
        let color_label = self.colors.label_of(&parse(self.packed()).color);
        let opacity_label = self.opacities.label_of(&parse(self.packed()).opacity);

        if let Some(widget) = screen.find_preference_mut(self.key) {
            widget.visible = status.is_shown();
            widget.enabled = status.is_available();
            widget.summary = Some(color_label.to_string());
        }
        if let Some(widget) = screen.find_preference_mut(self.opacity_id) {
            widget.visible = status.is_shown();
            widget.enabled = status.is_available();
            widget.summary = Some(opacity_label.to_string());
        }
    }
}

// ============================================================================
// Declared option sets
// ============================================================================

pub fn caption_color_options() -> OptionSet<u32> {
    OptionSet::new(vec![
        (style::COLOR_WHITE, "White"),
        (style::COLOR_BLACK, "Black"),
        (style::COLOR_RED, "Red"),
        (style::COLOR_YELLOW, "Yellow"),
        (style::COLOR_GREEN, "Green"),
        (style::COLOR_CYAN, "Cyan"),
        (style::COLOR_BLUE, "Blue"),
        (style::COLOR_MAGENTA, "Magenta"),
    ])
}

pub fn opacity_options() -> OptionSet<u8> {
    OptionSet::new(vec![
        (style::OPACITY_OPAQUE, "100%"),
        (style::OPACITY_75, "75%"),
        (style::OPACITY_50, "50%"),
        (style::OPACITY_25, "25%"),
    ])
}

// ============================================================================
// Controller constructors
// ============================================================================

pub fn captions_enabled(store: Rc<dyn SettingsStore>, caps: DeviceCapabilities) -> ToggleBinding {
    ToggleBinding::new(store, keys::CAPTIONS_ENABLED, false, caps)
        .with_summary(strings::ON, strings::OFF)
}

pub fn caption_preset(store: Rc<dyn SettingsStore>, caps: DeviceCapabilities) -> ListBinding<i32> {
    let presets = OptionSet::new(vec![
        (style::PRESET_WHITE_ON_BLACK, "White on black"),
        (style::PRESET_BLACK_ON_WHITE, "Black on white"),
        (style::PRESET_YELLOW_ON_BLACK, "Yellow on black"),
        (style::PRESET_YELLOW_ON_BLUE, "Yellow on blue"),
        (style::PRESET_CUSTOM, "Custom"),
    ]);
    ListBinding::new(store, keys::CAPTION_PRESET, presets, caps)
}

pub fn caption_font_scale(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<f32> {
    let scales = OptionSet::new(vec![
        (1.0f32, "Default"),
        (0.25, "Very small"),
        (0.5, "Small"),
        (1.5, "Large"),
        (2.0, "Very large"),
    ]);
    ListBinding::new(store, keys::CAPTION_FONT_SCALE, scales, caps)
}

pub fn caption_typeface(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<String> {
    let faces = OptionSet::new(vec![
        (String::new(), "Default"),
        ("sans-serif".to_string(), "Sans-serif"),
        ("sans-serif-condensed".to_string(), "Sans-serif condensed"),
        ("sans-serif-monospace".to_string(), "Sans-serif monospace"),
        ("serif".to_string(), "Serif"),
        ("serif-monospace".to_string(), "Serif monospace"),
        ("casual".to_string(), "Casual"),
        ("cursive".to_string(), "Cursive"),
    ]);
    ListBinding::new(store, keys::CAPTION_TYPEFACE, faces, caps)
}

pub fn caption_edge_type(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> ListBinding<i32> {
    let edges = OptionSet::new(vec![
        (style::EDGE_NONE, "None"),
        (style::EDGE_OUTLINE, "Outline"),
        (style::EDGE_DROP_SHADOW, "Drop shadow"),
        (style::EDGE_RAISED, "Raised"),
        (style::EDGE_DEPRESSED, "Depressed"),
    ]);
    ListBinding::new(store, keys::CAPTION_EDGE_TYPE, edges, caps)
}

pub fn caption_edge_color(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> PackedColorBinding {
    PackedColorBinding::new(
        store,
        keys::CAPTION_EDGE_COLOR,
        EDGE_OPACITY_ID,
        caption_color_options(),
        opacity_options(),
        merge(style::COLOR_BLACK, style::OPACITY_OPAQUE),
        caps,
    )
}

pub fn caption_foreground(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> PackedColorBinding {
    PackedColorBinding::new(
        store,
        keys::CAPTION_FOREGROUND_COLOR,
        FOREGROUND_OPACITY_ID,
        caption_color_options(),
        opacity_options(),
        merge(style::COLOR_WHITE, style::OPACITY_OPAQUE),
        caps,
    )
}

pub fn caption_background(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> PackedColorBinding {
    PackedColorBinding::new(
        store,
        keys::CAPTION_BACKGROUND_COLOR,
        BACKGROUND_OPACITY_ID,
        caption_color_options(),
        opacity_options(),
        merge(style::COLOR_BLACK, style::OPACITY_OPAQUE),
        caps,
    )
}

pub fn caption_window(
    store: Rc<dyn SettingsStore>,
    caps: DeviceCapabilities,
) -> PackedColorBinding {
    PackedColorBinding::new(
        store,
        keys::CAPTION_WINDOW_COLOR,
        WINDOW_OPACITY_ID,
        caption_color_options(),
        opacity_options(),
        merge(style::COLOR_BLACK, style::OPACITY_25),
        caps,
    )
}
