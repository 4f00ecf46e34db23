//! Caption text style and packed color values
//!
//! Caption colors persist as a single packed integer: the opacity
//! channel in the top byte, a 24-bit RGB color below it. `parse` and
//! `merge` are exact inverses over every value whose color fits 24
//! bits; this round-trip is relied on by the color+opacity bindings and
//! pinned by tests.

use claro_store::{keys, SettingsStore};

/// A packed caption color split into its two channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOpacity {
    /// 24-bit `0xRRGGBB` color.
    pub color: u32,
    /// Alpha channel, `0x00` transparent through `0xFF` opaque.
    pub opacity: u8,
}

/// Unpack a stored caption color.
pub const fn parse(packed: u32) -> ColorOpacity {
    ColorOpacity {
        color: packed & 0x00FF_FFFF,
        opacity: (packed >> 24) as u8,
    }
}

/// Pack color and opacity channels back into the stored form.
///
/// Inverse of `parse`; color bits above the low 24 are discarded.
pub const fn merge(color: u32, opacity: u8) -> u32 {
    ((opacity as u32) << 24) | (color & 0x00FF_FFFF)
}

// ============================================================================
// Declared channel values
// ============================================================================

pub const COLOR_WHITE: u32 = 0xFF_FFFF;
pub const COLOR_BLACK: u32 = 0x00_0000;
pub const COLOR_RED: u32 = 0xFF_0000;
pub const COLOR_YELLOW: u32 = 0xFF_FF00;
pub const COLOR_GREEN: u32 = 0x00_FF00;
pub const COLOR_CYAN: u32 = 0x00_FFFF;
pub const COLOR_BLUE: u32 = 0x00_00FF;
pub const COLOR_MAGENTA: u32 = 0xFF_00FF;

pub const OPACITY_25: u8 = 0x40;
pub const OPACITY_50: u8 = 0x80;
pub const OPACITY_75: u8 = 0xBF;
pub const OPACITY_OPAQUE: u8 = 0xFF;

// Edge treatments.
pub const EDGE_NONE: i32 = 0;
pub const EDGE_OUTLINE: i32 = 1;
pub const EDGE_DROP_SHADOW: i32 = 2;
pub const EDGE_RAISED: i32 = 3;
pub const EDGE_DEPRESSED: i32 = 4;

// Style presets. `PRESET_CUSTOM` exposes the per-channel controls.
pub const PRESET_WHITE_ON_BLACK: i32 = 0;
pub const PRESET_BLACK_ON_WHITE: i32 = 1;
pub const PRESET_YELLOW_ON_BLACK: i32 = 2;
pub const PRESET_YELLOW_ON_BLUE: i32 = 3;
pub const PRESET_CUSTOM: i32 = -1;

// ============================================================================
// Resolved style
// ============================================================================

/// A fully resolved caption style, as a renderer consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionTextStyle {
    /// Text color+opacity, packed.
    pub foreground: u32,
    /// Text background color+opacity, packed.
    pub background: u32,
    /// Caption window color+opacity, packed.
    pub window: u32,
    pub edge_type: i32,
    /// Edge color+opacity, packed.
    pub edge_color: u32,
    /// Font family name; empty means the system default.
    pub typeface: String,
    /// Text scale relative to the default size.
    pub font_scale: f32,
}

impl CaptionTextStyle {
    fn preset(foreground: u32, background: u32) -> Self {
        CaptionTextStyle {
            foreground: merge(foreground, OPACITY_OPAQUE),
            background: merge(background, OPACITY_OPAQUE),
            window: merge(COLOR_BLACK, OPACITY_25),
            edge_type: EDGE_NONE,
            edge_color: merge(COLOR_BLACK, OPACITY_OPAQUE),
            typeface: String::new(),
            font_scale: 1.0,
        }
    }

    pub fn white_on_black() -> Self {
        Self::preset(COLOR_WHITE, COLOR_BLACK)
    }

    pub fn black_on_white() -> Self {
        Self::preset(COLOR_BLACK, COLOR_WHITE)
    }

    pub fn yellow_on_black() -> Self {
        Self::preset(COLOR_YELLOW, COLOR_BLACK)
    }

    pub fn yellow_on_blue() -> Self {
        Self::preset(COLOR_YELLOW, COLOR_BLUE)
    }

    /// The style for a stored preset value, or `None` for
    /// `PRESET_CUSTOM` and unknown values.
    pub fn for_preset(preset: i32) -> Option<Self> {
        match preset {
            PRESET_WHITE_ON_BLACK => Some(Self::white_on_black()),
            PRESET_BLACK_ON_WHITE => Some(Self::black_on_white()),
            PRESET_YELLOW_ON_BLACK => Some(Self::yellow_on_black()),
            PRESET_YELLOW_ON_BLUE => Some(Self::yellow_on_blue()),
            _ => None,
        }
    }

    /// Read the custom style from the store, defaulting each channel to
    /// the white-on-black preset.
    pub fn custom_from_store(store: &dyn SettingsStore) -> Self {
        let base = Self::white_on_black();
        CaptionTextStyle {
            foreground: store.get_int(keys::CAPTION_FOREGROUND_COLOR, base.foreground as i32) as u32,
            background: store.get_int(keys::CAPTION_BACKGROUND_COLOR, base.background as i32) as u32,
            window: store.get_int(keys::CAPTION_WINDOW_COLOR, base.window as i32) as u32,
            edge_type: store.get_int(keys::CAPTION_EDGE_TYPE, base.edge_type),
            edge_color: store.get_int(keys::CAPTION_EDGE_COLOR, base.edge_color as i32) as u32,
            typeface: store.get_string(keys::CAPTION_TYPEFACE, &base.typeface),
            font_scale: store.get_float(keys::CAPTION_FONT_SCALE, base.font_scale),
        }
    }

    /// Resolve the effective style: a known preset wins, anything else
    /// reads the custom channels.
    pub fn resolve(store: &dyn SettingsStore) -> Self {
        let preset = store.get_int(keys::CAPTION_PRESET, PRESET_WHITE_ON_BLACK);
        Self::for_preset(preset).unwrap_or_else(|| Self::custom_from_store(store))
    }
}
