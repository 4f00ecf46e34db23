//! Setting key catalog
//!
//! One stable, globally unique key per logical setting. Controllers and
//! embedders always go through these constants; raw strings in call
//! sites are a bug. Keys never change meaning across versions.

// ============================================================================
// Sound & vibration
// ============================================================================

/// Vibration strength, 0 (off) through 3 (high).
pub const VIBRATION_INTENSITY: &str = "accessibility_vibration_intensity";

/// Downmix stereo output to mono, 0/1.
pub const MONO_AUDIO: &str = "accessibility_mono_audio";

/// Left/right output balance, -1.0 (left) through 1.0 (right).
pub const AUDIO_BALANCE: &str = "accessibility_audio_balance";

/// Where ringtones play when a hearing device is connected.
pub const HEARING_RINGTONE_ROUTING: &str = "accessibility_hearing_ringtone_routing";

/// Where call audio plays when a hearing device is connected.
pub const HEARING_CALL_ROUTING: &str = "accessibility_hearing_call_routing";

/// Where media audio plays when a hearing device is connected.
pub const HEARING_MEDIA_ROUTING: &str = "accessibility_hearing_media_routing";

// ============================================================================
// Display
// ============================================================================

/// Magnification activation area, see the magnification mode options.
pub const MAGNIFICATION_MODE: &str = "accessibility_magnification_mode";

/// Keep the magnified viewport on the text cursor while typing, 0/1.
pub const MAGNIFICATION_FOLLOW_TYPING: &str = "accessibility_magnification_follow_typing";

/// Draw text with maximum-contrast colors, 0/1.
pub const HIGH_CONTRAST_TEXT: &str = "accessibility_high_contrast_text";

/// Color correction master switch, 0/1.
pub const COLOR_CORRECTION_ENABLED: &str = "accessibility_color_correction_enabled";

/// Color correction transform, see the color correction mode options.
pub const COLOR_CORRECTION_MODE: &str = "accessibility_color_correction_mode";

/// Use the enlarged pointer icon, 0/1.
pub const LARGE_POINTER_ICON: &str = "accessibility_large_pointer_icon";

// ============================================================================
// Interaction
// ============================================================================

/// How long transient UI stays up, in milliseconds; 0 means the system
/// default.
pub const INTERACTION_TIMEOUT_MS: &str = "accessibility_interactive_ui_timeout_ms";

/// Click automatically when the pointer rests, 0/1.
pub const AUTOCLICK_ENABLED: &str = "accessibility_autoclick_enabled";

/// Rest time before an automatic click, in milliseconds.
pub const AUTOCLICK_DELAY_MS: &str = "accessibility_autoclick_delay_ms";

/// Pulse the camera flash for notifications, 0/1.
pub const FLASH_NOTIFICATION_CAMERA: &str = "accessibility_flash_notification_camera";

/// Flash the screen for notifications, 0/1.
pub const FLASH_NOTIFICATION_SCREEN: &str = "accessibility_flash_notification_screen";

/// Screen flash tint as a packed color+opacity value.
pub const FLASH_NOTIFICATION_SCREEN_COLOR: &str = "accessibility_flash_notification_screen_color";

// ============================================================================
// Captions
// ============================================================================

/// Render captions on supported media, 0/1.
pub const CAPTIONS_ENABLED: &str = "accessibility_captioning_enabled";

/// Caption style preset; `PRESET_CUSTOM` exposes the per-channel keys
/// below.
pub const CAPTION_PRESET: &str = "accessibility_captioning_preset";

/// Caption text color+opacity, packed.
pub const CAPTION_FOREGROUND_COLOR: &str = "accessibility_captioning_foreground_color";

/// Caption text background color+opacity, packed.
pub const CAPTION_BACKGROUND_COLOR: &str = "accessibility_captioning_background_color";

/// Caption window color+opacity, packed.
pub const CAPTION_WINDOW_COLOR: &str = "accessibility_captioning_window_color";

/// Caption edge treatment, see the edge type options.
pub const CAPTION_EDGE_TYPE: &str = "accessibility_captioning_edge_type";

/// Caption edge color+opacity, packed.
pub const CAPTION_EDGE_COLOR: &str = "accessibility_captioning_edge_color";

/// Caption font family name; empty means the system default.
pub const CAPTION_TYPEFACE: &str = "accessibility_captioning_typeface";

/// Caption text scale relative to the default size.
pub const CAPTION_FONT_SCALE: &str = "accessibility_captioning_font_scale";
