//! English label tables
//!
//! All user-visible strings live in declared data (here and in the
//! per-controller option sets) and are resolved at the UI boundary.
//! Binding logic never looks strings up by numeric id. Embedders
//! shipping other locales build their screens and option sets from
//! their own tables.

pub const ON: &str = "On";
pub const OFF: &str = "Off";

/// Widget titles for the default accessibility screen.
pub mod titles {
    // Sound & vibration
    pub const VIBRATION_INTENSITY: &str = "Vibration intensity";
    pub const MONO_AUDIO: &str = "Mono audio";
    pub const AUDIO_BALANCE: &str = "Audio balance";
    pub const HEARING_RINGTONE_ROUTING: &str = "Ringtone audio";
    pub const HEARING_CALL_ROUTING: &str = "Call audio";
    pub const HEARING_MEDIA_ROUTING: &str = "Media audio";

    // Display
    pub const MAGNIFICATION_MODE: &str = "Magnification area";
    pub const MAGNIFICATION_FOLLOW_TYPING: &str = "Follow typing";
    pub const HIGH_CONTRAST_TEXT: &str = "High contrast text";
    pub const COLOR_CORRECTION_ENABLED: &str = "Use color correction";
    pub const COLOR_CORRECTION_MODE: &str = "Correction mode";
    pub const LARGE_POINTER_ICON: &str = "Large mouse pointer";

    // Interaction
    pub const INTERACTION_TIMEOUT: &str = "Time to take action";
    pub const AUTOCLICK_ENABLED: &str = "Click when the pointer stops";
    pub const AUTOCLICK_DELAY: &str = "Delay before click";
    pub const FLASH_NOTIFICATION_CAMERA: &str = "Camera flash notifications";
    pub const FLASH_NOTIFICATION_SCREEN: &str = "Screen flash notifications";
    pub const FLASH_NOTIFICATION_SCREEN_COLOR: &str = "Screen flash color";

    // Captions
    pub const CAPTIONS_ENABLED: &str = "Show captions";
    pub const CAPTION_PRESET: &str = "Caption style";
    pub const CAPTION_FONT_SCALE: &str = "Text size";
    pub const CAPTION_TYPEFACE: &str = "Font";
    pub const CAPTION_EDGE_TYPE: &str = "Edge type";
    pub const CAPTION_EDGE_COLOR: &str = "Edge color";
    pub const CAPTION_EDGE_OPACITY: &str = "Edge opacity";
    pub const CAPTION_FOREGROUND_COLOR: &str = "Text color";
    pub const CAPTION_FOREGROUND_OPACITY: &str = "Text opacity";
    pub const CAPTION_BACKGROUND_COLOR: &str = "Background color";
    pub const CAPTION_BACKGROUND_OPACITY: &str = "Background opacity";
    pub const CAPTION_WINDOW_COLOR: &str = "Caption window color";
    pub const CAPTION_WINDOW_OPACITY: &str = "Caption window opacity";
}
