//! Default configuration values
//!
//! Constants of the skeleton application plus the default functions serde
//! uses when a field is missing from the settings file.

use crate::gdi::Color;

/// Color skipped by transparent blits
pub const TRANSPARENT_COLOR: Color = Color::new(0, 0, 0);

// Window defaults
pub fn default_title() -> String {
    "Application Title".to_string()
}
pub fn default_screen_width() -> i32 {
    1_600
}
pub fn default_screen_height() -> i32 {
    900
}
pub fn default_fullscreen() -> bool {
    true
}
/// Milliseconds between two update ticks
pub fn default_frame_rate() -> u64 {
    32
}

// Graphics defaults
pub fn default_pixel_depth() -> u32 {
    32
}
pub fn default_double_buffering() -> bool {
    true
}

// Logging defaults
pub fn default_log_filter() -> String {
    "info".to_string()
}
