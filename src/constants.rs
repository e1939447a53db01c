//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Flipdeck";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "flipdeck";
