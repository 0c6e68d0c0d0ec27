use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Scroll smoothing
pub const SMOOTH_WRAPPER_ID: &str = "smooth-wrapper";
pub const SMOOTH_CONTENT_ID: &str = "smooth-content";
pub const SMOOTHING: f64 = 1.2;

// Reveal on scroll
pub const REVEAL_DURATION_MS: u32 = 600;
pub const REVEAL_EASING: &str = "ease-out-cubic";
pub const REVEAL_OFFSET_PX: u32 = 120;
