use web_sys::window;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Reads the user's reduced-motion system setting.
///
/// Anything that goes wrong along the way (no window, query unsupported)
/// counts as "motion allowed".
pub fn system_prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
