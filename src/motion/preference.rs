/// Whether motion effects are allowed for this session.
///
/// Built once at mount from the reduced-motion media query and only changed
/// afterwards through [`MotionPreference::toggle`]. Nothing is persisted, so a
/// reload falls back to the system setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionPreference {
    enabled: bool,
}

impl MotionPreference {
    pub fn from_system(reduced_motion: bool) -> Self {
        Self {
            enabled: !reduced_motion,
        }
    }

    pub fn enabled(self) -> bool {
        self.enabled
    }

    pub fn toggle(self) -> Self {
        Self {
            enabled: !self.enabled,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.enabled {
            "Disable Motion"
        } else {
            "Enable Motion"
        }
    }

    /// Value for a motion-only attribute. `None` drops the attribute from the
    /// rendered element.
    pub fn hint(self, value: &'static str) -> Option<&'static str> {
        self.enabled.then_some(value)
    }

    /// Like [`hint`](Self::hint) for `data-aos*` attributes. Those hide the
    /// element until the reveal library animates it in, so they also need the
    /// library to have started at mount.
    pub fn reveal_hint(self, reveal_running: bool, value: &'static str) -> Option<&'static str> {
        (self.enabled && reveal_running).then_some(value)
    }
}

impl Default for MotionPreference {
    fn default() -> Self {
        Self::from_system(false)
    }
}
