use std::cell::{Cell, RefCell};

use log::{debug, warn};

use super::preference::MotionPreference;
use super::subsystems::AnimationSubsystem;

/// Mount-time lifecycle of the animation libraries.
///
/// The first call to [`initialize_if_enabled`](Self::initialize_if_enabled)
/// consumes the mount phase whatever the preference was, so flipping the
/// toggle later never starts (or stops) a library. Teardown is a no-op.
/// One controller lives for the whole page, owned by `App`.
#[derive(Debug, Default)]
pub struct MotionController {
    mounted: Cell<bool>,
    running: RefCell<Vec<&'static str>>,
}

impl MotionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts every subsystem when motion is enabled. Returns how many came up.
    ///
    /// A subsystem that fails is logged and skipped; the others still start.
    pub fn initialize_if_enabled(
        &self,
        preference: MotionPreference,
        subsystems: &[&dyn AnimationSubsystem],
    ) -> usize {
        if self.mounted.replace(true) {
            debug!("Motion subsystems already handled at mount, ignoring");
            return 0;
        }
        if !preference.enabled() {
            debug!("Reduced motion requested, skipping animation subsystems");
            return 0;
        }

        let mut started = 0;
        for subsystem in subsystems {
            match subsystem.init() {
                Ok(()) => {
                    debug!("Initialized {}", subsystem.name());
                    self.running.borrow_mut().push(subsystem.name());
                    started += 1;
                }
                Err(e) => warn!("Skipping {}: {}", subsystem.name(), e),
            }
        }
        started
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.running.borrow().iter().any(|running| *running == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::subsystems::SubsystemError;

    struct Stub {
        name: &'static str,
        fails: bool,
        calls: Cell<u32>,
    }

    impl Stub {
        fn ok(name: &'static str) -> Self {
            Self { name, fails: false, calls: Cell::new(0) }
        }

        fn failing(name: &'static str) -> Self {
            Self { name, fails: true, calls: Cell::new(0) }
        }
    }

    impl AnimationSubsystem for Stub {
        fn name(&self) -> &'static str {
            self.name
        }

        fn init(&self) -> Result<(), SubsystemError> {
            self.calls.set(self.calls.get() + 1);
            if self.fails {
                Err(SubsystemError::Missing(self.name))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn enabled_starts_every_subsystem_once() {
        let smoother = Stub::ok("smoother");
        let reveal = Stub::ok("reveal");
        let controller = MotionController::new();

        let started =
            controller.initialize_if_enabled(MotionPreference::from_system(false), &[&smoother, &reveal]);

        assert_eq!(started, 2);
        assert_eq!(smoother.calls.get(), 1);
        assert_eq!(reveal.calls.get(), 1);
        assert!(controller.is_running("smoother"));
        assert!(controller.is_running("reveal"));
    }

    #[test]
    fn disabled_starts_nothing() {
        let smoother = Stub::ok("smoother");
        let controller = MotionController::new();

        let started = controller.initialize_if_enabled(MotionPreference::from_system(true), &[&smoother]);

        assert_eq!(started, 0);
        assert_eq!(smoother.calls.get(), 0);
    }

    #[test]
    fn enabling_after_mount_does_not_initialize() {
        let smoother = Stub::ok("smoother");
        let controller = MotionController::new();
        let pref = MotionPreference::from_system(true);

        controller.initialize_if_enabled(pref, &[&smoother]);
        let started = controller.initialize_if_enabled(pref.toggle(), &[&smoother]);

        assert_eq!(started, 0);
        assert_eq!(smoother.calls.get(), 0);
        assert!(!controller.is_running("smoother"));
    }

    #[test]
    fn second_mount_call_is_ignored() {
        let smoother = Stub::ok("smoother");
        let controller = MotionController::new();
        let pref = MotionPreference::default();

        controller.initialize_if_enabled(pref, &[&smoother]);
        controller.initialize_if_enabled(pref, &[&smoother]);

        assert_eq!(smoother.calls.get(), 1);
    }

    #[test]
    fn failing_subsystem_does_not_block_the_rest() {
        let broken = Stub::failing("smoother");
        let reveal = Stub::ok("reveal");
        let controller = MotionController::new();

        let started = controller.initialize_if_enabled(MotionPreference::default(), &[&broken, &reveal]);

        assert_eq!(started, 1);
        assert_eq!(broken.calls.get(), 1);
        assert_eq!(reveal.calls.get(), 1);
        assert!(!controller.is_running("smoother"));
        assert!(controller.is_running("reveal"));
    }
}
