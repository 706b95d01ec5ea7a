use super::{PlatformError, Workstation};
use crate::power::PowerState;
use std::time::Duration;

/// Stand-in for platforms without a display power backend. Every request fails.
#[derive(Debug, Default)]
pub struct NativeWorkstation;

impl NativeWorkstation {
    pub fn new() -> Self {
        NativeWorkstation
    }
}

impl Workstation for NativeWorkstation {
    fn set_power(&mut self, _state: PowerState) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported {
            operation: "changing display power",
        })
    }

    fn idle_time(&self) -> Result<Duration, PlatformError> {
        Err(PlatformError::Unsupported {
            operation: "reading the idle time",
        })
    }

    fn lock(&mut self) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported {
            operation: "locking the workstation",
        })
    }
}

/// There is no separate console to allocate; output already goes to the terminal.
pub fn attach_console() -> bool {
    false
}
