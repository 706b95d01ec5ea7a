//! Operating system services the sleeper depends on

use crate::power::PowerState;
use std::io;
use std::time::Duration;

#[cfg(windows)]
mod win32;
#[cfg(windows)]
pub use self::win32::{attach_console, NativeWorkstation};

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use self::unsupported::{attach_console, NativeWorkstation};

/// Returned when the operating system could not carry out a request
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("{operation} is not supported on this platform")]
    Unsupported { operation: &'static str },
    #[error("{operation} failed")]
    Os {
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}

/// The machine whose displays are being put to sleep
pub trait Workstation {
    /// Moves every display into `state`
    fn set_power(&mut self, state: PowerState) -> Result<(), PlatformError>;

    /// Time elapsed since the last keyboard or mouse input
    fn idle_time(&self) -> Result<Duration, PlatformError>;

    /// Locks the interactive session
    fn lock(&mut self) -> Result<(), PlatformError>;
}
