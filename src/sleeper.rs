//! Drives a workstation through idle wait, standby, lock and power off.

use crate::command::Settings;
use crate::platform::{PlatformError, Workstation};
use crate::power::PowerState;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Runs one full sleep sequence and returns once the displays have been told to turn off.
///
/// `sleep` blocks the caller for the given duration. The executable passes
/// [`std::thread::sleep`].
pub fn run<W, S>(
    settings: &Settings,
    workstation: &mut W,
    mut sleep: S,
) -> Result<(), PlatformError>
where
    W: Workstation,
    S: FnMut(Duration),
{
    wait_for_idle(settings.idle, workstation, &mut sleep)?;

    if !settings.delay.is_zero() {
        debug!(delay = ?settings.delay, "waiting before power change");
        sleep(settings.delay);
    }

    if !settings.standby.is_zero() {
        info!(standby = ?settings.standby, "displays entering standby");
        workstation.set_power(PowerState::Standby)?;
        sleep(settings.standby);
    }

    // Locking wakes the displays, so it has to happen before they are turned off.
    if settings.lock {
        if let Err(e) = workstation.lock() {
            warn!(error = %e, "could not lock the workstation");
        }
    }

    info!("turning displays off");
    workstation.set_power(PowerState::Off)
}

/// Blocks until the user has not touched an input device for `required`.
///
/// Returns immediately when `required` is zero. A failed idle query counts as user activity,
/// unless the platform cannot answer it at all.
pub fn wait_for_idle<W, S>(
    required: Duration,
    workstation: &W,
    mut sleep: S,
) -> Result<(), PlatformError>
where
    W: Workstation + ?Sized,
    S: FnMut(Duration),
{
    if required.is_zero() {
        return Ok(());
    }

    info!(?required, "waiting for the user to go idle");
    loop {
        let idle = match workstation.idle_time() {
            Ok(idle) => idle,
            Err(e @ PlatformError::Unsupported { .. }) => return Err(e),
            Err(e) => {
                warn!(error = %e, "could not read idle time, assuming the user is active");
                Duration::ZERO
            }
        };

        let remaining = required.saturating_sub(idle);
        if remaining.is_zero() {
            break;
        }

        debug!(?idle, ?remaining, "user not idle long enough");
        sleep(remaining);
    }

    Ok(())
}
