use super::{PlatformError, Workstation};
use crate::power::PowerState;
use std::io;
use std::mem::size_of;
use std::time::Duration;
use tracing::debug;
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Console::AllocConsole;
use windows::Win32::System::Shutdown::LockWorkStation;
use windows::Win32::System::SystemInformation::GetTickCount;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetLastInputInfo, LASTINPUTINFO};
use windows::Win32::UI::WindowsAndMessaging::{
    SendMessageW, HWND_BROADCAST, SC_MONITORPOWER, WM_SYSCOMMAND,
};

/// Talks to the local Windows session
#[derive(Debug, Default)]
pub struct NativeWorkstation;

impl NativeWorkstation {
    pub fn new() -> Self {
        NativeWorkstation
    }
}

impl Workstation for NativeWorkstation {
    fn set_power(&mut self, state: PowerState) -> Result<(), PlatformError> {
        debug!(%state, "broadcasting monitor power command");
        // The broadcast result carries no meaning, every top-level window answers it.
        unsafe {
            SendMessageW(
                HWND_BROADCAST,
                WM_SYSCOMMAND,
                WPARAM(SC_MONITORPOWER as usize),
                LPARAM(state.message_code()),
            );
        }
        Ok(())
    }

    fn idle_time(&self) -> Result<Duration, PlatformError> {
        let mut info = LASTINPUTINFO {
            cbSize: size_of::<LASTINPUTINFO>() as u32,
            dwTime: 0,
        };

        let ok = unsafe { GetLastInputInfo(&mut info) };
        if !ok.as_bool() {
            return Err(PlatformError::Os {
                operation: "reading the last input time",
                source: io::Error::last_os_error(),
            });
        }

        // Both counters are milliseconds since boot and wrap after ~49 days.
        let now = unsafe { GetTickCount() };
        let idle_ms = now.wrapping_sub(info.dwTime);
        Ok(Duration::from_millis(u64::from(idle_ms)))
    }

    fn lock(&mut self) -> Result<(), PlatformError> {
        debug!("locking workstation");
        unsafe { LockWorkStation() }.map_err(|e| PlatformError::Os {
            operation: "locking the workstation",
            source: e.into(),
        })
    }
}

/// Gives the process a console to print to. Returns false if it already had one.
pub fn attach_console() -> bool {
    // Fails when the process is already attached to a console.
    unsafe { AllocConsole() }.is_ok()
}
