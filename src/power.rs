use std::fmt;

/// Power states a display can be put into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Standby,
    Off,
}

impl PowerState {
    /// The value sent along with a monitor-power system command to request this state
    pub fn message_code(self) -> isize {
        match self {
            PowerState::On => -1,
            PowerState::Standby => 1,
            PowerState::Off => 2,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::On => write!(f, "on"),
            PowerState::Standby => write!(f, "standby"),
            PowerState::Off => write!(f, "off"),
        }
    }
}
