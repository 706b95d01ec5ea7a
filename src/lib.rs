//! Puts displays to sleep from the command line
//!
//! The executable is driven by switches prefixed with `/` or `-`:
//! ```text
//! screen-sleeper /idle 10 /delay 5 /standby 30 /lock
//! ```
//!
//! Switch | Meaning
//! -|-
//! `/?`, `/h` | Print usage
//! `/idle <minutes>` | Wait until the user has been idle this long
//! `/delay <seconds>` | Wait before standby (or off). At least one second.
//! `/standby <seconds>` | Put the displays in standby for this long before turning them off
//! `/lock` | Lock the workstation before turning the displays off
//!
//! # Syntax
//!
//! - An argument starting with `/` or `-` followed by anything but a digit is a [`Switch`]. The
//! digit rule keeps negative numbers such as `-520` as values.
//! - Every other argument is a value. Values before the first switch are unnamed; the rest belong
//! to the switch that precedes them.
//! - A switch given more than once collects the values of every occurrence.
//! - A lone `/` or `-` is ignored.

mod args;
mod command;
pub mod platform;
mod power;
pub mod sleeper;

pub use args::{Args, Switch};
pub use command::help;
pub use command::{Command, Settings, KNOWN_SWITCHES};
pub use platform::{PlatformError, Workstation};
pub use power::PowerState;
