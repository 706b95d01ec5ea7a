use crate::args::Args;
use std::time::Duration;
use tracing::warn;

pub mod help;

/// Switches understood by the executable
pub const KNOWN_SWITCHES: [&str; 6] = ["?", "h", "idle", "delay", "standby", "lock"];

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/?` or `/h` was given
    Help,
    Sleep(Settings),
}

/// Timing for a single run of the sleeper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How long the user must have been idle before anything happens
    pub idle: Duration,
    /// Pause before standby (or before power off without standby)
    pub delay: Duration,
    /// How long the displays stay in standby before being turned off. Zero skips standby.
    pub standby: Duration,
    /// Lock the workstation right before turning the displays off
    pub lock: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            idle: Duration::ZERO,
            delay: Duration::from_secs(1),
            standby: Duration::ZERO,
            lock: false,
        }
    }
}

impl Command {
    /// Interprets parsed arguments. Unknown switches and unnamed values are ignored.
    pub fn from_args(args: &Args) -> Command {
        if help::requested_help(args) {
            return Command::Help;
        }

        if !args.values().is_empty() {
            warn!(values = ?args.values(), "ignoring unnamed values");
        }

        for name in unrecognized_switches(args) {
            warn!(name, "ignoring unrecognized switch");
        }

        let defaults = Settings::default();

        let idle = uint_switch(args, "idle")
            .map(|minutes| Duration::from_secs(u64::from(minutes) * 60))
            .unwrap_or(defaults.idle);

        // At least one second, so the user can let go of the keyboard and mouse.
        let delay = uint_switch(args, "delay")
            .map(|seconds| Duration::from_secs(u64::from(seconds.max(1))))
            .unwrap_or(defaults.delay);

        let standby = uint_switch(args, "standby")
            .map(|seconds| Duration::from_secs(u64::from(seconds)))
            .unwrap_or(defaults.standby);

        Command::Sleep(Settings {
            idle,
            delay,
            standby,
            lock: args.has_switch("lock"),
        })
    }
}

// Names of given switches that no known switch resolves to under the args' case policy
fn unrecognized_switches(args: &Args) -> Vec<&str> {
    args.switches()
        .iter()
        .map(|switch| switch.name())
        .filter(|name| {
            !KNOWN_SWITCHES
                .iter()
                .any(|known| args.switch(known).is_some_and(|s| s.name() == *name))
        })
        .collect()
}

// `None` when the switch is absent or was given without a value
fn uint_switch(args: &Args, name: &str) -> Option<u32> {
    let switch = args.switch(name)?;
    if switch.values().is_empty() {
        return None;
    }
    Some(switch.as_uint())
}
