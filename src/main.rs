// Without a console of its own, the process only shows one when asked for help.
#![cfg_attr(windows, windows_subsystem = "windows")]

use anyhow::Context;
use screen_sleeper::platform::{self, NativeWorkstation};
use screen_sleeper::{help, sleeper, Args, Command};
use std::io::stdout;
use std::thread;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse_os(std::env::args_os().skip(1), false);
    debug!(?args, "parsed command line");

    let settings = match Command::from_args(&args) {
        Command::Help => return show_help(),
        Command::Sleep(settings) => settings,
    };
    debug!(?settings, "starting");

    let mut workstation = NativeWorkstation::new();
    sleeper::run(&settings, &mut workstation, thread::sleep)
        .context("could not put the displays to sleep")
}

fn show_help() -> anyhow::Result<()> {
    let new_console = platform::attach_console();
    help::present(stdout(), new_console, thread::sleep).context("could not write to stdout")
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("screen_sleeper=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
