use crate::args::Args;
use std::io::{self, Write};
use std::time::Duration;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

const SWITCHES: [(&str, &str); 6] = [
    ("/?", "Display this information"),
    ("/h", "Display this information"),
    ("/idle <minutes>", "Wait until idle for this long"),
    (
        "/delay <seconds>",
        "Wait before entering standby (if /standby specified) or off",
    ),
    ("/standby <seconds>", "Wait before turning off monitors"),
    ("/lock", "Lock the computer before turning off monitors"),
];

/// How long a console opened just for the usage text stays up
pub const LINGER: Duration = Duration::from_secs(15);

/// Returns true if the user asked for the usage text
pub fn requested_help(args: &Args) -> bool {
    args.has_switch("?") || args.has_switch("h")
}

/// Writes the version banner followed by the list of switches
pub fn write_help(mut w: impl Write) -> io::Result<()> {
    writeln!(&mut w, "{NAME} {VERSION}")?;
    writeln!(&mut w, "{DESCRIPTION}")?;
    writeln!(&mut w)?;
    writeln!(&mut w, "Usage:")?;

    let col_width = SWITCHES.iter().map(|(s, _)| s.len()).max().unwrap_or(0) + 5;
    for (switch, help) in SWITCHES {
        writeln!(&mut w, "    {switch:col_width$}{help}")?;
    }

    writeln!(&mut w)?;
    w.flush()
}

/// Writes the usage text. When it went to a console that was opened for it, announces the
/// closing and then waits [`LINGER`] so the console does not vanish before it can be read.
pub fn present(
    mut w: impl Write,
    new_console: bool,
    sleep: impl FnOnce(Duration),
) -> io::Result<()> {
    write_help(&mut w)?;

    if new_console {
        writeln!(&mut w, "Closing in {} seconds...", LINGER.as_secs())?;
        w.flush()?;
        sleep(LINGER);
    }
    Ok(())
}
