use std::ffi::OsStr;
use tracing::debug;

const PREFIXES: [char; 2] = ['/', '-'];

/// How a single raw argument is interpreted
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A prefix character on its own (`/` or `-`). Dropped.
    Separator,
    /// A switch name with its prefix stripped, not yet normalized
    Switch(&'a str),
    Value(&'a str),
}

impl<'a> Token<'a> {
    pub(crate) fn classify(arg: &'a str) -> Self {
        let mut chars = arg.chars();

        let Some(first) = chars.next() else {
            return Token::Value(arg);
        };

        if !PREFIXES.contains(&first) {
            return Token::Value(arg);
        }

        match chars.next() {
            None => Token::Separator,
            // Switch names never start with a digit, so `-520` stays a (negative) number.
            Some(c) if c.is_ascii_digit() => Token::Value(arg),
            Some(_) => Token::Switch(&arg[first.len_utf8()..]),
        }
    }
}

/// A named switch (e.g. `/idle 10` or `-lock`) together with every value that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    name: String,
    values: Vec<String>,
}

impl Switch {
    fn new(name: String) -> Self {
        Switch {
            name,
            values: vec![],
        }
    }

    /// The switch name without its prefix. Lowercased when parsed case-insensitively.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in the order they appeared, across every occurrence of the switch
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Parses the value at `index` as a signed integer, yielding `0` if it is not one.
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than `self.values().len()`.
    pub fn value_as_int(&self, index: usize) -> i32 {
        value_as_int(&self.values, index)
    }

    /// Parses the value at `index` as an unsigned integer, yielding `0` if it is not one.
    /// Negative numbers are not unsigned integers, so `"-24"` yields `0`.
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than `self.values().len()`.
    pub fn value_as_uint(&self, index: usize) -> u32 {
        value_as_uint(&self.values, index)
    }

    /// Shorthand for `value_as_int(0)`
    pub fn as_int(&self) -> i32 {
        self.value_as_int(0)
    }

    /// Shorthand for `value_as_uint(0)`
    pub fn as_uint(&self) -> u32 {
        self.value_as_uint(0)
    }
}

/// A structured view of command line arguments
///
/// The command line is expected to look like:
/// ```text
/// [value ...] [/switch [value ...]] [-switch [value ...]] ...
/// ```
///
/// Values seen before the first switch are unnamed. Every other value belongs to the switch
/// that most recently preceded it. A switch that occurs more than once collects the values of
/// all its occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    case_sensitive: bool,
    values: Vec<String>,
    switches: Vec<Switch>,
}

impl Args {
    /// Parses `args` as command line arguments. Unlike [args()](std::env::args), the input is
    /// not expected to start with the name of the executable.
    ///
    /// Parsing never fails: anything that is not a switch is a value.
    pub fn parse_from<I, T>(args: I, case_sensitive: bool) -> Args
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut result = Args {
            case_sensitive,
            values: vec![],
            switches: vec![],
        };

        // Index into `result.switches`. Once set it stays set until the next switch.
        let mut current: Option<usize> = None;

        for arg in args.into_iter().map(|s| s.into()) {
            match Token::classify(&arg) {
                Token::Separator => {
                    debug!(%arg, "dropping bare separator");
                }
                Token::Switch(name) => {
                    let name = result.normalize(name);
                    let index = match result.position(&name) {
                        Some(index) => index,
                        None => {
                            result.switches.push(Switch::new(name));
                            result.switches.len() - 1
                        }
                    };
                    current = Some(index);
                }
                Token::Value(_) => match current {
                    Some(index) => result.switches[index].values.push(arg),
                    None => result.values.push(arg),
                },
            }
        }

        result
    }

    /// Like [`Args::parse_from`], but takes raw OS strings such as those from
    /// [args_os()](std::env::args_os). Arguments that are not valid Unicode are converted lossily
    /// instead of failing.
    pub fn parse_os<I, T>(args: I, case_sensitive: bool) -> Args
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string_lossy().into_owned());
        Args::parse_from(args, case_sensitive)
    }

    /// Whether switch names were compared case-sensitively
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Values that appeared before the first switch
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Parses the unnamed value at `index` as a signed integer, yielding `0` if it is not one.
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than `self.values().len()`.
    pub fn value_as_int(&self, index: usize) -> i32 {
        value_as_int(&self.values, index)
    }

    /// Parses the unnamed value at `index` as an unsigned integer, yielding `0` if it is not
    /// one (including when it is negative).
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than `self.values().len()`.
    pub fn value_as_uint(&self, index: usize) -> u32 {
        value_as_uint(&self.values, index)
    }

    /// Every distinct switch, in order of first appearance
    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    /// Returns the switch called `name`, if it was given.
    ///
    /// When parsed case-insensitively, any casing of `name` finds the switch.
    pub fn switch(&self, name: &str) -> Option<&Switch> {
        let name = self.normalize(name);
        self.position(&name).map(|index| &self.switches[index])
    }

    /// Returns true if the switch called `name` was given
    pub fn has_switch(&self, name: &str) -> bool {
        self.switch(name).is_some()
    }

    fn normalize(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        self.switches.iter().position(|s| s.name == normalized)
    }
}

fn value_at(values: &[String], index: usize) -> &str {
    match values.get(index) {
        Some(value) => value.trim(),
        None => panic!(
            "value index {index} is out of range for {} value(s)",
            values.len()
        ),
    }
}

fn value_as_int(values: &[String], index: usize) -> i32 {
    value_at(values, index).parse().unwrap_or(0)
}

fn value_as_uint(values: &[String], index: usize) -> u32 {
    value_at(values, index).parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(args: &Args) -> Vec<&str> {
        args.switches().iter().map(|s| s.name()).collect()
    }

    #[test]
    fn no_args() {
        let cmdline: [&str; 0] = [];
        let args = Args::parse_from(cmdline, false);
        assert!(args.values().is_empty());
        assert!(args.switches().is_empty());
    }

    #[test]
    fn classify_tokens() {
        assert_eq!(Token::classify("/"), Token::Separator);
        assert_eq!(Token::classify("-"), Token::Separator);
        assert_eq!(Token::classify("/idle"), Token::Switch("idle"));
        assert_eq!(Token::classify("-Lock"), Token::Switch("Lock"));
        assert_eq!(Token::classify("/?"), Token::Switch("?"));
        assert_eq!(Token::classify("--idle"), Token::Switch("-idle"));
        assert_eq!(Token::classify("-520"), Token::Value("-520"));
        assert_eq!(Token::classify("/5"), Token::Value("/5"));
        assert_eq!(Token::classify("idle"), Token::Value("idle"));
        assert_eq!(Token::classify(""), Token::Value(""));
    }

    #[test]
    fn simple_values() {
        let args = Args::parse_from(["One"], true);
        assert_eq!(args.values(), ["One"]);

        let args = Args::parse_from(["One", "Two"], true);
        assert_eq!(args.values(), ["One", "Two"]);

        let args = Args::parse_from(["18", "-520"], true);
        assert_eq!(args.values(), ["18", "-520"]);
        assert!(args.switches().is_empty());
        assert_eq!(args.value_as_uint(0), 18);
        assert_eq!(args.value_as_int(1), -520);
    }

    #[test]
    fn values_before_and_after_a_switch() {
        let args = Args::parse_from(["7", "/x", "24"], false);
        assert_eq!(args.values(), ["7"]);
        assert_eq!(names(&args), ["x"]);

        let x = args.switch("x").unwrap();
        assert_eq!(x.values(), ["24"]);
        assert_eq!(x.as_int(), 24);
        assert_eq!(x.as_uint(), 24);
    }

    #[test]
    fn negative_values_are_not_switches() {
        let args = Args::parse_from(["-7", "/x", "-24"], false);
        assert_eq!(args.values(), ["-7"]);
        assert_eq!(names(&args), ["x"]);

        let x = args.switch("x").unwrap();
        assert_eq!(x.values(), ["-24"]);
        assert_eq!(x.as_int(), -24);
        assert_eq!(x.as_uint(), 0);
    }

    #[test]
    fn non_numeric_values_coerce_to_zero() {
        let args = Args::parse_from(["/idle", "ten", "", " 12 ", "+3", "4294967296"], false);
        let idle = args.switch("idle").unwrap();
        assert_eq!(idle.value_as_int(0), 0);
        assert_eq!(idle.value_as_uint(0), 0);
        assert_eq!(idle.value_as_int(1), 0);
        assert_eq!(idle.value_as_uint(2), 12);
        assert_eq!(idle.value_as_int(3), 3);
        assert_eq!(idle.value_as_uint(4), 0);
    }

    #[test]
    #[should_panic(expected = "value index 1 is out of range for 1 value(s)")]
    fn switch_value_index_out_of_range() {
        let args = Args::parse_from(["/x", "24"], false);
        args.switch("x").unwrap().value_as_int(1);
    }

    #[test]
    #[should_panic(expected = "value index 0 is out of range for 0 value(s)")]
    fn switch_without_values_has_no_first_value() {
        let args = Args::parse_from(["/lock"], false);
        args.switch("lock").unwrap().as_uint();
    }

    #[test]
    #[should_panic]
    fn unnamed_value_index_out_of_range() {
        let args = Args::parse_from(["/x"], false);
        args.value_as_uint(0);
    }

    #[test]
    fn switches_without_values() {
        let args = Args::parse_from(["/?"], false);
        assert_eq!(names(&args), ["?"]);
        assert!(args.switch("?").unwrap().values().is_empty());

        let args = Args::parse_from(["-idle", "5", "/?"], false);
        assert_eq!(names(&args), ["idle", "?"]);
        assert!(args.switch("?").unwrap().values().is_empty());
        assert_eq!(args.switch("idle").unwrap().values(), ["5"]);
        assert_eq!(args.switch("idle").unwrap().as_int(), 5);
        assert_eq!(args.switch("idle").unwrap().as_uint(), 5);

        let args = Args::parse_from(["/#"], false);
        assert_eq!(names(&args), ["#"]);
        assert!(args.switch("#").unwrap().values().is_empty());
    }

    #[test]
    fn bare_separators_are_dropped() {
        let args = Args::parse_from(["/"], false);
        assert!(args.switches().is_empty());
        assert!(args.values().is_empty());
        assert!(args.switch("/").is_none());
        assert!(args.switch("").is_none());

        // A separator neither opens nor closes a switch
        let args = Args::parse_from(["a", "/", "b", "/x", "-", "c"], false);
        assert_eq!(args.values(), ["a", "b"]);
        assert_eq!(args.switch("x").unwrap().values(), ["c"]);
    }

    #[test]
    fn repeated_switches_merge_case_insensitively() {
        let args = Args::parse_from(["/f", "1", "2", "3", "/h", "/f", "4", "5"], false);
        assert_eq!(names(&args), ["f", "h"]);
        assert_eq!(args.switch("f").unwrap().values().len(), 5);
        assert_eq!(args.switch("F").unwrap().values().len(), 5);
        assert!(args.switch("h").unwrap().values().is_empty());
        assert!(args.switch("H").unwrap().values().is_empty());

        let args = Args::parse_from(["/f", "1", "2", "3", "/H", "/f", "4", "5"], false);
        assert_eq!(names(&args), ["f", "h"]);
        assert_eq!(args.switch("F").unwrap().values().len(), 5);
        assert!(args.has_switch("h"));
        assert!(args.has_switch("H"));

        let args = Args::parse_from(["-F", "1", "-f", "2"], false);
        assert_eq!(names(&args), ["f"]);
        assert_eq!(args.switch("f").unwrap().values(), ["1", "2"]);
        assert_eq!(args.switch("F").unwrap().values(), ["1", "2"]);
    }

    #[test]
    fn case_sensitive_switches_are_distinct() {
        let args = Args::parse_from(["/f", "1", "2", "3", "/h", "/F", "4", "5"], true);
        assert!(args.is_case_sensitive());
        assert_eq!(names(&args), ["f", "h", "F"]);
        assert_eq!(args.switch("f").unwrap().values(), ["1", "2", "3"]);
        assert_eq!(args.switch("F").unwrap().values(), ["4", "5"]);
        assert!(args.switch("h").unwrap().values().is_empty());
        assert!(args.switch("H").is_none());

        let args = Args::parse_from(["/F", "1", "2", "3", "/H", "/f", "4", "5"], true);
        assert_eq!(names(&args), ["F", "H", "f"]);
        assert_eq!(args.switch("F").unwrap().values().len(), 3);
        assert_eq!(args.switch("f").unwrap().values().len(), 2);
        assert!(args.switch("H").unwrap().values().is_empty());
        assert!(args.switch("h").is_none());

        let args = Args::parse_from(["-F", "1", "-f", "2"], true);
        assert_eq!(args.switch("F").unwrap().values(), ["1"]);
        assert_eq!(args.switch("f").unwrap().values(), ["2"]);
    }

    #[test]
    fn values_and_switches() {
        let cmdline = ["Unnamed", "/f", "1", "2", "3", "/h", "/f", "4", "5"];
        let args = Args::parse_from(cmdline, false);
        assert_eq!(args.values(), ["Unnamed"]);
        assert_eq!(names(&args), ["f", "h"]);
        assert_eq!(args.switch("f").unwrap().values(), ["1", "2", "3", "4", "5"]);
        assert!(args.switch("h").unwrap().values().is_empty());

        let cmdline = ["One", "Two", "/F", "1", "2", "3", "/H", "/f", "4", "5"];
        let args = Args::parse_from(cmdline, true);
        assert_eq!(args.values(), ["One", "Two"]);
        assert_eq!(names(&args), ["F", "H", "f"]);
        assert_eq!(args.switch("F").unwrap().values().len(), 3);
        assert_eq!(args.switch("f").unwrap().values().len(), 2);
        assert!(args.switch("h").is_none());
    }

    #[test]
    fn every_token_is_accounted_for() {
        let cmdline = [
            "a", "/", "-3", "/x", "1", "-", "/X", "2", "-y", "", "/x", "/7", "b",
        ];
        for case_sensitive in [false, true] {
            let args = Args::parse_from(cmdline, case_sensitive);

            let separators = cmdline
                .iter()
                .filter(|arg| Token::classify(arg) == Token::Separator)
                .count();
            let switch_tokens = cmdline
                .iter()
                .filter(|arg| matches!(Token::classify(arg), Token::Switch(_)))
                .count();
            let switch_values: usize = args.switches().iter().map(|s| s.values().len()).sum();

            assert_eq!(
                cmdline.len(),
                separators + switch_tokens + switch_values + args.values().len()
            );
        }
    }

    #[test]
    fn parsing_is_repeatable() {
        let cmdline = ["Unnamed", "/f", "1", "-F", "2", "/lock"];
        assert_eq!(
            Args::parse_from(cmdline, false),
            Args::parse_from(cmdline, false)
        );
        assert_eq!(
            Args::parse_from(cmdline, true),
            Args::parse_from(cmdline, true)
        );
        assert_ne!(
            Args::parse_from(cmdline, true),
            Args::parse_from(cmdline, false)
        );
    }

    #[test]
    fn os_strings_parse_like_strings() {
        let cmdline = ["Unnamed", "/f", "1", "-F", "2"];
        assert_eq!(
            Args::parse_os(cmdline, false),
            Args::parse_from(cmdline, false)
        );
    }

    #[cfg(unix)]
    #[test]
    fn invalid_unicode_does_not_fail() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let cmdline = [
            OsString::from("/idle"),
            OsString::from_vec(vec![0xff]),
            OsString::from_vec(vec![b'/', 0xff]),
        ];
        let args = Args::parse_os(cmdline, false);
        assert_eq!(args.switch("idle").unwrap().values(), ["\u{FFFD}"]);
        assert_eq!(args.switch("\u{FFFD}").unwrap().values().len(), 0);
    }
}
