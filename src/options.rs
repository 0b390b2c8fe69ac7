//! Logger option set.
//!
//! Options are plain bit flags combined with `|`. Bits that are not defined
//! here are kept by [`Options::from_bits_retain`] but have no effect, so a
//! newer caller can pass flags an older logger does not know about.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

bitflags::bitflags! {
    /// Bitmask selecting which channels a [`SeverityLogger`](crate::SeverityLogger) writes.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Options: u32 {
        /// Enable the debug channel.
        const DEBUG = 1 << 0;
        /// Only show errors. Info, warning and debug are dropped.
        const QUIET = 1 << 1;
        /// Don't print anything. Overrides every other flag.
        const EMPTY = 1 << 2;
    }
}

impl FromStr for Options {
    type Err = Error;

    /// Parses a list such as `"debug,quiet"` or `"QUIET | DEBUG"`.
    ///
    /// Names are case-insensitive and may be separated by commas, pipes or
    /// whitespace. An empty string yields no flags.
    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c == ',' || c == '|' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .try_fold(Options::empty(), |acc, name| {
                let flag = match name.to_ascii_lowercase().as_str() {
                    "debug" => Options::DEBUG,
                    "quiet" => Options::QUIET,
                    "empty" => Options::EMPTY,
                    _ => return Err(Error::UnknownOption(name.to_string())),
                };
                Ok(acc | flag)
            })
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(&name.to_ascii_lowercase())?;
            first = false;
        }
        Ok(())
    }
}
