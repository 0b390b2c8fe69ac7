//! Line-oriented diagnostic stream.
//!
//! A [`LineSink`] owns the writer every channel shares. Each call formats a
//! complete line first and then writes it while holding the lock, so lines
//! from concurrent callers never interleave.

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use chrono::Local;

const DATE_FORMAT: &str = "%Y/%m/%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Header layout written between the prefix and the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp<'a> {
    /// Date and time.
    Standard,
    /// Date, time and the `file:line` the call came from.
    Located { file: &'a str, line: u32 },
}

/// Shared, lock-guarded writer for diagnostic lines.
pub struct LineSink {
    out: Mutex<Box<dyn Write + Send>>,
}

impl LineSink {
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    /// A sink writing to the process's standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Writes one `"<prefix><stamp> <message>"` line.
    ///
    /// Write errors are dropped; diagnostic output is best effort.
    pub fn write_line(&self, prefix: &str, stamp: Stamp<'_>, message: &dyn Display) {
        let line = format_line(prefix, stamp, message);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = out.write_all(line.as_bytes()).and_then(|()| out.flush());
    }
}

impl fmt::Debug for LineSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink").finish_non_exhaustive()
    }
}

fn format_line(prefix: &str, stamp: Stamp<'_>, message: &dyn Display) -> String {
    let now = Local::now();
    let mut line = String::with_capacity(prefix.len() + 64);
    line.push_str(prefix);
    // Writing into a String cannot fail.
    let _ = write!(line, "{} {} ", now.format(DATE_FORMAT), now.format(TIME_FORMAT));
    if let Stamp::Located { file, line: number } = stamp {
        let _ = write!(line, "{}:{}: ", short_file(file), number);
    }
    let _ = write!(line, "{message}");
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Final path component of `file`, or `file` itself when it has none.
fn short_file(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
