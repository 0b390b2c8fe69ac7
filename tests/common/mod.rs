//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use severity_logger::{Channel, ErrorValue, Logger, error_value};

pub const INFO_MSG: &str = "SOMETHING INTERESTING HAPPENED";
pub const WARNING_MSG: &str = "YOU MAY WANT TO CONSIDER THAT THIS HAPPENED";
pub const ERROR_MSG: &str = "THERE WAS AN ERROR";
pub const DEBUG_MSG: &str = "An extra error for more information for developers";

/// The message each channel receives from [`send_to_all`].
pub fn message_for(channel: Channel) -> &'static str {
    match channel {
        Channel::Info => INFO_MSG,
        Channel::Warning => WARNING_MSG,
        Channel::Error => ERROR_MSG,
        Channel::Debug => DEBUG_MSG,
    }
}

/// Calls every channel once. Returns the debug and error values sent.
pub fn send_to_all(logger: &dyn Logger) -> (ErrorValue, ErrorValue) {
    logger.warning(WARNING_MSG);
    logger.info(INFO_MSG);
    let debug_err = error_value(DEBUG_MSG);
    logger.debug(debug_err.clone());
    let error_err = error_value(ERROR_MSG);
    logger.error(error_err.clone());
    (debug_err, error_err)
}

/// In-memory writer whose contents stay readable after it is handed to a logger.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("Output is not UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that fails every call.
pub struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// Asserts that `output` has exactly one line carrying `msg` and that the
/// line starts with the channel's prefix.
pub fn assert_emitted(output: &str, channel: Channel, msg: &str) {
    let lines: Vec<&str> = output.lines().filter(|l| l.contains(msg)).collect();
    assert_eq!(
        lines.len(),
        1,
        "Expected one {} line containing {:?}, output:\n{}",
        channel,
        msg,
        output
    );
    assert!(
        lines[0].starts_with(channel.prefix()),
        "Line {:?} should start with {:?}",
        lines[0],
        channel.prefix()
    );
}

/// Asserts that `msg` appears nowhere in `output`.
pub fn assert_not_emitted(output: &str, channel: Channel, msg: &str) {
    assert!(
        !output.contains(msg),
        "Output incorrectly contains {} message {:?}:\n{}",
        channel,
        msg,
        output
    );
}
