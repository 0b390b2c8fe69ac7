//! Bridge from the `log` crate macros to a [`SeverityLogger`].
//!
//! `Error`, `Warn` and `Info` records go to the channel of the same name.
//! `Debug` and `Trace` records both go to the debug channel and are subject to
//! the same two gates as [`Logger::debug`](crate::Logger::debug).

use std::sync::Arc;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::logger::{Channel, SeverityLogger};

impl From<Level> for Channel {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Channel::Error,
            Level::Warn => Channel::Warning,
            Level::Info => Channel::Info,
            Level::Debug | Level::Trace => Channel::Debug,
        }
    }
}

impl SeverityLogger {
    /// Most verbose `log` level this logger would write anything for.
    pub fn max_level(&self) -> LevelFilter {
        if self.is_enabled(Channel::Debug) {
            LevelFilter::Trace
        } else if self.is_enabled(Channel::Info) {
            LevelFilter::Info
        } else if self.is_enabled(Channel::Warning) {
            LevelFilter::Warn
        } else if self.is_enabled(Channel::Error) {
            LevelFilter::Error
        } else {
            LevelFilter::Off
        }
    }
}

impl Log for SeverityLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.is_enabled(Channel::from(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        let channel = Channel::from(record.level());
        if channel == Channel::Debug && !self.debug_enabled() {
            return;
        }
        let location = match channel {
            Channel::Debug => Some((record.file().unwrap_or("???"), record.line().unwrap_or(0))),
            _ => None,
        };
        self.write(channel, record.args(), location);
    }

    fn flush(&self) {}
}

/// `log` backend forwarding to a [`SeverityLogger`] that is also used directly.
///
/// Both paths write through the same sink, so their lines share one lock.
#[derive(Debug, Clone)]
pub struct SharedLogger(Arc<SeverityLogger>);

impl SharedLogger {
    pub fn new(logger: Arc<SeverityLogger>) -> Self {
        Self(logger)
    }
}

impl Log for SharedLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.0.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        self.0.log(record);
    }

    fn flush(&self) {
        Log::flush(&*self.0);
    }
}
