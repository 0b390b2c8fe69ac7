//! The configurable severity logger.
//!
//! A [`SeverityLogger`] resolves every channel to a [`Route`] once, when it is
//! built from an [`Options`] set, and never changes afterwards:
//!
//! | empty | quiet | debug | info | warning | error | debug channel |
//! |-------|-------|-------|------|---------|-------|---------------|
//! | yes   | any   | any   | off  | off     | off   | off           |
//! | no    | yes   | any   | off  | off     | on    | off           |
//! | no    | no    | no    | on   | on      | on    | off           |
//! | no    | no    | yes   | on   | on      | on    | on            |
//!
//! The debug channel has two independent gates: its route, and the
//! `debug_enabled` switch taken from [`Options::DEBUG`].

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

use crate::error::Result;
use crate::facade::SharedLogger;
use crate::options::Options;
use crate::sink::{LineSink, Stamp};

/// Shareable error handle accepted by the error and debug channels.
pub type ErrorValue = Arc<dyn StdError + Send + Sync + 'static>;

/// Wraps anything convertible into a boxed error, including plain strings.
///
/// ```
/// let err = severity_logger::error_value("disk full");
/// assert_eq!(err.to_string(), "disk full");
/// ```
pub fn error_value<E>(err: E) -> ErrorValue
where
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    Arc::from(err.into())
}

/// The four emit operations shared by every logger implementation.
pub trait Logger: Send + Sync {
    /// Something the developer may want to know about.
    fn info(&self, msg: &str);

    /// A non-fatal problem.
    fn warning(&self, msg: &str);

    /// A fatal or otherwise important error.
    fn error(&self, err: ErrorValue);

    /// Extra detail for developers, annotated with the caller's location.
    #[track_caller]
    fn debug(&self, err: ErrorValue);
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }

    fn warning(&self, msg: &str) {
        (**self).warning(msg);
    }

    fn error(&self, err: ErrorValue) {
        (**self).error(err);
    }

    #[track_caller]
    fn debug(&self, err: ErrorValue) {
        (**self).debug(err);
    }
}

/// One of the four severity classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Info,
    Warning,
    Error,
    Debug,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Info,
        Channel::Warning,
        Channel::Error,
        Channel::Debug,
    ];

    /// Fixed text written at the start of every line on this channel.
    pub const fn prefix(self) -> &'static str {
        match self {
            Channel::Info => "INFO: ",
            Channel::Warning => "WARNING: ",
            Channel::Error => "ERROR: ",
            Channel::Debug => "DEBUG: ",
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Info => "INFO",
            Channel::Warning => "WARNING",
            Channel::Error => "ERROR",
            Channel::Debug => "DEBUG",
        };
        f.write_str(name)
    }
}

/// Where a channel's output goes, decided at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Lines are written to the sink.
    Active,
    /// Calls are accepted and dropped.
    Suppressed,
}

/// Logger whose channel wiring is fixed by an [`Options`] set.
#[derive(Debug)]
pub struct SeverityLogger {
    options: Options,
    info: Route,
    warning: Route,
    error: Route,
    debug: Route,
    debug_enabled: bool,
    sink: LineSink,
}

impl SeverityLogger {
    /// Builds a logger writing to standard error.
    pub fn new(options: Options) -> Self {
        Self::with_sink(options, LineSink::stderr())
    }

    /// Builds a logger writing to `writer`. All channels share it.
    pub fn with_writer<W>(options: Options, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_sink(options, LineSink::new(writer))
    }

    fn with_sink(options: Options, sink: LineSink) -> Self {
        use Route::{Active, Suppressed};

        let (info, warning, error, debug) = if options.contains(Options::EMPTY) {
            (Suppressed, Suppressed, Suppressed, Suppressed)
        } else if options.contains(Options::QUIET) {
            (Suppressed, Suppressed, Active, Suppressed)
        } else {
            (Active, Active, Active, Active)
        };

        Self {
            options,
            info,
            warning,
            error,
            debug,
            debug_enabled: options.contains(Options::DEBUG),
            sink,
        }
    }

    /// The option set this logger was built from, unknown bits included.
    pub fn options(&self) -> Options {
        self.options
    }

    /// The route resolved for `channel`.
    pub fn route(&self, channel: Channel) -> Route {
        match channel {
            Channel::Info => self.info,
            Channel::Warning => self.warning,
            Channel::Error => self.error,
            Channel::Debug => self.debug,
        }
    }

    /// Whether [`Options::DEBUG`] was set.
    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Whether a call on `channel` produces a line.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        let routed = self.route(channel) == Route::Active;
        match channel {
            Channel::Debug => routed && self.debug_enabled,
            _ => routed,
        }
    }

    /// Writes `message` on `channel` if its route is active.
    ///
    /// The debug switch is not consulted here; callers on the debug channel
    /// check it themselves.
    pub(crate) fn write(
        &self,
        channel: Channel,
        message: &dyn Display,
        location: Option<(&str, u32)>,
    ) {
        if self.route(channel) == Route::Suppressed {
            return;
        }
        let stamp = match (channel, location) {
            (Channel::Debug, Some((file, line))) => Stamp::Located { file, line },
            (Channel::Debug, None) => Stamp::Located { file: "???", line: 0 },
            _ => Stamp::Standard,
        };
        self.sink.write_line(channel.prefix(), stamp, message);
    }
}

impl Logger for SeverityLogger {
    fn info(&self, msg: &str) {
        self.write(Channel::Info, &msg, None);
    }

    fn warning(&self, msg: &str) {
        self.write(Channel::Warning, &msg, None);
    }

    fn error(&self, err: ErrorValue) {
        self.write(Channel::Error, &err, None);
    }

    #[track_caller]
    fn debug(&self, err: ErrorValue) {
        if self.debug_enabled {
            let caller = Location::caller();
            self.write(Channel::Debug, &err, Some((caller.file(), caller.line())));
        }
    }
}

/// Installs a stderr [`SeverityLogger`] as the global `log` backend.
///
/// Fails if another backend has already been installed.
pub fn init(options: Options) -> Result<()> {
    install(Arc::new(SeverityLogger::new(options)))
}

/// Installs `logger` as the global `log` backend while the caller keeps
/// using it directly.
///
/// Fails if another backend has already been installed.
pub fn install(logger: Arc<SeverityLogger>) -> Result<()> {
    let level = logger.max_level();
    log::set_boxed_logger(Box::new(SharedLogger::new(logger)))?;
    log::set_max_level(level);
    Ok(())
}
