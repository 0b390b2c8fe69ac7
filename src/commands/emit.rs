use std::io::{self, BufRead};
use std::sync::Arc;

use super::Command;
use crate::error::Result;
use crate::logger::{Channel, Logger, error_value};

/// Sends messages to one channel of a logger.
///
/// Messages given on the command line are emitted in order. With none, each
/// line of standard input becomes one message.
pub struct Emitter {
    logger: Arc<dyn Logger>,
    channel: Channel,
    messages: Vec<String>,
}

impl Emitter {
    pub fn new(logger: Arc<dyn Logger>, channel: Channel, messages: Vec<String>) -> Self {
        Self {
            logger,
            channel,
            messages,
        }
    }

    /// Emits every line read from `input`. Returns how many were emitted.
    pub fn emit_lines<R: BufRead>(&self, input: R) -> Result<usize> {
        let mut count = 0;
        for line in input.lines() {
            self.emit(&line?);
            count += 1;
        }
        Ok(count)
    }

    fn emit(&self, message: &str) {
        match self.channel {
            Channel::Info => self.logger.info(message),
            Channel::Warning => self.logger.warning(message),
            Channel::Error => self.logger.error(error_value(message)),
            Channel::Debug => self.logger.debug(error_value(message)),
        }
    }
}

impl Command for Emitter {
    fn execute(&self) -> Result<()> {
        if self.messages.is_empty() {
            log::debug!("No messages given, reading {} lines from stdin", self.channel);
            let count = self.emit_lines(io::stdin().lock())?;
            log::debug!("Emitted {} {} lines", count, self.channel);
            return Ok(());
        }

        for message in &self.messages {
            self.emit(message);
        }
        Ok(())
    }
}
