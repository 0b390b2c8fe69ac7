use std::sync::Arc;

use clap::{Parser, Subcommand};

use severity_logger::commands::emit::Emitter;
use severity_logger::commands::Command;
use severity_logger::error::Result;
use severity_logger::{Channel, Options, SeverityLogger};

#[derive(Parser)]
#[command(name = "sevlog")]
#[command(author, version, about = "Write severity-prefixed diagnostic lines to stderr", long_about = None)]
pub struct Cli {
    /// Enable the debug channel
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Suppress all output
    #[arg(short, long)]
    pub empty: bool,

    /// Additional options as a list, e.g. "debug,quiet"
    #[arg(short, long, env = "SEVLOG_OPTIONS")]
    pub options: Option<Options>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Combines the individual flags with the `--options` list.
    fn options(&self) -> Options {
        let mut options = self.options.unwrap_or_default();
        options.set(Options::DEBUG, options.contains(Options::DEBUG) || self.debug);
        options.set(Options::QUIET, options.contains(Options::QUIET) || self.quiet);
        options.set(Options::EMPTY, options.contains(Options::EMPTY) || self.empty);
        options
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit informational messages
    Info {
        /// Messages to emit. Reads lines from stdin when omitted.
        messages: Vec<String>,
    },

    /// Emit warnings
    Warning {
        /// Messages to emit. Reads lines from stdin when omitted.
        messages: Vec<String>,
    },

    /// Emit errors
    Error {
        /// Messages to emit. Reads lines from stdin when omitted.
        messages: Vec<String>,
    },

    /// Emit debug messages (requires --debug)
    Debug {
        /// Messages to emit. Reads lines from stdin when omitted.
        messages: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options();

    let logger = Arc::new(SeverityLogger::new(options));
    severity_logger::install(Arc::clone(&logger))?;
    log::debug!("Logger initialized with options: {}", options);

    let (channel, messages) = match cli.command {
        Commands::Info { messages } => (Channel::Info, messages),
        Commands::Warning { messages } => (Channel::Warning, messages),
        Commands::Error { messages } => (Channel::Error, messages),
        Commands::Debug { messages } => (Channel::Debug, messages),
    };

    let command: Box<dyn Command> = Box::new(Emitter::new(logger, channel, messages));

    command.execute()
}
