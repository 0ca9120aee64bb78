use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Error;
use crate::formatter::formatted_line;
use crate::level::Level;
use crate::message::{prepare, Arg};
use crate::time_format::TimeFormat;

lazy_static! {
    static ref GLOBAL_LOGGER: Logger = Logger::new(Config::from_env());
}

type Sink = Box<dyn WriteColor + Send>;

/// A leveled console logger.
///
/// The configuration and the output are each guarded by a mutex, so a logger can be shared
/// between threads. A line is always written in one go while the output lock is held.
pub struct Logger {
    config: Mutex<Config>,
    sink: Mutex<Sink>,
    clock: Box<dyn Clock>,
}

impl Logger {
    /// Create a logger that writes to STDOUT.
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Box::new(StandardStream::stdout(ColorChoice::AlwaysAnsi)))
    }

    /// Create a logger that writes to the given sink.
    ///
    /// Labels are only colored when `Config::color` is enabled, whatever the sink supports.
    pub fn with_sink(config: Config, sink: Sink) -> Self {
        Self {
            config: Mutex::new(config),
            sink: Mutex::new(sink),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used for timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The logger shared by the whole process.
    ///
    /// It is created on first use, configured by the `LEVELOG_*` environment variables, and
    /// writes to STDOUT.
    pub fn global() -> &'static Logger {
        &GLOBAL_LOGGER
    }

    fn lock_config(&self) -> MutexGuard<'_, Config> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_sink(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> Config {
        self.lock_config().clone()
    }

    pub fn level(&self) -> Level {
        self.lock_config().level
    }

    /// Set the threshold level.
    ///
    /// Only INFO, DEBUG and TRACE are accepted. Other levels are silently ignored and the
    /// current threshold is kept.
    pub fn set_level(&self, level: Level) {
        if level.is_threshold() {
            self.lock_config().level = level;
        }
    }

    pub fn set_color(&self, color: bool) {
        self.lock_config().color = color;
    }

    pub fn display_time_string(&self, display: bool) {
        self.lock_config().show_time = display;
    }

    /// Same as `display_time_string`.
    pub fn show_time(&self, show: bool) {
        self.display_time_string(show);
    }

    pub fn is_time_shown(&self) -> bool {
        self.lock_config().show_time
    }

    /// Set the timestamp pattern, e.g. `yyyy-MM-dd HH:mm:ss.SSS`.
    ///
    /// An invalid pattern returns `Error::InvalidFormat` and keeps the current pattern.
    pub fn set_time_string(&self, pattern: &str) -> Result<(), Error> {
        let format = TimeFormat::parse(pattern)?;
        self.set_time_format(format);
        Ok(())
    }

    pub fn set_time_format(&self, format: TimeFormat) {
        self.lock_config().time_format = format;
    }

    /// Returns true if messages at this level are printed with the current threshold.
    pub fn enabled(&self, level: Level) -> bool {
        self.lock_config().level.permits(level)
    }

    /// Print an already formatted message at the given level, if the threshold permits it.
    pub fn emit(&self, level: Level, message: &str) -> Result<(), Error> {
        let (timestamp, color) = {
            let config = self.lock_config();
            if !config.level.permits(level) {
                return Ok(());
            }
            let timestamp = if config.show_time {
                Some(config.time_format.format(&self.clock.now()))
            } else {
                None
            };
            (timestamp, config.color)
        };

        let mut sink = self.lock_sink();
        formatted_line(&mut *sink, level, message, timestamp.as_deref(), color)?;
        sink.flush()?;
        Ok(())
    }

    /// Print a line as is, without level or timestamp.
    pub fn print(&self, line: &str) -> Result<(), Error> {
        let mut sink = self.lock_sink();
        writeln!(sink, "{}", line)?;
        sink.flush()?;
        Ok(())
    }

    pub fn flush(&self) -> Result<(), Error> {
        self.lock_sink().flush()?;
        Ok(())
    }

    /// Format the message with its arguments and print it at the given level.
    pub fn log_at(&self, level: Level, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        let message = prepare(message, args)?;
        self.emit(level, &message)
    }

    pub fn info(&self, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.log_at(Level::Info, message, args)
    }

    /// Log a warning. A temporary warning, like a lost network connection, is printed as
    /// `TMP_WARN`.
    pub fn warn(&self, message: &str, tmp: bool, args: &[&dyn Arg]) -> Result<(), Error> {
        let level = if tmp { Level::TmpWarn } else { Level::Warn };
        self.log_at(level, message, args)
    }

    pub fn trace(&self, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.log_at(Level::Trace, message, args)
    }

    pub fn debug(&self, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.log_at(Level::Debug, message, args)
    }

    /// Log an error. Errors are printed with every threshold.
    pub fn error(&self, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.log_at(Level::Error, message, args)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
