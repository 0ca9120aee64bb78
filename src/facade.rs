use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::level::Level;
use crate::logger::Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Logger::enabled(self, Level::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let level = Level::from(record.level());
        // Records are already formatted; placeholders in them are not replaced.
        if let Err(e) = self.emit(level, &record.args().to_string()) {
            eprintln!("ERROR: Unable to log message: {}", e);
        }
    }

    fn flush(&self) {
        if let Err(e) = Logger::flush(self) {
            eprintln!("ERROR: Unable to flush log output: {}", e);
        }
    }
}

/// Install the global logger as backend of the `log` crate.
///
/// The max level of the `log` crate is set to `Trace`, filtering is done by the threshold of the
/// global logger.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(Logger::global()).map(|()| log::set_max_level(LevelFilter::Trace))
}

/// Install the given logger as backend of the `log` crate, instead of the global logger.
pub fn init_with(logger: Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(LevelFilter::Trace))
}

#[cfg(test)]
mod tests {
    use crate::level::Level;
    use crate::test::*;
    use log::Log;

    #[test]
    fn logs_records() {
        let (logger, output) = plain_logger();
        logger.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("Disk {}% full", 95))
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .args(format_args!("hidden"))
                .build(),
        );
        assert_eq!(output.contents(), "[ WARN ] Disk 95% full\n");
    }

    #[test]
    fn enabled_follows_threshold() {
        let (logger, _output) = plain_logger();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        let error = log::Metadata::builder().level(log::Level::Error).build();
        assert!(!Log::enabled(&logger, &debug));
        assert!(Log::enabled(&logger, &error));

        logger.set_level(Level::Trace);
        assert!(Log::enabled(&logger, &debug));
    }

    #[test]
    fn placeholders_in_records_are_kept() {
        let (logger, output) = plain_logger();
        logger.log(
            &log::Record::builder()
                .level(log::Level::Info)
                .args(format_args!("literal {{}}"))
                .build(),
        );
        Log::flush(&logger);
        assert_eq!(output.contents(), "[ INFO ] literal {}\n");
    }
}
