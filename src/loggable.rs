use crate::error::Error;
use crate::level::Level;
use crate::logger::Logger;
use crate::message::Arg;

/// Adds logging calls to any type.
///
/// All calls are forwarded to the shared `Logger::global()`. A type that holds its own logger
/// can return it from `logger` instead.
///
/// ```
/// use levelog::Loggable;
///
/// struct Downloader;
///
/// impl Loggable for Downloader {}
///
/// Downloader.info("Downloaded {} files", &[&3]).unwrap();
/// ```
pub trait Loggable {
    fn logger(&self) -> &Logger {
        Logger::global()
    }

    fn log_at(&self, level: Level, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.logger().log_at(level, message, args)
    }

    fn info(&self, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.logger().info(message, args)
    }

    fn warn(&self, message: &str, tmp: bool, args: &[&dyn Arg]) -> Result<(), Error> {
        self.logger().warn(message, tmp, args)
    }

    fn trace(&self, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.logger().trace(message, args)
    }

    fn debug(&self, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.logger().debug(message, args)
    }

    fn error(&self, message: &str, args: &[&dyn Arg]) -> Result<(), Error> {
        self.logger().error(message, args)
    }
}

#[cfg(test)]
mod tests {
    use super::Loggable;
    use crate::level::Level;
    use crate::logger::Logger;
    use crate::test::*;

    struct Connection<'a> {
        host: &'static str,
        logger: &'a Logger,
    }

    impl Loggable for Connection<'_> {
        fn logger(&self) -> &Logger {
            self.logger
        }
    }

    impl Connection<'_> {
        fn drop_connection(&self) {
            self.warn("Lost connection to {}", true, &[&self.host]).unwrap();
        }
    }

    struct Worker;

    impl Loggable for Worker {}

    #[test]
    fn forwards_to_own_logger() {
        let (logger, output) = plain_logger();
        logger.set_level(Level::Trace);
        let connection = Connection {
            host: "example.com",
            logger: &logger,
        };

        connection.drop_connection();
        connection.info("Connected to {}", &[&connection.host]).unwrap();
        connection.debug("Sent {} bytes", &[&512]).unwrap();
        connection.trace("Frames: {}", &[&[1, 2]]).unwrap();
        connection.error("Closed", &[]).unwrap();
        connection.log_at(Level::Warn, "Slow", &[]).unwrap();

        assert_eq!(
            output.contents(),
            "[ TMP_WARN ] Lost connection to example.com\n\
            [ INFO ] Connected to example.com\n\
            [ DEBUG ] Sent 512 bytes\n\
            [ TRACE ] Frames: [1, 2]\n\
            [ ERROR ] Closed\n\
            [ WARN ] Slow\n"
        );
    }

    #[test]
    fn uses_global_logger_by_default() {
        assert!(std::ptr::eq(Worker.logger(), Logger::global()));
    }

    #[test]
    fn reports_errors_of_the_logger() {
        assert!(Worker.info("{} {}", &[&1]).is_err());
    }
}
