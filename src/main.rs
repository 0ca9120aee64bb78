#[macro_use]
extern crate log;

mod options;

use levelog::{Arg, Config, Level, Logger};
use options::{fetch_options, Options, Severity};

fn main() {
    let options = fetch_options();
    let env_config = Config::from_env();
    if options.debug {
        init_logger(&env_config);
    }
    debug!("Options: {:?}", options);

    let config = match options.config(env_config) {
        Ok(config) => config,
        Err(e) => exit_with_error(&e.to_string()),
    };
    debug!("Config: {:?}", config);

    let logger = Logger::new(config);
    if let Err(e) = log_message(&logger, &options) {
        exit_with_error(&e.to_string())
    }
}

fn log_message(logger: &Logger, options: &Options) -> Result<(), levelog::Error> {
    let message = match &options.message {
        Some(message) => message,
        None => exit_with_error("No message given. See `levelog --help` for usage."),
    };
    let args = options
        .args
        .iter()
        .map(|arg| arg as &dyn Arg)
        .collect::<Vec<&dyn Arg>>();

    match options.severity() {
        Severity::Error => logger.error(message, &args),
        Severity::Warn => logger.warn(message, false, &args),
        Severity::TmpWarn => logger.warn(message, true, &args),
        Severity::Info => logger.info(message, &args),
        Severity::Debug => logger.debug(message, &args),
        Severity::Trace => logger.trace(message, &args),
    }
}

// Debug output of Levelog itself is printed with the environment config read by `main`
fn init_logger(env_config: &Config) {
    let config = Config {
        level: Level::Debug,
        ..env_config.clone()
    };
    if let Err(error) = levelog::init_with(Logger::new(config)) {
        eprintln!(
            "An error occurred while initializing the logger. \
            Cannot continue.\n{:?}",
            error
        );
        std::process::exit(1)
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("ERROR: {}", message);
    std::process::exit(1)
}
