//! Levelog is a small leveled console logger.
//!
//! Messages contain `{}` placeholders that are replaced by the given arguments. Every line is
//! prefixed with its level, optionally preceded by a timestamp:
//!
//! ```text
//! [2017-02-20 12:12:12.567] [ DEBUG ] 	Init
//! ```
//!
//! ```
//! use levelog::{Config, Level, Logger};
//!
//! let logger = Logger::new(Config::default());
//! logger.set_level(Level::Debug);
//! logger.info("Listening on port {}", &[&8080]).unwrap();
//! logger.warn("Lost connection to {}", true, &[&"db-1"]).unwrap();
//! ```

#[macro_use]
extern crate lazy_static;

pub mod clock;
pub mod color;
pub mod config;
pub mod error;
mod facade;
pub mod formatter;
pub mod level;
pub mod loggable;
pub mod logger;
pub mod message;
pub mod time_format;

#[cfg(test)]
mod test;

pub use clock::{Clock, FixedClock, SystemClock};
pub use color::LogColor;
pub use config::Config;
pub use error::Error;
pub use facade::{init, init_with};
pub use level::{Level, ParseLevelError};
pub use loggable::Loggable;
pub use logger::Logger;
pub use message::{prepare, Arg};
pub use time_format::TimeFormat;
