use chrono::{FixedOffset, TimeZone};
use std::io;
use std::sync::{Arc, Mutex};
use termcolor::{Ansi, NoColor};

use crate::clock::FixedClock;
use crate::config::Config;
use crate::logger::Logger;

/// Output of a test logger that can still be read after the logger took ownership of it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// 2024-01-01 00:00:00.000 UTC
pub fn fixed_clock() -> FixedClock {
    let time = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap();
    FixedClock(time)
}

/// Logger with the default config that writes without colors.
pub fn plain_logger() -> (Logger, SharedBuffer) {
    let output = SharedBuffer::default();
    let logger = Logger::with_sink(Config::default(), Box::new(NoColor::new(output.clone())))
        .with_clock(fixed_clock());
    (logger, output)
}

/// Logger with the default config that writes ANSI color codes.
pub fn colored_logger() -> (Logger, SharedBuffer) {
    let output = SharedBuffer::default();
    let logger = Logger::with_sink(Config::default(), Box::new(Ansi::new(output.clone())))
        .with_clock(fixed_clock());
    (logger, output)
}
