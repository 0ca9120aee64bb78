use std::fmt;
use std::str::FromStr;

use crate::color::LogColor;

/// Severity of a log message.
///
/// Every level has a rank. A lower rank is more urgent, and a message is only printed when its
/// rank is lower than or equal to the rank of the configured threshold. `Warn` and `TmpWarn`
/// share a rank, as do `Debug` and `Trace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Warn,
    TmpWarn,
    Info,
    Debug,
    Trace,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Error,
        Level::Warn,
        Level::TmpWarn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    pub fn rank(&self) -> i8 {
        match self {
            Level::Error => -2,
            Level::Warn | Level::TmpWarn => -1,
            Level::Info => 0,
            Level::Debug | Level::Trace => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::TmpWarn => "TMP_WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Color of the label. `Info` is printed without color.
    pub fn color(&self) -> Option<LogColor> {
        match self {
            Level::Error => Some(LogColor::Red),
            Level::Warn | Level::TmpWarn => Some(LogColor::Yellow),
            Level::Info => None,
            Level::Debug | Level::Trace => Some(LogColor::Magenta),
        }
    }

    /// Only the non-negative levels can be used as a threshold. Errors and warnings are output
    /// levels and are always printed.
    pub fn is_threshold(&self) -> bool {
        self.rank() >= 0
    }

    /// Returns true if a message at `level` passes this level used as threshold.
    pub fn permits(&self, level: Level) -> bool {
        self.rank() >= level.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    pub value: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown log level '{}'", self.value)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let level = match value.trim().to_ascii_lowercase().as_str() {
            "error" => Level::Error,
            "warn" => Level::Warn,
            "tmp_warn" | "tmp-warn" => Level::TmpWarn,
            "info" => Level::Info,
            "debug" => Level::Debug,
            "trace" => Level::Trace,
            _ => {
                return Err(ParseLevelError {
                    value: value.to_string(),
                })
            }
        };
        Ok(level)
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Level;
    use crate::color::LogColor;

    #[test]
    fn ranks() {
        assert_eq!(Level::Error.rank(), -2);
        assert_eq!(Level::Warn.rank(), -1);
        assert_eq!(Level::TmpWarn.rank(), -1);
        assert_eq!(Level::Info.rank(), 0);
        assert_eq!(Level::Debug.rank(), 1);
        assert_eq!(Level::Trace.rank(), 1);
    }

    #[test]
    fn names() {
        let names = Level::ALL
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<String>>();
        assert_eq!(
            names,
            vec!["ERROR", "WARN", "TMP_WARN", "INFO", "DEBUG", "TRACE"]
        );
    }

    #[test]
    fn colors() {
        assert_eq!(Level::Error.color(), Some(LogColor::Red));
        assert_eq!(Level::Warn.color(), Some(LogColor::Yellow));
        assert_eq!(Level::TmpWarn.color(), Some(LogColor::Yellow));
        assert_eq!(Level::Info.color(), None);
        assert_eq!(Level::Debug.color(), Some(LogColor::Magenta));
        assert_eq!(Level::Trace.color(), Some(LogColor::Magenta));
    }

    #[test]
    fn thresholds() {
        assert!(!Level::Error.is_threshold());
        assert!(!Level::Warn.is_threshold());
        assert!(!Level::TmpWarn.is_threshold());
        assert!(Level::Info.is_threshold());
        assert!(Level::Debug.is_threshold());
        assert!(Level::Trace.is_threshold());
    }

    #[test]
    fn info_permits_urgent_levels_only() {
        assert!(Level::Info.permits(Level::Error));
        assert!(Level::Info.permits(Level::Warn));
        assert!(Level::Info.permits(Level::TmpWarn));
        assert!(Level::Info.permits(Level::Info));
        assert!(!Level::Info.permits(Level::Debug));
        assert!(!Level::Info.permits(Level::Trace));
    }

    #[test]
    fn trace_permits_everything() {
        for level in Level::ALL {
            assert!(Level::Trace.permits(level), "{} was not permitted", level);
            assert!(Level::Debug.permits(level), "{} was not permitted", level);
        }
    }

    #[test]
    fn parse_levels() {
        assert_eq!("ERROR".parse(), Ok(Level::Error));
        assert_eq!("warn".parse(), Ok(Level::Warn));
        assert_eq!("tmp_warn".parse(), Ok(Level::TmpWarn));
        assert_eq!("TMP-WARN".parse(), Ok(Level::TmpWarn));
        assert_eq!(" Info ".parse(), Ok(Level::Info));
        assert_eq!("debug".parse(), Ok(Level::Debug));
        assert_eq!("trace".parse(), Ok(Level::Trace));

        let error = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(error.to_string(), "Unknown log level 'verbose'");
    }

    #[test]
    fn from_log_levels() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Trace), Level::Trace);
    }
}
