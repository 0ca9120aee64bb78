use std::env;

use crate::level::Level;
use crate::time_format::TimeFormat;

pub const LEVEL_ENV: &str = "LEVELOG_LEVEL";
pub const SHOW_TIME_ENV: &str = "LEVELOG_SHOW_TIME";
pub const TIME_FORMAT_ENV: &str = "LEVELOG_TIME_FORMAT";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Settings of a `Logger`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Threshold level. Messages with a higher rank are not printed.
    pub level: Level,
    /// Print the time in front of every line.
    pub show_time: bool,
    pub time_format: TimeFormat,
    /// Wrap level labels in ANSI color codes.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info,
            show_time: false,
            time_format: TimeFormat::default(),
            color: true,
        }
    }
}

impl Config {
    /// Read the configuration from the system environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key))
    }

    /// Read the configuration using the given environment lookup. Invalid values are reported
    /// on STDERR and the default value is used instead.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let mut config = Self::default();

        if let Ok(value) = var(LEVEL_ENV) {
            match value.parse::<Level>() {
                Ok(level) if level.is_threshold() => config.level = level,
                Ok(level) => eprintln!(
                    "ERROR: Configured {} '{}' can not be used as threshold. Use INFO, DEBUG or TRACE.",
                    LEVEL_ENV, level
                ),
                Err(e) => eprintln!("ERROR: Configured {} is invalid: {}", LEVEL_ENV, e),
            }
        }

        if let Ok(value) = var(SHOW_TIME_ENV) {
            match parse_flag(&value) {
                Some(show_time) => config.show_time = show_time,
                None => eprintln!(
                    "ERROR: Configured {} '{}' is not a boolean value.",
                    SHOW_TIME_ENV, value
                ),
            }
        }

        if let Ok(value) = var(TIME_FORMAT_ENV) {
            match TimeFormat::parse(&value) {
                Ok(format) => config.time_format = format,
                Err(e) => eprintln!("ERROR: Configured {} is invalid: {}", TIME_FORMAT_ENV, e),
            }
        }

        // https://no-color.org
        if let Ok(value) = var(NO_COLOR_ENV) {
            if !value.is_empty() {
                config.color = false;
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_flag, Config};
    use crate::level::Level;
    use crate::time_format::TimeFormat;
    use std::collections::HashMap;
    use std::env::VarError;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<String, String>>();
        Config::from_vars(|key| vars.get(key).cloned().ok_or(VarError::NotPresent))
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.level, Level::Info);
        assert!(!config.show_time);
        assert_eq!(config.time_format.pattern(), "yyyy-MM-dd HH:mm:ss.SSS");
        assert!(config.color);
    }

    #[test]
    fn all_values() {
        let config = config_from(&[
            ("LEVELOG_LEVEL", "trace"),
            ("LEVELOG_SHOW_TIME", "yes"),
            ("LEVELOG_TIME_FORMAT", "HH:mm"),
            ("NO_COLOR", "1"),
        ]);
        assert_eq!(config.level, Level::Trace);
        assert!(config.show_time);
        assert_eq!(config.time_format, TimeFormat::parse("HH:mm").unwrap());
        assert!(!config.color);
    }

    #[test]
    fn output_levels_are_not_thresholds() {
        assert_eq!(config_from(&[("LEVELOG_LEVEL", "error")]).level, Level::Info);
        assert_eq!(config_from(&[("LEVELOG_LEVEL", "tmp_warn")]).level, Level::Info);
    }

    #[test]
    fn invalid_values_use_defaults() {
        let config = config_from(&[
            ("LEVELOG_LEVEL", "verbose"),
            ("LEVELOG_SHOW_TIME", "sometimes"),
            ("LEVELOG_TIME_FORMAT", "yyyy-bb"),
        ]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn empty_no_color_keeps_color() {
        assert!(config_from(&[("NO_COLOR", "")]).color);
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
