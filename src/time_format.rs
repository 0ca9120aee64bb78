use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub const DEFAULT_TIME_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.SSS";

lazy_static! {
    // Quoted text, a lone (unterminated) quote, a single pattern letter or a run of literal text.
    static ref TOKEN_REGEX: Regex = Regex::new(r"'(?:[^']|'')*'|'|[A-Za-z]|[^A-Za-z']+").unwrap();
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Era,
    Year,
    WeekYear,
    Month,
    WeekOfYear,
    WeekOfMonth,
    DayOfYear,
    Day,
    DayOfWeekInMonth,
    WeekdayName,
    WeekdayNumber,
    AmPm,
    Hour0To23,
    Hour1To24,
    Hour0To11,
    Hour1To12,
    Minute,
    Second,
    Millisecond,
    ZoneName,
    ZoneRfc822,
    ZoneIso8601,
}

impl Field {
    fn from_letter(letter: char) -> Option<Field> {
        let field = match letter {
            'G' => Field::Era,
            'y' => Field::Year,
            'Y' => Field::WeekYear,
            'M' | 'L' => Field::Month,
            'w' => Field::WeekOfYear,
            'W' => Field::WeekOfMonth,
            'D' => Field::DayOfYear,
            'd' => Field::Day,
            'F' => Field::DayOfWeekInMonth,
            'E' => Field::WeekdayName,
            'u' => Field::WeekdayNumber,
            'a' => Field::AmPm,
            'H' => Field::Hour0To23,
            'k' => Field::Hour1To24,
            'K' => Field::Hour0To11,
            'h' => Field::Hour1To12,
            'm' => Field::Minute,
            's' => Field::Second,
            'S' => Field::Millisecond,
            'z' => Field::ZoneName,
            'Z' => Field::ZoneRfc822,
            'X' => Field::ZoneIso8601,
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field { field: Field, letter: char, width: usize },
}

/// A timestamp pattern in the `yyyy-MM-dd HH:mm:ss.SSS` style.
///
/// Pattern letters repeated `n` times are zero padded to `n` digits. Text between single quotes
/// is printed as is, and `''` prints a single quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    pattern: String,
    tokens: Vec<Token>,
}

impl TimeFormat {
    pub fn parse(pattern: &str) -> Result<Self, Error> {
        let invalid = |reason: String| Error::InvalidFormat {
            pattern: pattern.to_string(),
            reason,
        };
        let mut tokens = Vec::<Token>::new();

        for token in TOKEN_REGEX.find_iter(pattern) {
            let text = token.as_str();
            if text == "'" {
                return Err(invalid(format!(
                    "unterminated quote at position {}",
                    token.start() + 1
                )));
            }

            if let Some(quoted) = text.strip_prefix('\'') {
                let literal = quoted[..quoted.len() - 1].replace("''", "'");
                if literal.is_empty() {
                    // `''` is an escaped quote, not an empty literal
                    push_literal(&mut tokens, "'");
                } else {
                    push_literal(&mut tokens, &literal);
                }
                continue;
            }

            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_ascii_alphabetic() => {
                    let field = match Field::from_letter(letter) {
                        Some(field) => field,
                        None => {
                            return Err(invalid(format!("unknown pattern letter `{}`", letter)))
                        }
                    };
                    match tokens.last_mut() {
                        Some(Token::Field {
                            letter: previous,
                            width,
                            ..
                        }) if *previous == letter => *width += 1,
                        _ => tokens.push(Token::Field {
                            field,
                            letter,
                            width: 1,
                        }),
                    }
                }
                _ => push_literal(&mut tokens, text),
            }
        }

        for token in &tokens {
            if let Token::Field {
                field: Field::ZoneIso8601,
                width,
                ..
            } = token
            {
                if *width > 3 {
                    return Err(invalid(format!("`{}` is too long", "X".repeat(*width))));
                }
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, time: &DateTime<FixedOffset>) -> String {
        let mut formatted = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(text) => formatted.push_str(text),
                Token::Field { field, width, .. } => {
                    formatted.push_str(&format_field(time, *field, *width))
                }
            }
        }
        formatted
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        match Self::parse(DEFAULT_TIME_FORMAT) {
            Ok(format) => format,
            Err(e) => unreachable!("Default time format is invalid: {:?}", e),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = Error;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::parse(pattern)
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    match tokens.last_mut() {
        Some(Token::Literal(previous)) => previous.push_str(text),
        _ => tokens.push(Token::Literal(text.to_string())),
    }
}

fn padded(value: i64, width: usize) -> String {
    if value < 0 {
        format!("-{:0width$}", -value, width = width)
    } else {
        format!("{:0width$}", value, width = width)
    }
}

fn year(value: i32, width: usize) -> String {
    if width == 2 {
        padded(i64::from(value.rem_euclid(100)), 2)
    } else {
        padded(i64::from(value), width)
    }
}

fn name_text(full: &str, width: usize) -> String {
    if width >= 4 {
        full.to_string()
    } else {
        full.chars().take(3).collect()
    }
}

fn offset(seconds: i32, separator: &str, with_minutes: bool) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    if with_minutes {
        format!("{}{:02}{}{:02}", sign, minutes / 60, separator, minutes % 60)
    } else {
        format!("{}{:02}", sign, minutes / 60)
    }
}

fn format_field(time: &DateTime<FixedOffset>, field: Field, width: usize) -> String {
    let offset_seconds = time.offset().local_minus_utc();
    match field {
        Field::Era => {
            if time.year() > 0 {
                "AD".to_string()
            } else {
                "BC".to_string()
            }
        }
        Field::Year => year(time.year(), width),
        Field::WeekYear => year(time.iso_week().year(), width),
        Field::Month => match width {
            1 | 2 => padded(i64::from(time.month()), width),
            _ => name_text(MONTH_NAMES[time.month0() as usize], width),
        },
        Field::WeekOfYear => padded(i64::from(time.iso_week().week()), width),
        Field::WeekOfMonth => {
            // Weekday of the first day of the month, Monday being 0
            let first_weekday = (time.weekday().num_days_from_monday() + 35 - time.day0()) % 7;
            padded(i64::from((time.day0() + first_weekday) / 7 + 1), width)
        }
        Field::DayOfYear => padded(i64::from(time.ordinal()), width),
        Field::Day => padded(i64::from(time.day()), width),
        Field::DayOfWeekInMonth => padded(i64::from(time.day0() / 7 + 1), width),
        Field::WeekdayName => name_text(
            WEEKDAY_NAMES[time.weekday().num_days_from_monday() as usize],
            width,
        ),
        Field::WeekdayNumber => padded(i64::from(time.weekday().number_from_monday()), width),
        Field::AmPm => {
            let (pm, _) = time.hour12();
            if pm {
                "PM".to_string()
            } else {
                "AM".to_string()
            }
        }
        Field::Hour0To23 => padded(i64::from(time.hour()), width),
        Field::Hour1To24 => {
            let hour = if time.hour() == 0 { 24 } else { time.hour() };
            padded(i64::from(hour), width)
        }
        Field::Hour0To11 => padded(i64::from(time.hour() % 12), width),
        Field::Hour1To12 => padded(i64::from(time.hour12().1), width),
        Field::Minute => padded(i64::from(time.minute()), width),
        Field::Second => padded(i64::from(time.second()), width),
        Field::Millisecond => padded(i64::from(time.nanosecond() / 1_000_000 % 1000), width),
        Field::ZoneName => {
            if offset_seconds == 0 {
                "GMT".to_string()
            } else {
                format!("GMT{}", offset(offset_seconds, ":", true))
            }
        }
        Field::ZoneRfc822 => offset(offset_seconds, "", true),
        Field::ZoneIso8601 => {
            if offset_seconds == 0 {
                "Z".to_string()
            } else {
                match width {
                    1 => offset(offset_seconds, "", false),
                    2 => offset(offset_seconds, "", true),
                    _ => offset(offset_seconds, ":", true),
                }
            }
        }
    }
}
