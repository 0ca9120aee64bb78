use std::fmt;
use std::io;

pub enum Error {
    /// The template has more `{}` placeholders than arguments were given.
    InvalidArgument {
        placeholders: usize,
        arguments: usize,
    },
    /// A timestamp pattern could not be parsed.
    InvalidFormat { pattern: String, reason: String },
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument {
                placeholders,
                arguments,
            } => write!(
                f,
                "The message has {} {} but only {} {} given",
                placeholders,
                plural(*placeholders, "placeholder", "placeholders"),
                arguments,
                plural(*arguments, "argument was", "arguments were"),
            ),
            Error::InvalidFormat { pattern, reason } => {
                write!(f, "Invalid time format `{}`: {}", pattern, reason)
            }
            Error::Io(e) => write!(f, "Unable to write log line: {}", e),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument {
                placeholders,
                arguments,
            } => write!(f, "InvalidArgument({}/{})", placeholders, arguments),
            Error::InvalidFormat { pattern, reason } => {
                write!(f, "InvalidFormat({:?}): {}", pattern, reason)
            }
            Error::Io(e) => write!(f, "Io({:?})", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn invalid_argument_message() {
        let error = Error::InvalidArgument {
            placeholders: 2,
            arguments: 1,
        };
        assert_eq!(
            error.to_string(),
            "The message has 2 placeholders but only 1 argument was given"
        );
    }

    #[test]
    fn invalid_format_message() {
        let error = Error::InvalidFormat {
            pattern: "yyyy-bb".to_string(),
            reason: "unknown pattern letter `b`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time format `yyyy-bb`: unknown pattern letter `b`"
        );
    }
}
