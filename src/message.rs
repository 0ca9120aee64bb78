use std::borrow::Cow;
use std::fmt;

use crate::error::Error;

pub const PLACEHOLDER: &str = "{}";

/// A value that can be inserted into a `{}` placeholder.
///
/// Sequences are rendered as a bracketed list, e.g. `[1, 2, 3]`. Everything else uses its
/// `Display` representation.
pub trait Arg {
    fn to_arg_string(&self) -> String;
}

macro_rules! display_arg {
    ($($t:ty),* $(,)?) => {
        $(
            impl Arg for $t {
                fn to_arg_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_arg!(
    str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

impl Arg for Cow<'_, str> {
    fn to_arg_string(&self) -> String {
        self.to_string()
    }
}

impl Arg for fmt::Arguments<'_> {
    fn to_arg_string(&self) -> String {
        self.to_string()
    }
}

impl Arg for dyn fmt::Display + '_ {
    fn to_arg_string(&self) -> String {
        self.to_string()
    }
}

impl<T: Arg + ?Sized> Arg for &T {
    fn to_arg_string(&self) -> String {
        (**self).to_arg_string()
    }
}

impl<T: Arg + ?Sized> Arg for Box<T> {
    fn to_arg_string(&self) -> String {
        (**self).to_arg_string()
    }
}

impl<T: Arg> Arg for [T] {
    fn to_arg_string(&self) -> String {
        let items = self
            .iter()
            .map(Arg::to_arg_string)
            .collect::<Vec<String>>();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Arg> Arg for Vec<T> {
    fn to_arg_string(&self) -> String {
        self.as_slice().to_arg_string()
    }
}

impl<T: Arg, const N: usize> Arg for [T; N] {
    fn to_arg_string(&self) -> String {
        self.as_slice().to_arg_string()
    }
}

/// Count the `{}` placeholders in a message.
pub fn placeholder_count(message: &str) -> usize {
    message.matches(PLACEHOLDER).count()
}

/// Replace every `{}` placeholder in the message with the next argument.
///
/// Without arguments the message is returned as is, placeholders included. Extra arguments are
/// ignored. Fewer arguments than placeholders returns `Error::InvalidArgument`.
///
/// A `{` that is not directly followed by `}` is kept as is.
pub fn prepare(message: &str, args: &[&dyn Arg]) -> Result<String, Error> {
    if args.is_empty() {
        return Ok(message.to_string());
    }

    let mut formatted = String::with_capacity(message.len());
    let mut remaining_args = args.iter();
    let mut rest = message;
    while let Some(index) = rest.find(PLACEHOLDER) {
        let arg = match remaining_args.next() {
            Some(arg) => arg,
            None => {
                return Err(Error::InvalidArgument {
                    placeholders: placeholder_count(message),
                    arguments: args.len(),
                })
            }
        };
        formatted.push_str(&rest[..index]);
        formatted.push_str(&arg.to_arg_string());
        rest = &rest[index + PLACEHOLDER.len()..];
    }
    formatted.push_str(rest);

    Ok(formatted)
}
