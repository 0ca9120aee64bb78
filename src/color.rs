use std::fmt;
use termcolor::{Color, ColorSpec};

/// The ANSI palette used for level labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogColor {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl LogColor {
    pub const ALL: [LogColor; 8] = [
        LogColor::Reset,
        LogColor::Red,
        LogColor::Green,
        LogColor::Yellow,
        LogColor::Blue,
        LogColor::Magenta,
        LogColor::Cyan,
        LogColor::White,
    ];

    /// SGR parameter of the color, e.g. `31` for red.
    pub fn code(&self) -> &'static str {
        match self {
            LogColor::Reset => "0",
            LogColor::Red => "31",
            LogColor::Green => "32",
            LogColor::Yellow => "33",
            LogColor::Blue => "34",
            LogColor::Magenta => "35",
            LogColor::Cyan => "36",
            LogColor::White => "37",
        }
    }

    /// Color spec that writes exactly this escape sequence to an ANSI writer.
    ///
    /// `termcolor` resets before setting a color by default, which would prefix every label with
    /// `ESC[0m`, so the reset is turned off for every color except `Reset` itself.
    pub fn spec(&self) -> ColorSpec {
        let mut cs = ColorSpec::new();
        let color = match self {
            LogColor::Reset => return cs,
            LogColor::Red => Color::Red,
            LogColor::Green => Color::Green,
            LogColor::Yellow => Color::Yellow,
            LogColor::Blue => Color::Blue,
            LogColor::Magenta => Color::Magenta,
            LogColor::Cyan => Color::Cyan,
            LogColor::White => Color::White,
        };
        cs.set_fg(Some(color));
        cs.set_reset(false);
        cs
    }
}

impl fmt::Display for LogColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }
}
