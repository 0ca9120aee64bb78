use std::io;
use termcolor::WriteColor;

use crate::level::Level;

/// Write the level label, wrapped in the level's color if it has one and `color` is enabled.
pub fn formatted_level(out: &mut impl WriteColor, level: Level, color: bool) -> io::Result<()> {
    match level.color().filter(|_| color) {
        Some(color) => {
            out.set_color(&color.spec())?;
            write!(out, "{}", level)?;
            out.reset()?;
        }
        None => {
            write!(out, "{}", level)?;
        }
    }

    Ok(())
}

/// Write a complete log line, including the trailing newline.
///
/// Without timestamp: `[ LEVEL ] message`
/// With timestamp: `[timestamp] [ LEVEL ] \tmessage`
pub fn formatted_line(
    out: &mut impl WriteColor,
    level: Level,
    message: &str,
    timestamp: Option<&str>,
    color: bool,
) -> io::Result<()> {
    match timestamp {
        Some(timestamp) => {
            write!(out, "[{}] [ ", timestamp)?;
            formatted_level(out, level, color)?;
            write!(out, " ] \t{}", message)?;
        }
        None => {
            write!(out, "[ ")?;
            formatted_level(out, level, color)?;
            write!(out, " ] {}", message)?;
        }
    }
    writeln!(out)?;

    Ok(())
}
