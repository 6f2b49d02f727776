//! Status messages shown after a user action (copy, save)

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct StatusReporter {
    use_color: bool,
}

impl StatusReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// `✓ <message>` in green on stderr.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.emit(Color::Green, "✓ ", message)
    }

    /// Yellow warning on stderr.
    pub fn warning(&self, message: &str) -> io::Result<()> {
        self.emit(Color::Yellow, "", message)
    }

    fn emit(&self, color: Color, marker: &str, message: &str) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stderr = StandardStream::stderr(choice);
        write_status(&mut stderr, color, marker, message)
    }
}

fn write_status<W: WriteColor>(
    out: &mut W,
    color: Color,
    marker: &str,
    message: &str,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{}{}", marker, message)?;
    out.reset()?;
    writeln!(out)
}
