//! Console output: the prompts, doubt lines and read errors the tool prints

use crate::error::{DoubtFinderError, Result};
use crate::output::report::DoubtReport;
use colored::{Color, ColoredString, Colorize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStyle {
    Prompt,
    Error,
    Doubt,
    Quit,
}

impl ConsoleStyle {
    /// `None` means the terminal's default colour.
    pub fn color(&self) -> Option<Color> {
        match self {
            ConsoleStyle::Prompt => None,
            ConsoleStyle::Error => Some(Color::BrightRed),
            ConsoleStyle::Doubt => Some(Color::BrightYellow),
            ConsoleStyle::Quit => Some(Color::BrightCyan),
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        match self.color() {
            Some(color) => text.color(color),
            None => text.normal(),
        }
    }
}

pub struct ConsoleReporter<W: Write> {
    out: W,
    use_colors: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, use_colors: bool) -> Self {
        Self { out, use_colors }
    }

    pub fn prompt_directory(&mut self) -> Result<()> {
        self.write(ConsoleStyle::Prompt, "Enter the directory: ", false)
    }

    pub fn invalid_directory(&mut self) -> Result<()> {
        self.write(ConsoleStyle::Error, "The given directory is wrong!", true)
    }

    pub fn doubt(&mut self, report: &DoubtReport) -> Result<()> {
        self.write(ConsoleStyle::Doubt, &report.to_string(), true)
    }

    pub fn read_error(&mut self, file_name: &str, location: &str, error: &DoubtFinderError) -> Result<()> {
        let header = format!("Error while reading file {} in {}", file_name, location);
        self.write(ConsoleStyle::Error, &header, true)?;
        writeln!(self.out, "{}", error)?;
        Ok(())
    }

    pub fn prompt_quit(&mut self) -> Result<()> {
        self.write(ConsoleStyle::Quit, "Press enter to quit...", false)
    }

    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, style: ConsoleStyle, text: &str, newline: bool) -> Result<()> {
        if self.use_colors {
            write!(self.out, "{}", style.paint(text))?;
        } else {
            write!(self.out, "{}", text)?;
        }
        if newline {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
