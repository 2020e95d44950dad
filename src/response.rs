//! Output and error sinks.
//!
//! A [`Response`] has two append-only channels. [`BufferedResponse`] keeps
//! both in memory and is what embedding callers and tests read back;
//! [`ConsoleResponse`] writes to stdout/stderr and can style lines.

use std::io::{self, Write};

use colored::Colorize;

/// Presentation hint for a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Heading,
    Command,
    Option,
}

/// One line of rendered help, without its trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: Style,
    pub text: String,
}

impl Line {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Style::Plain, text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Style::Heading, text)
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(Style::Command, text)
    }

    pub fn option(text: impl Into<String>) -> Self {
        Self::new(Style::Option, text)
    }

    pub fn blank() -> Self {
        Self::plain(String::new())
    }
}

/// Destination for help output.
pub trait Response {
    fn output(&mut self, line: &Line) -> io::Result<()>;
    fn error(&mut self, message: &str) -> io::Result<()>;
}

/// Collects both channels as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    pub output: String,
    pub error: String,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Response for BufferedResponse {
    fn output(&mut self, line: &Line) -> io::Result<()> {
        self.output.push_str(&line.text);
        self.output.push('\n');
        Ok(())
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.error.push_str(message);
        self.error.push('\n');
        Ok(())
    }
}

/// Writes to the process's stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleResponse {
    styled: bool,
}

impl ConsoleResponse {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    fn paint(&self, line: &Line) -> String {
        if !self.styled {
            return line.text.clone();
        }
        match line.style {
            Style::Plain => line.text.clone(),
            Style::Heading => line.text.bold().to_string(),
            Style::Command => line.text.green().to_string(),
            Style::Option => line.text.cyan().to_string(),
        }
    }
}

impl Response for ConsoleResponse {
    fn output(&mut self, line: &Line) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", self.paint(line))
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        if self.styled {
            writeln!(err, "{}", message.red())
        } else {
            writeln!(err, "{message}")
        }
    }
}
