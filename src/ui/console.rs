use std::error::Error;
use std::io::{self, BufRead, ErrorKind, Stdout, StdinLock, Write};

use crossterm::style::{style, Color, Stylize};

/// Severity of a one-line status message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn color(self) -> Color {
        match self {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        }
    }
}

/// Owns the input and output handles of a session.
///
/// Generic over the reader and writer so tests can script input with a
/// `Cursor` and capture output in a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Print `prompt` without a newline and read one trimmed line.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line is just another answer for the caller to validate. End of
    /// input is reported as `ErrorKind::UnexpectedEof` so retry loops cannot
    /// spin on a closed stdin.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print a message framed by blank lines, colored by severity when the
    /// console supports it.
    pub fn status(&mut self, kind: StatusKind, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "\n{}\n", style(text).with(kind.color()))
        } else {
            writeln!(self.output, "\n{text}\n")
        }
    }

    /// Print a warning line ahead of a destructive action.
    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", style(text).with(Color::Yellow))
        } else {
            writeln!(self.output, "{text}")
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Flatten an error and its sources into one line for the user.
pub fn describe_error(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
