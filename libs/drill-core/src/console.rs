//! Line-oriented prompt/response exchange used by the drill engine.

use std::io::{self, BufRead, Write};

/// Synchronous console the engine talks to.
pub trait Console {
    /// Display a full line of text.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Display a prompt marker without ending the line.
    fn prompt(&mut self, marker: &str) -> io::Result<()>;

    /// Block for one line of input, without its line ending.
    ///
    /// Returns `None` at end of input. Once input has ended every later
    /// call returns `None` as well.
    fn read_response(&mut self) -> io::Result<Option<String>>;
}

/// Console over any buffered reader and writer (stdin/stdout in the binary).
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn prompt(&mut self, marker: &str) -> io::Result<()> {
        write!(self.output, "{marker}")?;
        self.output.flush()
    }

    fn read_response(&mut self) -> io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            self.closed = true;
            return Ok(None);
        }

        // Undecodable bytes become U+FFFD and simply fail to match.
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
