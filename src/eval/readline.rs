use std::io::{BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use crate::errors::{read_err, Handle, Result};

/// Source of command lines for the shell loop.
pub trait LineSource {
    /// Prints the prompt and blocks until a full line is available.
    /// Returns `Ok(None)` once the input is exhausted, which is distinct from an empty line.
    /// The trailing newline is never part of the returned line.
    fn prompt_and_read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive line editor, used when a person is typing at a terminal
pub struct LineEditor {
    editor: DefaultEditor,
}

impl LineEditor {
    // Creates a LineEditor that keeps no history
    pub fn new() -> Result<Self> {
        let config = Config::builder().auto_add_history(false).build();
        let editor = DefaultEditor::with_config(config)
            .map_err(|e| read_err!(FailedToRead(e.to_string())))?;

        Ok(Self { editor })
    }
}

impl LineSource for LineEditor {
    fn prompt_and_read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            // * There is no signal handling, so Ctrl-C just abandons the line being typed
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(e) => Err(read_err!(FailedToRead(e.to_string()))),
        }
    }
}

/// Buffered reader for non-interactive input such as pipes and files
pub struct PlainReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineSource for PlainReader<R, W> {
    fn prompt_and_read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| read_err!(FailedToRead(e.to_string())))?;

        let mut buffer = Vec::new();
        let bytes_read = self
            .input
            .read_until(b'\n', &mut buffer)
            .map_err(|e| read_err!(FailedToRead(e.to_string())))?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }

        String::from_utf8(buffer)
            .map(Some)
            .replace_err(|| read_err!(InvalidEncoding))
    }
}
