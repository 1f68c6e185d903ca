//! Speech output.

use std::io::{self, Write};

use domovoy_foundation::{Error, Result};

/// Something that can speak a sentence to the user.
pub trait Speaker {
    /// Speaks `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device fails.
    fn say(&mut self, text: &str) -> Result<()>;
}

/// Prints spoken text to a terminal.
pub struct ConsoleSpeaker<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleSpeaker<io::Stdout> {
    /// Creates a speaker printing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSpeaker<W> {
    /// Creates a speaker printing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "\x1b[1;36m{text}\x1b[0m").map_err(|e| Error::io(e.to_string()))
    }
}

/// Keeps everything it is asked to say.
#[derive(Clone, Debug, Default)]
pub struct RecordingSpeaker {
    phrases: Vec<String>,
}

impl RecordingSpeaker {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Phrases spoken so far.
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// The most recent phrase.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.phrases.last().map(String::as_str)
    }

    /// Removes and returns everything recorded.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.phrases)
    }
}

impl Speaker for RecordingSpeaker {
    fn say(&mut self, text: &str) -> Result<()> {
        self.phrases.push(text.to_string());
        Ok(())
    }
}
