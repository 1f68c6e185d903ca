//! Compiled patterns.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One expanded (action, item, parameter) combination.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompiledPattern {
    /// Required words; the first is always the action's catalogue spelling
    pub words: Vec<String>,
    /// Command target on the message bus
    pub topic: String,
    /// Payload to publish
    pub data: Value,
    /// Confirmation sentence spoken after publishing
    pub answer: String,
    /// Lemmas of `words`, in the same order
    #[serde(skip)]
    pub lemmas: Vec<String>,
}

impl CompiledPattern {
    /// Returns the action word.
    #[must_use]
    pub fn action(&self) -> &str {
        self.words.first().map_or("", String::as_str)
    }

    /// Returns the payload as publishable text.
    ///
    /// Strings are published verbatim; other JSON values in their compact
    /// JSON encoding.
    #[must_use]
    pub fn payload(&self) -> String {
        match &self.data {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] -> {} = {}",
            self.words.join(" "),
            self.topic,
            self.payload()
        )?;
        if !self.answer.is_empty() {
            write!(f, " \"{}\"", self.answer)?;
        }
        Ok(())
    }
}
