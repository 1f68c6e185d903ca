//! Error types for the Domovoy system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Domovoy operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a "no verb parse" error for a word.
    #[must_use]
    pub fn no_verb_parse(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoVerbParse(word.into()))
    }

    /// Creates a "no such form" error for a word and the requested features.
    #[must_use]
    pub fn no_inflection(word: impl Into<String>, features: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoInflection {
            word: word.into(),
            features: features.into(),
        })
    }

    /// Creates an invalid catalogue error.
    #[must_use]
    pub fn invalid_catalogue(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCatalogue(message.into()))
    }

    /// Creates an invalid tag error.
    #[must_use]
    pub fn invalid_tag(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTag {
            tag: tag.into(),
            message: message.into(),
        })
    }

    /// Creates a dictionary syntax error at a 1-indexed line.
    #[must_use]
    pub fn dictionary(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DictionaryError {
            line,
            message: message.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigError(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates a message bus error.
    #[must_use]
    pub fn bus(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BusError(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No verb or infinitive parse exists for a word.
    #[error("no verb parse for word: {0}")]
    NoVerbParse(String),

    /// A word has no form with the requested grammatical features.
    #[error("no form of '{word}' with features {features}")]
    NoInflection {
        /// The word being inflected.
        word: String,
        /// The requested features, in tag notation.
        features: String,
    },

    /// The action catalogue is malformed.
    #[error("invalid catalogue: {0}")]
    InvalidCatalogue(String),

    /// A grammatical tag could not be parsed.
    #[error("invalid tag '{tag}': {message}")]
    InvalidTag {
        /// The tag text.
        tag: String,
        /// What was wrong with it.
        message: String,
    },

    /// Syntax error in a dictionary file.
    #[error("dictionary error at line {line}: {message}")]
    DictionaryError {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the error.
        message: String,
    },

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// The message bus rejected a connection or publish.
    #[error("message bus error: {0}")]
    BusError(String),

    /// The line editor failed.
    #[error("editor error: {0}")]
    EditorError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source file or catalogue entry.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Path of nested elements leading to the failure (e.g. action, item).
    pub path: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            path: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a path segment.
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.path.push(segment.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.path.is_empty() {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in {}", self.path.join(" > "))?;
        }
        Ok(())
    }
}
