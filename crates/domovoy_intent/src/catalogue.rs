//! The action catalogue.
//!
//! A catalogue lists controllable verbs ([`ActionDefinition`]), the devices
//! each verb applies to ([`Item`]), and the modifiers it accepts
//! ([`Parameter`]). It is trusted input: [`Catalogue::validate`] rejects
//! malformed entries outright instead of skipping them.

use std::path::Path;

use domovoy_foundation::{Error, ErrorContext, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tokenizer::UtteranceTokenizer;

/// One controllable verb with its devices and modifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionDefinition {
    /// The verb in catalogue spelling (usually the infinitive)
    pub command: String,
    /// Devices or locations this verb applies to, in priority order
    pub items: Vec<Item>,
    /// Modifiers, in priority order
    pub parameters: Vec<Parameter>,
}

/// A device (or location) noun bound to a bus address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Device noun, base form
    pub word: String,
    /// Command target on the message bus
    pub topic: String,
    /// Trailing phrase fragment, e.g. a location qualifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addition: Option<String>,
}

impl Item {
    /// Creates an item without an addition.
    #[must_use]
    pub fn new(word: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            topic: topic.into(),
            addition: None,
        }
    }

    /// Sets the trailing addition.
    #[must_use]
    pub fn with_addition(mut self, addition: impl Into<String>) -> Self {
        self.addition = Some(addition.into());
        self
    }

    /// Returns the last token of the addition, if there is one.
    #[must_use]
    pub fn addition_tail(&self) -> Option<String> {
        self.addition
            .as_deref()
            .and_then(|a| UtteranceTokenizer::tokenize(a).pop())
    }
}

/// A named modifier: `{ "word": ..., "data": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedParameter {
    /// Modifier word, base form
    pub word: String,
    /// Payload published when this modifier matches
    pub data: Value,
}

/// A catch-all modifier: `{ "ALL": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatchAllParameter {
    /// Payload published for any instantiation
    #[serde(rename = "ALL")]
    pub all: Value,
}

/// A modifier of an action: named or catch-all, never both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    /// A modifier word with its payload
    Named(NamedParameter),
    /// A payload without a modifier word
    CatchAll(CatchAllParameter),
}

impl Parameter {
    /// Creates a named parameter.
    #[must_use]
    pub fn named(word: impl Into<String>, data: impl Into<Value>) -> Self {
        Self::Named(NamedParameter {
            word: word.into(),
            data: data.into(),
        })
    }

    /// Creates a catch-all parameter.
    #[must_use]
    pub fn catch_all(data: impl Into<Value>) -> Self {
        Self::CatchAll(CatchAllParameter { all: data.into() })
    }

    /// Returns the modifier word, or `None` for a catch-all.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Named(p) => Some(&p.word),
            Self::CatchAll(_) => None,
        }
    }

    /// Returns the payload.
    #[must_use]
    pub fn data(&self) -> &Value {
        match self {
            Self::Named(p) => &p.data,
            Self::CatchAll(p) => &p.all,
        }
    }

    /// Returns true for the catch-all shape.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll(_))
    }
}

impl ActionDefinition {
    /// Creates an action with no items or parameters.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            items: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Adds an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Checks that every required word and address is present.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidCatalogue` error naming the offending entry.
    pub fn validate(&self) -> Result<()> {
        let command = self.command.trim();
        if command.is_empty() {
            return Err(Error::invalid_catalogue("action has an empty command"));
        }
        if !is_single_word(command) {
            return Err(invalid_at(
                format!("command '{command}' must be a single word"),
                &[command],
            ));
        }

        for item in &self.items {
            if item.word.trim().is_empty() {
                return Err(invalid_at("item has an empty word", &[command]));
            }
            if !is_single_word(&item.word) {
                return Err(invalid_at(
                    format!("item word '{}' must be a single word", item.word.trim()),
                    &[command],
                ));
            }
            if item.topic.trim().is_empty() {
                return Err(invalid_at("item has an empty topic", &[command, &item.word]));
            }
            if item.addition.is_some() && item.addition_tail().is_none() {
                return Err(invalid_at("item addition has no words", &[command, &item.word]));
            }
        }

        for parameter in &self.parameters {
            if parameter.word().is_some_and(|w| w.trim().is_empty()) {
                return Err(invalid_at("parameter has an empty word", &[command]));
            }
            if let Some(word) = parameter.word().filter(|w| !is_single_word(w)) {
                return Err(invalid_at(
                    format!("parameter word '{}' must be a single word", word.trim()),
                    &[command],
                ));
            }
        }

        if self.parameters.is_empty() {
            tracing::warn!(command, "action has no parameters and will never match");
        }
        Ok(())
    }
}

/// Required words are matched token by token, so each must be one token.
fn is_single_word(word: &str) -> bool {
    word.split_whitespace().count() == 1
}

fn invalid_at(message: impl Into<String>, path: &[&str]) -> Error {
    let context = path
        .iter()
        .fold(ErrorContext::new(), |ctx, segment| ctx.with_segment(*segment));
    Error::invalid_catalogue(message).with_context(context)
}

/// An ordered list of action definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    actions: Vec<ActionDefinition>,
}

impl Catalogue {
    /// Creates a catalogue from action definitions.
    #[must_use]
    pub fn new(actions: Vec<ActionDefinition>) -> Self {
        Self { actions }
    }

    /// Parses a catalogue from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidCatalogue` error if the JSON does not have the
    /// catalogue shape (including a parameter carrying both `word` and `ALL`).
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::invalid_catalogue(e.to_string()))
    }

    /// Converts an already-parsed JSON value into a catalogue.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidCatalogue` error if the value has the wrong shape.
    pub fn from_json_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::invalid_catalogue(e.to_string()))
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read catalogue '{}': {e}",
                path.display()
            )))
        })?;
        Self::from_json_str(&text)
            .map_err(|e| e.with_context(ErrorContext::new().with_source(path.display().to_string())))
    }

    /// Validates every action.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<()> {
        self.actions.iter().try_for_each(ActionDefinition::validate)
    }

    /// Returns the actions in declaration order.
    #[must_use]
    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }

    /// Returns true if the catalogue has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl From<Vec<ActionDefinition>> for Catalogue {
    fn from(actions: Vec<ActionDefinition>) -> Self {
        Self::new(actions)
    }
}
