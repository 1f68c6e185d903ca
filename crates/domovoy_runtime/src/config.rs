//! Assistant configuration.
//!
//! Loaded from a JSON file. Every field is optional; missing fields take the
//! defaults below and unknown fields are rejected.
//!
//! ```json
//! {
//!     "broker": { "host": "192.168.1.10", "port": 1883 },
//!     "fallback": "Не нашла устройство",
//!     "catalogue": [
//!         {
//!             "command": "включить",
//!             "items": [{ "word": "лампа", "topic": "cmnd/u_01/cmnd/Power" }],
//!             "parameters": [{ "ALL": "ON" }]
//!         }
//!     ]
//! }
//! ```

use std::path::{Path, PathBuf};

use domovoy_foundation::{Error, ErrorContext, ErrorKind, Result};
use domovoy_intent::Catalogue;
use domovoy_morphology::{MorphAnalyzer, load_dictionary};
use serde::{Deserialize, Serialize};

/// Message broker connection settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrokerConfig {
    /// Client identifier presented to the broker.
    pub client_id: String,

    /// Broker host name or address.
    pub host: String,

    /// Broker port.
    pub port: u16,

    /// Optional user name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Optional password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            client_id: "Irine_voice".to_string(),
            host: "example.com".to_string(),
            port: 1883,
            username: None,
            password: None,
        }
    }
}

impl BrokerConfig {
    /// Returns `host:port`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Sets the credentials.
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// Top-level assistant configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    /// Broker connection.
    pub broker: BrokerConfig,

    /// Spoken when no pattern matches.
    pub fallback: String,

    /// Spoken when a matched command could not be published.
    pub publish_error: String,

    /// The action catalogue.
    pub catalogue: Catalogue,

    /// Extra dictionary merged after the bundled lexicon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            broker: BrokerConfig::default(),
            fallback: "Не нашла устройство".to_string(),
            publish_error: "Ошибка, команда не отправлена".to_string(),
            catalogue: Catalogue::default(),
            lexicon: None,
        }
    }
}

impl AssistantConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the text is not valid configuration JSON.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Loads a configuration file.
    ///
    /// A relative `lexicon` path is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an `IoError` if the file cannot be read, or a `ConfigError`
    /// if it does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("failed to read config '{}': {e}", path.display()))
        })?;
        let mut config = Self::from_json_str(&text)
            .map_err(|e| e.with_context(ErrorContext::new().with_source(path.display().to_string())))?;

        if let (Some(lexicon), Some(parent)) = (&config.lexicon, path.parent()) {
            if lexicon.is_relative() {
                config.lexicon = Some(parent.join(lexicon));
            }
        }

        tracing::debug!(
            path = %path.display(),
            actions = config.catalogue.actions().len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// A configuration with a small built-in catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalogue fails to parse.
    pub fn demo() -> Result<Self> {
        Ok(Self::default().with_catalogue(Catalogue::from_json_str(DEMO_CATALOGUE)?))
    }

    /// Replaces the catalogue.
    #[must_use]
    pub fn with_catalogue(mut self, catalogue: Catalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    /// Sets the extra dictionary path.
    #[must_use]
    pub fn with_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon = Some(path.into());
        self
    }

    /// Builds the morphology: the bundled lexicon, extended by `lexicon`.
    ///
    /// # Errors
    ///
    /// Returns an error if the extra dictionary cannot be loaded.
    pub fn morphology(&self) -> Result<MorphAnalyzer> {
        let mut morph = MorphAnalyzer::standard()?;
        if let Some(path) = &self.lexicon {
            let extra = load_dictionary(path)?;
            tracing::debug!(path = %path.display(), lexemes = extra.len(), "merged extra lexicon");
            morph.extend(extra);
        }
        Ok(morph)
    }

    /// Serializes the configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if encoding fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }
}

/// Catalogue used when no configuration file is given.
pub const DEMO_CATALOGUE: &str = r#"[
    {
        "command": "включить",
        "items": [
            {"word": "лампа", "topic": "cmnd/u_01/cmnd/Power"},
            {"word": "свет", "topic": "cmnd/u_02/cmnd/Power", "addition": "в спальне"},
            {"word": "свет", "topic": "cmnd/u_04/cmnd/Power", "addition": "на кухне"},
            {"word": "чайник", "topic": "cmnd/u_03/cmnd/Power"}
        ],
        "parameters": [{"ALL": "ON"}]
    },
    {
        "command": "выключить",
        "items": [
            {"word": "лампа", "topic": "cmnd/u_01/cmnd/Power"},
            {"word": "свет", "topic": "cmnd/u_02/cmnd/Power", "addition": "в спальне"},
            {"word": "свет", "topic": "cmnd/u_04/cmnd/Power", "addition": "на кухне"},
            {"word": "чайник", "topic": "cmnd/u_03/cmnd/Power"}
        ],
        "parameters": [{"ALL": "OFF"}]
    },
    {
        "command": "сделать",
        "items": [
            {"word": "лампа", "topic": "cmnd/u_01/cmnd/Color"},
            {"word": "люстра", "topic": "cmnd/u_05/cmnd/Color"}
        ],
        "parameters": [
            {"word": "красный", "data": "255,0,0"},
            {"word": "зелёный", "data": "0,255,0"},
            {"word": "синий", "data": "0,0,255"},
            {"word": "тёплый", "data": "255,180,100"}
        ]
    },
    {
        "command": "открыть",
        "items": [{"word": "штора", "topic": "cmnd/u_06/cmnd/Shutter"}],
        "parameters": [{"ALL": 100}]
    },
    {
        "command": "закрыть",
        "items": [{"word": "штора", "topic": "cmnd/u_06/cmnd/Shutter"}],
        "parameters": [{"ALL": 0}]
    }
]"#;
