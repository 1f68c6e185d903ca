//! The voice assistant host.
//!
//! The [`Assistant`] owns an intent engine, a message bus, and a speaker. At
//! construction the engine's triggers are registered with it; afterwards
//! each heard utterance is dispatched on its first word.

use domovoy_foundation::Result;
use domovoy_intent::{CommandRegistrar, IntentEngine, TriggerBinding, UtteranceTokenizer};
use domovoy_morphology::{MorphAnalyzer, Morphology};

use crate::bus::MessageBus;
use crate::config::AssistantConfig;
use crate::voice::Speaker;

/// Handler invoked with the trigger word and the rest of the utterance.
pub type CommandHandler<B, S, M> = fn(&mut Assistant<B, S, M>, &str, &str) -> Result<Outcome>;

/// What happened to a heard utterance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A pattern matched and its payload was published.
    Published {
        /// Topic published to
        topic: String,
        /// Payload text
        payload: String,
        /// Confirmation spoken
        answer: String,
    },
    /// The trigger was recognised but no pattern matched; the fallback was
    /// spoken.
    NotFound,
    /// A pattern matched but publishing failed; the publish error was
    /// spoken.
    PublishFailed {
        /// Topic that could not be published to
        topic: String,
        /// Bus error text
        reason: String,
    },
    /// The first word is not a registered trigger.
    Ignored,
}

/// Dispatches utterances to the intent engine and acts on the result.
pub struct Assistant<B: MessageBus, S: Speaker, M: Morphology = MorphAnalyzer> {
    engine: IntentEngine<M>,
    bus: B,
    speaker: S,
    fallback: String,
    publish_error: String,
    bindings: Vec<TriggerBinding<CommandHandler<B, S, M>>>,
}

impl<B: MessageBus, S: Speaker> Assistant<B, S, MorphAnalyzer> {
    /// Builds an assistant from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon cannot be loaded or the catalogue is
    /// malformed.
    pub fn from_config(config: &AssistantConfig, bus: B, speaker: S) -> Result<Self> {
        let engine = IntentEngine::new(config.morphology()?, config.catalogue.clone())?;
        Ok(Self::new(engine, bus, speaker)?
            .with_replies(config.fallback.clone(), config.publish_error.clone()))
    }
}

impl<B: MessageBus, S: Speaker, M: Morphology> Assistant<B, S, M> {
    /// Creates an assistant and registers the engine's triggers with it.
    ///
    /// # Errors
    ///
    /// Returns an error if a trigger registration fails.
    pub fn new(engine: IntentEngine<M>, bus: B, speaker: S) -> Result<Self> {
        let defaults = AssistantConfig::default();
        let mut assistant = Self {
            engine,
            bus,
            speaker,
            fallback: defaults.fallback,
            publish_error: defaults.publish_error,
            bindings: Vec::new(),
        };

        let triggers = assistant.engine.triggers().clone();
        let handler: CommandHandler<B, S, M> = Self::control;
        triggers.register_all(&handler, &mut assistant)?;
        Ok(assistant)
    }

    /// Sets the fallback and publish-error replies.
    #[must_use]
    pub fn with_replies(mut self, fallback: impl Into<String>, publish_error: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self.publish_error = publish_error.into();
        self
    }

    /// Handles one utterance.
    ///
    /// # Errors
    ///
    /// Returns an error only if the speaker fails; bus failures are reported
    /// to the user and returned as [`Outcome::PublishFailed`].
    pub fn hear(&mut self, utterance: &str) -> Result<Outcome> {
        let utterance = utterance.trim();
        let (head, rest) = utterance
            .split_once(char::is_whitespace)
            .unwrap_or((utterance, ""));

        let Some(word) = UtteranceTokenizer::tokenize(head).into_iter().next() else {
            return Ok(Outcome::Ignored);
        };
        let Some(binding) = self.bindings.iter().find(|b| b.trigger == word) else {
            tracing::debug!(%word, "not a trigger; utterance ignored");
            return Ok(Outcome::Ignored);
        };

        let handler = binding.handler;
        let trigger = binding.trigger.clone();
        tracing::debug!(%trigger, action = %binding.action, "dispatching utterance");
        handler(self, &trigger, rest.trim())
    }

    /// Matches, publishes, and confirms.
    fn control(&mut self, trigger: &str, phrase: &str) -> Result<Outcome> {
        let Some(pattern) = self.engine.match_phrase(phrase, Some(trigger)) else {
            self.speaker.say(&self.fallback)?;
            return Ok(Outcome::NotFound);
        };
        let topic = pattern.topic.clone();
        let payload = pattern.payload();
        let answer = pattern.answer.clone();

        match self.bus.publish(&topic, &payload) {
            Ok(()) => {
                if !answer.is_empty() {
                    self.speaker.say(&answer)?;
                }
                Ok(Outcome::Published {
                    topic,
                    payload,
                    answer,
                })
            }
            Err(e) => {
                tracing::warn!(%topic, error = %e, "publish failed");
                self.speaker.say(&self.publish_error)?;
                Ok(Outcome::PublishFailed {
                    topic,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Registered (trigger, action) pairs.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|b| (b.trigger.as_str(), b.action.as_str()))
    }

    /// The intent engine.
    #[must_use]
    pub fn engine(&self) -> &IntentEngine<M> {
        &self.engine
    }

    /// The message bus.
    #[must_use]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// The message bus, mutably.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// The speaker.
    #[must_use]
    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// The speaker, mutably.
    pub fn speaker_mut(&mut self) -> &mut S {
        &mut self.speaker
    }
}

impl<B: MessageBus, S: Speaker, M: Morphology> CommandRegistrar<CommandHandler<B, S, M>>
    for Assistant<B, S, M>
{
    fn register_command(&mut self, binding: TriggerBinding<CommandHandler<B, S, M>>) -> Result<()> {
        if self.bindings.iter().any(|b| b.trigger == binding.trigger) {
            tracing::debug!(trigger = %binding.trigger, action = %binding.action, "trigger already bound; keeping the first");
            return Ok(());
        }
        tracing::debug!(trigger = %binding.trigger, action = %binding.action, "registered trigger");
        self.bindings.push(binding);
        Ok(())
    }
}
