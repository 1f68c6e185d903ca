//! Trigger registration.
//!
//! At startup every catalogue action gets an imperative trigger word. The
//! host receives one [`TriggerBinding`] per trigger through its
//! [`CommandRegistrar`] implementation and dispatches utterances on them.

use domovoy_foundation::{ErrorContext, Result};
use domovoy_morphology::Morphology;

use crate::catalogue::ActionDefinition;
use crate::trigger::TriggerDeriver;

/// A trigger word bound to a handler and the action it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerBinding<H> {
    /// Imperative trigger word, e.g. "включи"
    pub trigger: String,
    /// Host-side handler invoked when the trigger is heard
    pub handler: H,
    /// The action in catalogue spelling, e.g. "включить"
    pub action: String,
}

/// A host that accepts trigger registrations.
pub trait CommandRegistrar<H> {
    /// Registers one trigger binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the binding.
    fn register_command(&mut self, binding: TriggerBinding<H>) -> Result<()>;
}

/// Derived trigger words, one per distinct catalogue action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerTable {
    /// (trigger, action) in catalogue order
    entries: Vec<(String, String)>,
}

impl TriggerTable {
    /// Derives the trigger of every action.
    ///
    /// Actions sharing a command yield one entry.
    ///
    /// # Errors
    ///
    /// Fails on the first action word without a verb reading or imperative
    /// form; a catalogue like that is malformed.
    pub fn derive<M: Morphology + ?Sized>(morph: &M, actions: &[ActionDefinition]) -> Result<Self> {
        let deriver = TriggerDeriver::new(morph);
        let mut entries: Vec<(String, String)> = Vec::new();

        for action in actions {
            let command = action.command.trim();
            if entries.iter().any(|(_, a)| a == command) {
                continue;
            }
            let trigger = deriver
                .derive_trigger(command)
                .map_err(|e| e.with_context(ErrorContext::new().with_segment(command)))?;
            tracing::debug!(action = command, %trigger, "derived trigger");
            entries.push((trigger, command.to_string()));
        }

        Ok(Self { entries })
    }

    /// Returns the action bound to a trigger word.
    #[must_use]
    pub fn action_for(&self, trigger: &str) -> Option<&str> {
        let trigger = trigger.to_lowercase();
        self.entries
            .iter()
            .find(|(t, _)| *t == trigger)
            .map(|(_, a)| a.as_str())
    }

    /// Iterates over (trigger, action) pairs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, a)| (t.as_str(), a.as_str()))
    }

    /// Number of triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no triggers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binds every trigger to `handler`.
    #[must_use]
    pub fn bind<H: Clone>(&self, handler: &H) -> Vec<TriggerBinding<H>> {
        self.entries
            .iter()
            .map(|(trigger, action)| TriggerBinding {
                trigger: trigger.clone(),
                handler: handler.clone(),
                action: action.clone(),
            })
            .collect()
    }

    /// Hands every binding to the registrar.
    ///
    /// # Errors
    ///
    /// Stops at the first binding the registrar rejects.
    pub fn register_all<H: Clone, R: CommandRegistrar<H> + ?Sized>(
        &self,
        handler: &H,
        registrar: &mut R,
    ) -> Result<()> {
        self.bind(handler)
            .into_iter()
            .try_for_each(|binding| registrar.register_command(binding))
    }
}
