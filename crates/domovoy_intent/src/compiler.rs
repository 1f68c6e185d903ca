//! Pattern compilation.
//!
//! Expands a catalogue into the flat list of [`CompiledPattern`]s the matcher
//! scans. Every action is crossed with every one of its items and every one
//! of its parameters; declaration order is preserved, and that order is the
//! match priority.

use domovoy_foundation::Result;
use domovoy_morphology::Morphology;

use crate::catalogue::{ActionDefinition, Item, Parameter};
use crate::confirmation::ConfirmationBuilder;
use crate::pattern::CompiledPattern;

/// Compiles catalogues into patterns.
pub struct PatternCompiler<'m, M: Morphology + ?Sized> {
    morph: &'m M,
}

impl<'m, M: Morphology + ?Sized> PatternCompiler<'m, M> {
    /// Creates a compiler over a morphology service.
    pub fn new(morph: &'m M) -> Self {
        Self { morph }
    }

    /// Compiles every (action, item, parameter) combination.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails validation. Missing
    /// confirmation words never fail compilation.
    pub fn compile(&self, actions: &[ActionDefinition]) -> Result<Vec<CompiledPattern>> {
        actions.iter().try_for_each(ActionDefinition::validate)?;

        let patterns: Vec<_> = actions
            .iter()
            .flat_map(move |action| {
                action.items.iter().flat_map(move |item| {
                    action
                        .parameters
                        .iter()
                        .map(move |parameter| self.compile_one(action, item, parameter))
                })
            })
            .collect();

        tracing::debug!(
            actions = actions.len(),
            patterns = patterns.len(),
            "compiled catalogue"
        );
        Ok(patterns)
    }

    /// Compiles a single combination.
    #[must_use]
    pub fn compile_one(
        &self,
        action: &ActionDefinition,
        item: &Item,
        parameter: &Parameter,
    ) -> CompiledPattern {
        let words = required_words(action, item, parameter);
        let lemmas = words.iter().map(|w| self.morph.normalize(w)).collect();
        let answer =
            ConfirmationBuilder::new(self.morph).sentence(action.command.trim(), item, parameter);

        tracing::trace!(?words, %answer, "compiled pattern");
        CompiledPattern {
            words,
            topic: item.topic.clone(),
            data: parameter.data().clone(),
            answer,
            lemmas,
        }
    }
}

/// Returns the words a combination requires:
/// `[command, item] + [last token of addition]? + [parameter word]?`.
#[must_use]
pub fn required_words(action: &ActionDefinition, item: &Item, parameter: &Parameter) -> Vec<String> {
    let mut words = vec![action.command.trim().to_string(), item.word.trim().to_string()];
    if let Some(tail) = item.addition_tail() {
        words.push(tail);
    }
    if let Some(word) = parameter.word() {
        words.push(word.trim().to_string());
    }
    words
}
