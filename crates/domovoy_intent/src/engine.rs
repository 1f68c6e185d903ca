//! The intent engine facade.
//!
//! Bundles a morphology service with a validated catalogue, its compiled
//! patterns, and its trigger table. Everything is computed once at
//! construction; afterwards the engine is read-only.

use domovoy_foundation::Result;
use domovoy_morphology::{MorphAnalyzer, Morphology};

use crate::catalogue::Catalogue;
use crate::compiler::PatternCompiler;
use crate::matcher::PhraseMatcher;
use crate::pattern::CompiledPattern;
use crate::registry::{CommandRegistrar, TriggerTable};

/// Compiled catalogue plus the morphology it was compiled with.
#[derive(Debug)]
pub struct IntentEngine<M: Morphology = MorphAnalyzer> {
    morph: M,
    catalogue: Catalogue,
    patterns: Vec<CompiledPattern>,
    triggers: TriggerTable,
}

impl IntentEngine<MorphAnalyzer> {
    /// Creates an engine over the bundled standard lexicon.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled lexicon or the catalogue is invalid.
    pub fn standard(catalogue: Catalogue) -> Result<Self> {
        Self::new(MorphAnalyzer::standard()?, catalogue)
    }
}

impl<M: Morphology> IntentEngine<M> {
    /// Validates and compiles a catalogue.
    ///
    /// # Errors
    ///
    /// Fails if any action is malformed or has no imperative trigger.
    pub fn new(morph: M, catalogue: Catalogue) -> Result<Self> {
        catalogue.validate()?;
        let triggers = TriggerTable::derive(&morph, catalogue.actions())?;
        let patterns = PatternCompiler::new(&morph).compile(catalogue.actions())?;

        tracing::debug!(
            triggers = triggers.len(),
            patterns = patterns.len(),
            "intent engine ready"
        );
        Ok(Self {
            morph,
            catalogue,
            patterns,
            triggers,
        })
    }

    /// The compiled patterns, in match priority order.
    #[must_use]
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// The derived trigger words.
    #[must_use]
    pub fn triggers(&self) -> &TriggerTable {
        &self.triggers
    }

    /// The catalogue the engine was built from.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The morphology service.
    #[must_use]
    pub fn morphology(&self) -> &M {
        &self.morph
    }

    /// Matches an utterance. See [`PhraseMatcher::find`].
    #[must_use]
    pub fn match_phrase(&self, utterance: &str, trigger: Option<&str>) -> Option<&CompiledPattern> {
        PhraseMatcher::new(&self.morph, &self.patterns).find(utterance, trigger)
    }

    /// Registers every trigger with the host, bound to `handler`.
    ///
    /// # Errors
    ///
    /// Propagates the first registration the host rejects.
    pub fn register<H: Clone, R: CommandRegistrar<H> + ?Sized>(
        &self,
        handler: &H,
        registrar: &mut R,
    ) -> Result<()> {
        self.triggers.register_all(handler, registrar)
    }
}
