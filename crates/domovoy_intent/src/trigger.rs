//! Trigger word derivation.
//!
//! The catalogue spells actions as infinitives ("включить"), while users
//! address the assistant in the imperative ("включи"). The deriver converts
//! between the two so the host can register imperative triggers and the
//! matcher can map an incoming imperative back to catalogue spelling.

use domovoy_foundation::{Error, Result};
use domovoy_morphology::{Grammemes, Inflection, Morphology, PartOfSpeech, Parse};

/// Imperative, singular, perfective, speaker-excluded: "включи".
const TRIGGER_FORM: Inflection = Inflection::new(
    Grammemes::SING
        .union(Grammemes::IMPR)
        .union(Grammemes::PERF)
        .union(Grammemes::EXCL),
);

/// Perfective transitive infinitive: "включить".
const INFINITIVE_FORM: Inflection =
    Inflection::new(Grammemes::PERF.union(Grammemes::TRAN)).with_pos(PartOfSpeech::Infinitive);

/// Converts action words between infinitive and imperative.
pub struct TriggerDeriver<'m, M: Morphology + ?Sized> {
    morph: &'m M,
}

impl<'m, M: Morphology + ?Sized> TriggerDeriver<'m, M> {
    /// Creates a deriver over a morphology service.
    pub fn new(morph: &'m M) -> Self {
        Self { morph }
    }

    /// Derives the imperative trigger of an action word.
    ///
    /// # Errors
    ///
    /// Returns `NoVerbParse` if no reading of the word is a verb, or
    /// `NoInflection` if its lexeme has no such imperative.
    pub fn derive_trigger(&self, action: &str) -> Result<String> {
        self.inflect_verb(action, TRIGGER_FORM)
    }

    /// Recovers the infinitive of a verb form.
    ///
    /// # Errors
    ///
    /// Returns `NoVerbParse` if no reading of the word is a verb, or
    /// `NoInflection` if its lexeme has no perfective transitive infinitive.
    pub fn derive_infinitive(&self, word: &str) -> Result<String> {
        self.inflect_verb(word, INFINITIVE_FORM)
    }

    fn inflect_verb(&self, word: &str, target: Inflection) -> Result<String> {
        let parse = self.verb_parse(word)?;
        let inflected = self.morph.inflect(&parse, target).ok_or_else(|| {
            let pos = target.pos.map_or(String::new(), |p| format!("{p},"));
            Error::no_inflection(word, format!("{pos}{}", target.grammemes))
        })?;
        tracing::trace!(word, derived = %inflected.word, "derived verb form");
        Ok(inflected.word)
    }

    /// Returns the first verb or infinitive reading of `word`.
    fn verb_parse(&self, word: &str) -> Result<Parse> {
        self.morph
            .first_parse_where(word, &|p| p.tag.pos.is_verbal())
            .ok_or_else(|| Error::no_verb_parse(word))
    }
}
