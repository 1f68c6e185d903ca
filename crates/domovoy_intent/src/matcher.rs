//! Utterance matching.
//!
//! A pattern matches when the lemma of each of its words equals the lemma of
//! some utterance token. Position, adjacency, and extra tokens play no part:
//! "включи лампу в спальне" and "в спальне лампу включи" are the same lemma
//! bag and match the same pattern. The first match in declaration order
//! wins.

use std::collections::{HashMap, HashSet};

use domovoy_morphology::Morphology;

use crate::pattern::CompiledPattern;
use crate::tokenizer::UtteranceTokenizer;
use crate::trigger::TriggerDeriver;

/// Matches utterances against compiled patterns.
pub struct PhraseMatcher<'a, M: Morphology + ?Sized> {
    morph: &'a M,
    patterns: &'a [CompiledPattern],
}

impl<'a, M: Morphology + ?Sized> PhraseMatcher<'a, M> {
    /// Creates a matcher over compiled patterns.
    pub fn new(morph: &'a M, patterns: &'a [CompiledPattern]) -> Self {
        Self { morph, patterns }
    }

    /// Finds the first pattern whose required lemmas all occur in the
    /// utterance.
    ///
    /// `trigger` is the word the host dispatched on; it is prepended to the
    /// utterance. The first token must be a verb form: it is replaced by its
    /// infinitive, and a first token with no verb reading matches nothing.
    #[must_use]
    pub fn find(&self, utterance: &str, trigger: Option<&str>) -> Option<&'a CompiledPattern> {
        let text = match trigger {
            Some(trigger) => format!("{trigger} {utterance}"),
            None => utterance.to_string(),
        };
        let mut tokens = UtteranceTokenizer::tokenize(&text);
        let first = tokens.first_mut()?;

        match TriggerDeriver::new(self.morph).derive_infinitive(first) {
            Ok(infinitive) => *first = infinitive,
            Err(e) => {
                tracing::debug!(token = %first, error = %e, "utterance does not start with a command verb");
                return None;
            }
        }

        let lemmas = self.lemmas(&tokens);
        let found = self.patterns.iter().find(|pattern| {
            let hit = pattern.lemmas.iter().all(|l| lemmas.contains(l.as_str()));
            tracing::trace!(words = ?pattern.words, hit, "checked pattern");
            hit
        });

        match found {
            Some(pattern) => tracing::debug!(words = ?pattern.words, topic = %pattern.topic, "matched"),
            None => tracing::debug!(?tokens, "no pattern matched"),
        }
        found
    }

    /// Normalizes each distinct token once.
    fn lemmas(&self, tokens: &[String]) -> HashSet<String> {
        let mut memo: HashMap<&str, String> = HashMap::new();
        for token in tokens {
            memo.entry(token.as_str())
                .or_insert_with(|| self.morph.normalize(token));
        }
        memo.into_values().collect()
    }
}
