//! Confirmation sentence generation.
//!
//! The assistant confirms every command in the past tense as a female
//! narrator: "включи лампу" is answered with "включила лампу". Each word is
//! inflected independently; a word that cannot be inflected contributes
//! nothing, and the sentence is built from whatever remains.

use domovoy_morphology::{Grammemes, Inflection, Morphology, PartOfSpeech, Parse};

use crate::catalogue::{Item, Parameter};

/// Features of the narrator's past-tense verb.
const NARRATOR_PAST: Grammemes = Grammemes::FEMN
    .union(Grammemes::PAST)
    .union(Grammemes::INDC);

/// Builds confirmation sentences for compiled patterns.
pub struct ConfirmationBuilder<'m, M: Morphology + ?Sized> {
    morph: &'m M,
}

impl<'m, M: Morphology + ?Sized> ConfirmationBuilder<'m, M> {
    /// Creates a builder over a morphology service.
    pub fn new(morph: &'m M) -> Self {
        Self { morph }
    }

    /// Builds the sentence for one (action, item, parameter) combination.
    #[must_use]
    pub fn sentence(&self, command: &str, item: &Item, parameter: &Parameter) -> String {
        let mut parts = vec![
            self.action_past(command),
            self.item_accusative(&item.word),
            item.addition.as_ref().map(|a| a.trim().to_string()),
        ];
        if let Some(word) = parameter.word() {
            parts.push(self.parameter_agreement(word, &item.word));
        }

        parts
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Inflects the action to the narrator's past tense ("включила").
    #[must_use]
    pub fn action_past(&self, command: &str) -> Option<String> {
        let inflected = self
            .morph
            .first_parse_where(command, &|p| p.tag.pos.is_verbal())
            .and_then(|p| self.morph.inflect(&p, Inflection::new(NARRATOR_PAST)));
        report(command, "past tense", inflected)
    }

    /// Inflects the item noun to the accusative ("лампу").
    ///
    /// When the primary parse has no accusative form, other noun parses of
    /// the same surface form (a different animacy or gender reading) are
    /// tried in rank order.
    #[must_use]
    pub fn item_accusative(&self, word: &str) -> Option<String> {
        let accs = Inflection::new(Grammemes::ACCS);
        let parses = self.morph.parse(word);
        let inflected = parses.split_first().and_then(|(primary, rest)| {
            self.morph.inflect(primary, accs).or_else(|| {
                rest.iter()
                    .filter(|p| p.tag.pos == PartOfSpeech::Noun && is_variant_of(p, primary))
                    .find_map(|p| self.morph.inflect(p, accs))
            })
        });
        report(word, "accusative", inflected)
    }

    /// Inflects a parameter adjective to agree with the item noun in the
    /// instrumental case ("лампу красной", "свет красным").
    #[must_use]
    pub fn parameter_agreement(&self, word: &str, item_word: &str) -> Option<String> {
        let inflected = self.morph.tag(item_word).and_then(|item_tag| {
            let target = item_tag.with_case(Grammemes::ABLT).agreement();
            self.morph
                .first_parse_where(word, &|p| {
                    matches!(
                        p.tag.pos,
                        PartOfSpeech::AdjectiveFull | PartOfSpeech::ParticipleFull
                    )
                })
                .and_then(|p| self.morph.inflect(&p, Inflection::new(target)))
        });
        report(word, "instrumental agreement", inflected)
    }
}

fn report(word: &str, form: &str, inflected: Option<Parse>) -> Option<String> {
    if inflected.is_none() {
        tracing::warn!(word, form, "no confirmation form; word left out of the answer");
    }
    inflected.map(|p| p.word)
}

/// True if `candidate` reads the same surface form with a different animacy
/// or gender than `primary`.
fn is_variant_of(candidate: &Parse, primary: &Parse) -> bool {
    use domovoy_morphology::Category;

    candidate.tag.get(Category::Animacy) != primary.tag.get(Category::Animacy)
        || candidate.tag.get(Category::Gender) != primary.tag.get(Category::Gender)
}
