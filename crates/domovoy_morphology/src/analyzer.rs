//! Morphological analysis.
//!
//! The [`Morphology`] trait is the seam between the intent engine and
//! whatever analyzer backs it. [`MorphAnalyzer`] is the dictionary-backed
//! implementation used by default.

use domovoy_foundation::Result;

use crate::grammeme::{Grammemes, PartOfSpeech};
use crate::lexicon::{FormRef, Lexicon, fold};
use crate::tag::Tag;

/// One possible analysis of a surface word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parse {
    /// The word form this parse describes, lowercase
    pub word: String,
    /// Grammatical tag of the form
    pub tag: Tag,
    /// Normal form (lemma) of the lexeme
    pub normal_form: String,
    /// Analyzer-specific handle to the form, used for inflection
    pub form: FormRef,
}

/// Grammatical features requested from [`Morphology::inflect`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inflection {
    /// Required part of speech, if any (e.g. `INFN` inside a verb lexeme)
    pub pos: Option<PartOfSpeech>,
    /// Grammemes the resulting form must carry
    pub grammemes: Grammemes,
}

impl Inflection {
    /// Requests the given grammemes.
    #[must_use]
    pub const fn new(grammemes: Grammemes) -> Self {
        Self {
            pos: None,
            grammemes,
        }
    }

    /// Additionally requires a part of speech.
    #[must_use]
    pub const fn with_pos(mut self, pos: PartOfSpeech) -> Self {
        self.pos = Some(pos);
        self
    }
}

/// Morphological analysis capability.
pub trait Morphology {
    /// Returns every parse of `word`, most likely first.
    ///
    /// Unknown words produce an empty list.
    fn parse(&self, word: &str) -> Vec<Parse>;

    /// Returns the form of `parse`'s lexeme carrying the requested features,
    /// or `None` when the lexeme has no such form.
    fn inflect(&self, parse: &Parse, target: Inflection) -> Option<Parse>;

    /// Returns the lemma of the most likely parse.
    ///
    /// Unknown words normalize to their lowercased surface form with `ё`
    /// folded to `е`, the same key the lexicon looks words up by.
    fn normalize(&self, word: &str) -> String {
        self.parse(word)
            .into_iter()
            .next()
            .map_or_else(|| fold(word), |p| p.normal_form)
    }

    /// Returns the tag of the most likely parse.
    fn tag(&self, word: &str) -> Option<Tag> {
        self.parse(word).into_iter().next().map(|p| p.tag)
    }

    /// Returns the highest-ranked parse satisfying `predicate`.
    ///
    /// The primary parse is tried first, then the remaining candidates in
    /// rank order; `None` when no parse fits.
    fn first_parse_where(&self, word: &str, predicate: &dyn Fn(&Parse) -> bool) -> Option<Parse> {
        self.parse(word).into_iter().find(|p| predicate(p))
    }
}

/// Dictionary-backed analyzer.
#[derive(Clone, Debug, Default)]
pub struct MorphAnalyzer {
    lexicon: Lexicon,
}

impl MorphAnalyzer {
    /// Creates an analyzer over the given lexicon.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Creates an analyzer over the bundled standard lexicon.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled dictionary fails to parse.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(crate::stdlib::standard_lexicon()?))
    }

    /// Returns the underlying lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Adds lexemes ranked after the existing ones.
    pub fn extend(&mut self, lexicon: Lexicon) {
        self.lexicon.extend(lexicon);
    }

    fn make_parse(&self, form_ref: FormRef) -> Option<Parse> {
        let lexeme = self.lexicon.lexeme(form_ref.lexeme)?;
        let form = lexeme.forms.get(form_ref.form)?;
        Some(Parse {
            word: form.text.clone(),
            tag: form.tag,
            normal_form: lexeme.normal_form().to_string(),
            form: form_ref,
        })
    }
}

impl Morphology for MorphAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        self.lexicon
            .lookup(word)
            .iter()
            .filter_map(|r| self.make_parse(*r))
            .collect()
    }

    fn inflect(&self, parse: &Parse, target: Inflection) -> Option<Parse> {
        let lexeme = self.lexicon.lexeme(parse.form.lexeme)?;
        let current = parse.tag.grammemes;

        // Among forms carrying every requested feature, prefer the one that
        // keeps the most of the current form's grammemes; ties go to the
        // earliest form.
        let (form_idx, _) = lexeme
            .forms
            .iter()
            .enumerate()
            .filter(|(_, f)| target.pos.is_none_or(|pos| f.tag.pos == pos))
            .filter(|(_, f)| f.tag.contains(target.grammemes))
            .map(|(idx, f)| (idx, (f.tag.grammemes & current).bits().count_ones()))
            .fold(None, |best: Option<(usize, u32)>, (idx, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((idx, score)),
            })?;

        self.make_parse(FormRef {
            lexeme: parse.form.lexeme,
            form: form_idx,
        })
    }
}
