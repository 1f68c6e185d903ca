//! Grammatical tags.

use std::fmt;
use std::str::FromStr;

use domovoy_foundation::{Error, Result};

use crate::grammeme::{Category, Grammemes, PartOfSpeech};

/// The grammatical tag of a word form: part of speech plus grammemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Part of speech
    pub pos: PartOfSpeech,
    /// Grammemes (lexeme-level and form-level together)
    pub grammemes: Grammemes,
}

impl Tag {
    /// Creates a tag.
    #[must_use]
    pub const fn new(pos: PartOfSpeech, grammemes: Grammemes) -> Self {
        Self { pos, grammemes }
    }

    /// Returns true if every grammeme in `required` is present.
    #[must_use]
    pub fn contains(&self, required: Grammemes) -> bool {
        self.grammemes.contains(required)
    }

    /// Returns the grammeme of `category`, if any.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<Grammemes> {
        let g = self.grammemes.in_category(category);
        (!g.is_empty()).then_some(g)
    }

    /// Returns a copy of this tag with its case replaced.
    #[must_use]
    pub fn with_case(&self, case: Grammemes) -> Self {
        Self {
            pos: self.pos,
            grammemes: self.grammemes.replace(case),
        }
    }

    /// Returns the agreement features of a noun tag: gender, number, and case.
    ///
    /// Plural forms carry no gender in agreement, so gender is dropped for
    /// them.
    #[must_use]
    pub fn agreement(&self) -> Grammemes {
        let number = self.grammemes.in_category(Category::Number);
        let case = self.grammemes.in_category(Category::Case);
        let gender = if number.contains(Grammemes::PLUR) {
            Grammemes::empty()
        } else {
            self.grammemes.in_category(Category::Gender) - Grammemes::MS_F
        };
        gender | number | case
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grammemes.is_empty() {
            write!(f, "{}", self.pos)
        } else {
            write!(f, "{},{}", self.pos, self.grammemes)
        }
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parses OpenCorpora notation, e.g. `NOUN,inan,femn sing,nomn`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (pos, rest) = match s.find([',', ' ']) {
            Some(idx) => (&s[..idx], &s[idx + 1..]),
            None => (s, ""),
        };
        if pos.is_empty() {
            return Err(Error::invalid_tag(s, "missing part of speech"));
        }
        let pos: PartOfSpeech = pos
            .parse()
            .map_err(|_| Error::invalid_tag(s, format!("unknown part of speech '{pos}'")))?;
        let grammemes = Grammemes::parse_list(rest)?;
        Ok(Self { pos, grammemes })
    }
}
