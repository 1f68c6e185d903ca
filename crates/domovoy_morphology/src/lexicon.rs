//! Lexicon storage.
//!
//! A lexicon is a list of lexemes, each an ordered list of word forms whose
//! first entry is the normal form (lemma). Surface forms are indexed for
//! case-insensitive lookup with `ё` folded to `е`.

use std::collections::HashMap;

use crate::tag::Tag;

/// One inflected form of a lexeme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordForm {
    /// Surface text, lowercase
    pub text: String,
    /// Grammatical tag of this form
    pub tag: Tag,
}

impl WordForm {
    /// Creates a word form, lowercasing the text.
    #[must_use]
    pub fn new(text: &str, tag: Tag) -> Self {
        Self {
            text: text.to_lowercase(),
            tag,
        }
    }
}

/// A lexeme: all forms of one dictionary word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    /// Identifier from the source dictionary, if any
    pub id: Option<u32>,
    /// Word forms; the first is the normal form
    pub forms: Vec<WordForm>,
}

impl Lexeme {
    /// Returns the normal form (lemma) of this lexeme.
    #[must_use]
    pub fn normal_form(&self) -> &str {
        self.forms.first().map_or("", |f| f.text.as_str())
    }
}

/// Position of a word form inside a [`Lexicon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormRef {
    /// Index of the lexeme
    pub lexeme: usize,
    /// Index of the form within the lexeme
    pub form: usize,
}

/// Runtime storage for dictionary lexemes.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    lexemes: Vec<Lexeme>,
    /// Folded surface form -> forms, in insertion order
    index: HashMap<String, Vec<FormRef>>,
}

/// Folds a word into its index key.
#[must_use]
pub fn fold(word: &str) -> String {
    word.trim().to_lowercase().replace('ё', "е")
}

impl Lexicon {
    /// Creates a new empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lexeme and indexes its forms. Empty lexemes are ignored.
    pub fn add_lexeme(&mut self, lexeme: Lexeme) {
        if lexeme.forms.is_empty() {
            return;
        }
        let id = self.lexemes.len();
        for (form_idx, form) in lexeme.forms.iter().enumerate() {
            let refs = self.index.entry(fold(&form.text)).or_default();
            let form_ref = FormRef {
                lexeme: id,
                form: form_idx,
            };
            if !refs.contains(&form_ref) {
                refs.push(form_ref);
            }
        }
        self.lexemes.push(lexeme);
    }

    /// Appends every lexeme of `other`, ranked after the existing ones.
    pub fn extend(&mut self, other: Lexicon) {
        for lexeme in other.lexemes {
            self.add_lexeme(lexeme);
        }
    }

    /// Looks up all forms with the given surface text, in rank order.
    #[must_use]
    pub fn lookup(&self, word: &str) -> &[FormRef] {
        self.index.get(&fold(word)).map_or(&[], Vec::as_slice)
    }

    /// Returns the lexeme at `index`.
    #[must_use]
    pub fn lexeme(&self, index: usize) -> Option<&Lexeme> {
        self.lexemes.get(index)
    }

    /// Returns the form referenced by `form_ref`.
    #[must_use]
    pub fn form(&self, form_ref: FormRef) -> Option<&WordForm> {
        self.lexemes
            .get(form_ref.lexeme)
            .and_then(|l| l.forms.get(form_ref.form))
    }

    /// Number of lexemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Returns true if the lexicon holds no lexemes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}
