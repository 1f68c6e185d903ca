//! Dictionary text loading.
//!
//! Reads the plain-text layout of the OpenCorpora dictionary dump:
//!
//! ```text
//! 1
//! ЛАМПА	NOUN,inan,femn sing,nomn
//! ЛАМПЫ	NOUN,inan,femn sing,gent
//!
//! 2
//! ...
//! ```
//!
//! Each lexeme starts with a numeric id line followed by one
//! `form<TAB>tag` line per word form. Lexemes are separated by blank lines.
//! Lines starting with `#` are comments.

use std::fs;
use std::path::Path;

use domovoy_foundation::{Error, ErrorContext, Result};

use crate::lexicon::{Lexeme, Lexicon, WordForm};
use crate::tag::Tag;

/// Parses dictionary text into a lexicon.
///
/// # Errors
///
/// Returns an error naming the offending line if a lexeme id is missing or
/// not numeric, a form line has no tab-separated tag, or a tag is invalid.
pub fn parse_dictionary(text: &str) -> Result<Lexicon> {
    let mut lexicon = Lexicon::new();
    let mut current: Option<Lexeme> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();

        if line.trim_start().starts_with('#') {
            continue;
        }

        if line.trim().is_empty() {
            if let Some(lexeme) = current.take() {
                lexicon.add_lexeme(lexeme);
            }
            continue;
        }

        match current.as_mut() {
            None => {
                let id = line.trim().parse::<u32>().map_err(|_| {
                    Error::dictionary(line_no, format!("expected lexeme id, found '{line}'"))
                })?;
                current = Some(Lexeme {
                    id: Some(id),
                    forms: Vec::new(),
                });
            }
            Some(lexeme) => {
                let (text, tag) = line.split_once('\t').ok_or_else(|| {
                    Error::dictionary(line_no, format!("expected 'form<TAB>tag', found '{line}'"))
                })?;
                let text = text.trim();
                if text.is_empty() {
                    return Err(Error::dictionary(line_no, "empty word form"));
                }
                let tag: Tag = tag.parse().map_err(|e: Error| {
                    Error::dictionary(line_no, e.to_string())
                })?;
                lexeme.forms.push(WordForm::new(text, tag));
            }
        }
    }

    if let Some(lexeme) = current.take() {
        lexicon.add_lexeme(lexeme);
    }

    tracing::debug!(lexemes = lexicon.len(), "parsed dictionary");
    Ok(lexicon)
}

/// Loads a dictionary file into a lexicon.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        Error::io(format!("failed to read dictionary '{}': {e}", path.display()))
    })?;
    parse_dictionary(&text)
        .map_err(|e| e.with_context(ErrorContext::new().with_source(path.display().to_string())))
}
