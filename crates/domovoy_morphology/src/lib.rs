//! Dictionary-backed morphology for Russian.
//!
//! This crate provides:
//! - [`PartOfSpeech`], [`Grammemes`], and [`Tag`] - the OpenCorpora tag model
//! - [`Lexicon`] - lexeme storage with surface-form lookup
//! - [`parse_dictionary`] - loader for OpenCorpora-style dictionary text
//! - [`Morphology`] - the analysis capability (normalize, tag, inflect)
//! - [`MorphAnalyzer`] - the dictionary-backed implementation
//! - [`stdlib`] - a bundled home-automation lexicon

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod dictionary;
pub mod grammeme;
pub mod lexicon;
pub mod stdlib;
pub mod tag;

pub use analyzer::{Inflection, MorphAnalyzer, Morphology, Parse};
pub use dictionary::{load_dictionary, parse_dictionary};
pub use grammeme::{Category, Grammemes, PartOfSpeech};
pub use lexicon::{FormRef, Lexeme, Lexicon, WordForm};
pub use tag::Tag;
