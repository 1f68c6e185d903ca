//! Intent resolution for spoken smart-home commands.
//!
//! This crate turns an action catalogue into compiled patterns and resolves
//! utterances like "включи свет в спальне" to a bus topic, a payload, and a
//! confirmation sentence.
//!
//! # Architecture
//!
//! ```text
//! catalogue (JSON)
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN         │  → [включить лампа] -> cmnd/u_01/cmnd/Power = ON "включила лампу"
//! │ COMPILER        │
//! └─────────────────┘
//!          │                       ┌─────────────────┐
//!          │                       │ TRIGGER         │  → включить ↦ включи
//!          │                       │ DERIVER         │
//!          ▼                       └─────────────────┘
//! "включи лампы"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TOKENIZER       │  → ["включи", "лампы"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LEMMA SET       │  → {включить, лампа}
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PHRASE          │  → first pattern whose lemmas are all present
//! │ MATCHER         │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalogue`] - Action, item, and parameter definitions
//! - [`tokenizer`] - Utterance tokenization
//! - [`pattern`] - Compiled pattern representation
//! - [`confirmation`] - Past-tense confirmation sentences
//! - [`compiler`] - Catalogue expansion into patterns
//! - [`trigger`] - Imperative trigger derivation and its inverse
//! - [`matcher`] - Lemma-set matching
//! - [`registry`] - Trigger bindings handed to the host
//! - [`engine`] - Facade owning the compiled state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalogue;
pub mod compiler;
pub mod confirmation;
pub mod engine;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod tokenizer;
pub mod trigger;

pub use catalogue::{ActionDefinition, Catalogue, Item, Parameter};
pub use compiler::PatternCompiler;
pub use confirmation::ConfirmationBuilder;
pub use engine::IntentEngine;
pub use matcher::PhraseMatcher;
pub use pattern::CompiledPattern;
pub use registry::{CommandRegistrar, TriggerBinding, TriggerTable};
pub use tokenizer::UtteranceTokenizer;
pub use trigger::TriggerDeriver;
