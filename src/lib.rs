//! Domovoy - Spoken smart-home command resolver
//!
//! This crate re-exports all layers of the Domovoy system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: domovoy_runtime    — Assistant host, message bus, REPL, CLI
//! Layer 2: domovoy_intent     — Catalogue compilation, triggers, matching
//! Layer 1: domovoy_morphology — Russian tags, lexicon, inflection
//! Layer 0: domovoy_foundation — Core types (Error, Result)
//! ```

pub use domovoy_foundation as foundation;
pub use domovoy_intent as intent;
pub use domovoy_morphology as morphology;
pub use domovoy_runtime as runtime;
