//! Integration tests for Layer 2: Intent
//!
//! Tests for catalogue parsing, pattern compilation, trigger derivation,
//! matching, and the engine facade.

mod compilation_tests;
mod matching_tests;
mod property_tests;
mod trigger_tests;
