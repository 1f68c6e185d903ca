//! Integration tests for Layer 1: Morphology
//!
//! Tests for the tag model, dictionary loading, and the bundled analyzer.

mod analysis;
mod dictionary;
