//! Integration tests for Layer 0: Foundation
//!
//! Tests for the shared error type and its context.

mod errors;
