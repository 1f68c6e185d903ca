//! Integration tests for Layer 3: Runtime
//!
//! Tests for configuration loading and the assistant's dispatch loop.

mod assistant_tests;
mod config_tests;
