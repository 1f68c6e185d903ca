//! Core error types for Domovoy.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with context
//! - [`ErrorKind`] - Categorized error kinds
//! - [`Result`] - Crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using the Domovoy [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
