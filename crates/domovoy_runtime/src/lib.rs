//! Assistant host, message bus adapter, REPL, and CLI for Domovoy.
//!
//! This crate provides:
//! - [`Assistant`] - Trigger dispatch, publishing, and spoken replies
//! - [`MessageBus`] and [`EnsureConnected`] - Bus abstraction with reconnect
//! - [`Speaker`] - Speech output
//! - [`AssistantConfig`] - JSON configuration
//! - [`Repl`] - Interactive command loop
//! - [`init_tracing`] - Diagnostic logging setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assistant;
pub mod bus;
pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod voice;

pub use assistant::{Assistant, CommandHandler, Outcome};
pub use bus::{ConsoleBus, EnsureConnected, MemoryBus, Message, MessageBus};
pub use config::{AssistantConfig, BrokerConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_tracing;
pub use repl::Repl;
pub use voice::{ConsoleSpeaker, RecordingSpeaker, Speaker};
