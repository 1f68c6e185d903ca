//! Message bus abstraction.
//!
//! The assistant publishes matched commands through a [`MessageBus`]. A
//! client may drop its broker connection between commands, so
//! [`EnsureConnected`] wraps any bus and reconnects before each publish
//! when the client reports it is disconnected.

use std::io::{self, Write};

use domovoy_foundation::{Error, Result};

use crate::config::BrokerConfig;

/// A publish/subscribe client.
pub trait MessageBus {
    /// Returns true if the client currently holds a broker connection.
    fn is_connected(&self) -> bool;

    /// Opens a broker connection.
    ///
    /// # Errors
    ///
    /// Returns a `BusError` if the broker cannot be reached.
    fn connect(&mut self) -> Result<()>;

    /// Publishes a payload to a topic.
    ///
    /// # Errors
    ///
    /// Returns a `BusError` if the message could not be sent.
    fn publish(&mut self, topic: &str, payload: &str) -> Result<()>;
}

/// Connect-before-publish middleware.
#[derive(Clone, Debug, Default)]
pub struct EnsureConnected<B> {
    inner: B,
}

impl<B: MessageBus> EnsureConnected<B> {
    /// Wraps a bus.
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    /// Returns the wrapped bus.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Returns the wrapped bus mutably.
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    /// Unwraps the middleware.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: MessageBus> MessageBus for EnsureConnected<B> {
    fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }

    fn connect(&mut self) -> Result<()> {
        self.inner.connect()
    }

    fn publish(&mut self, topic: &str, payload: &str) -> Result<()> {
        if !self.inner.is_connected() {
            tracing::debug!(topic, "bus disconnected; reconnecting before publish");
            self.inner.connect()?;
        }
        self.inner.publish(topic, payload)
    }
}

/// A published message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Topic the payload went to
    pub topic: String,
    /// Payload text
    pub payload: String,
}

/// In-memory bus that records what it publishes.
#[derive(Clone, Debug, Default)]
pub struct MemoryBus {
    connected: bool,
    refuse_connections: bool,
    connects: usize,
    messages: Vec<Message>,
}

impl MemoryBus {
    /// Creates a disconnected bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bus whose broker is unreachable.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            refuse_connections: true,
            ..Self::default()
        }
    }

    /// Drops the connection, as a broker timeout would.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Messages published so far.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of successful connects.
    #[must_use]
    pub fn connect_count(&self) -> usize {
        self.connects
    }
}

impl MessageBus for MemoryBus {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> Result<()> {
        if self.refuse_connections {
            return Err(Error::bus("connection refused"));
        }
        self.connected = true;
        self.connects += 1;
        Ok(())
    }

    fn publish(&mut self, topic: &str, payload: &str) -> Result<()> {
        if !self.connected {
            return Err(Error::bus(format!("not connected; cannot publish to '{topic}'")));
        }
        self.messages.push(Message {
            topic: topic.to_string(),
            payload: payload.to_string(),
        });
        Ok(())
    }
}

/// Dry-run bus that prints messages instead of sending them.
pub struct ConsoleBus<W: Write = io::Stdout> {
    out: W,
    endpoint: String,
    client_id: String,
    connected: bool,
}

impl ConsoleBus<io::Stdout> {
    /// Creates a bus printing to stdout.
    #[must_use]
    pub fn stdout(broker: &BrokerConfig) -> Self {
        Self::new(io::stdout(), broker)
    }
}

impl<W: Write> ConsoleBus<W> {
    /// Creates a bus printing to `out`.
    pub fn new(out: W, broker: &BrokerConfig) -> Self {
        Self {
            out,
            endpoint: broker.endpoint(),
            client_id: broker.client_id.clone(),
            connected: false,
        }
    }

    /// Returns the writer.
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> MessageBus for ConsoleBus<W> {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> Result<()> {
        tracing::info!(endpoint = %self.endpoint, client_id = %self.client_id, "dry-run connect");
        self.connected = true;
        Ok(())
    }

    fn publish(&mut self, topic: &str, payload: &str) -> Result<()> {
        if !self.connected {
            return Err(Error::bus(format!("not connected to {}", self.endpoint)));
        }
        writeln!(self.out, "\x1b[2m[{topic}] {payload}\x1b[0m")
            .map_err(|e| Error::bus(e.to_string()))
    }
}
