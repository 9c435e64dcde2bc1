//! The sink side of the encoder.
//!
//! The encoder hands each finished event to a [`Transport`] as one complete
//! JSON document. Any framing between documents (newlines, message-broker
//! records, length prefixes) is the transport's concern, never the
//! encoder's.

use std::io::Write;

use crate::Result;

/// Receives finished event documents, one call per event.
pub trait Transport {
    fn write(&mut self, payload: &str) -> Result<()>;
}

/// Collects events in memory. Useful for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    events: Vec<String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.events)
    }
}

impl Transport for MemoryTransport {
    fn write(&mut self, payload: &str) -> Result<()> {
        self.events.push(payload.to_string());
        Ok(())
    }
}

/// Writes one JSON document per line to any writer, e.g. a file used as an
/// audit log. The newline is this transport's own framing choice.
#[derive(Debug)]
pub struct JsonLinesTransport<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesTransport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Transport for JsonLinesTransport<W> {
    fn write(&mut self, payload: &str) -> Result<()> {
        self.writer.write_all(payload.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
