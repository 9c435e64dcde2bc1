use std::fmt;
use std::ops::{Deref, DerefMut};

/// Capacity retained across events. A single oversized row may grow the
/// buffer past this; the excess is released when its scope ends.
const RETAINED_CAPACITY: usize = 64 * 1024;

/// The per-event scratch buffer. One event's JSON text is built here in
/// full before it is handed to the transport, and the buffer is reclaimed
/// before the next event begins.
#[derive(Debug)]
pub(crate) struct Scratch {
    buf: String,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    /// Opens a scratch scope for one event. Reclaim runs when the scope
    /// drops, on every exit path.
    pub fn scope(&mut self) -> ScratchScope<'_> {
        debug_assert!(self.buf.is_empty());
        ScratchScope { scratch: self }
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

pub(crate) struct ScratchScope<'a> {
    scratch: &'a mut Scratch,
}

impl Deref for ScratchScope<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.scratch.buf
    }
}

impl DerefMut for ScratchScope<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.scratch.buf
    }
}

impl fmt::Write for ScratchScope<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.scratch.buf.push_str(s);
        Ok(())
    }
}

impl Drop for ScratchScope<'_> {
    fn drop(&mut self) {
        self.scratch.buf.clear();
        if self.scratch.buf.capacity() > RETAINED_CAPACITY {
            self.scratch.buf.shrink_to(RETAINED_CAPACITY);
        }
    }
}
