//! Output capability interfaces
//!
//! The writer talks to the world through two narrow interfaces: a text sink
//! that accepts finished blocks of bytes, and an optional style sink that is
//! notified of element-boundary style changes. Both are infallible by
//! contract; an adapter that can fail owns its own error handling.

use crate::dict::TagId;
use std::io;

/// Downstream consumer of serialized markup text.
///
/// Blocks arrive whenever a line (or a partial buffer at teardown) is
/// complete. `accept_char` is used once per stream, for the trailing newline.
pub trait TextSink {
    /// Accept a finished block of output bytes, usually one line.
    fn accept_block(&mut self, block: &[u8]);

    /// Accept a single byte.
    fn accept_char(&mut self, c: u8);

    /// The stream is complete; release downstream resources.
    fn close(&mut self) {}
}

/// Direction of a style change at an element boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOp {
    /// The element's style scope opens.
    Push,
    /// The element's style scope closes.
    Pop,
}

/// Optional collaborator that styles spans of emitted text.
///
/// The writer force-flushes buffered text before every call, so the
/// collaborator only ever sees style changes on flushed byte boundaries.
pub trait StyleSink {
    /// Open or close the style scope identified by `code`.
    fn apply_style(&mut self, code: TagId, op: StyleOp);

    /// The styling scope for `code` is finished and can be discarded.
    fn remove_style(&mut self, code: TagId);
}

/// In-memory sink collecting all output bytes. Primarily for tests and for
/// callers that want the whole serialization as one buffer.
#[derive(Debug, Default)]
pub struct VecSink {
    data: Vec<u8>,
    closed: bool,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bytes accepted so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Whether `close` has been observed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Consume the sink, returning the collected bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl TextSink for VecSink {
    fn accept_block(&mut self, block: &[u8]) {
        self.data.extend_from_slice(block);
    }

    fn accept_char(&mut self, c: u8) {
        self.data.push(c);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Adapter from [`TextSink`] to any [`io::Write`].
///
/// Write failures cannot travel back through the sink interface; the first
/// error is logged, latched, and all further output is dropped. Callers that
/// care can inspect [`IoSink::take_error`] after teardown.
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// The first write error observed, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consume the adapter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.inner.write_all(bytes) {
            log::warn!("output sink write failed, dropping further output: {e}");
            self.error = Some(e);
        }
    }
}

impl<W: io::Write> TextSink for IoSink<W> {
    fn accept_block(&mut self, block: &[u8]) {
        self.write(block);
    }

    fn accept_char(&mut self, c: u8) {
        self.write(&[c]);
    }

    fn close(&mut self) {
        if self.error.is_none() {
            if let Err(e) = self.inner.flush() {
                log::warn!("output sink flush failed: {e}");
                self.error = Some(e);
            }
        }
    }
}
