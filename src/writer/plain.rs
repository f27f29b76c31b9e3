//! Plain-text-to-markup conversion
//!
//! Wraps the writer so that arbitrary plain text comes out as minimal,
//! well-formed markup: a structural shell is synthesized up front, the
//! stream stays permanently in preformatted mode, and teardown closes the
//! shell before finalizing. Only the text entry points are exposed; this
//! mode has no structure of its own to serialize.

use super::{Config, MarkupWriter};
use crate::dict::{Dictionary, TagId};
use crate::sink::TextSink;

/// Converts a plain text stream into markup wrapped in a minimal structural
/// shell.
pub struct PlainToMarkup<'d, S: TextSink> {
    inner: MarkupWriter<'d, S>,
    pre: TagId,
}

impl<'d, S: TextSink> PlainToMarkup<'d, S> {
    /// Open the shell: the document and body elements when the vocabulary
    /// defines them, then the designated preformatted element, each on its
    /// own line. Special-space escaping is always off in this mode; the
    /// text passes through verbatim.
    ///
    /// Panics when the dictionary designates no preformatted element;
    /// this conversion has nowhere to put the text without one.
    pub fn new(dict: &'d Dictionary, sink: S, config: Config) -> Self {
        let pre = dict
            .preformatted_tag()
            .expect("dictionary designates no preformatted element");
        let mut inner = MarkupWriter::new(
            dict,
            sink,
            Config {
                escape_specials: false,
                ..config
            },
        );
        for name in ["HTML", "BODY"] {
            if let Some(tag) = dict.tag_named(name) {
                inner.start_element(tag, &[]);
                inner.put_char(b'\n');
            }
        }
        inner.start_element(pre, &[]);
        inner.put_char(b'\n');
        PlainToMarkup { inner, pre }
    }

    pub fn put_char(&mut self, c: u8) {
        self.inner.put_char(c);
    }

    pub fn put_str(&mut self, s: &str) {
        self.inner.put_str(s);
    }

    pub fn put_block(&mut self, block: &[u8]) {
        self.inner.put_block(block);
    }

    /// Close the preformatted shell and finalize the underlying writer.
    pub fn finalize(self) -> S {
        let PlainToMarkup { mut inner, pre } = self;
        inner.end_element(pre);
        inner.finalize()
    }

    /// Abnormal termination: same close-and-flush as [`finalize`](Self::finalize).
    pub fn abort(self, reason: &str) -> S {
        log::debug!("plain-to-markup conversion aborted: {reason}");
        self.finalize()
    }
}
