//! markgen - streaming markup writer with break-ranked line wrapping
//!
//! Consumes structured markup events (character data, element start/end,
//! entity references) and re-serializes them as markup text. Line breaks
//! land at the cleanest available point - after sentence punctuation,
//! between attributes, around tag boundaries - rather than at an arbitrary
//! column, so the output diffs and edits well in line-oriented tooling.
//!
//! Three capability boundaries, no inheritance:
//! - the writer *implements* the event-sink surface ([`MarkupSink`]),
//! - it *consumes* a text sink ([`TextSink`]) for finished lines,
//! - and optionally notifies a style collaborator ([`StyleSink`]) on
//!   flushed element boundaries.
//!
//! Identifiers in events are resolved against a read-only [`Dictionary`];
//! [`Dictionary::html`] ships a classic HTML vocabulary.
//!
//! ```
//! use markgen::{Config, Dictionary, MarkupWriter, VecSink};
//!
//! let dict = Dictionary::html();
//! let mut w = MarkupWriter::new(&dict, VecSink::new(), Config::default());
//! let p = dict.tag_named("P").unwrap();
//! w.start_element(p, &[]);
//! w.put_str("hello");
//! w.end_element(p);
//! let sink = w.finalize();
//! assert_eq!(sink.as_bytes(), b"<P>hello</P>\n");
//! ```
//!
//! For arbitrary plain text, [`PlainToMarkup`] wraps the same machinery in
//! a minimal preformatted shell.

pub mod dict;
pub mod sink;
pub mod writer;

pub use dict::{ContentModel, Dictionary, EntityId, TagDef, TagId};
pub use sink::{IoSink, StyleOp, StyleSink, TextSink, VecSink};
pub use writer::events::MarkupEvent;
pub use writer::{
    Config, MarkupSink, MarkupWriter, PlainToMarkup, DEFAULT_WIDTH, EN_SPACE,
    MIN_WIDTH, NO_BREAK_SPACE, SOFT_HYPHEN,
};
