//! Markup serialization
//!
//! [`MarkupWriter`] consumes structured markup events and re-serializes them
//! as markup text, delegating line selection to the break-ranked line
//! buffer. Keeping line ends synchronized with sentence and
//! phrase ends means a small edit to the source of the markup does not
//! ripple line breaks through the rest of the file, and the output stays
//! readable by hand.

mod buffer;
mod escape;
pub mod events;
mod plain;

pub use escape::{EN_SPACE, NO_BREAK_SPACE, SOFT_HYPHEN};
pub use plain::PlainToMarkup;

use crate::dict::{ContentModel, Dictionary, EntityId, TagId};
use crate::sink::{StyleOp, StyleSink, TextSink};
use buffer::{LineBuffer, BUFFER_SIZE};
use escape::QuoteStyle;
use events::MarkupEvent;

/// Narrowest wrap column the writer will accept.
pub const MIN_WIDTH: usize = 40;

/// Wrap column used by [`Config::default`].
pub const DEFAULT_WIDTH: usize = 80;

// Cleanness ranks, highest preferred when a wrap is forced. A gap in
// running text always beats a gap inside markup, and a gap after sentence
// punctuation beats a plain word gap.
const BEFORE_CLOSE_MIXED: usize = 1;
const AFTER_OPEN_MIXED: usize = 2;
const WORD_GAP: usize = 3;
const PUNCT_GAP: usize = 6; // + offset of the delimiter in DELIMS
const TEXT_GAP_BONUS: usize = 10;
const ATTR_GAP: usize = 11;
const AFTER_ATTRS: usize = 12;
const BEFORE_CLOSE_ELEMENT: usize = 14;
const AFTER_OPEN_ELEMENT: usize = 15;

/// Word gaps directly after these read as clause or sentence ends; later
/// entries rank higher.
const DELIMS: &[u8] = b",;:.";

/// Writer configuration.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Target wrap column. Clamped to `[MIN_WIDTH, capacity)` at
    /// construction.
    pub width: usize,
    /// Render the in-band special-space control bytes as numeric character
    /// references instead of passing them through raw.
    pub escape_specials: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            escape_specials: false,
        }
    }
}

/// The event-consumer capability of the writer: everything a markup event
/// producer needs to drive serialization.
pub trait MarkupSink {
    fn put_char(&mut self, c: u8);
    fn put_str(&mut self, s: &str);
    fn put_block(&mut self, block: &[u8]);
    fn start_element(&mut self, tag: TagId, attrs: &[(usize, Option<&str>)]);
    fn end_element(&mut self, tag: TagId);
    fn put_entity(&mut self, entity: EntityId);
}

/// Streaming markup writer with break-ranked line wrapping.
///
/// One instance serves one conversion: create it with a vocabulary and a
/// sink, drive it with events, then call [`finalize`](Self::finalize) or
/// [`abort`](Self::abort). Both consume the writer, flush pending output,
/// and hand the sink back, so use after teardown cannot compile.
pub struct MarkupWriter<'d, S: TextSink> {
    dict: &'d Dictionary,
    sink: S,
    line: LineBuffer,
    preformatted: bool,
    in_attrval: bool,
    escape_specials: bool,
    style: Option<Box<dyn StyleSink>>,
}

impl<'d, S: TextSink> MarkupWriter<'d, S> {
    pub fn new(dict: &'d Dictionary, sink: S, config: Config) -> Self {
        let width = config.width.clamp(MIN_WIDTH, BUFFER_SIZE - 2);
        log::debug!(
            "markup writer: width={} escape_specials={}",
            width,
            config.escape_specials
        );
        MarkupWriter {
            dict,
            sink,
            line: LineBuffer::new(width),
            preformatted: false,
            in_attrval: false,
            escape_specials: config.escape_specials,
            style: None,
        }
    }

    /// Bind the style collaborator. Binding is lazy by design: a conversion
    /// may start unstyled and gain a style target once a live text surface
    /// exists.
    pub fn set_style_sink(&mut self, style: Box<dyn StyleSink>) {
        self.style = Some(style);
    }

    /// Emit one byte of character data, applying the escaping policy.
    pub fn put_char(&mut self, c: u8) {
        if self.escape_specials && c < 0x20 {
            if let Some(reference) = escape::special_space_ref(c) {
                for &b in reference {
                    self.raw_char(b);
                }
                return;
            }
        }
        self.raw_char(c);
    }

    /// Emit a run of character data.
    pub fn put_str(&mut self, s: &str) {
        for c in s.bytes() {
            self.put_char(c);
        }
    }

    /// Emit an opaque block of character data bytes.
    pub fn put_block(&mut self, block: &[u8]) {
        for &c in block {
            self.put_char(c);
        }
    }

    /// Serialize an element start tag with its attributes.
    ///
    /// `attrs` pairs an index into the tag's attribute table with an
    /// optional value; a valueless entry emits the bare attribute name.
    pub fn start_element(&mut self, tag: TagId, attrs: &[(usize, Option<&str>)]) {
        let def = self.dict.tag(tag);
        let was_preformatted = self.preformatted;

        self.style_push(tag);

        // Spaces inside tag syntax are not ordinary word gaps.
        self.preformatted = true;
        self.put_char(b'<');
        self.put_str(def.name());
        let mut had_attr = false;
        for &(index, value) in attrs {
            had_attr = true;
            self.put_char(b' ');
            self.line.allow_break(ATTR_GAP, true);
            self.put_str(def.attribute(index));
            if let Some(value) = value {
                self.preformatted = was_preformatted;
                self.in_attrval = true;
                self.put_attr_value(value);
                self.preformatted = true;
                self.in_attrval = false;
            }
        }
        if had_attr {
            self.line.allow_break(AFTER_ATTRS, false);
        }
        self.put_char(b'>');

        // The one preformatted element does not nest.
        self.preformatted = self.dict.is_preformatted(tag) || was_preformatted;

        if !self.preformatted && def.content() != ContentModel::Empty {
            let rank = match def.content() {
                ContentModel::Element => AFTER_OPEN_ELEMENT,
                _ => AFTER_OPEN_MIXED,
            };
            self.line.allow_break(rank, false);
        }

        // An empty element's styling scope ends as soon as it opened.
        if def.content() == ContentModel::Empty {
            self.style_pop(tag);
            self.style_remove(tag);
        }
    }

    /// Serialize an element end tag.
    pub fn end_element(&mut self, tag: TagId) {
        let def = self.dict.tag(tag);
        if !self.preformatted && def.content() != ContentModel::Empty {
            let rank = match def.content() {
                ContentModel::Element => BEFORE_CLOSE_ELEMENT,
                _ => BEFORE_CLOSE_MIXED,
            };
            self.line.allow_break(rank, false);
        }
        self.put_str("</");
        self.put_str(def.name());
        self.put_char(b'>');
        if self.dict.is_preformatted(tag) {
            self.preformatted = false;
        }
        self.style_remove(tag);
        if def.content() != ContentModel::Empty {
            self.style_pop(tag);
        }
    }

    /// Serialize an entity reference. An id outside the vocabulary's table
    /// degrades to a bare `&;`.
    pub fn put_entity(&mut self, entity: EntityId) {
        self.put_char(b'&');
        if let Some(name) = self.dict.entity_name(entity) {
            self.put_str(name);
        }
        self.put_char(b';');
    }

    /// Dispatch one event to the matching operation.
    pub fn feed(&mut self, event: MarkupEvent<'_>) {
        match event {
            MarkupEvent::Char(c) => self.put_char(c),
            MarkupEvent::Text(s) => self.put_str(s),
            MarkupEvent::Block(b) => self.put_block(b),
            MarkupEvent::StartElement { tag, attrs } => self.start_element(tag, attrs),
            MarkupEvent::EndElement { tag } => self.end_element(tag),
            MarkupEvent::Entity(entity) => self.put_entity(entity),
        }
    }

    /// Flush any buffered partial line, append the trailing newline, close
    /// the sink, and hand it back.
    pub fn finalize(mut self) -> S {
        self.line.flush(&mut self.sink);
        self.sink.accept_char(b'\n');
        self.sink.close();
        self.sink
    }

    /// Abnormal termination: identical flush-and-teardown. Best-effort
    /// partial markup beats silent loss.
    pub fn abort(self, reason: &str) -> S {
        log::debug!("markup writer aborted: {reason}");
        self.finalize()
    }

    /// Write one byte past the escaping stage: store it, pass hard newlines
    /// straight through, register word-gap break candidates, wrap if due.
    fn raw_char(&mut self, c: u8) {
        self.line.write(c);
        if c == b'\n' {
            self.line.flush(&mut self.sink);
            return;
        }

        if !self.preformatted && (c == b' ' || c == b'\t') {
            let mut rank = WORD_GAP;
            if self.line.len() > 1 {
                let prev = self.line.byte_back(2);
                if let Some(i) = prev.and_then(|p| DELIMS.iter().position(|&d| d == p)) {
                    rank = PUNCT_GAP + i;
                }
                if !self.in_attrval {
                    rank += TEXT_GAP_BONUS;
                }
            }
            self.line.allow_break(rank, true);
        }

        self.line.wrap_if_needed(&mut self.sink);
    }

    /// Emit `="value"` under the quoting rule: the quote kind the value
    /// does not contain, else double quotes with embedded double quotes
    /// replaced by their numeric reference.
    fn put_attr_value(&mut self, value: &str) {
        match escape::quote_style(value) {
            QuoteStyle::Double => {
                self.put_str("=\"");
                self.put_str(value);
                self.put_char(b'"');
            }
            QuoteStyle::Single => {
                self.put_str("='");
                self.put_str(value);
                self.put_char(b'\'');
            }
            QuoteStyle::DoubleEscaped => {
                self.put_str("=\"");
                for c in value.bytes() {
                    if c == b'"' {
                        self.put_block(escape::QUOT_REF);
                    } else {
                        self.put_char(c);
                    }
                }
                self.put_char(b'"');
            }
        }
    }

    // Style changes must land exactly on emitted text boundaries, so every
    // notification is preceded by a forced flush of buffered text.

    fn style_push(&mut self, tag: TagId) {
        if let Some(style) = self.style.as_mut() {
            self.line.flush(&mut self.sink);
            style.apply_style(tag, StyleOp::Push);
        }
    }

    fn style_pop(&mut self, tag: TagId) {
        if let Some(style) = self.style.as_mut() {
            self.line.flush(&mut self.sink);
            style.apply_style(tag, StyleOp::Pop);
        }
    }

    fn style_remove(&mut self, tag: TagId) {
        if let Some(style) = self.style.as_mut() {
            style.remove_style(tag);
        }
    }
}

impl<S: TextSink> MarkupSink for MarkupWriter<'_, S> {
    fn put_char(&mut self, c: u8) {
        MarkupWriter::put_char(self, c);
    }

    fn put_str(&mut self, s: &str) {
        MarkupWriter::put_str(self, s);
    }

    fn put_block(&mut self, block: &[u8]) {
        MarkupWriter::put_block(self, block);
    }

    fn start_element(&mut self, tag: TagId, attrs: &[(usize, Option<&str>)]) {
        MarkupWriter::start_element(self, tag, attrs);
    }

    fn end_element(&mut self, tag: TagId) {
        MarkupWriter::end_element(self, tag);
    }

    fn put_entity(&mut self, entity: EntityId) {
        MarkupWriter::put_entity(self, entity);
    }
}
