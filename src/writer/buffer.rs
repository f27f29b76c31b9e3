//! Break-ranked line buffer
//!
//! Accumulates output bytes and keeps one candidate break position per
//! cleanness rank. The wrap decision is deferred until the buffer reaches
//! the wrap column, so the best break still on hand wins; when none exists
//! the full buffer is emitted as-is, which guarantees forward progress on
//! unbroken runs.
//!
//! Candidate positions are indices into the buffer. They are invalidated
//! and re-scored whenever a break is taken and the remainder is compacted
//! to the front.

use crate::sink::TextSink;

/// Buffer capacity in bytes. The wrap column is clamped below this; the
/// extra byte leaves room for the newline substitution.
pub(crate) const BUFFER_SIZE: usize = 200;

/// Highest cleanness rank. Rank 0 means "no usable break".
pub(crate) const MAX_CLEANNESS: usize = 20;

/// A candidate break position.
#[derive(Debug, Clone, Copy)]
struct BreakPoint {
    /// Index of the byte the line would be cut at.
    pos: usize,
    /// The byte at `pos` is a space to drop when the break is taken.
    delete_char: bool,
}

pub(crate) struct LineBuffer {
    buf: Vec<u8>,
    len: usize,
    breaks: [Option<BreakPoint>; MAX_CLEANNESS + 1],
    /// Highest rank holding a usable candidate; 0 when there is none.
    cleanness: usize,
    /// A hard flush happened; take the next candidate eagerly instead of
    /// waiting for the buffer to fill again.
    overflowed: bool,
    max_chars: usize,
}

impl LineBuffer {
    pub(crate) fn new(max_chars: usize) -> Self {
        debug_assert!(max_chars <= BUFFER_SIZE - 2);
        LineBuffer {
            buf: vec![0; BUFFER_SIZE + 1],
            len: 0,
            breaks: [None; MAX_CLEANNESS + 1],
            cleanness: 0,
            overflowed: false,
            max_chars,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The byte `n` positions behind the write cursor, if the buffer holds
    /// that many.
    pub(crate) fn byte_back(&self, n: usize) -> Option<u8> {
        if self.len >= n {
            Some(self.buf[self.len - n])
        } else {
            None
        }
    }

    /// Store one byte at the write cursor. The caller follows up with
    /// either [`flush`](Self::flush) (for a literal newline) or
    /// [`wrap_if_needed`](Self::wrap_if_needed).
    pub(crate) fn write(&mut self, c: u8) {
        debug_assert!(self.len < self.buf.len());
        self.buf[self.len] = c;
        self.len += 1;
    }

    /// Record the current write position as a break candidate at `rank`.
    ///
    /// A `deletable` candidate points at the byte just written (a space to
    /// drop when the break is taken); at an empty buffer it degrades to
    /// non-deletable. A candidate at the very start of an empty buffer is
    /// degenerate and does not raise the cleanness unless a hard flush
    /// already happened.
    pub(crate) fn allow_break(&mut self, rank: usize, deletable: bool) {
        debug_assert!(rank >= 1 && rank <= MAX_CLEANNESS);
        let deletable = deletable && self.len > 0;
        let pos = if deletable { self.len - 1 } else { self.len };
        self.breaks[rank] = Some(BreakPoint {
            pos,
            delete_char: deletable,
        });
        if rank >= self.cleanness && (self.overflowed || pos > 0) {
            self.cleanness = rank;
        }
    }

    fn clear_breaks(&mut self) {
        self.breaks = [None; MAX_CLEANNESS + 1];
        self.cleanness = 0;
    }

    /// Emit everything buffered and drop all candidates. Used for literal
    /// newlines passing straight through, for style-boundary alignment, and
    /// at teardown.
    pub(crate) fn flush<S: TextSink>(&mut self, sink: &mut S) {
        if !self.is_empty() {
            sink.accept_block(&self.buf[..self.len]);
            self.len = 0;
        }
        self.clear_breaks();
    }

    /// Apply the wrap policy after a byte was written: when the buffer has
    /// reached the wrap column (or a hard flush left it eager for any
    /// break), cut at the best candidate, or hard-flush when there is none.
    pub(crate) fn wrap_if_needed<S: TextSink>(&mut self, sink: &mut S) {
        if self.len < self.max_chars && !(self.overflowed && self.cleanness > 0) {
            return;
        }
        match self.breaks[self.cleanness] {
            Some(bp) if self.cleanness > 0 => self.take_break(bp, sink),
            _ => self.hard_flush(sink),
        }
    }

    /// Cut the line at `bp`: emit up to the break with a newline substituted
    /// at the cut, shift the remainder to the front, and re-score the
    /// surviving candidates.
    fn take_break<S: TextSink>(&mut self, bp: BreakPoint, sink: &mut S) {
        log::trace!("wrap at rank {} pos {}", self.cleanness, bp.pos);
        let saved = self.buf[bp.pos];
        self.buf[bp.pos] = b'\n';
        sink.accept_block(&self.buf[..=bp.pos]);
        self.buf[bp.pos] = saved;

        // The remainder starts after the cut when the break character is
        // dropped, at it otherwise.
        let resume = if bp.delete_char { bp.pos + 1 } else { bp.pos };
        self.buf.copy_within(resume..self.len, 0);
        self.len -= resume;

        // Candidates past the cut shift down and stay valid; the rest die.
        self.cleanness = 0;
        for (rank, slot) in self.breaks.iter_mut().enumerate() {
            match *slot {
                Some(b) if b.pos > resume => {
                    *slot = Some(BreakPoint {
                        pos: b.pos - resume,
                        delete_char: b.delete_char,
                    });
                    self.cleanness = rank;
                }
                _ => *slot = None,
            }
        }
        self.overflowed = false;
    }

    /// No usable break: emit the full buffer as one hard line and remember
    /// that the next candidate, however poor, should be taken at once.
    fn hard_flush<S: TextSink>(&mut self, sink: &mut S) {
        log::trace!("hard flush of {} bytes, no break candidate", self.len);
        sink.accept_block(&self.buf[..self.len]);
        self.len = 0;
        self.clear_breaks();
        self.overflowed = true;
    }
}
