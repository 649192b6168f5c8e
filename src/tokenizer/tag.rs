//! Angle-bracket dispatch: tag recognition and the comment opener.
//!
//! A `<` can start a tag, a closing tag, or a comment — or mean nothing.
//! Tag names are recognized incrementally against the static tables: the
//! candidate read so far must stay a prefix of at least one known name, so
//! unrecognizable attempts are abandoned at the first impossible byte
//! instead of scanning to `>`.

use crate::Range;
use crate::tags;
use crate::token::TokenKind;

use super::{Pending, State, Step, Tokenizer};

/// The 4-byte comment opener.
const COMMENT_OPEN: &[u8] = b"<!--";

impl<'a> Tokenizer<'a> {
    /// One `<` has been consumed; the next byte picks the route.
    ///
    /// Whitespace normalizes to the empty prefix, which is why padded names
    /// like `<  table  >` enter the tag state at the first space.
    pub(super) fn angle_open(&mut self, p: Pending, b: u8) -> Step {
        match b {
            b'/' => Step::to(State::TagName {
                p,
                closing: true,
                name_start: self.after(),
            }),
            b'!' => Step::to(State::CommentOpen(p)),
            _ if tags::is_tag_prefix(&[b]) => Step::to(State::TagName {
                p,
                closing: false,
                name_start: self.here(),
            }),
            _ => self.revert_text(p, b),
        }
    }

    /// Incremental tag-name recognition after `<` or `</`.
    ///
    /// On the first byte that breaks prefix survival, the name accumulated
    /// before it gets the exact test: a hit emits the marker token and the
    /// name token, a miss degrades the whole attempt to one text token.
    /// Either way the breaking byte is reprocessed.
    pub(super) fn tag_name(&mut self, p: Pending, closing: bool, name_start: u32, b: u8) -> Step {
        if tags::is_tag_prefix(self.bytes(name_start, self.after())) {
            return Step::to(State::TagName {
                p,
                closing,
                name_start,
            });
        }
        self.emit_tag(p, closing, name_start, self.here());
        Step::replay(State::Text(self.reseed(b)), b)
    }

    /// Resolve a finished tag-name attempt spanning `[name_start, end)`.
    ///
    /// Also runs at end of input, where the candidate is everything
    /// accumulated and there is no byte to reprocess.
    pub(super) fn emit_tag(&mut self, p: Pending, closing: bool, name_start: u32, end: u32) {
        if tags::is_tag(self.bytes(name_start, end)) {
            let marker = if closing {
                TokenKind::TagClose
            } else {
                TokenKind::TagOpen
            };
            self.push(marker, Range::new(p.start, name_start), p.line);
            self.push(TokenKind::TagName, Range::new(name_start, end), p.line);
        } else {
            self.push(TokenKind::Text, Range::new(p.start, end), p.line);
        }
    }

    /// Byte-wise match of the `<!--` opener.
    ///
    /// On a mismatch the bytes read so far stay behind as pending text and
    /// the offending byte is reprocessed — it may well start an unrelated
    /// state, like a dash run.
    pub(super) fn comment_open(&mut self, p: Pending, b: u8) -> Step {
        let have = self.bytes(p.start, self.after());
        if have == COMMENT_OPEN {
            self.push(
                TokenKind::CommentOpen,
                Range::new(p.start, self.after()),
                p.line,
            );
            return Step::to(State::Text(self.next_seed()));
        }
        if COMMENT_OPEN.starts_with(have) {
            return Step::to(State::CommentOpen(p));
        }
        Step::replay(State::Text(p), b)
    }
}
