//! Run-collecting states: dashes, hashes, spaces.
//!
//! Each collects a maximal run of one repeated byte and flushes it as a
//! single token. The dash run carries the one genuinely ambiguous rule in
//! the grammar: a run ending in `>` is also how a comment terminates, and
//! the `-->` suffix always wins that overlap.

use crate::Range;
use crate::token::TokenKind;

use super::{Pending, State, Step, Tokenizer};

impl<'a> Tokenizer<'a> {
    /// Maximal dash run. A `>` terminator gets the comment-close suffix
    /// test; any other terminator is reprocessed after the run is flushed.
    pub(super) fn dashes(&mut self, p: Pending, b: u8) -> Step {
        match b {
            b'-' => Step::to(State::Dashes(p)),
            b'>' => {
                self.close_dash_run(p);
                Step::to(State::Text(self.next_seed()))
            }
            _ => {
                self.push(TokenKind::Dashes, Range::new(p.start, self.here()), p.line);
                Step::replay(State::Text(self.reseed(b)), b)
            }
        }
    }

    /// Resolve a dash run terminated by `>`.
    ///
    /// With at least two dashes the tail is the `-->` comment terminator
    /// and any dashes beyond it form their own run; with fewer, the run and
    /// the `>` each stand alone.
    fn close_dash_run(&mut self, p: Pending) {
        let gt = self.here();
        if gt - p.start >= 2 {
            if gt - p.start > 2 {
                self.push(TokenKind::Dashes, Range::new(p.start, gt - 2), p.line);
            }
            self.push(TokenKind::CommentClose, Range::new(gt - 2, gt + 1), p.line);
        } else {
            self.push(TokenKind::Dashes, Range::new(p.start, gt), p.line);
            self.push(TokenKind::AngleClose, Range::new(gt, gt + 1), p.line);
        }
    }

    /// Maximal hash run.
    pub(super) fn hashes(&mut self, p: Pending, b: u8) -> Step {
        if b == b'#' {
            return Step::to(State::Hashes(p));
        }
        self.push(TokenKind::Hashes, Range::new(p.start, self.here()), p.line);
        Step::replay(State::Text(self.reseed(b)), b)
    }

    /// Maximal space run. Only a run that begins a line resolves to its own
    /// token kind; a mid-line run is ordinary text and merges with its
    /// neighbors.
    pub(super) fn spaces(&mut self, p: Pending, line_start: bool, b: u8) -> Step {
        if b == b' ' {
            return Step::to(State::Spaces { p, line_start });
        }
        self.flush_spaces(p, line_start, self.here());
        Step::replay(State::Text(self.reseed(b)), b)
    }

    pub(super) fn flush_spaces(&mut self, p: Pending, line_start: bool, end: u32) {
        let kind = if line_start {
            TokenKind::Spaces
        } else {
            TokenKind::Text
        };
        self.push(kind, Range::new(p.start, end), p.line);
    }
}
