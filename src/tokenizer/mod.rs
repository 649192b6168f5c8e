//! The tokenizer: a single-pass, byte-driven state machine.
//!
//! The driving loop pulls one byte at a time from the [`Cursor`] and feeds
//! it to the active [`State`]. A state either keeps accumulating, or
//! resolves what it has collected into tokens and hands the terminating
//! byte back for reprocessing — the machine's only form of backtracking is
//! this one-byte pushback. When input runs out, the active state is
//! finalized so nothing accumulated is lost.
//!
//! States do not copy input: each carries a [`Pending`] anchor (start
//! offset and line of the token being built) and resolves to byte ranges.

mod brackets;
mod quotes;
mod runs;
mod tag;

use crate::Range;
use crate::cursor::Cursor;
use crate::token::{Token, TokenBuffer, TokenKind};

/// Tokenize a full document.
///
/// Total over all inputs: malformed or incomplete markup degrades to text
/// tokens, and the empty string yields an empty sequence. Concatenating
/// every token's value in order reproduces the input exactly.
///
/// # Example
/// ```
/// use wikilex::{tokenize, TokenKind};
///
/// let tokens = tokenize("{{cite}}");
/// assert_eq!(tokens[0].kind(), TokenKind::TemplateOpen);
/// assert_eq!(tokens[1].value(), "cite");
/// assert_eq!(tokens[2].kind(), TokenKind::TemplateClose);
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Tokenizer::new(input).run()
}

/// Anchor of the token being accumulated: its start offset and the line
/// its first byte occurred on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pending {
    pub(crate) start: u32,
    pub(crate) line: u32,
}

/// The active state of the machine.
///
/// A tagged union rather than trait objects: the transition table lives in
/// one exhaustive match, so adding a state without wiring it up fails to
/// compile.
#[derive(Debug, Clone, Copy)]
pub(crate) enum State {
    /// Default/dispatch state, accumulating plain text.
    Text(Pending),
    /// A run of `'` awaiting bold/italic resolution.
    Quotes(Pending),
    /// A lone `<`; the next byte picks the route.
    AngleOpen(Pending),
    /// Reading a candidate tag name after `<` or `</`.
    TagName {
        p: Pending,
        closing: bool,
        name_start: u32,
    },
    /// Matching the `<!--` opener, `<!` already consumed.
    CommentOpen(Pending),
    /// A run of `-`.
    Dashes(Pending),
    /// A run of `#`.
    Hashes(Pending),
    /// A run of spaces; whether it began a line decides its token kind.
    Spaces { p: Pending, line_start: bool },
    /// A lone `{`.
    BraceOpen(Pending),
    /// A lone `}`.
    BraceClose(Pending),
    /// A lone `[`.
    SquareOpen(Pending),
    /// A lone `]`.
    SquareClose(Pending),
    /// A lone `|`.
    Pipe(Pending),
}

/// Outcome of feeding one byte to the active state.
pub(crate) struct Step {
    next: State,
    /// Byte to hand back to the cursor for reprocessing, if any.
    replay: Option<u8>,
}

impl Step {
    #[inline]
    pub(crate) fn to(next: State) -> Self {
        Self { next, replay: None }
    }

    #[inline]
    pub(crate) fn replay(next: State, b: u8) -> Self {
        Self {
            next,
            replay: Some(b),
        }
    }
}

/// Owns the cursor and the output buffer for one tokenization pass.
pub struct Tokenizer<'a> {
    src: &'a str,
    cursor: Cursor<'a>,
    out: TokenBuffer<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over the full document text.
    pub fn new(input: &'a str) -> Self {
        debug_assert!(input.len() <= u32::MAX as usize);
        Self {
            src: input,
            cursor: Cursor::new(input.as_bytes()),
            out: TokenBuffer::new(input),
        }
    }

    /// Drive the machine over the whole input and yield the token stream.
    pub fn run(mut self) -> Vec<Token<'a>> {
        let mut state = State::Text(Pending { start: 0, line: 1 });
        loop {
            let line = self.cursor.line();
            let Some(b) = self.cursor.next() else { break };
            let step = self.step(state, b, line);
            if let Some(back) = step.replay {
                self.cursor.retreat(1);
                debug_assert_eq!(self.cursor.peek(), Some(back));
            }
            state = step.next;
        }
        self.finish(state);
        self.out.into_tokens()
    }

    /// Route one byte to the active state. `line` is the line the byte
    /// started on, captured before any newline bump.
    fn step(&mut self, state: State, b: u8, line: u32) -> Step {
        match state {
            State::Text(p) => self.text(p, b, line),
            State::Quotes(p) => self.quotes(p, b),
            State::AngleOpen(p) => self.angle_open(p, b),
            State::TagName {
                p,
                closing,
                name_start,
            } => self.tag_name(p, closing, name_start, b),
            State::CommentOpen(p) => self.comment_open(p, b),
            State::Dashes(p) => self.dashes(p, b),
            State::Hashes(p) => self.hashes(p, b),
            State::Spaces { p, line_start } => self.spaces(p, line_start, b),
            State::BraceOpen(p) => self.brace_open(p, b),
            State::BraceClose(p) => self.brace_close(p, b),
            State::SquareOpen(p) => self.square_open(p, b),
            State::SquareClose(p) => self.square_close(p, b),
            State::Pipe(p) => self.pipe(p, b),
        }
    }

    /// The default state: accumulate plain text until a byte maps to a
    /// transition, then flush the pending text and seed the new state with
    /// the triggering byte.
    fn text(&mut self, p: Pending, b: u8, line: u32) -> Step {
        let here = self.here();
        let seed = Pending { start: here, line };
        match b {
            b'\'' => {
                self.flush_text(p, here);
                Step::to(State::Quotes(seed))
            }
            b'<' => {
                self.flush_text(p, here);
                Step::to(State::AngleOpen(seed))
            }
            b'{' => {
                self.flush_text(p, here);
                Step::to(State::BraceOpen(seed))
            }
            b'}' => {
                self.flush_text(p, here);
                Step::to(State::BraceClose(seed))
            }
            b'[' => {
                self.flush_text(p, here);
                Step::to(State::SquareOpen(seed))
            }
            b']' => {
                self.flush_text(p, here);
                Step::to(State::SquareClose(seed))
            }
            b'|' => {
                self.flush_text(p, here);
                Step::to(State::Pipe(seed))
            }
            b'-' => {
                self.flush_text(p, here);
                Step::to(State::Dashes(seed))
            }
            b'#' => {
                self.flush_text(p, here);
                Step::to(State::Hashes(seed))
            }
            b' ' => {
                self.flush_text(p, here);
                let back = self.cursor.look_back(1);
                let line_start = back.is_empty() || back == b"\n";
                Step::to(State::Spaces {
                    p: seed,
                    line_start,
                })
            }
            b'\n' => {
                self.flush_text(p, here);
                self.push(TokenKind::Newline, Range::new(here, here + 1), line);
                Step::to(State::Text(self.next_seed()))
            }
            b'>' => self.single(p, here, line, TokenKind::AngleClose),
            b'!' => self.single(p, here, line, TokenKind::Bang),
            b':' => self.single(p, here, line, TokenKind::Colon),
            _ => Step::to(State::Text(p)),
        }
    }

    /// Flush pending text, emit a single-byte token, stay in the default
    /// state.
    fn single(&mut self, p: Pending, here: u32, line: u32, kind: TokenKind) -> Step {
        self.flush_text(p, here);
        self.push(kind, Range::new(here, here + 1), line);
        Step::to(State::Text(self.next_seed()))
    }

    /// Finalize the active state once input is exhausted: each state
    /// applies its non-match degradation, minus the pushback.
    fn finish(&mut self, state: State) {
        let end = self.after();
        match state {
            State::Text(p)
            | State::AngleOpen(p)
            | State::CommentOpen(p)
            | State::BraceOpen(p)
            | State::BraceClose(p) => self.flush_text(p, end),
            State::Quotes(p) => self.resolve_quotes(p, end),
            State::TagName {
                p,
                closing,
                name_start,
            } => self.emit_tag(p, closing, name_start, end),
            State::Dashes(p) => self.push(TokenKind::Dashes, Range::new(p.start, end), p.line),
            State::Hashes(p) => self.push(TokenKind::Hashes, Range::new(p.start, end), p.line),
            State::Spaces { p, line_start } => self.flush_spaces(p, line_start, end),
            State::SquareOpen(p) => {
                self.push(TokenKind::BracketOpen, Range::new(p.start, end), p.line)
            }
            State::SquareClose(p) => {
                self.push(TokenKind::BracketClose, Range::new(p.start, end), p.line)
            }
            State::Pipe(p) => self.push(TokenKind::Pipe, Range::new(p.start, end), p.line),
        }
    }

    /// Offset of the byte currently being decided (the one just pulled).
    #[inline]
    fn here(&self) -> u32 {
        self.cursor.offset() as u32 - 1
    }

    /// Offset just past the byte currently being decided.
    #[inline]
    fn after(&self) -> u32 {
        self.cursor.offset() as u32
    }

    /// Empty text pending anchored at the byte about to be replayed. The
    /// byte's newline, if any, is about to be un-counted by the retreat.
    #[inline]
    fn reseed(&self, b: u8) -> Pending {
        Pending {
            start: self.here(),
            line: self.cursor.line() - u32::from(b == b'\n'),
        }
    }

    /// Empty text pending starting right after the byte just consumed.
    #[inline]
    fn next_seed(&self) -> Pending {
        Pending {
            start: self.after(),
            line: self.cursor.line(),
        }
    }

    #[inline]
    fn push(&mut self, kind: TokenKind, range: Range, line: u32) {
        self.out.push(kind, range, line);
    }

    /// Flush pending text ending at `end`, if non-empty.
    fn flush_text(&mut self, p: Pending, end: u32) {
        if end > p.start {
            self.push(TokenKind::Text, Range::new(p.start, end), p.line);
        }
    }

    /// The accumulated opener was no marker after all: emit it as a text
    /// token and hand the byte that broke it back for reprocessing.
    fn revert_text(&mut self, p: Pending, b: u8) -> Step {
        self.push(TokenKind::Text, Range::new(p.start, p.start + 1), p.line);
        Step::replay(State::Text(self.reseed(b)), b)
    }

    #[inline]
    fn bytes(&self, start: u32, end: u32) -> &'a [u8] {
        &self.src.as_bytes()[start as usize..end as usize]
    }
}

#[cfg(test)]
mod tests {
    use crate::{TokenKind, tokenize};

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind()).collect()
    }

    fn values(input: &str) -> Vec<String> {
        tokenize(input).iter().map(|t| t.value().to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_plain_text_is_one_token() {
        let tokens = tokenize("plain old prose, nothing fancy.");
        // interior spaces merge back into the surrounding text
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), TokenKind::Text);
        assert_eq!(tokens[0].value(), "plain old prose, nothing fancy.");
    }

    #[test]
    fn test_single_byte_tokens() {
        assert_eq!(
            kinds("a>b!c:d"),
            [
                TokenKind::Text,
                TokenKind::AngleClose,
                TokenKind::Text,
                TokenKind::Bang,
                TokenKind::Text,
                TokenKind::Colon,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn test_newline_token_and_lines() {
        let tokens = tokenize("a\nb");
        assert_eq!(
            tokens.iter().map(|t| t.kind()).collect::<Vec<_>>(),
            [TokenKind::Text, TokenKind::Newline, TokenKind::Text]
        );
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].line(), 1);
        assert_eq!(tokens[2].line(), 2);
    }

    #[test]
    fn test_non_ascii_stays_text() {
        let tokens = tokenize("héllo wörld");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value(), "héllo wörld");
    }

    #[test]
    fn test_non_ascii_around_markers() {
        assert_eq!(values("é{{ü}}ß"), ["é", "{{", "ü", "}}", "ß"]);
    }

    #[test]
    fn test_roundtrip_kitchen_sink() {
        let input = "{| class\n|-\n! head\n| ''cell'' [[link|label]]\n|}\n<!-- note -->\n";
        let joined: String = tokenize(input).iter().map(|t| t.value()).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_no_consecutive_text_tokens() {
        let input = "a b'c{d}e[f]g";
        let tokens = tokenize(input);
        for pair in tokens.windows(2) {
            assert!(
                pair[0].kind() != TokenKind::Text || pair[1].kind() != TokenKind::Text,
                "adjacent text tokens: {pair:?}"
            );
        }
    }

    #[test]
    fn test_no_empty_tokens() {
        for input in ["", "x", "''", "<code>", "{|\n|}", "<!-- c -->", "[a]"] {
            for t in tokenize(input) {
                assert!(!t.value().is_empty(), "empty token in {input:?}");
            }
        }
    }
}
