//! Token types and the output buffer.
//!
//! Tokens are immutable `(kind, value, line)` triples whose values are
//! zero-copy slices of the original input. The buffer is append-only with a
//! single merge rule: adjacent text tokens collapse into one.

use crate::Range;
use crate::tags;

/// The kind of a token.
///
/// The enumeration is closed: downstream parsers can match exhaustively.
/// Several kinds are reserved for future marker recognition and are never
/// produced by the current state machine; they are kept so the vocabulary
/// stays stable as recognizers are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain text with no syntactic meaning.
    Text,
    /// A single `\n`.
    Newline,
    /// An italic toggle, `''`.
    Italic,
    /// A bold toggle, `'''`.
    Bold,
    /// Start-tag marker, `<`.
    TagOpen,
    /// End-tag marker, `</`.
    TagClose,
    /// A recognized tag name; the value keeps the source padding and case.
    TagName,
    /// A standalone `>`.
    AngleClose,
    /// Comment opener, `<!--`.
    CommentOpen,
    /// Comment terminator, `-->`.
    CommentClose,
    /// Template opener, `{{`.
    TemplateOpen,
    /// Template terminator, `}}`.
    TemplateClose,
    /// Table opener, `{|`.
    TableOpen,
    /// Table terminator, `|}`.
    TableClose,
    /// Table row marker, `|-`.
    TableRow,
    /// Table caption marker, `|+`.
    TableCaption,
    /// Internal link opener, `[[`.
    LinkOpen,
    /// Internal link terminator, `]]`.
    LinkClose,
    /// A standalone `[`.
    BracketOpen,
    /// A standalone `]`.
    BracketClose,
    /// A standalone `|`.
    Pipe,
    /// A standalone `!`.
    Bang,
    /// A standalone `:`.
    Colon,
    /// A run of `-`.
    Dashes,
    /// A run of `#`.
    Hashes,
    /// A run of spaces at the start of a line.
    Spaces,

    // Reserved kinds, declared for downstream stability but not produced
    // by any state. Their trigger rules are an open extension point.
    /// Reserved: a run of `;`.
    Semicolons,
    /// Reserved: a run of `*`.
    Asterisks,
    /// Reserved: heading markup.
    Heading,
    /// Reserved: list entry markup.
    ListItem,
    /// Reserved: signature/timestamp markup.
    Signature,
    /// Reserved: redirect markup.
    Redirect,
    /// Reserved: character entity reference.
    Entity,
    /// Reserved: bare URL.
    Url,
}

impl TokenKind {
    /// Stable string identifier, safe to log or persist.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Newline => "newline",
            Self::Italic => "italic",
            Self::Bold => "bold",
            Self::TagOpen => "tag-open",
            Self::TagClose => "tag-close",
            Self::TagName => "tag-name",
            Self::AngleClose => "angle-close",
            Self::CommentOpen => "comment-open",
            Self::CommentClose => "comment-close",
            Self::TemplateOpen => "template-open",
            Self::TemplateClose => "template-close",
            Self::TableOpen => "table-open",
            Self::TableClose => "table-close",
            Self::TableRow => "table-row",
            Self::TableCaption => "table-caption",
            Self::LinkOpen => "link-open",
            Self::LinkClose => "link-close",
            Self::BracketOpen => "bracket-open",
            Self::BracketClose => "bracket-close",
            Self::Pipe => "pipe",
            Self::Bang => "bang",
            Self::Colon => "colon",
            Self::Dashes => "dashes",
            Self::Hashes => "hashes",
            Self::Spaces => "spaces",
            Self::Semicolons => "semicolons",
            Self::Asterisks => "asterisks",
            Self::Heading => "heading",
            Self::ListItem => "list-item",
            Self::Signature => "signature",
            Self::Redirect => "redirect",
            Self::Entity => "entity",
            Self::Url => "url",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single token: kind, exact source substring, and 1-based start line.
///
/// Tokens are immutable once created. Values are never empty and always
/// slice the original input, so concatenating every token's value in order
/// reproduces the input byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    value: &'a str,
    line: u32,
}

impl<'a> Token<'a> {
    #[inline]
    pub(crate) fn new(kind: TokenKind, value: &'a str, line: u32) -> Self {
        Self { kind, value, line }
    }

    /// The token kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact substring of the input that produced this token.
    #[inline]
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// The 1-based line on which the token's first byte occurred.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Canonical lowercase tag name for [`TokenKind::TagName`] tokens.
    ///
    /// The value keeps the source padding and case (`"  DIV  "`); this
    /// resolves it against the tag tables (`Some("div")`). Returns `None`
    /// for every other kind.
    pub fn tag_name(&self) -> Option<&'static str> {
        if self.kind != TokenKind::TagName {
            return None;
        }
        tags::canonical(self.value.as_bytes())
    }
}

/// Ordered, append-only token sink.
///
/// The single merge rule: a text token pushed right after a trailing text
/// token replaces it with one longer text token. The two ranges are
/// contiguous by construction, so the merged value is again a single slice
/// of the input.
#[derive(Debug)]
pub struct TokenBuffer<'a> {
    src: &'a str,
    tokens: Vec<Token<'a>>,
    /// Range of the trailing token iff it is a text token.
    last_text: Option<Range>,
}

impl<'a> TokenBuffer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Vec::with_capacity(src.len() / 8 + 4),
            last_text: None,
        }
    }

    /// Append a token covering `range`, merging adjacent text.
    pub fn push(&mut self, kind: TokenKind, range: Range, line: u32) {
        debug_assert!(!range.is_empty(), "zero-length token");
        if kind == TokenKind::Text {
            if let (Some(prev), Some(last)) = (self.last_text, self.tokens.last_mut()) {
                if prev.end == range.start {
                    let merged = Range::new(prev.start, range.end);
                    *last = Token::new(
                        TokenKind::Text,
                        &self.src[merged.start_usize()..merged.end_usize()],
                        last.line(),
                    );
                    self.last_text = Some(merged);
                    return;
                }
            }
            self.last_text = Some(range);
        } else {
            self.last_text = None;
        }
        let value = &self.src[range.start_usize()..range.end_usize()];
        self.tokens.push(Token::new(kind, value, line));
    }

    /// Number of tokens collected so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the buffer, yielding the token sequence.
    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }
}
