//! wikilex: single-pass wikitext tokenizer
//!
//! Converts raw wiki markup into a flat, ordered sequence of typed tokens
//! for a downstream parser to assemble into a document tree.
//!
//! # Design Principles
//! - Single pass: each input byte is visited at most twice (one read plus
//!   at most one single-byte pushback)
//! - No regex: pure byte-level scanning through a tagged-union state machine
//! - Minimal allocations: token values are slices of the input buffer
//! - Total: every input produces a token stream; malformed markup degrades
//!   to text instead of failing
//!
//! # Example
//! ```
//! use wikilex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("''hello''");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(kinds, [TokenKind::Italic, TokenKind::Text, TokenKind::Italic]);
//! ```

pub mod cursor;
pub mod range;
pub mod tags;
pub mod token;
pub mod tokenizer;

// Re-export primary types
pub use range::Range;
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
