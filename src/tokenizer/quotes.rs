//! Quote-run disambiguation: bold and italic toggles.
//!
//! Wikitext spells italic as `''` and bold as `'''`; longer runs split into
//! literal quotes plus toggles. The run is counted in full before anything
//! is emitted, because the meaning of each quote depends on the total.

use crate::Range;
use crate::token::TokenKind;

use super::{Pending, State, Step, Tokenizer};

impl<'a> Tokenizer<'a> {
    /// Accumulate a run of quote bytes; the first non-quote byte terminates
    /// the run and is handed back for reprocessing.
    pub(super) fn quotes(&mut self, p: Pending, b: u8) -> Step {
        if b == b'\'' {
            return Step::to(State::Quotes(p));
        }
        let end = self.here();
        self.resolve_quotes(p, end);
        Step::replay(State::Text(self.reseed(b)), b)
    }

    /// Resolve a completed quote run of length `n`:
    ///
    /// | n  | literal quotes | bold | italic |
    /// |----|----------------|------|--------|
    /// | 1  | 1              |      |        |
    /// | 2  |                |      | yes    |
    /// | 3  |                | yes  |        |
    /// | 4  | 1              | yes  |        |
    /// | 5  |                | yes  | yes    |
    /// | >5 | n−5            | yes  | yes    |
    ///
    /// Literal quotes are emitted first as one text token, then the bold
    /// toggle, then the italic toggle.
    pub(super) fn resolve_quotes(&mut self, p: Pending, end: u32) {
        let n = end - p.start;
        let (literal, bold, italic) = match n {
            0 => return,
            1 => (1, false, false),
            2 => (0, false, true),
            3 => (0, true, false),
            4 => (1, true, false),
            5 => (0, true, true),
            _ => (n - 5, true, true),
        };
        let mut at = p.start;
        if literal > 0 {
            self.push(TokenKind::Text, Range::new(at, at + literal), p.line);
            at += literal;
        }
        if bold {
            self.push(TokenKind::Bold, Range::new(at, at + 3), p.line);
            at += 3;
        }
        if italic {
            self.push(TokenKind::Italic, Range::new(at, at + 2), p.line);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{TokenKind, tokenize};

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_single_quote_is_text() {
        let tokens = tokenize("don't");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value(), "don't");
    }

    #[test]
    fn test_italic_pair() {
        let tokens = tokenize("''italic''");
        assert_eq!(
            tokens.iter().map(|t| t.kind()).collect::<Vec<_>>(),
            [TokenKind::Italic, TokenKind::Text, TokenKind::Italic]
        );
        assert_eq!(tokens[0].value(), "''");
        assert_eq!(tokens[1].value(), "italic");
    }

    #[test]
    fn test_bold_pair() {
        assert_eq!(
            kinds("'''bold'''"),
            [TokenKind::Bold, TokenKind::Text, TokenKind::Bold]
        );
    }

    #[test]
    fn test_four_quotes_shed_one() {
        let tokens = tokenize("''''four''''");
        let got: Vec<_> = tokens.iter().map(|t| (t.kind(), t.value())).collect();
        assert_eq!(
            got,
            [
                (TokenKind::Text, "'"),
                (TokenKind::Bold, "'''"),
                (TokenKind::Text, "four'"),
                (TokenKind::Bold, "'''"),
            ]
        );
    }

    #[test]
    fn test_five_quotes_bold_then_italic() {
        assert_eq!(
            kinds("'''''five'''''"),
            [
                TokenKind::Bold,
                TokenKind::Italic,
                TokenKind::Text,
                TokenKind::Bold,
                TokenKind::Italic,
            ]
        );
    }

    #[test]
    fn test_seven_quotes_shed_two() {
        let tokens = tokenize("'''''''");
        let got: Vec<_> = tokens.iter().map(|t| (t.kind(), t.value())).collect();
        assert_eq!(
            got,
            [
                (TokenKind::Text, "''"),
                (TokenKind::Bold, "'''"),
                (TokenKind::Italic, "''"),
            ]
        );
    }

    #[test]
    fn test_run_flushes_at_eof() {
        assert_eq!(kinds("x''"), [TokenKind::Text, TokenKind::Italic]);
    }

    #[test]
    fn test_terminator_reprocessed() {
        // the byte that ended the run opens its own marker
        assert_eq!(
            kinds("''{{"),
            [TokenKind::Italic, TokenKind::TemplateOpen]
        );
    }
}
