//! Static tag-name tables and recognition predicates.
//!
//! Two fixed sets of lowercase names: the HTML subset wikitext allows, and
//! the wiki extension tags. Recognition is incremental: while a candidate
//! name is being read byte-by-byte, [`is_tag_prefix`] decides whether it can
//! still become a known name, and [`is_tag`] gives the final verdict.
//!
//! Normalization is ASCII-only: trim leading/trailing whitespace and fold
//! case. Interior whitespace is preserved — some extension tag names contain
//! a single interior space.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Structural/HTML-like tags, including a short list of obsolete but still
/// supported legacy tags (`big`, `center`, `font`, `strike`, `tt`).
static STRUCTURAL_TAGS: &[&str] = &[
    "abbr", "b", "bdi", "big", "blockquote", "br", "caption", "center",
    "cite", "code", "data", "dd", "del", "dfn", "div", "dl", "dt", "em",
    "font", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "ins", "kbd",
    "li", "mark", "ol", "p", "pre", "q", "rb", "rp", "rt", "ruby", "s",
    "samp", "small", "span", "strike", "strong", "sub", "sup", "table",
    "td", "th", "time", "tr", "tt", "u", "ul", "var", "wbr",
];

/// Wiki extension tags. `section begin` and `section end` carry an interior
/// space.
static EXTENSION_TAGS: &[&str] = &[
    "categorytree", "ce", "charinsert", "chem", "gallery", "graph", "hiero",
    "imagemap", "includeonly", "indicator", "inputbox", "mapframe",
    "maplink", "math", "noinclude", "nowiki", "onlyinclude", "poem", "ref",
    "references", "score", "section begin", "section end", "source",
    "syntaxhighlight", "templatedata", "templatestyles", "timeline",
];

/// Longest entry across both tables; normalization scratch stays on the
/// stack below this bound.
const MAX_TAG_LEN: usize = 24;

type Scratch = SmallVec<[u8; MAX_TAG_LEN]>;

fn tag_set() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        STRUCTURAL_TAGS
            .iter()
            .chain(EXTENSION_TAGS)
            .copied()
            .collect()
    })
}

/// Trim ASCII whitespace from both ends and fold to ASCII lowercase.
///
/// Interior whitespace is kept verbatim.
pub fn normalize(name: &[u8]) -> Vec<u8> {
    normalized(name).to_vec()
}

fn normalized(name: &[u8]) -> Scratch {
    let trimmed = name.trim_ascii();
    trimmed.iter().map(|b| b.to_ascii_lowercase()).collect()
}

/// Exact membership in either table after normalization.
pub fn is_tag(name: &[u8]) -> bool {
    canonical(name).is_some()
}

/// The canonical table entry for a recognized name, or `None`.
pub fn canonical(name: &[u8]) -> Option<&'static str> {
    let n = normalized(name);
    let s = std::str::from_utf8(&n).ok()?;
    tag_set().get(s).copied()
}

/// Whether the normalized partial is a prefix of at least one table entry.
///
/// This is the incremental-recognition predicate: as bytes are read one at
/// a time, the candidate must remain a prefix of some known name or the
/// attempt is abandoned. The empty normalized string (pure padding) is a
/// prefix of everything.
pub fn is_tag_prefix(partial: &[u8]) -> bool {
    let n = normalized(partial);
    STRUCTURAL_TAGS
        .iter()
        .chain(EXTENSION_TAGS)
        .any(|t| t.as_bytes().starts_with(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_normalized() {
        for t in STRUCTURAL_TAGS.iter().chain(EXTENSION_TAGS) {
            assert_eq!(t.trim(), *t, "table entry has padding: {t:?}");
            assert_eq!(t.to_ascii_lowercase(), *t, "table entry not lowercase: {t:?}");
            assert!(t.len() <= MAX_TAG_LEN, "scratch bound too small for {t:?}");
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(b"  DIV "), b"div");
        assert_eq!(normalize(b"\n table \t"), b"table");
        // interior whitespace survives
        assert_eq!(normalize(b" Section Begin "), b"section begin");
    }

    #[test]
    fn test_is_tag_exact() {
        assert!(is_tag(b"div"));
        assert!(is_tag(b"DIV"));
        assert!(is_tag(b"  table  "));
        assert!(is_tag(b"nowiki"));
        assert!(is_tag(b"section begin"));
        assert!(!is_tag(b"divs"));
        assert!(!is_tag(b"section  begin"));
        assert!(!is_tag(b""));
        assert!(!is_tag(b"   "));
    }

    #[test]
    fn test_legacy_tags_supported() {
        for t in ["big", "center", "font", "strike", "tt"] {
            assert!(is_tag(t.as_bytes()), "legacy tag {t} missing");
        }
    }

    #[test]
    fn test_is_tag_prefix() {
        assert!(is_tag_prefix(b"t"));
        assert!(is_tag_prefix(b"tab"));
        assert!(is_tag_prefix(b"TAB"));
        assert!(is_tag_prefix(b"syntaxhigh"));
        assert!(is_tag_prefix(b"section b"));
        assert!(!is_tag_prefix(b"tables"));
        assert!(!is_tag_prefix(b"xyz"));
        assert!(!is_tag_prefix(b"1"));
    }

    #[test]
    fn test_prefix_accepts_padding() {
        // pure padding normalizes to the empty prefix
        assert!(is_tag_prefix(b" "));
        assert!(is_tag_prefix(b"\n"));
        assert!(is_tag_prefix(b"  ta"));
        assert!(is_tag_prefix(b"ta  "));
        // trailing padding then a new word only survives for two-word tags
        assert!(!is_tag_prefix(b"ta b"));
        assert!(is_tag_prefix(b"section  "));
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical(b" DIV "), Some("div"));
        assert_eq!(canonical(b"Section End"), Some("section end"));
        assert_eq!(canonical(b"bogus"), None);
        // non-UTF-8 candidates are never tags
        assert_eq!(canonical(&[b'd', 0xC3]), None);
    }
}
