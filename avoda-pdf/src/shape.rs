//! Bidirectional text shaping.
//!
//! Converts a line of logical reading-order text into the visual glyph order
//! a PDF needs for correct right-to-left display: Arabic letters are joined
//! into their presentation forms first, then the whole line is reordered by
//! the Unicode bidi algorithm with an RTL base level. Hebrew has no joining
//! forms, so for Hebrew the first step is the identity.
//!
//! Pure `&str → String` transform, applied independently per line — each
//! line's visual order is computed from only that line's characters.

use ar_reshaper::ArabicReshaper;
use unicode_bidi::{BidiInfo, Level};

/// Reshape a single logical-order line into visual order.
pub fn reshape(line: &str) -> String {
    let joined = ArabicReshaper::default().reshape(line);
    let bidi = BidiInfo::new(&joined, Some(Level::rtl()));
    let Some(para) = bidi.paragraphs.first() else {
        // No paragraph (empty input) — nothing to reorder.
        return joined;
    };
    bidi.reorder_line(para, para.range.clone()).into_owned()
}
