//! # Spelling Adjuster
//!
//! File: cli/src/engine/spelling.rs
//!
//! Final cosmetic pass over a reply: capitalizes the first letter and the
//! stand-alone pronoun "i" that reflection may have produced.
//!

const FIXES: [(&str, &str); 2] = [(" i ", " I "), (" i'", " I'")];

/// Capitalizes the reply's leading run up to its first letter, then every
/// standalone "i".
pub fn adjust_spelling(text: &str) -> String {
    let mut adjusted = match text.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((at, letter)) => {
            let end = at + letter.len_utf8();
            format!("{}{}", text[..end].to_uppercase(), &text[end..])
        }
        None => text.to_string(),
    };

    for (from, to) in FIXES {
        // Overlapping occurrences such as " i i " need more than one pass.
        while adjusted.contains(from) {
            adjusted = adjusted.replace(from, to);
        }
    }
    adjusted
}
