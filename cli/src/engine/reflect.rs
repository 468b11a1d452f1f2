//! # Reflector (Conjugator)
//!
//! File: cli/src/engine/reflect.rs
//!
//! ## Overview
//!
//! Extracts the part of the user's sentence that follows the matched keyword
//! and rewrites it from the user's point of view into the therapist's
//! ("i am" becomes "you are", "my" becomes "your", ...), so it can be echoed
//! back inside a reply template.
//!
//! ## Architecture
//!
//! - Reflection pairs are applied one after another in table order.
//! - Each pair scans the text left to right exactly once; text it has already
//!   written is not scanned again by the same pair. Later pairs do see it,
//!   so the order of the table decides the outcome.
//! - When a pattern ends in a boundary space, that space is left in the
//!   unscanned remainder so the next occurrence can start on it
//!   (" me me " becomes " you you ", not " you me ").
//! - Replacements leave runs of spaces behind; they are collapsed at the end.
//!
use super::tables::ReflectionPair;

/// Reflects the clause following `keyword` in `sentence`.
///
/// `position` is the 1-based character offset at which `keyword` was found.
pub fn reflect(sentence: &str, keyword: &str, position: usize, pairs: &[ReflectionPair]) -> String {
    let skip = position.saturating_sub(1) + keyword.chars().count();
    let tail: String = sentence.chars().skip(skip).collect();
    conjugate(&format!(" {tail} "), pairs)
}

/// Applies every reflection pair in order to an already padded clause.
pub fn conjugate(clause: &str, pairs: &[ReflectionPair]) -> String {
    let rewritten = pairs
        .iter()
        .fold(clause.to_string(), |text, pair| apply_pair(&text, pair));
    collapse_spaces(&rewritten)
}

fn apply_pair(text: &str, pair: &ReflectionPair) -> String {
    let from = pair.from.as_str();
    if from.is_empty() {
        return text.to_string();
    }
    // Leave a trailing boundary space for the next match to start on.
    let keep = usize::from(from.len() > 1 && from.ends_with(' '));

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find(from) {
        out.push_str(&rest[..at]);
        out.push_str(&pair.to);
        rest = &rest[at + from.len() - keep..];
    }
    out.push_str(rest);
    out
}

/// Collapses every run of spaces into a single space.
pub fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        out.push(c);
    }
    out
}
