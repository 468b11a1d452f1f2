//! # Reply Selector
//!
//! File: cli/src/engine/replies.rs
//!
//! ## Overview
//!
//! Picks the next template from a keyword's reply ring and splices the
//! reflected clause into it.
//!
//! ## Architecture
//!
//! - `select_reply` returns the template under the cursor and the cursor for
//!   the following turn (round robin over the ring).
//! - `fill_template` replaces the `*` placeholder with the clause. A template
//!   that needs a clause when the user gave none is replaced by the
//!   "elaborate" fallback message.
//!

/// Marker in a template where the reflected clause goes.
pub const PLACEHOLDER: char = '*';

/// Returns the template at `cursor` and the cursor for the next turn.
///
/// The ring must not be empty; engine construction guarantees this.
pub fn select_reply(ring: &[String], cursor: usize) -> (&str, usize) {
    let len = ring.len().max(1);
    let cursor = cursor % len;
    let template = ring.get(cursor).map(String::as_str).unwrap_or_default();
    (template, (cursor + 1) % len)
}

/// Splices `clause` into `template` at its placeholder.
pub fn fill_template(template: &str, clause: &str, fallback: &str) -> String {
    let Some(at) = template.find(PLACEHOLDER) else {
        return template.to_string();
    };
    if clause.is_empty() || clause == " " {
        return fallback.to_string();
    }
    // The clause keeps its leading space; the trailing one would separate
    // the punctuation after the marker from the last word.
    format!(
        "{}{}{}",
        &template[..at],
        clause.trim_end(),
        &template[at + PLACEHOLDER.len_utf8()..]
    )
}
