//! # Input Normalizer
//!
//! File: cli/src/engine/normalize.rs
//!
//! Turns a raw line of user input into the canonical form every later stage
//! matches against: lowercase, no sentence punctuation, and exactly one
//! boundary space on each side so that space-padded patterns also match at
//! the edges of the line.
//!

/// Characters removed from the input before matching.
const STRIPPED: [char; 5] = ['.', ',', ';', '!', '?'];

/// Normalizes one line of raw input.
///
/// Empty input yields a string of two spaces.
pub fn normalize(raw: &str) -> String {
    let body: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect();
    format!(" {body} ")
}
