//! # Goodbye Detector
//!
//! File: cli/src/engine/goodbye.rs
//!
//! Scans the goodbye table in order and reports the farewell of the first
//! phrase whose trigger occurs anywhere in the normalized input.
//!
use super::tables::GoodbyePhrase;

/// Returns the farewell of the first matching goodbye phrase, if any.
pub fn check_goodbye<'t>(text: &str, phrases: &'t [GoodbyePhrase]) -> Option<&'t str> {
    phrases
        .iter()
        .find(|phrase| text.contains(phrase.trigger.as_str()))
        .map(|phrase| phrase.farewell.as_str())
}
