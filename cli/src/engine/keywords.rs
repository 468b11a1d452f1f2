//! # Keyword Matcher
//!
//! File: cli/src/engine/keywords.rs
//!
//! ## Overview
//!
//! Finds the highest-priority keyword occurring in a normalized sentence.
//!
//! ## Architecture
//!
//! - Non-empty keywords are tried in table order; the first one that is a
//!   substring of the sentence wins.
//! - The entry with the empty keyword is the catch-all. It is only chosen
//!   when no other keyword matched, wherever it is stored in the table.
//! - A table without a catch-all falls back to its last entry.
//!
use super::tables::KeywordEntry;
use tracing::debug;

/// The keyword entry chosen for a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Index of the entry in the keyword table.
    pub index: usize,
    /// 1-based character offset of the keyword in the sentence.
    /// `None` when the entry was chosen as a fallback rather than found.
    pub position: Option<usize>,
}

/// Selects the keyword entry for `text`.
///
/// Returns `None` only for an empty table.
pub fn find_keyword(table: &[KeywordEntry], text: &str) -> Option<KeywordMatch> {
    for (index, entry) in table.iter().enumerate() {
        if entry.is_default() {
            continue;
        }
        if let Some(byte_offset) = text.find(entry.keyword.as_str()) {
            let position = text[..byte_offset].chars().count() + 1;
            debug!(keyword = %entry.keyword, index, position, "Keyword matched");
            return Some(KeywordMatch {
                index,
                position: Some(position),
            });
        }
    }

    if let Some(index) = table.iter().position(KeywordEntry::is_default) {
        return Some(KeywordMatch {
            index,
            position: Some(1),
        });
    }

    debug!("No keyword matched and no default entry; using last table entry");
    table.len().checked_sub(1).map(|index| KeywordMatch {
        index,
        position: None,
    })
}
