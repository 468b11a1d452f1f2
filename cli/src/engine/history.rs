//! # Repetition Detector
//!
//! File: cli/src/engine/history.rs
//!
//! ## Overview
//!
//! Keeps a small ring buffer of the user's recent (normalized) inputs so the
//! session can tell when the same sentence is typed again.
//!
//! ## Architecture
//!
//! - The buffer holds `HISTORY_CAPACITY` slots and a write cursor.
//! - Inputs of `MIN_TRACKED_LEN` characters or fewer are ignored entirely;
//!   short answers such as " ok " or " no " are repeated all the time in a
//!   normal conversation.
//! - A tracked input is compared against every slot except the one under the
//!   cursor (the oldest entry, about to be overwritten), then written into
//!   that slot and the cursor advances.
//!

/// Number of slots in the history ring.
pub const HISTORY_CAPACITY: usize = 5;

/// Inputs with this many characters or fewer are never tracked.
pub const MIN_TRACKED_LEN: usize = 4;

/// Circular buffer of the most recent tracked inputs.
#[derive(Debug, Clone, Default)]
pub struct History {
    slots: [Option<String>; HISTORY_CAPACITY],
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks `input` against the recent history and records it.
    ///
    /// Returns `true` when an identical input is still held in the buffer.
    /// The input is recorded whether or not it was a repetition.
    pub fn check_repetition(&mut self, input: &str) -> bool {
        if input.chars().count() <= MIN_TRACKED_LEN {
            return false;
        }

        let repeated = self
            .slots
            .iter()
            .enumerate()
            .filter(|(slot, _)| *slot != self.cursor)
            .any(|(_, entry)| entry.as_deref() == Some(input));

        self.slots[self.cursor] = Some(input.to_string());
        self.cursor = (self.cursor + 1) % HISTORY_CAPACITY;
        repeated
    }

    /// Number of slots currently holding an input.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_inputs_are_ignored() {
        let mut history = History::new();
        assert!(!history.check_repetition(" ok "));
        assert!(!history.check_repetition(" ok "));
        assert!(history.is_empty());
    }

    #[test]
    fn test_immediate_repeat_is_flagged() {
        let mut history = History::new();
        assert!(!history.check_repetition(" i am sad "));
        assert!(history.check_repetition(" i am sad "));
        // The repeat is recorded as well.
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_repeat_after_three_other_inputs_is_flagged() {
        let mut history = History::new();
        history.check_repetition(" first line ");
        history.check_repetition(" second line ");
        history.check_repetition(" third line ");
        history.check_repetition(" fourth line ");
        assert!(history.check_repetition(" first line "));
    }

    #[test]
    fn test_oldest_entry_under_cursor_is_not_compared() {
        let mut history = History::new();
        history.check_repetition(" first line ");
        history.check_repetition(" second line ");
        history.check_repetition(" third line ");
        history.check_repetition(" fourth line ");
        history.check_repetition(" fifth line ");
        // The cursor has wrapped back onto " first line ".
        assert!(!history.check_repetition(" first line "));
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_evicted_entries_are_forgotten() {
        let mut history = History::new();
        history.check_repetition(" evicted soon ");
        for n in 0..HISTORY_CAPACITY {
            history.check_repetition(&format!(" filler number {n} "));
        }
        assert!(!history.check_repetition(" evicted soon "));
    }
}
