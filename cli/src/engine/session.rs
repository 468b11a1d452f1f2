//! # Conversation Session
//!
//! File: cli/src/engine/session.rs
//!
//! Per-conversation state: the repetition history, one rotation cursor per
//! keyword entry, and whether a goodbye has been recognized. A session is
//! bound to the engine that started it; the engine's tables are shared and
//! read-only, everything a turn mutates lives here.
//!
use super::history::History;
use super::{Engine, Response};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next line of input.
    AwaitingInput,
    /// A goodbye phrase was recognized; further input is ignored.
    Ended,
}

/// State of one conversation with an engine.
#[derive(Debug, Clone)]
pub struct Session<'e> {
    engine: &'e Engine,
    pub(super) history: History,
    /// Rotation cursor per keyword table index. Keywords sharing a ring
    /// still rotate independently.
    pub(super) cursors: Vec<usize>,
    pub(super) state: SessionState,
    turns: usize,
}

impl<'e> Session<'e> {
    pub(super) fn new(engine: &'e Engine) -> Self {
        Self {
            engine,
            history: History::new(),
            cursors: vec![0; engine.keywords.len()],
            state: SessionState::AwaitingInput,
            turns: 0,
        }
    }

    /// Runs one turn on `input` and returns the reply.
    pub fn respond(&mut self, input: &str) -> Response {
        let engine = self.engine;
        engine.run_turn(self, input)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    /// Number of turns processed so far, including the farewell turn.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Rotation cursor of the keyword at `index`.
    #[cfg(test)]
    pub fn cursor(&self, index: usize) -> Option<usize> {
        self.cursors.get(index).copied()
    }

    pub(super) fn record_turn(&mut self) {
        self.turns += 1;
    }

    pub(super) fn end(&mut self) {
        self.state = SessionState::Ended;
    }
}
