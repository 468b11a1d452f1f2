//! # ELIZA Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the ELIZA CLI. It serves as
//! the central point for importing command modules so they are accessible to
//! the main application entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `chat`: Interactive conversation over stdin/stdout
//! - `ask`: One-shot reply to a single sentence
//! - `tables`: Inspect and validate the engine's tables
//!
//! Each command defines its own arguments structure and a handler function
//! that receives those arguments plus the optional `--config` path.
//!

/// Interactive conversation with the engine, one reply per input line.
pub mod chat;
/// Single reply from a fresh session, for scripts and quick checks.
pub mod ask;
/// Command group for working with the keyword, reply, reflection and goodbye tables.
pub mod tables;
