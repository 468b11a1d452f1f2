//! # ELIZA Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types shared by the response engine, the
//! configuration loader and the command handlers.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ElizaError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Turn processing itself never fails. Everything that can go wrong is a
//! problem with the tables or the files they come from, and it is reported
//! before the first session starts.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if rings.is_empty() {
//!     return Err(ElizaError::Configuration("no reply rings defined".into()))?;
//! }
//!
//! // Inspect the error kind
//! match engine::build_engine(keywords, rings, reflections, goodbyes) {
//!     Err(e) if e.downcast_ref::<ElizaError>().is_some() => eprintln!("bad tables: {e}"),
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the ELIZA application.
#[derive(Error, Debug)]
pub enum ElizaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Keyword '{keyword}' (entry {index}) refers to unknown reply ring {ring}.")]
    UnknownRing {
        keyword: String,
        index: usize,
        ring: u32,
    },

    #[error("Reply ring {ring} has no templates.")]
    EmptyRing { ring: u32 },

    #[error("Reply ring {ring} template {position} has {count} placeholders; at most one is allowed.")]
    TooManyPlaceholders {
        ring: u32,
        position: usize,
        count: usize,
    },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
