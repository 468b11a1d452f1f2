//! # ELIZA Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that the command
//! handlers build on: configuration loading and error management.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, validation, and turning the
//!   configured tables into an `Engine`
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration and building the engine
//! use crate::core::error::{ElizaError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
