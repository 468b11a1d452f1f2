//! # ELIZA Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! This module implements `eliza ask`, which answers a single sentence given on
//! the command line from a fresh session and exits. Handy for scripts and for
//! trying out a tables file without starting a conversation.
//!
//! ## Examples
//!
//! ```bash
//! eliza ask I am feeling low today
//! eliza ask "Why don't you listen to me?"
//! ```
//!
use crate::core::config;
use crate::core::error::{ElizaError, Result};
use anyhow::anyhow;
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

/// # Ask Arguments (`AskArgs`)
///
/// Defines the command-line arguments accepted by `eliza ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The sentence to answer. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Joins the words into one sentence, runs a single turn and prints the reply.
/// Farewells are printed like any other reply.
pub fn handle_ask(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling ask command...");
    let sentence = args.words.join(" ");
    if sentence.trim().is_empty() {
        return Err(anyhow!(ElizaError::ArgumentParsing(
            "Nothing to answer: the sentence is empty.".to_string()
        )));
    }

    let engine = config::load_engine(config_path)?;
    let mut session = engine.session();
    let response = session.respond(&sentence);
    debug!("Reply kind: {:?}", response.kind);
    println!("{}", response.reply);
    Ok(())
}
