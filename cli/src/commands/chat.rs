//! # ELIZA Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `eliza chat`, the console front end of the engine.
//! It prints the greeting, then reads the user's input line by line and writes
//! one reply per line until a goodbye phrase is recognized or the input ends.
//!
//! ## Architecture
//!
//! 1. Load configuration and build the engine
//! 2. Start a fresh session
//! 3. For each input line: strip the line ending, run a turn, print the reply
//! 4. Stop after a farewell or at end of input
//!
//! The loop itself (`run_session`) works on any `BufRead`/`Write` pair so it can
//! be driven from tests as well as from a terminal. A `> ` prompt is only shown
//! when stdin is a terminal, which keeps piped transcripts clean.
//!
//! ## Examples
//!
//! ```bash
//! eliza chat
//! printf 'I am sad\nbye\n' | eliza chat --no-greeting
//! ```
//!
use crate::core::config;
use crate::core::error::Result;
use crate::engine::{Engine, ReplyKind};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use tracing::{debug, info};

/// # Chat Arguments (`ChatArgs`)
///
/// Defines the command-line arguments accepted by `eliza chat`.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Do not print the opening greeting.
    #[arg(long)]
    pub no_greeting: bool,
}

/// What happened during a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatOutcome {
    /// Number of input lines processed.
    pub turns: usize,
    /// Whether the user said goodbye (as opposed to closing the input).
    pub said_goodbye: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the engine from the effective configuration and runs one
/// conversation over stdin and stdout.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once the conversation is over; `Err` if the
///   configuration is unusable or stdin/stdout fail.
pub fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chat command...");
    let engine = config::load_engine(config_path)?;

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let outcome = run_session(
        &engine,
        stdin.lock(),
        io::stdout().lock(),
        prompt,
        !args.no_greeting,
    )?;

    info!(
        "Conversation finished after {} turn(s){}.",
        outcome.turns,
        if outcome.said_goodbye { " with a goodbye" } else { " at end of input" }
    );
    Ok(())
}

/// Runs one conversation reading from `input` and writing to `output`.
pub fn run_session<R: BufRead, W: Write>(
    engine: &Engine,
    mut input: R,
    mut output: W,
    prompt: bool,
    greet: bool,
) -> Result<ChatOutcome> {
    let mut session = engine.session();
    let mut outcome = ChatOutcome::default();

    if greet {
        writeln!(output, "{}", engine.messages().greeting).context("Failed to write greeting")?;
    }

    let mut line = String::new();
    loop {
        if prompt {
            write!(output, "> ").context("Failed to write prompt")?;
            output.flush().context("Failed to flush output")?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read input line")?;
        if read == 0 {
            debug!("End of input reached.");
            break;
        }

        let text = line.trim_end_matches(['\n', '\r']);
        let response = session.respond(text);
        outcome.turns += 1;
        if !response.reply.is_empty() {
            writeln!(output, "{}", response.reply).context("Failed to write reply")?;
        }
        if response.ended {
            outcome.said_goodbye = response.kind == ReplyKind::Farewell;
            break;
        }
    }

    debug!(state = ?session.state(), turns = session.turns(), "Conversation over");
    output.flush().context("Failed to flush output")?;
    Ok(outcome)
}
