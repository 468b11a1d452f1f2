//! # ELIZA Tables Check Command
//!
//! File: cli/src/commands/tables/check.rs
//!
//! ## Overview
//!
//! Implements `eliza tables check`. Validation is done by building an engine
//! exactly as `chat` would, so anything this command accepts will not fail in
//! the middle of a conversation.
//!
//! Without a file argument the tables of the effective configuration are
//! checked. With one, that file is layered over the built-in tables the same
//! way a `tables_file` entry in the configuration would be.
//!
//! Example output:
//!
//! ```
//! Tables OK: 42 keywords, 30 reply rings, 16 reflection pairs, 4 goodbye phrases.
//! ```
//!
use crate::core::config;
use crate::core::error::{ElizaError, Result};
use crate::engine::{builtin, Engine, TableSummary};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// # Check Arguments (`CheckArgs`)
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Tables file to check instead of the configured tables.
    pub file: Option<PathBuf>,
}

/// # Handle Tables Check Command (`handle_check`)
pub fn handle_check(args: CheckArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling tables check command...");
    let cfg = config::load_config(config_path).context("Failed to load ELIZA configuration")?;

    let engine = match &args.file {
        Some(file) => {
            if !file.is_file() {
                return Err(anyhow!(ElizaError::FileSystem(format!(
                    "Tables file '{}' does not exist or is not a file.",
                    file.display()
                ))));
            }
            let tables = builtin::default_tables()
                .overlay(config::load_tables_file(file)?);
            Engine::from_tables(tables, config::resolve_messages(&cfg))
                .with_context(|| format!("Tables file '{}' is not usable", file.display()))?
        }
        None => config::build_engine(&cfg)?,
    };

    println!("{}", format_summary(&engine.summary()));
    Ok(())
}

fn format_summary(summary: &TableSummary) -> String {
    format!(
        "Tables OK: {} keywords, {} reply rings, {} reflection pairs, {} goodbye phrases.",
        summary.keywords, summary.rings, summary.reflections, summary.goodbyes
    )
}
