//! # ELIZA Tables Command Group
//!
//! File: cli/src/commands/tables/mod.rs
//!
//! ## Overview
//!
//! This module serves as the entry point and router for the `eliza tables`
//! command group. It defines the available subcommands (`check`, `show`) for
//! working with the keyword, reply, reflection and goodbye tables, and
//! delegates execution to the appropriate submodule handlers.
//!
//! ## Examples
//!
//! ```bash
//! # Validate the tables the current configuration resolves to
//! eliza tables check
//!
//! # Validate a tables file before pointing the configuration at it
//! eliza tables check ./my-tables.toml
//!
//! # Dump the effective reply rings as TOML
//! eliza tables show --section replies
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

/// Contains the handler and arguments for `eliza tables check`.
mod check;
/// Contains the handler and arguments for `eliza tables show`.
mod show;

/// # Tables Command Group Arguments (`TablesArgs`)
#[derive(Parser, Debug)]
pub struct TablesArgs {
    #[command(subcommand)]
    command: TablesCommand,
}

/// # Tables Subcommands (`TablesCommand`)
#[derive(Subcommand, Debug)]
enum TablesCommand {
    /// Validates the effective tables (or a tables file) by building an engine.
    Check(check::CheckArgs),
    /// Prints the effective tables as TOML.
    Show(show::ShowArgs),
}

/// # Handle Tables Command (`handle_tables`)
///
/// Dispatches to the selected `tables` subcommand.
pub fn handle_tables(args: TablesArgs, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        TablesCommand::Check(args) => check::handle_check(args, config_path)?,
        TablesCommand::Show(args) => show::handle_show(args, config_path)?,
    }
    Ok(())
}
