//! # ELIZA Tables Show Command
//!
//! File: cli/src/commands/tables/show.rs
//!
//! ## Overview
//!
//! Implements `eliza tables show`, which prints the effective tables (after
//! all configuration layers are applied) in the tables-file TOML format. The
//! output can be saved and used as a starting point for a custom tables file.
//!
//! The tables are printed as resolved, without building an engine, so broken
//! tables can still be inspected; use `eliza tables check` to validate them.
//!
use crate::core::config;
use crate::core::error::Result;
use crate::engine::Tables;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::Path;
use tracing::info;

/// Which table to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    All,
    Keywords,
    Replies,
    Reflections,
    Goodbyes,
}

/// # Show Arguments (`ShowArgs`)
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Only print one table.
    #[arg(long, short, value_enum, default_value_t = Section::All)]
    pub section: Section,
}

/// # Handle Tables Show Command (`handle_show`)
pub fn handle_show(args: ShowArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling tables show command...");
    let cfg = config::load_config(config_path).context("Failed to load ELIZA configuration")?;
    let tables = config::resolve_tables(&cfg)?;
    print!("{}", render_section(tables, args.section)?);
    Ok(())
}

/// Serializes the selected part of `tables` as TOML.
fn render_section(tables: Tables, section: Section) -> Result<String> {
    let selected = match section {
        Section::All => tables,
        Section::Keywords => Tables {
            keywords: tables.keywords,
            ..Default::default()
        },
        Section::Replies => Tables {
            replies: tables.replies,
            ..Default::default()
        },
        Section::Reflections => Tables {
            reflections: tables.reflections,
            ..Default::default()
        },
        Section::Goodbyes => Tables {
            goodbyes: tables.goodbyes,
            ..Default::default()
        },
    };
    toml::to_string_pretty(&selected).context("Failed to serialize tables as TOML")
}
