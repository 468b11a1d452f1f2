//! # ELIZA Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for ELIZA, handling loading,
//! merging, validation, and access to configuration data. Configuration is where
//! the engine's tables and fixed messages come from: the built-in table set can be
//! replaced table by table, either inline or through a separate tables file.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` / `ELIZA_CONFIG` (replaces 2 and 3)
//! 2. Project-specific `.eliza.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/eliza/config.toml`
//! 4. Built-in defaults
//!
//! Tables are resolved in three layers: built-in tables, then the tables of
//! `tables_file`, then tables written inline in the configuration. A layer that
//! defines a table replaces that whole table.
//!
//! ## Examples
//!
//! ```toml
//! tables_file = "~/eliza/tables.toml"
//!
//! [session]
//! greeting = "Hello. How are you feeling today?"
//!
//! [[goodbyes]]
//! trigger = "see you"
//! farewell = "See you next week."
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let engine = config::build_engine(&cfg)?;
//! ```
//!
use crate::core::error::{ElizaError, Result};
use crate::engine::{self, builtin, Engine, Messages, Tables};
use crate::engine::{GoodbyePhrase, KeywordEntry, ReflectionPair, ReplyRing};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    /// Separate file holding tables (can use ~). Relative paths are taken
    /// relative to the configuration file that names them.
    pub tables_file: Option<String>,
    #[serde(default)]
    pub keywords: Vec<KeywordEntry>,
    #[serde(default)]
    pub replies: Vec<ReplyRing>,
    #[serde(default)]
    pub reflections: Vec<ReflectionPair>,
    #[serde(default)]
    pub goodbyes: Vec<GoodbyePhrase>,
    /// Directory of the file this configuration was read from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Overrides for the fixed session messages.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    pub greeting: Option<String>,
    pub repeat_warning: Option<String>,
    pub elaborate_fallback: Option<String>,
}

impl Config {
    /// The inline tables of this configuration.
    pub fn inline_tables(&self) -> Tables {
        Tables {
            keywords: self.keywords.clone(),
            replies: self.replies.clone(),
            reflections: self.reflections.clone(),
            goodbyes: self.goodbyes.clone(),
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".eliza.toml";

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read; otherwise the user and
/// project configuration files are discovered and merged.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "eliza") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.eliza.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    config.base_dir = path.parent().map(Path::to_path_buf);
    Ok(config)
}

/// Reads a standalone tables file.
pub fn load_tables_file(path: &Path) -> Result<Tables> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tables file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from tables file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };

    fn pick<T>(user: Vec<T>, project: Vec<T>) -> Vec<T> {
        if project.is_empty() {
            user
        } else {
            project
        }
    }

    let (tables_file, base_dir) = if project_cfg.tables_file.is_some() {
        (project_cfg.tables_file, project_cfg.base_dir)
    } else {
        (user.tables_file, user.base_dir)
    };

    Config {
        session: SessionConfig {
            greeting: project_cfg.session.greeting.or(user.session.greeting),
            repeat_warning: project_cfg
                .session
                .repeat_warning
                .or(user.session.repeat_warning),
            elaborate_fallback: project_cfg
                .session
                .elaborate_fallback
                .or(user.session.elaborate_fallback),
        },
        tables_file,
        keywords: pick(user.keywords, project_cfg.keywords),
        replies: pick(user.replies, project_cfg.replies),
        reflections: pick(user.reflections, project_cfg.reflections),
        goodbyes: pick(user.goodbyes, project_cfg.goodbyes),
        base_dir,
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(tables_file) = &config.tables_file {
        let expanded = PathBuf::from(shellexpand::tilde(tables_file).into_owned());
        let resolved = match &config.base_dir {
            Some(base) if expanded.is_relative() => base.join(expanded),
            _ => expanded,
        };
        debug!("Expanded tables file path: {}", resolved.display());
        config.tables_file = Some(resolved.to_string_lossy().into_owned());
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if let Some(tables_file) = &config.tables_file {
        let path = Path::new(tables_file);
        if !path.is_file() {
            return Err(anyhow!(ElizaError::Configuration(format!(
                "Configured tables file '{}' does not exist or is not a file.",
                path.display()
            ))));
        }
    }
    for (name, value) in [
        ("repeat_warning", &config.session.repeat_warning),
        ("elaborate_fallback", &config.session.elaborate_fallback),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(anyhow!(ElizaError::Configuration(format!(
                "Session message '{name}' cannot be empty."
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

/// Resolves the effective tables: built-in, then `tables_file`, then inline.
pub fn resolve_tables(config: &Config) -> Result<Tables> {
    let mut tables = builtin::default_tables();
    if let Some(tables_file) = &config.tables_file {
        info!("Loading tables from: {}", tables_file);
        tables = tables.overlay(load_tables_file(Path::new(tables_file))?);
    }
    Ok(tables.overlay(config.inline_tables()))
}

/// Resolves the fixed session messages, falling back to the built-in ones.
pub fn resolve_messages(config: &Config) -> Messages {
    let defaults = builtin::default_messages();
    let session = &config.session;
    Messages {
        greeting: session.greeting.clone().unwrap_or(defaults.greeting),
        repeat_warning: session
            .repeat_warning
            .clone()
            .unwrap_or(defaults.repeat_warning),
        elaborate_fallback: session
            .elaborate_fallback
            .clone()
            .unwrap_or(defaults.elaborate_fallback),
    }
}

/// Builds the engine described by `config`.
pub fn build_engine(config: &Config) -> Result<Engine> {
    let Tables {
        keywords,
        replies,
        reflections,
        goodbyes,
    } = resolve_tables(config)?;
    let engine = engine::build_engine(keywords, replies, reflections, goodbyes)
        .context("The configured tables are not usable")?;
    Ok(engine.with_messages(resolve_messages(config)))
}

/// Loads the configuration and builds the engine in one step.
pub fn load_engine(explicit: Option<&Path>) -> Result<Engine> {
    let cfg = load_config(explicit).context("Failed to load ELIZA configuration")?;
    build_engine(&cfg)
}
