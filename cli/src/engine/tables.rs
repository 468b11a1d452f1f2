//! # Engine Tables
//!
//! File: cli/src/engine/tables.rs
//!
//! ## Overview
//!
//! Data shapes for the four tables that drive the engine (keywords, reply
//! rings, reflection pairs, goodbye phrases) plus the fixed session
//! messages. The tables are plain data: they are deserialized from TOML,
//! overlaid on one another by the configuration layer, and handed to
//! `build_engine`, which validates them.
//!
//! ## Examples
//!
//! A tables file:
//!
//! ```toml
//! [[keywords]]
//! keyword = "i am "
//! ring = 10
//!
//! [[keywords]]
//! keyword = ""
//! ring = 30
//!
//! [[replies]]
//! id = 10
//! templates = ["Did you come to me because you are*?", "How long have you been*?"]
//!
//! [[replies]]
//! id = 30
//! templates = ["I see.", "Please go on."]
//!
//! [[reflections]]
//! from = " my "
//! to = " your "
//!
//! [[goodbyes]]
//! trigger = "bye"
//! farewell = "Goodbye."
//! ```
//!
use serde::{Deserialize, Serialize};

/// One entry of the keyword table. Order in the table is priority.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeywordEntry {
    /// Substring searched for in the normalized input. Empty for the catch-all.
    pub keyword: String,
    /// Id of the reply ring answering this keyword.
    pub ring: u32,
}

impl KeywordEntry {
    pub fn new(keyword: &str, ring: u32) -> Self {
        Self {
            keyword: keyword.to_string(),
            ring,
        }
    }

    /// Whether this is the catch-all entry.
    pub fn is_default(&self) -> bool {
        self.keyword.is_empty()
    }
}

/// A numbered ring of reply templates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReplyRing {
    pub id: u32,
    pub templates: Vec<String>,
}

impl ReplyRing {
    pub fn new(id: u32, templates: &[&str]) -> Self {
        Self {
            id,
            templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A find/replace rule used to turn the user's phrasing around.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReflectionPair {
    pub from: String,
    pub to: String,
}

impl ReflectionPair {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// A phrase that ends the conversation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GoodbyePhrase {
    pub trigger: String,
    pub farewell: String,
}

impl GoodbyePhrase {
    pub fn new(trigger: &str, farewell: &str) -> Self {
        Self {
            trigger: trigger.to_string(),
            farewell: farewell.to_string(),
        }
    }
}

/// The complete table set, as read from a tables file.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Tables {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<KeywordEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<ReplyRing>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reflections: Vec<ReflectionPair>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goodbyes: Vec<GoodbyePhrase>,
}

impl Tables {
    /// Replaces each table with the one from `upper` when `upper` defines it.
    ///
    /// Tables are replaced whole, never merged entry by entry: priorities
    /// and ring ids only make sense within one table.
    pub fn overlay(self, upper: Tables) -> Tables {
        fn pick<T>(lower: Vec<T>, upper: Vec<T>) -> Vec<T> {
            if upper.is_empty() {
                lower
            } else {
                upper
            }
        }
        Tables {
            keywords: pick(self.keywords, upper.keywords),
            replies: pick(self.replies, upper.replies),
            reflections: pick(self.reflections, upper.reflections),
            goodbyes: pick(self.goodbyes, upper.goodbyes),
        }
    }
}

/// Fixed messages the session uses outside of the reply rings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Printed by the console front end before the first turn.
    pub greeting: String,
    /// Reply to an input the user has just typed.
    pub repeat_warning: String,
    /// Reply when a template needs a clause but the user gave none.
    pub elaborate_fallback: String,
}
