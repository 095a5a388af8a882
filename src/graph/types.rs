//! Rust types for the compiled project graph.
//!
//! Only the parts the schedule validator reads are modelled: the three action
//! lists and their targets. Everything else the upstream compiler emits is
//! ignored on deserialisation.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledGraph {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub assertions: Vec<Assertion>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// Structured, qualified name of a single action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub schema: String,
    pub name: String,
}

impl Target {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Target {
            database: None,
            schema: schema.into(),
            name: name.into(),
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Canonical `database.schema.name` rendering; empty components are skipped.
    pub fn readable(&self) -> String {
        [
            self.database.as_deref().unwrap_or_default(),
            self.schema.as_str(),
            self.name.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.readable())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub target: Target,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assertion {
    pub target: Target,
}

/// Operations are allowed to exist without a target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub target: Option<Target>,
}
