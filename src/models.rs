//! Core data models for the categorization engine

use crate::taxonomy::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a classification came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Local,
}

/// Result of a single categorization. Created per request; never stored
/// by the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationResult {
    pub category: Category,
    pub source: Source,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::Remote => "remote",
            Source::Local => "local",
        };
        write!(f, "{}", s)
    }
}
