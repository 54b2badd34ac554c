//! SmartSpend expense categorization engine
//!
//! Assigns free-text expense descriptions to a fixed set of spending
//! categories and answers open-ended finance questions:
//! - Remote classification through the Mistral chat API when credentials
//!   are configured
//! - Deterministic keyword fallback when the service is unavailable or
//!   unconfigured
//! - Thin HTTP layer for UI callers, with a per-session interaction log
//!
//! FLOW:
//! INPUT → REMOTE CLASSIFY? → VALIDATE → LOCAL FALLBACK? → RESULT

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod orchestrator;
pub mod remote;
pub mod taxonomy;

pub use error::Result;

// Re-export common types
pub use classifier::KeywordClassifier;
pub use models::{ClassificationResult, Source};
pub use orchestrator::Orchestrator;
pub use taxonomy::Category;
