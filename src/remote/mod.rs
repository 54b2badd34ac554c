//! Remote classification backend
//!
//! Trait seam between the orchestrator and the external text-generation
//! service. The orchestrator only sees `RemoteBackend`; tests substitute
//! failing or canned implementations.

use crate::taxonomy::Category;
use crate::Result;
use async_trait::async_trait;

pub mod mistral;
pub use mistral::MistralClient;

/// Trait for the remote text-generation service
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    /// Categorize an expense description into the taxonomy.
    /// Fails with `RemoteUnavailable` on any transport or payload problem.
    async fn classify_expense(&self, description: &str) -> Result<Category>;

    /// Answer an open-ended finance question. The reply is free-form
    /// prose, not validated against the taxonomy.
    async fn answer_query(&self, question: &str) -> Result<String>;
}
