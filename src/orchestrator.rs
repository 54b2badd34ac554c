//! Classification orchestrator
//!
//! Top-level entry point for categorization and finance queries.
//! Decides remote-vs-local per request and recovers from remote failure:
//!
//! INPUT → REMOTE? → VALIDATE → FALLBACK? → RESULT
//!
//! Holds no per-call mutable state, so a shared instance can serve
//! concurrent callers.

use tracing::{info, warn};

use crate::classifier::KeywordClassifier;
use crate::error::CategorizerError;
use crate::models::{ClassificationResult, Source};
use crate::remote::RemoteBackend;
use crate::Result;

/// Advisory returned for queries when no credentials are configured.
pub const OFFLINE_QUERY_ADVISORY: &str = "I'm currently in offline mode. For financial \
advice, please make sure you're tracking your expenses regularly and categorizing them \
properly to understand your spending patterns.";

/// Returned when the remote service fails mid-query. Queries have no
/// local heuristic equivalent, so there is nothing to fall back to.
pub const QUERY_RETRY_MESSAGE: &str = "I'm having trouble connecting to my knowledge \
base. Please try again later.";

pub struct Orchestrator {
    remote: Option<Box<dyn RemoteBackend>>,
}

impl Orchestrator {
    /// Orchestrator backed by a remote service; `None` means offline mode.
    pub fn new(remote: Option<Box<dyn RemoteBackend>>) -> Self {
        Self { remote }
    }

    /// Orchestrator that always classifies locally.
    pub fn offline() -> Self {
        Self { remote: None }
    }

    pub fn remote_available(&self) -> bool {
        self.remote.is_some()
    }

    /// Categorize an expense description.
    ///
    /// A single failed remote attempt triggers immediate local fallback;
    /// no retries. The returned category is always a taxonomy member.
    pub async fn categorize(&self, description: &str) -> Result<ClassificationResult> {
        let description = non_empty(description)?;

        let Some(remote) = &self.remote else {
            info!("No remote credentials configured, classifying locally");
            return Ok(local_result(description));
        };

        match remote.classify_expense(description).await {
            Ok(category) => Ok(ClassificationResult {
                category,
                source: Source::Remote,
            }),
            Err(e) => {
                warn!(
                    "Remote classification failed, falling back to keyword matching: {}",
                    e
                );
                Ok(local_result(description))
            }
        }
    }

    /// Answer a free-text finance question.
    ///
    /// Offline mode and remote failure both resolve to fixed advisory
    /// sentences; the caller always receives a usable answer.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let question = non_empty(question)?;

        let Some(remote) = &self.remote else {
            info!("No remote credentials configured, returning offline advisory");
            return Ok(OFFLINE_QUERY_ADVISORY.to_string());
        };

        match remote.answer_query(question).await {
            Ok(answer) => Ok(answer),
            Err(e) => {
                warn!("Remote query failed: {}", e);
                Ok(QUERY_RETRY_MESSAGE.to_string())
            }
        }
    }
}

fn local_result(description: &str) -> ClassificationResult {
    ClassificationResult {
        category: KeywordClassifier::classify(description),
        source: Source::Local,
    }
}

fn non_empty(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CategorizerError::InvalidInput(
            "text must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Category;
    use async_trait::async_trait;

    /// Backend that always fails with `RemoteUnavailable`
    struct FailingBackend;

    #[async_trait]
    impl RemoteBackend for FailingBackend {
        async fn classify_expense(&self, _description: &str) -> Result<Category> {
            Err(CategorizerError::RemoteUnavailable("injected".to_string()))
        }

        async fn answer_query(&self, _question: &str) -> Result<String> {
            Err(CategorizerError::RemoteUnavailable("injected".to_string()))
        }
    }

    /// Backend with canned replies
    struct CannedBackend {
        category: Category,
        answer: String,
    }

    #[async_trait]
    impl RemoteBackend for CannedBackend {
        async fn classify_expense(&self, _description: &str) -> Result<Category> {
            Ok(self.category)
        }

        async fn answer_query(&self, _question: &str) -> Result<String> {
            Ok(self.answer.clone())
        }
    }

    #[tokio::test]
    async fn test_offline_categorize_uses_local_classifier() {
        let orchestrator = Orchestrator::offline();
        let result = orchestrator
            .categorize("Dinner at an Italian restaurant")
            .await
            .unwrap();
        assert_eq!(result.category, Category::Food);
        assert_eq!(result.source, Source::Local);
    }

    #[tokio::test]
    async fn test_offline_priority_tie_break() {
        let orchestrator = Orchestrator::offline();
        let result = orchestrator.categorize("grocery shopping run").await.unwrap();
        assert_eq!(result.category, Category::Food);
    }

    #[tokio::test]
    async fn test_remote_success_is_tagged_remote() {
        let orchestrator = Orchestrator::new(Some(Box::new(CannedBackend {
            category: Category::Travel,
            answer: "Save 20% of your income.".to_string(),
        })));
        let result = orchestrator.categorize("Flight to Rome").await.unwrap();
        assert_eq!(result.category, Category::Travel);
        assert_eq!(result.source, Source::Remote);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_locally() {
        let orchestrator = Orchestrator::new(Some(Box::new(FailingBackend)));
        let result = orchestrator
            .categorize("Dinner at an Italian restaurant")
            .await
            .unwrap();
        assert_eq!(result.category, Category::Food);
        assert_eq!(result.source, Source::Local);
    }

    #[tokio::test]
    async fn test_fallback_result_is_always_a_taxonomy_member() {
        let orchestrator = Orchestrator::new(Some(Box::new(FailingBackend)));
        for description in ["Dinner", "xyzzy", "hotel in Paris", "12345"] {
            let result = orchestrator.categorize(description).await.unwrap();
            assert!(Category::ALL.contains(&result.category));
        }
    }

    #[tokio::test]
    async fn test_categorize_is_idempotent() {
        let orchestrator = Orchestrator::offline();
        let first = orchestrator.categorize("coffee with friends").await.unwrap();
        let second = orchestrator.categorize("coffee with friends").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let orchestrator = Orchestrator::offline();

        let err = orchestrator.categorize("").await.unwrap_err();
        assert!(matches!(err, CategorizerError::InvalidInput(_)));

        let err = orchestrator.categorize("   ").await.unwrap_err();
        assert!(matches!(err, CategorizerError::InvalidInput(_)));

        let err = orchestrator.ask("\n\t").await.unwrap_err();
        assert!(matches!(err, CategorizerError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_offline_query_returns_advisory_verbatim() {
        let orchestrator = Orchestrator::offline();
        let answer = orchestrator.ask("How do I budget for travel?").await.unwrap();
        assert_eq!(answer, OFFLINE_QUERY_ADVISORY);
    }

    #[tokio::test]
    async fn test_query_failure_returns_retry_message() {
        let orchestrator = Orchestrator::new(Some(Box::new(FailingBackend)));
        let answer = orchestrator.ask("How do I budget for travel?").await.unwrap();
        assert_eq!(answer, QUERY_RETRY_MESSAGE);
    }

    #[tokio::test]
    async fn test_query_success_passes_answer_through() {
        let orchestrator = Orchestrator::new(Some(Box::new(CannedBackend {
            category: Category::Other,
            answer: "Save 20% of your income.".to_string(),
        })));
        let answer = orchestrator.ask("How much should I save?").await.unwrap();
        assert_eq!(answer, "Save 20% of your income.");
    }
}
