//! Match engine seam: pluggable, trait-based access to the two matchers.
//!
//! Default: `OverlapEngine` (pure-Rust, fast, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn MatchEngine>`, so a semantic backend with
//! different internals can be swapped in without touching handlers.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::keyword::keyword_score;
use crate::matching::semantic::{semantic_match, SemanticMatchResult};

/// The match engine trait. Implement this to swap scoring backends without
/// touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn MatchEngine>`.
#[async_trait]
pub trait MatchEngine: Send + Sync {
    /// Skill-list overlap as a whole percentage in [0, 100].
    async fn score_skills(
        &self,
        resume_skills: &[String],
        job_skills: &[String],
    ) -> Result<u32, AppError>;

    /// Free-text keyword analysis of resume vs job description.
    async fn analyze_texts(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<SemanticMatchResult, AppError>;
}

/// Default engine: in-process keyword overlap and text analysis. The pure
/// matchers cannot fail, so this backend always returns `Ok`.
pub struct OverlapEngine;

#[async_trait]
impl MatchEngine for OverlapEngine {
    async fn score_skills(
        &self,
        resume_skills: &[String],
        job_skills: &[String],
    ) -> Result<u32, AppError> {
        Ok(keyword_score(resume_skills, job_skills))
    }

    async fn analyze_texts(
        &self,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<SemanticMatchResult, AppError> {
        Ok(semantic_match(resume_text, jd_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_score_skills_delegates_to_keyword_matcher() {
        let engine = OverlapEngine;
        let resume = vec!["Rust".to_string()];
        let job = vec!["rust".to_string(), "go".to_string()];
        let score = engine.score_skills(&resume, &job).await.unwrap();
        assert_eq!(score, 50);
    }

    #[tokio::test]
    async fn test_analyze_texts_delegates_to_semantic_matcher() {
        let engine = OverlapEngine;
        let result = engine
            .analyze_texts("rust experience at scale", "rust experience")
            .await
            .unwrap();
        assert_eq!(result.score, 100);
        assert!(result.feedback.starts_with("Excellent match!"));
    }

    #[tokio::test]
    async fn test_engine_is_usable_as_trait_object() {
        let engine: std::sync::Arc<dyn MatchEngine> = std::sync::Arc::new(OverlapEngine);
        let score = engine.score_skills(&[], &[]).await.unwrap();
        assert_eq!(score, 0);
    }
}
