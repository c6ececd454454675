//! Axum route handlers for the Match API.
//!
//! Match endpoints never surface errors for degraded input: empty skill
//! lists or empty texts come back as a neutral zero-score result with HTTP
//! 200, because calling UI code assumes a result object is always present.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::matching::semantic::SemanticMatchResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillScoreRequest {
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub job_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillScoreResponse {
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub struct SemanticMatchRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/skills
///
/// Scores skill-list overlap between a resume and a job posting. Missing or
/// empty lists score 0 rather than erroring.
pub async fn handle_skill_score(
    State(state): State<AppState>,
    Json(request): Json<SkillScoreRequest>,
) -> Json<SkillScoreResponse> {
    let score = state
        .matcher
        .score_skills(&request.resume_skills, &request.job_skills)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("skill scoring failed, returning neutral score: {e}");
            0
        });

    Json(SkillScoreResponse { score })
}

/// POST /api/v1/match/semantic
///
/// Analyzes free-text resume vs job-description coverage. Degraded input and
/// backend failures both resolve to a neutral result.
pub async fn handle_semantic_match(
    State(state): State<AppState>,
    Json(request): Json<SemanticMatchRequest>,
) -> Json<SemanticMatchResult> {
    let result = state
        .matcher
        .analyze_texts(&request.resume_text, &request.jd_text)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("semantic analysis failed, returning neutral result: {e}");
            SemanticMatchResult::analysis_error()
        });

    Json(result)
}
