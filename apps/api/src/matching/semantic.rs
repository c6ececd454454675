//! Semantic text matcher: compares free-text resume and job-description
//! strings via extracted keywords, returning a score, the matched/missing
//! keyword breakdown, and a human-readable feedback line.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::stem::stem;
use crate::matching::tokenize::{extract_keywords, tokenize};

/// Missing keywords reported back to the caller, at most.
const MISSING_REPORT_LIMIT: usize = 10;

/// Missing keywords quoted inside the feedback sentence, at most.
const FEEDBACK_SUGGESTION_LIMIT: usize = 5;

const MISSING_DATA_FEEDBACK: &str = "Could not analyze due to missing data.";
const ANALYSIS_ERROR_FEEDBACK: &str = "An error occurred during analysis.";

/// Result of matching a resume against a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticMatchResult {
    /// Percentage of job-description keywords covered by the resume, 0–100.
    pub score: u32,
    pub matched_keywords: Vec<String>,
    /// First entries of the missing list, truncated to a reporting limit.
    pub missing_keywords: Vec<String>,
    pub feedback: String,
}

impl SemanticMatchResult {
    fn degraded(feedback: &str) -> Self {
        Self {
            score: 0,
            matched_keywords: Vec::new(),
            missing_keywords: Vec::new(),
            feedback: feedback.to_string(),
        }
    }

    /// Neutral result for a failed analysis. The engine contract is that
    /// callers always receive a result, never an error.
    pub fn analysis_error() -> Self {
        Self::degraded(ANALYSIS_ERROR_FEEDBACK)
    }
}

/// Internal analysis outcome, resolved to the neutral literal at the public
/// boundary (see [`semantic_match`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Analysis {
    Complete {
        score: u32,
        matched: Vec<String>,
        missing: Vec<String>,
    },
    MissingData,
}

/// Matches resume text against job-description text. Never fails: absent
/// input degrades to a zero-valued result with an explanatory feedback line.
pub fn semantic_match(resume_text: &str, jd_text: &str) -> SemanticMatchResult {
    resolve(analyze(resume_text, jd_text))
}

/// Core analysis: tokenize both texts, extract candidate keywords from the
/// job description, and partition them by presence in the resume. A keyword
/// is present if it occurs literally in the resume or if its stem equals the
/// stem of some resume token.
pub(crate) fn analyze(resume_text: &str, jd_text: &str) -> Analysis {
    if resume_text.is_empty() || jd_text.is_empty() {
        return Analysis::MissingData;
    }

    let resume_tokens = tokenize(resume_text);
    let jd_tokens = tokenize(jd_text);
    let candidates = extract_keywords(&jd_tokens);

    if candidates.is_empty() {
        return Analysis::Complete {
            score: 0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let resume_words: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();
    let resume_stems: HashSet<String> = resume_tokens.iter().map(|t| stem(t)).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for keyword in candidates {
        let present =
            resume_words.contains(keyword.as_str()) || resume_stems.contains(&stem(&keyword));
        if present {
            matched.push(keyword);
        } else {
            missing.push(keyword);
        }
    }

    let total = matched.len() + missing.len();
    let score = (matched.len() as f64 / total as f64 * 100.0).round() as u32;

    Analysis::Complete {
        score,
        matched,
        missing,
    }
}

fn resolve(analysis: Analysis) -> SemanticMatchResult {
    match analysis {
        Analysis::MissingData => SemanticMatchResult::degraded(MISSING_DATA_FEEDBACK),
        Analysis::Complete {
            score,
            matched,
            missing,
        } => {
            let feedback = build_feedback(score, &missing);
            SemanticMatchResult {
                score,
                matched_keywords: matched,
                missing_keywords: missing.into_iter().take(MISSING_REPORT_LIMIT).collect(),
                feedback,
            }
        }
    }
}

/// Feedback line for a score band, highest band first, plus a suggestion
/// sentence listing the first few missing keywords.
fn build_feedback(score: u32, missing: &[String]) -> String {
    let mut feedback = band_feedback(score).to_string();

    if !missing.is_empty() {
        let suggestions: Vec<&str> = missing
            .iter()
            .take(FEEDBACK_SUGGESTION_LIMIT)
            .map(String::as_str)
            .collect();
        feedback.push_str(&format!(
            " Consider adding these keywords to your resume: {}.",
            suggestions.join(", ")
        ));
    }

    feedback
}

fn band_feedback(score: u32) -> &'static str {
    if score >= 90 {
        "Excellent match! Your profile strongly aligns with this job's requirements."
    } else if score >= 75 {
        "Good match. You have most of the skills required for this position."
    } else if score >= 50 {
        "Moderate match. Consider emphasizing relevant skills in your application."
    } else if score >= 30 {
        "Basic match. This role may require additional skills not prominent in your resume."
    } else {
        "Lower match. This position may be seeking a different skill set than what's highlighted in your resume."
    }
}
