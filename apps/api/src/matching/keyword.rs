//! Keyword-set matcher: coarse percentage overlap between a candidate's
//! skill list and a job's skill list.
//!
//! The public function never fails. Degraded input (either list empty)
//! resolves to a neutral score of 0 so callers always get a usable number.

use crate::matching::stem::stem;

/// Internal scoring outcome. Degraded input maps to the neutral score at the
/// public boundary; keeping the distinction here lets the core logic be
/// tested apart from the never-fail contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScoreOutcome {
    Scored(u32),
    Degraded,
}

impl ScoreOutcome {
    pub(crate) fn resolve(self) -> u32 {
        match self {
            ScoreOutcome::Scored(score) => score,
            ScoreOutcome::Degraded => 0,
        }
    }
}

/// Scores how much of the job's skill list the resume covers, as a whole
/// percentage in [0, 100]. Empty input on either side scores 0.
pub fn keyword_score(resume_skills: &[String], job_skills: &[String]) -> u32 {
    compute_overlap(resume_skills, job_skills).resolve()
}

/// Core overlap computation.
///
/// Each job skill is counted per occurrence: a recruiter listing a skill
/// twice counts it twice in both numerator and denominator. A job skill
/// matches when any resume skill equals it after normalization, or when
/// either normalized string contains the other (job "react" matches resume
/// "react native").
pub(crate) fn compute_overlap(resume_skills: &[String], job_skills: &[String]) -> ScoreOutcome {
    if resume_skills.is_empty() || job_skills.is_empty() {
        return ScoreOutcome::Degraded;
    }

    let resume: Vec<String> = resume_skills.iter().map(|s| normalize_skill(s)).collect();

    let mut matched = 0usize;
    for job_skill in job_skills {
        let job = normalize_skill(job_skill);
        let hit = resume
            .iter()
            .any(|r| *r == job || r.contains(&job) || job.contains(r.as_str()));
        if hit {
            matched += 1;
        }
    }

    let percentage = (matched as f64 / job_skills.len() as f64 * 100.0).round() as u32;
    ScoreOutcome::Scored(percentage)
}

/// Lowercases and trims a skill, then stems each word so minor
/// morphological variants ("Programming" vs "programs") compare equal.
/// Multi-word skills keep single-space separation.
fn normalize_skill(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .map(stem)
        .collect::<Vec<_>>()
        .join(" ")
}
