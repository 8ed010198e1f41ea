//! Sourcing — orchestrates one request end to end.
//!
//! Flow: find profiles → score each (sync, order-preserving) →
//!       compose outreach for all concurrently → sort by fit → top N.
//!
//! Nothing here fails: the Finder and the Composer absorb provider errors.

use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::candidate::Candidate;
use crate::state::AppState;

/// Candidates returned per request.
pub const TOP_N: usize = 10;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcingResponse {
    pub job_id: String,
    /// Count before truncation.
    pub candidates_found: usize,
    pub top_candidates: Vec<Candidate>,
}

/// Runs the full sourcing pipeline for one job description.
pub async fn run_sourcing(state: &AppState, job_description: &str) -> SourcingResponse {
    let job_id = job_id(job_description);

    // Step 1: Find profiles
    let profiles = state.finder.find(job_description).await;
    let candidates_found = profiles.len();
    info!("Job {job_id}: {candidates_found} candidates found");

    // Step 2: Score
    let scored: Vec<Candidate> = profiles
        .into_iter()
        .map(|candidate| state.fit_scorer.score(candidate))
        .collect();

    // Step 3: Outreach, one call per candidate, all in flight together
    let composer = &state.composer;
    let enriched = join_all(scored.into_iter().map(|mut candidate| async move {
        let outreach = composer.compose(&candidate, job_description).await;
        candidate.outreach_message = Some(outreach.message);
        candidate.confidence = Some(outreach.confidence);
        candidate
    }))
    .await;

    // Step 4: Rank
    let top_candidates = rank(enriched, TOP_N);
    info!(
        "Job {job_id}: returning {} candidates (scorer: {})",
        top_candidates.len(),
        state.fit_scorer.backend()
    );

    SourcingResponse {
        job_id,
        candidates_found,
        top_candidates,
    }
}

/// Stable sort, highest fit score first, truncated to `limit`.
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.rank_score().total_cmp(&a.rank_score()));
    candidates.truncate(limit);
    candidates
}

/// Cosmetic id: lower-cased, whitespace runs replaced with `-`.
pub fn job_id(job_description: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&job_description.to_lowercase(), "-")
        .into_owned()
}
