//! Fit Scoring — pluggable, trait-based scorer that rates a candidate headline.
//!
//! Default: `HeuristicFitScorer` (keyword tiers over the headline, deterministic).
//! Offline: `StaticFitScorer` (fixed table, ignores the candidate).
//!
//! `AppState` holds an `Arc<dyn FitScorer>`, chosen at startup via `SCORER_BACKEND`.

use std::str::FromStr;
use std::sync::Arc;

use crate::models::candidate::{round1, Candidate, ScoreBreakdown, ScoreWeights};
use crate::scoring::keywords::{
    count_mentions, tier_score, trajectory_score, COMPANY_BASELINE, COMPANY_TIERS,
    EDUCATION_BASELINE, EDUCATION_TIERS, LOCATION_BASELINE, LOCATION_TIERS, SKILLS_BASELINE,
    SKILL_INCREMENT, TECH_SKILLS, TENURE_BASELINE, TENURE_TIERS,
};

const MIN_DIMENSION_SCORE: f64 = 5.0;
const MAX_DIMENSION_SCORE: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer trait. Pure and synchronous: no I/O, no shared state.
///
/// Carried in `AppState` as `Arc<dyn FitScorer>`.
pub trait FitScorer: Send + Sync {
    /// Returns the candidate with `fit_score` and `score_breakdown` populated.
    fn score(&self, candidate: Candidate) -> Candidate;

    /// "heuristic" or "static", for logs.
    fn backend(&self) -> &'static str;
}

/// Which scorer the process runs with. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerBackend {
    #[default]
    Heuristic,
    Static,
}

impl ScorerBackend {
    pub fn build(self) -> Arc<dyn FitScorer> {
        match self {
            ScorerBackend::Heuristic => Arc::new(HeuristicFitScorer),
            ScorerBackend::Static => Arc::new(StaticFitScorer),
        }
    }
}

impl FromStr for ScorerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(ScorerBackend::Heuristic),
            "static" => Ok(ScorerBackend::Static),
            other => Err(format!(
                "unknown scorer backend '{other}' (expected 'heuristic' or 'static')"
            )),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicFitScorer — default
// ────────────────────────────────────────────────────────────────────────────

/// Derives every dimension from keyword tiers in the lower-cased headline.
///
/// Each dimension is rounded to one decimal and clamped to [5, 10], then
/// weighted with `ScoreWeights::HEURISTIC`.
pub struct HeuristicFitScorer;

impl FitScorer for HeuristicFitScorer {
    fn score(&self, candidate: Candidate) -> Candidate {
        let breakdown = heuristic_breakdown(&candidate.headline);
        with_scores(candidate, breakdown, &ScoreWeights::HEURISTIC)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

fn heuristic_breakdown(headline: &str) -> ScoreBreakdown {
    let text = headline.to_lowercase();

    let skills_matched = count_mentions(&text, TECH_SKILLS);
    let skills = (SKILLS_BASELINE + SKILL_INCREMENT * skills_matched as f64).min(10.0);

    ScoreBreakdown {
        education: clamp_dimension(tier_score(&text, EDUCATION_TIERS, EDUCATION_BASELINE)),
        trajectory: clamp_dimension(trajectory_score(&text)),
        company: clamp_dimension(tier_score(&text, COMPANY_TIERS, COMPANY_BASELINE)),
        skills: clamp_dimension(skills),
        location: clamp_dimension(tier_score(&text, LOCATION_TIERS, LOCATION_BASELINE)),
        tenure: clamp_dimension(tier_score(&text, TENURE_TIERS, TENURE_BASELINE)),
    }
}

fn clamp_dimension(score: f64) -> f64 {
    round1(score).clamp(MIN_DIMENSION_SCORE, MAX_DIMENSION_SCORE)
}

// ────────────────────────────────────────────────────────────────────────────
// StaticFitScorer — offline mode
// ────────────────────────────────────────────────────────────────────────────

/// Fixed breakdown for every candidate. Kept as a degraded mode for demos
/// without meaningful headline data.
pub struct StaticFitScorer;

pub const STATIC_BREAKDOWN: ScoreBreakdown = ScoreBreakdown {
    education: 7.0,
    trajectory: 8.0,
    company: 7.5,
    skills: 9.0,
    location: 6.0,
    tenure: 7.0,
};

impl FitScorer for StaticFitScorer {
    fn score(&self, candidate: Candidate) -> Candidate {
        with_scores(candidate, STATIC_BREAKDOWN, &ScoreWeights::STATIC)
    }

    fn backend(&self) -> &'static str {
        "static"
    }
}

fn with_scores(
    mut candidate: Candidate,
    breakdown: ScoreBreakdown,
    weights: &ScoreWeights,
) -> Candidate {
    candidate.fit_score = Some(breakdown.weighted_score(weights));
    candidate.score_breakdown = Some(breakdown);
    candidate
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::Dimension;

    fn candidate(headline: &str) -> Candidate {
        Candidate::new("Test Person", headline, "https://www.linkedin.com/in/test")
    }

    fn breakdown_of(scored: &Candidate) -> ScoreBreakdown {
        scored.score_breakdown.expect("scored candidate has a breakdown")
    }

    const HEADLINES: &[&str] = &[
        "",
        "N/A",
        "Senior Software Engineer, 5+ years, AWS, React, San Francisco",
        "PhD candidate in machine learning, Python, Rust, remote",
        "CTO & Co-Founder | 15+ years | Kubernetes, Docker, AWS, GCP, Azure, Go",
        "Junior developer, intern at Google, Seattle",
        "Python Java JavaScript TypeScript React Angular Vue AWS Azure GCP Docker \
         Kubernetes SQL PostgreSQL MongoDB machine learning AI ML data science",
        "Freelance consultant, MBA, 3+ years, NYC",
    ];

    #[test]
    fn test_reference_headline_scores() {
        let scored = HeuristicFitScorer
            .score(candidate("Senior Software Engineer, 5+ years, AWS, React, San Francisco"));
        let b = breakdown_of(&scored);

        assert_eq!(b.trajectory, 8.5);
        assert_eq!(b.location, 8.5);
        assert_eq!(b.tenure, 8.0);
        assert!(b.skills >= 7.6, "skills was {}", b.skills);
        assert_eq!(b.education, 6.0);
        assert_eq!(b.company, 6.0);
        // 0.9 + 1.7 + 0.9 + 1.9 + 0.85 + 1.2 = 7.45
        assert_eq!(scored.fit_score, Some(7.5));
    }

    #[test]
    fn test_heuristic_dimensions_stay_in_range() {
        for headline in HEADLINES {
            let b = breakdown_of(&HeuristicFitScorer.score(candidate(headline)));
            for (dimension, score) in b.entries() {
                assert!(
                    (5.0..=10.0).contains(&score),
                    "{dimension} = {score} out of range for {headline:?}"
                );
            }
        }
    }

    #[test]
    fn test_fit_score_is_weighted_sum_of_breakdown() {
        for headline in HEADLINES {
            let scored = HeuristicFitScorer.score(candidate(headline));
            let b = breakdown_of(&scored);
            let expected: f64 = Dimension::ALL
                .iter()
                .map(|d| b.get(*d) * ScoreWeights::HEURISTIC.get(*d))
                .sum();
            assert_eq!(scored.fit_score, Some(round1(expected)), "for {headline:?}");
        }
    }

    #[test]
    fn test_education_tiers() {
        let score = |h: &str| breakdown_of(&HeuristicFitScorer.score(candidate(h))).education;
        assert_eq!(score("PhD in Computer Science"), 9.5);
        assert_eq!(score("MBA, product lead"), 8.5);
        assert_eq!(score("Bachelor's in physics"), 7.5);
        assert_eq!(score("Self-taught engineer"), 6.0);
        // doctorate outranks master's when both appear
        assert_eq!(score("MSc and PhD"), 9.5);
    }

    #[test]
    fn test_trajectory_tiers() {
        let score = |h: &str| breakdown_of(&HeuristicFitScorer.score(candidate(h))).trajectory;
        assert_eq!(score("VP of Engineering"), 9.5);
        assert_eq!(score("Principal Engineer"), 8.5);
        assert_eq!(score("Lead Data Scientist"), 8.5);
        assert_eq!(score("Engineering Manager"), 7.5);
        assert_eq!(score("Team Lead, Payments"), 7.5);
        assert_eq!(score("Junior Developer"), 5.5);
        assert_eq!(score("Software Engineer"), 6.0);
        assert_eq!(score("MIT graduate, Software Engineer"), 6.0);
    }

    #[test]
    fn test_company_tiers() {
        let score = |h: &str| breakdown_of(&HeuristicFitScorer.score(candidate(h))).company;
        assert_eq!(score("Engineer at Netflix"), 9.0);
        assert_eq!(score("Co-founder of a fintech startup"), 8.5);
        assert_eq!(score("Independent consultant"), 7.0);
        assert_eq!(score("Engineer at Acme"), 6.0);
        assert_eq!(score("Metadata engineer"), 6.0);
        assert_eq!(score("Ex-Googler, backend"), 9.0);
    }

    #[test]
    fn test_skills_capped_at_ten() {
        let b = breakdown_of(&HeuristicFitScorer.score(candidate(HEADLINES[6])));
        assert_eq!(b.skills, 10.0);
    }

    #[test]
    fn test_skills_rounded_to_one_decimal() {
        let b = breakdown_of(&HeuristicFitScorer.score(candidate("Python, AWS, Docker")));
        assert_eq!(b.skills, 8.4);
    }

    #[test]
    fn test_location_and_tenure_tiers() {
        let b = breakdown_of(&HeuristicFitScorer.score(candidate("Remote, 10+ years")));
        assert_eq!(b.location, 7.5);
        assert_eq!(b.tenure, 9.0);

        let b = breakdown_of(&HeuristicFitScorer.score(candidate("Austin, 3+ years")));
        assert_eq!(b.location, 8.5);
        assert_eq!(b.tenure, 7.0);

        let b = breakdown_of(&HeuristicFitScorer.score(candidate("2+ years")));
        assert_eq!(b.tenure, 6.0);

        let b = breakdown_of(&HeuristicFitScorer.score(candidate("25+ years of experience")));
        assert_eq!(b.tenure, 9.0);
    }

    #[test]
    fn test_static_scorer_ignores_headline() {
        for headline in HEADLINES {
            let scored = StaticFitScorer.score(candidate(headline));
            assert_eq!(scored.score_breakdown, Some(STATIC_BREAKDOWN));
            assert_eq!(scored.fit_score, Some(7.7));
        }
    }

    #[test]
    fn test_scoring_preserves_identity_fields() {
        let scored = HeuristicFitScorer.score(candidate("Senior engineer"));
        assert_eq!(scored.name, "Test Person");
        assert_eq!(scored.profile_url, "https://www.linkedin.com/in/test");
        assert!(scored.outreach_message.is_none());
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!("heuristic".parse(), Ok(ScorerBackend::Heuristic));
        assert_eq!(" Static ".parse(), Ok(ScorerBackend::Static));
        assert!("llm".parse::<ScorerBackend>().is_err());
        assert_eq!(ScorerBackend::Static.build().backend(), "static");
        assert_eq!(ScorerBackend::default().build().backend(), "heuristic");
    }
}
