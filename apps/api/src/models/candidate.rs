use std::fmt;

use serde::{Deserialize, Serialize};

/// A sourced profile. The Finder creates it bare, the scorer fills in the
/// score fields and the orchestrator attaches the outreach fields.
/// Lives for one request only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub headline: String,
    pub profile_url: String,
    /// Guessed from the profile slug; presentation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<ScoreBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outreach_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        headline: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            headline: headline.into(),
            profile_url: profile_url.into(),
            github_url: None,
            fit_score: None,
            score_breakdown: None,
            outreach_message: None,
            confidence: None,
        }
    }

    /// Fit score used for ranking; unscored candidates sort last.
    pub fn rank_score(&self) -> f64 {
        self.fit_score.unwrap_or(0.0)
    }
}

/// The six named scoring dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Education,
    Trajectory,
    Company,
    Skills,
    Location,
    Tenure,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Education,
        Dimension::Trajectory,
        Dimension::Company,
        Dimension::Skills,
        Dimension::Location,
        Dimension::Tenure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Education => "education",
            Dimension::Trajectory => "trajectory",
            Dimension::Company => "company",
            Dimension::Skills => "skills",
            Dimension::Location => "location",
            Dimension::Tenure => "tenure",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-dimension sub-scores on a 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub education: f64,
    pub trajectory: f64,
    pub company: f64,
    pub skills: f64,
    pub location: f64,
    pub tenure: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Education => self.education,
            Dimension::Trajectory => self.trajectory,
            Dimension::Company => self.company,
            Dimension::Skills => self.skills,
            Dimension::Location => self.location,
            Dimension::Tenure => self.tenure,
        }
    }

    /// Dimension/score pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Weighted sum rounded to one decimal. This is the fit score.
    pub fn weighted_score(&self, weights: &ScoreWeights) -> f64 {
        let total: f64 = self.entries().map(|(d, score)| score * weights.get(d)).sum();
        round1(total)
    }
}

/// Per-dimension weights; each scorer variant carries its own set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub education: f64,
    pub trajectory: f64,
    pub company: f64,
    pub skills: f64,
    pub location: f64,
    pub tenure: f64,
}

impl ScoreWeights {
    /// Weights of the content-derived heuristic scorer.
    pub const HEURISTIC: ScoreWeights = ScoreWeights {
        education: 0.15,
        trajectory: 0.20,
        company: 0.15,
        skills: 0.25,
        location: 0.10,
        tenure: 0.15,
    };

    /// Weights of the fixed-table scorer.
    pub const STATIC: ScoreWeights = ScoreWeights {
        education: 0.2,
        trajectory: 0.2,
        company: 0.15,
        skills: 0.25,
        location: 0.1,
        tenure: 0.1,
    };

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Education => self.education,
            Dimension::Trajectory => self.trajectory,
            Dimension::Company => self.company,
            Dimension::Skills => self.skills,
            Dimension::Location => self.location,
            Dimension::Tenure => self.tenure,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::HEURISTIC
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
