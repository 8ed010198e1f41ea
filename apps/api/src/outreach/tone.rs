//! Tone calibration — maps a candidate's fit score to an outreach tier.
//!
//! The tier drives the tone and urgency written into the prompt and picks the
//! fallback template when the model output cannot be used.

use std::fmt;

/// Outreach tier by fit score: ≥8.5, ≥7, ≥6, below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutreachTier {
    Strong,
    Good,
    Moderate,
    Exploratory,
}

impl OutreachTier {
    pub fn from_fit_score(fit_score: f64) -> Self {
        if fit_score >= 8.5 {
            OutreachTier::Strong
        } else if fit_score >= 7.0 {
            OutreachTier::Good
        } else if fit_score >= 6.0 {
            OutreachTier::Moderate
        } else {
            OutreachTier::Exploratory
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            OutreachTier::Strong => Tone::Enthusiastic,
            OutreachTier::Good => Tone::Positive,
            OutreachTier::Moderate => Tone::Professional,
            OutreachTier::Exploratory => Tone::Exploratory,
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self {
            OutreachTier::Strong => Urgency::High,
            OutreachTier::Good => Urgency::Moderate,
            OutreachTier::Moderate => Urgency::Standard,
            OutreachTier::Exploratory => Urgency::Low,
        }
    }

    /// Static message used when the model call or its output fails.
    pub fn fallback_message(&self, name: &str, headline: &str, strengths: &str) -> String {
        let strengths = if strengths.is_empty() {
            "your background"
        } else {
            strengths
        };

        match self {
            OutreachTier::Strong => format!(
                "Hi {name}, your profile really stood out to us. As a {headline}, your strengths in \
                 {strengths} line up closely with a role we're hiring for right now. \
                 Would you be open to a quick call this week?"
            ),
            OutreachTier::Good => format!(
                "Hi {name}, I came across your profile ({headline}) and was impressed by \
                 {strengths}. We have an opening that looks like a strong match. \
                 Would you be interested in learning more?"
            ),
            OutreachTier::Moderate => format!(
                "Hi {name}, I noticed your experience as {headline}. Given {strengths}, \
                 I think you could be a good fit for a role on our team. \
                 Happy to share details if you're curious."
            ),
            OutreachTier::Exploratory => format!(
                "Hi {name}, I came across your profile ({headline}) and wanted to reach out. \
                 We're exploring candidates for a new role and, based on {strengths}, \
                 I'd love to hear whether it might interest you."
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Enthusiastic,
    Positive,
    Professional,
    Exploratory,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Enthusiastic => "enthusiastic",
            Tone::Positive => "positive",
            Tone::Professional => "professional",
            Tone::Exploratory => "exploratory",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    High,
    Moderate,
    Standard,
    Low,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Urgency::High => "high",
            Urgency::Moderate => "moderate",
            Urgency::Standard => "standard",
            Urgency::Low => "low",
        })
    }
}
