//! Outreach Composer — drafts a personalized message per scored candidate.
//!
//! Flow: plan (strengths, tier, baseline confidence) → prompt → LLM call →
//! extract JSON object → message + confidence.
//!
//! Provider errors and unusable output never fail the request: they degrade to
//! the tier's template paired with the baseline confidence.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::candidate::{round1, Candidate, ScoreBreakdown};
use crate::outreach::extract::extract_json_object;
use crate::outreach::prompts::OUTREACH_PROMPT_TEMPLATE;
use crate::outreach::tone::OutreachTier;

const STRENGTH_THRESHOLD: f64 = 7.5;
const AREA_THRESHOLD: f64 = 6.0;

/// A drafted message and how much to trust its personalization (0–10).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outreach {
    pub message: String,
    pub confidence: f64,
}

/// Everything derived from the candidate before the model is called.
#[derive(Debug, Clone)]
pub struct OutreachPlan {
    pub tier: OutreachTier,
    pub fit_score: f64,
    pub strengths: Vec<String>,
    pub areas: Vec<String>,
    pub baseline_confidence: f64,
}

impl OutreachPlan {
    pub fn for_candidate(candidate: &Candidate) -> Self {
        let fit_score = candidate.fit_score.unwrap_or(0.0);
        let strengths = dimensions_at_least(candidate.score_breakdown.as_ref(), STRENGTH_THRESHOLD);
        let areas = dimensions_at_least(candidate.score_breakdown.as_ref(), AREA_THRESHOLD);
        let baseline_confidence =
            baseline_confidence(fit_score, &candidate.headline, strengths.len());

        Self {
            tier: OutreachTier::from_fit_score(fit_score),
            fit_score,
            strengths,
            areas,
            baseline_confidence,
        }
    }

    pub fn strengths_text(&self) -> String {
        self.strengths.join(", ")
    }

    pub fn areas_text(&self) -> String {
        self.areas.join(", ")
    }

    /// Template message for this tier with the baseline confidence.
    pub fn fallback(&self, candidate: &Candidate) -> Outreach {
        Outreach {
            message: self.tier.fallback_message(
                &candidate.name,
                &candidate.headline,
                &self.strengths_text(),
            ),
            confidence: self.baseline_confidence,
        }
    }
}

/// `"<dimension> (<score>/10)"` for every dimension scoring at least `threshold`.
fn dimensions_at_least(breakdown: Option<&ScoreBreakdown>, threshold: f64) -> Vec<String> {
    breakdown
        .map(|b| {
            b.entries()
                .filter(|(_, score)| *score >= threshold)
                .map(|(dimension, score)| format!("{dimension} ({score}/10)"))
                .collect()
        })
        .unwrap_or_default()
}

/// Confidence computed without the model:
/// fit score, +0.5 for a headline over 20 chars, +0.5 for ≥3 strengths
/// (+0.2 for ≥1), clamped to [5, 10].
pub fn baseline_confidence(fit_score: f64, headline: &str, strength_count: usize) -> f64 {
    let mut confidence = fit_score;
    if headline.chars().count() > 20 {
        confidence += 0.5;
    }
    if strength_count >= 3 {
        confidence += 0.5;
    } else if strength_count >= 1 {
        confidence += 0.2;
    }
    round1(confidence.clamp(5.0, 10.0))
}

/// Drafts outreach through the LLM client.
#[derive(Clone)]
pub struct OutreachComposer {
    llm: LlmClient,
}

impl OutreachComposer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    pub async fn compose(&self, candidate: &Candidate, job_description: &str) -> Outreach {
        let plan = OutreachPlan::for_candidate(candidate);
        let prompt = build_prompt(candidate, job_description, &plan);

        let raw = match self.llm.call_text(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Outreach generation failed for {}: {e}; using {:?} template",
                    candidate.name, plan.tier
                );
                return plan.fallback(candidate);
            }
        };

        match extract_json_object(&raw) {
            Some(object) => {
                debug!("Extracted outreach object for {}", candidate.name);
                from_model_object(&object, candidate, &plan)
            }
            None => {
                warn!(
                    "No usable JSON object in model output for {}; using {:?} template",
                    candidate.name, plan.tier
                );
                debug!("Raw model output: {raw}");
                plan.fallback(candidate)
            }
        }
    }
}

/// Model values win where present and valid; gaps are filled from the plan.
fn from_model_object(
    object: &Map<String, Value>,
    candidate: &Candidate,
    plan: &OutreachPlan,
) -> Outreach {
    let message = object
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    let confidence = object
        .get("confidence")
        .and_then(|value| match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|c| c.is_finite())
        .map(|c| round1(c.clamp(0.0, 10.0)));

    let fallback = plan.fallback(candidate);
    Outreach {
        message: message.unwrap_or(fallback.message),
        confidence: confidence.unwrap_or(fallback.confidence),
    }
}

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

/// Fills the outreach template in one pass over the template text, so
/// substituted candidate and user text is never scanned for placeholders.
pub fn build_prompt(candidate: &Candidate, job_description: &str, plan: &OutreachPlan) -> String {
    let breakdown = candidate
        .score_breakdown
        .map(|b| {
            b.entries()
                .map(|(dimension, score)| format!("- {dimension}: {score}/10"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_else(|| "- not scored".to_string());

    let or_none = |text: String| if text.is_empty() { "none".to_string() } else { text };
    let values: HashMap<&str, String> = HashMap::from([
        ("format_instruction", JSON_ONLY_INSTRUCTION.to_string()),
        ("fit_score", plan.fit_score.to_string()),
        ("breakdown", breakdown),
        ("strengths", or_none(plan.strengths_text())),
        ("areas", or_none(plan.areas_text())),
        ("tone", plan.tier.tone().to_string()),
        ("urgency", plan.tier.urgency().to_string()),
        ("suggested_confidence", plan.baseline_confidence.to_string()),
        ("profile_url", candidate.profile_url.clone()),
        ("headline", candidate.headline.clone()),
        ("name", candidate.name.clone()),
        ("job_description", job_description.to_string()),
    ]);

    PLACEHOLDER
        .replace_all(OUTREACH_PROMPT_TEMPLATE, |caps: &Captures| {
            values
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fit_scoring::{FitScorer, HeuristicFitScorer, StaticFitScorer};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    const JOB: &str = "Backend engineer, Rust and AWS, Seattle";

    fn scored(headline: &str) -> Candidate {
        HeuristicFitScorer.score(Candidate::new(
            "Ada Lovelace",
            headline,
            "https://www.linkedin.com/in/ada",
        ))
    }

    fn composer(base_url: &str) -> OutreachComposer {
        let llm = LlmClient::new(
            "test-key".to_string(),
            base_url,
            "gemini-2.0-flash",
            Duration::from_secs(5),
        )
        .unwrap();
        OutreachComposer::new(llm)
    }

    async fn mock_reply(server: &MockServer, text: &str) {
        let body = json!({"candidates": [{"content": {"parts": [{"text": text}]}}]});
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(body);
            })
            .await;
    }

    #[test]
    fn test_baseline_confidence_formula() {
        // 7.0 + 0.5 (long headline) + 0.5 (three strengths)
        assert_eq!(baseline_confidence(7.0, "Senior Software Engineer", 3), 8.0);
        // 7.0 + 0.2 (one strength), short headline
        assert_eq!(baseline_confidence(7.0, "Engineer", 1), 7.2);
        assert_eq!(baseline_confidence(6.3, "Engineer", 0), 6.3);
    }

    #[test]
    fn test_baseline_confidence_clamped() {
        assert_eq!(baseline_confidence(3.0, "", 0), 5.0);
        assert_eq!(baseline_confidence(9.8, "A very long headline indeed", 4), 10.0);
    }

    #[test]
    fn test_plan_strengths_and_areas() {
        let candidate = StaticFitScorer.score(Candidate::new("Ada", "Engineer", "url"));
        let plan = OutreachPlan::for_candidate(&candidate);

        assert_eq!(
            plan.strengths,
            vec!["trajectory (8/10)", "company (7.5/10)", "skills (9/10)"]
        );
        assert_eq!(plan.areas.len(), 6);
        assert_eq!(plan.areas[0], "education (7/10)");
        assert_eq!(plan.tier, OutreachTier::Good);
        // 7.7 + 0.5 (three strengths); "Engineer" is short
        assert_eq!(plan.baseline_confidence, 8.2);
    }

    #[test]
    fn test_plan_for_unscored_candidate() {
        let plan = OutreachPlan::for_candidate(&Candidate::new("Ada", "N/A", "url"));
        assert!(plan.strengths.is_empty());
        assert_eq!(plan.tier, OutreachTier::Exploratory);
        assert_eq!(plan.baseline_confidence, 5.0);
    }

    #[test]
    fn test_prompt_embeds_candidate_job_and_style() {
        let candidate = scored("Senior Software Engineer, 5+ years, AWS, React, San Francisco");
        let plan = OutreachPlan::for_candidate(&candidate);
        let prompt = build_prompt(&candidate, JOB, &plan);

        assert!(prompt.contains("Ada Lovelace"));
        assert!(prompt.contains("Senior Software Engineer, 5+ years"));
        assert!(prompt.contains("https://www.linkedin.com/in/ada"));
        assert!(prompt.contains(JOB));
        assert!(prompt.contains("- trajectory: 8.5/10"));
        assert!(prompt.contains("Tone: positive"));
        assert!(prompt.contains("Urgency: moderate"));
        assert!(prompt.contains(&plan.baseline_confidence.to_string()));
        assert!(prompt.contains("\"confidence\""));
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{format_instruction}"));
    }

    #[test]
    fn test_prompt_leaves_user_braces_alone() {
        let candidate = scored("Engineer");
        let plan = OutreachPlan::for_candidate(&candidate);
        let prompt = build_prompt(&candidate, "Role mentions {tone} literally", &plan);
        assert!(prompt.contains("Role mentions {tone} literally"));
    }

    #[test]
    fn test_prompt_keeps_placeholder_text_in_candidate_name() {
        let mut candidate = scored("Engineer");
        candidate.name = "{job_description}".to_string();
        let plan = OutreachPlan::for_candidate(&candidate);
        let prompt = build_prompt(&candidate, "Staff engineer, payments", &plan);
        assert!(prompt.contains("{job_description}"));
        assert_eq!(prompt.matches("Staff engineer, payments").count(), 1);
    }

    #[test]
    fn test_model_object_fills_gaps_from_plan() {
        let candidate = scored("Engineer");
        let plan = OutreachPlan::for_candidate(&candidate);

        let object = json!({"confidence": "8.25"}).as_object().cloned().unwrap();
        let outreach = from_model_object(&object, &candidate, &plan);
        assert_eq!(outreach.confidence, 8.3);
        assert_eq!(outreach.message, plan.fallback(&candidate).message);

        let object = json!({"message": "Hi Ada!", "confidence": 42})
            .as_object()
            .cloned()
            .unwrap();
        let outreach = from_model_object(&object, &candidate, &plan);
        assert_eq!(outreach.message, "Hi Ada!");
        assert_eq!(outreach.confidence, 10.0);
    }

    #[tokio::test]
    async fn test_compose_uses_model_output() {
        let server = MockServer::start_async().await;
        mock_reply(
            &server,
            "```json\n{\"message\": \"Hi Ada, loved your AWS work.\", \"confidence\": 8.7}\n```",
        )
        .await;

        let candidate = scored("Senior Software Engineer, 5+ years, AWS, React, San Francisco");
        let outreach = composer(&server.base_url()).compose(&candidate, JOB).await;

        assert_eq!(outreach.message, "Hi Ada, loved your AWS work.");
        assert_eq!(outreach.confidence, 8.7);
    }

    #[tokio::test]
    async fn test_compose_free_text_falls_back_to_template() {
        let server = MockServer::start_async().await;
        mock_reply(&server, "Sorry, I can't help with that request.").await;

        let candidate = scored("Senior Software Engineer, 5+ years, AWS, React, San Francisco");
        let plan = OutreachPlan::for_candidate(&candidate);
        let outreach = composer(&server.base_url()).compose(&candidate, JOB).await;

        assert_eq!(outreach, plan.fallback(&candidate));
        assert!(outreach.message.contains("Ada Lovelace"));
        assert_eq!(outreach.confidence, plan.baseline_confidence);
    }

    #[tokio::test]
    async fn test_compose_provider_error_falls_back() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(500).body("upstream exploded");
            })
            .await;

        let candidate = scored("Junior developer");
        let plan = OutreachPlan::for_candidate(&candidate);
        let outreach = composer(&server.base_url()).compose(&candidate, JOB).await;

        assert_eq!(outreach, plan.fallback(&candidate));
    }
}
