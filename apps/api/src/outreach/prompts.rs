// LLM prompt template for outreach drafting.

/// Outreach prompt template.
/// Replace: {name}, {headline}, {profile_url}, {fit_score}, {breakdown},
///          {strengths}, {areas}, {job_description}, {tone}, {urgency},
///          {suggested_confidence}, {format_instruction}
pub const OUTREACH_PROMPT_TEMPLATE: &str = r#"You are a technical recruiter writing a first-touch outreach message.

CANDIDATE:
- Name: {name}
- Headline: {headline}
- Profile: {profile_url}
- Overall fit score: {fit_score}/10

SCORE BREAKDOWN:
{breakdown}

Key strengths: {strengths}
Relevant areas: {areas}

JOB:
{job_description}

STYLE:
- Tone: {tone}
- Urgency: {urgency}
- Keep it short (3-5 sentences) and personal: reference the candidate's headline and strengths.
- Do NOT invent facts that are not in the headline.

CONFIDENCE:
Estimate how well-personalized and reliable this message is on a 1-10 scale.
A reasonable starting point based on profile completeness is {suggested_confidence}.

{format_instruction}
Use exactly this shape:
{
  "message": "<outreach message>",
  "confidence": {suggested_confidence}
}"#;
