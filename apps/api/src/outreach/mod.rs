// Outreach drafting: prompt, tone tiers, model-output extraction, fallback.

pub mod composer;
pub mod extract;
pub mod prompts;
pub mod tone;
