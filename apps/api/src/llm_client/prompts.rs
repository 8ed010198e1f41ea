// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Formatting instruction that asks for a bare JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond ONLY with a raw JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include any text before or after the JSON object.";
