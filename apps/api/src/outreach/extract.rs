//! Pulls a JSON object out of free-form model output.
//!
//! Two passes over the raw text:
//! 1. the leftmost brace-delimited run that mentions `confidence` and ends at
//!    the first closing brace after it;
//! 2. only when pass 1 finds nothing, the widest `{ … }` span in the text.
//!
//! Whatever slice is chosen must parse as a JSON object, otherwise the
//! extraction fails and the caller falls back.

use once_cell::sync::Lazy;

use regex::Regex;
use serde_json::{Map, Value};

static NARROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]+confidence[^}]+\}").expect("narrow pattern is valid"));

static WIDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("wide pattern is valid"));

/// Returns the brace-delimited slice a parse should be attempted on.
pub fn candidate_slice(text: &str) -> Option<&str> {
    NARROW
        .find(text)
        .or_else(|| WIDE.find(text))
        .map(|m| m.as_str())
}

/// Extracts the first plausible JSON object from `text`.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    let slice = candidate_slice(text)?;
    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
