//! Sketch decision service.
//!
//! Asks the model itself whether a simple didactic sketch would help a given
//! answer, and parses its (possibly dirty) JSON verdict. The decision is
//! advisory: any failure along the way degrades to a "no sketch" verdict
//! instead of an error.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::GeminiClient;

/// How much of the answer is shown to the decision model.
pub const ANSWER_SUMMARY_MAX: usize = 1200;

/// The decision model runs nearly deterministic.
pub const DECISION_TEMPERATURE: f32 = 0.1;

const PARSE_FALLBACK_REASON: &str = "Não consegui interpretar a decisão.";
const CALL_FALLBACK_REASON: &str = "Falha ao decidir esboço.";

/// The decision model's verdict on whether a sketch would help.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    #[serde(default)]
    pub need_sketch: bool,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub sketch_prompt: String,
}

impl Verdict {
    fn declined(reason: &str) -> Self {
        Self {
            need_sketch: false,
            reason: reason.to_string(),
            sketch_prompt: String::new(),
        }
    }
}

/// Asks `model` whether a sketch would help `answer`. Never fails: transport
/// or parse problems yield a declined verdict with an explanatory reason.
pub async fn decide(
    llm: &GeminiClient,
    model: &str,
    question: &str,
    answer: &str,
) -> Verdict {
    let prompt = prompts::build_decision_prompt(question, summarize(answer));
    match llm.generate(model, &prompt, DECISION_TEMPERATURE).await {
        Ok(raw) => parse_verdict(&raw),
        Err(e) => {
            warn!("sketch decision call failed: {e}");
            Verdict::declined(CALL_FALLBACK_REASON)
        }
    }
}

/// Parses the decision model's output. Tries the whole string as JSON first;
/// if the model wrapped the object in prose or code fences, extracts the
/// outermost `{...}` span and tries again. Anything else degrades to a
/// declined verdict.
pub fn parse_verdict(raw: &str) -> Verdict {
    let raw = raw.trim();
    let verdict = serde_json::from_str::<Verdict>(raw)
        .ok()
        .or_else(|| extract_object(raw).and_then(|o| serde_json::from_str::<Verdict>(o).ok()));

    let mut verdict = match verdict {
        Some(v) => v,
        None => return Verdict::declined(PARSE_FALLBACK_REASON),
    };

    verdict.reason = verdict.reason.trim().to_string();
    verdict.sketch_prompt = verdict.sketch_prompt.trim().to_string();
    // A declined verdict never carries a sketch prompt.
    if !verdict.need_sketch {
        verdict.sketch_prompt.clear();
    }
    verdict
}

/// Truncates the answer to the summary window on a char boundary.
fn summarize(answer: &str) -> &str {
    match answer.char_indices().nth(ANSWER_SUMMARY_MAX) {
        Some((byte_index, _)) => &answer[..byte_index],
        None => answer,
    }
}

/// The outermost `{...}` span, if any.
fn extract_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
