//! Axum route handlers for the Assist API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assist::{prompts, Mode};
use crate::errors::AppError;
use crate::sketch::{self, Verdict};
use crate::state::{AppState, Exchange};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub mode: Mode,
    /// Defaults to the first available model.
    pub model: Option<String>,
    /// Defaults per mode; clamped to [0, 1].
    pub temperature: Option<f32>,
    /// When true, the decision model is asked whether a sketch would help.
    #[serde(default = "default_suggest_sketch")]
    pub suggest_sketch: bool,
}

fn default_suggest_sketch() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub model: String,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub default: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ask
///
/// Answers a free-text question in the requested persona, optionally runs the
/// sketch decision, and caches the exchange for later PDF export.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation(
            "A pergunta não pode ser vazia.".to_string(),
        ));
    }

    let model = request
        .model
        .unwrap_or_else(|| state.default_model.clone());
    let temperature = request
        .temperature
        .unwrap_or_else(|| request.mode.default_temperature());

    let prompt = prompts::build_prompt(request.mode, &request.question);
    let answer = state
        .llm
        .generate(&model, &prompt, temperature)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    info!(
        "answered question (mode={:?}, model={}, answer_chars={})",
        request.mode,
        model,
        answer.chars().count()
    );

    let verdict = if request.suggest_sketch {
        Some(sketch::decide(&state.llm, &model, &request.question, &answer).await)
    } else {
        None
    };

    let exchange = Exchange {
        question: request.question,
        answer: answer.clone(),
        model: model.clone(),
        mode: request.mode,
        verdict: verdict.clone(),
    };
    *state.last_exchange.write().await = Some(exchange);

    Ok(Json(AskResponse {
        answer,
        model,
        mode: request.mode,
        verdict,
    }))
}

/// GET /api/v1/models
///
/// Models available for generation, as discovered at startup.
pub async fn handle_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.models.as_ref().clone(),
        default: state.default_model.clone(),
    })
}
