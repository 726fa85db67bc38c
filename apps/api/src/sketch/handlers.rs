//! Axum route handlers for the Sketch API.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::sketch::{self, Verdict};
use crate::state::AppState;

pub const SKETCH_PROMPT_FILENAME: &str = "prompt_esboco.txt";

#[derive(Debug, Deserialize)]
pub struct SketchRequest {
    pub question: String,
    pub answer: String,
    pub model: Option<String>,
}

/// POST /api/v1/sketch
///
/// Runs the sketch decision for an arbitrary question/answer pair. The
/// decision itself never fails; only an empty pair is rejected.
pub async fn handle_sketch(
    State(state): State<AppState>,
    Json(request): Json<SketchRequest>,
) -> Result<Json<Verdict>, AppError> {
    if request.question.trim().is_empty() || request.answer.trim().is_empty() {
        return Err(AppError::Validation(
            "Pergunta e resposta são obrigatórias para decidir o esboço.".to_string(),
        ));
    }

    let model = request
        .model
        .unwrap_or_else(|| state.default_model.clone());
    let verdict = sketch::decide(&state.llm, &model, &request.question, &request.answer).await;

    Ok(Json(verdict))
}

/// GET /api/v1/sketch/prompt
///
/// Downloads the sketch prompt of the last answered question as a text file.
pub async fn handle_sketch_prompt(
    State(state): State<AppState>,
) -> Result<(HeaderMap, String), AppError> {
    let guard = state.last_exchange.read().await;
    let prompt = guard
        .as_ref()
        .and_then(|exchange| exchange.verdict.as_ref())
        .filter(|verdict| verdict.need_sketch && !verdict.sketch_prompt.is_empty())
        .map(|verdict| verdict.sketch_prompt.clone())
        .ok_or_else(|| {
            AppError::NotFound("Nenhum prompt de esboço disponível.".to_string())
        })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!(
            "attachment; filename=\"{SKETCH_PROMPT_FILENAME}\""
        ))
        .map_err(|e| AppError::Internal(e.into()))?,
    );

    Ok((headers, prompt))
}
