use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only a missing credential at startup halts the process (handled in
/// `Config::from_env`, before the router exists); everything here is caught
/// at the operation boundary and converted into a response, leaving the rest
/// of the session usable.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("PDF export unavailable")]
    RenderUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                // Raw diagnostic included so the UI can surface it inline.
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    format!("Erro ao chamar o modelo: {msg}"),
                )
            }
            AppError::Pdf(msg) => {
                tracing::error!("PDF error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PDF_ERROR",
                    "Falha ao gerar o PDF".to_string(),
                )
            }
            AppError::RenderUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "PDF_EXPORT_UNAVAILABLE",
                "Exportação PDF indisponível nesta instalação".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
