//! Axum route handlers for the PDF export API.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::pdf::export::ExportError;
use crate::pdf::EXPORT_FILENAME;
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct ExportRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// POST /api/v1/export
///
/// Renders a question/answer pair as an A4 PDF. With an empty body the last
/// answered question is exported; with both fields set, the given pair is.
pub async fn handle_export(
    State(state): State<AppState>,
    body: Option<axum::Json<ExportRequest>>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let request = body.map(|axum::Json(r)| r).unwrap_or_default();

    let (question, answer) = match (request.question, request.answer) {
        (Some(q), Some(a)) => (q, a),
        (None, None) => {
            let guard = state.last_exchange.read().await;
            let exchange = guard.as_ref().ok_or_else(|| {
                AppError::Validation(
                    "Nenhuma resposta para exportar. Envie uma pergunta primeiro.".to_string(),
                )
            })?;
            info!("exporting cached exchange ({})", exchange.provenance());
            (exchange.question.clone(), exchange.answer.clone())
        }
        _ => {
            return Err(AppError::Validation(
                "Informe pergunta e resposta juntas, ou nenhuma das duas.".to_string(),
            ));
        }
    };

    // Image decoding and PDF assembly are CPU-bound.
    let exporter = state.exporter.clone();
    let bytes = tokio::task::spawn_blocking(move || exporter.export(&question, &answer))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| match e {
            ExportError::RenderUnavailable => AppError::RenderUnavailable,
            other => AppError::Pdf(other.to_string()),
        })?;

    info!("exported PDF ({} bytes)", bytes.len());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{EXPORT_FILENAME}\""))
            .map_err(|e| AppError::Internal(e.into()))?,
    );

    Ok((headers, bytes))
}
