//! Shared application state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::assist::Mode;
use crate::llm_client::GeminiClient;
use crate::pdf::PdfExporter;
use crate::sketch::Verdict;

/// The last question/answer pair, kept so export and sketch-prompt download
/// work without resending the text. Last write wins.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
    pub model: String,
    pub mode: Mode,
    pub verdict: Option<Verdict>,
}

#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
    pub exporter: Arc<PdfExporter>,
    /// Models that support generation, fetched once at startup.
    pub models: Arc<Vec<String>>,
    pub default_model: String,
    pub last_exchange: Arc<RwLock<Option<Exchange>>>,
}

impl Exchange {
    /// One-line description of the exchange's provenance, used when the
    /// cached pair is picked up by a later operation.
    pub fn provenance(&self) -> String {
        format!("model={}, mode={:?}", self.model, self.mode)
    }
}

impl AppState {
    pub fn new(llm: GeminiClient, exporter: PdfExporter, models: Vec<String>) -> Self {
        let default_model = models
            .first()
            .cloned()
            .unwrap_or_else(|| "models/gemini-2.0-flash".to_string());
        Self {
            llm,
            exporter: Arc::new(exporter),
            models: Arc::new(models),
            default_model,
            last_exchange: Arc::new(RwLock::new(None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_provenance_names_model_and_mode() {
        let exchange = Exchange {
            question: "pergunta".to_string(),
            answer: "resposta".to_string(),
            model: "models/gemini-2.0-flash".to_string(),
            mode: Mode::Clinical,
            verdict: None,
        };
        let provenance = exchange.provenance();
        assert!(provenance.contains("models/gemini-2.0-flash"));
        assert!(provenance.contains("Clinical"));
    }

    #[test]
    fn test_default_model_falls_back_when_list_is_empty() {
        let state = AppState::new(
            GeminiClient::new("test-key".to_string()),
            PdfExporter::new("assets/banner.pdf.a4.png"),
            Vec::new(),
        );
        assert_eq!(state.default_model, "models/gemini-2.0-flash");
    }
}
