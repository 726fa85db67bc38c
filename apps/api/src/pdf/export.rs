//! Document Exporter — turns a question/answer exchange into A4 PDF bytes.
//!
//! Orchestrates the two-phase pipeline: resolve the banner, lay out the
//! question block and the titled answer block (`layout`), stamp footers
//! (`stamp`), then serialize with printpdf. Layout and stamping are pure and
//! always compiled; serialization lives behind the `pdf-export` feature and
//! its absence surfaces as `RenderUnavailable` rather than a partial file.

use std::path::PathBuf;

use thiserror::Error;

use super::layout::{layout, Banner, LayoutError, PageGeometry, TextBlock};
use super::stamp::{stamp, FinalDocument};

/// Download filename offered to the browser.
pub const EXPORT_FILENAME: &str = "ensina_feridas_resposta.pdf";

/// Fixed caption drawn on the left of every footer.
pub const FOOTER_TEXT: &str = "PET G10 UFPel - Telemonitoramento de Feridas Crônicas";

const DOC_TITLE: &str = "Ensina Feridas";
const ANSWER_TITLE: &str = "Resposta do Sistema";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF export is not available in this build")]
    RenderUnavailable,

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("PDF rendering failed: {0}")]
    Render(String),
}

/// Stateless exporter; geometry and banner path are fixed per process.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    geometry: PageGeometry,
    banner_path: PathBuf,
}

impl PdfExporter {
    pub fn new(banner_path: impl Into<PathBuf>) -> Self {
        PdfExporter {
            geometry: PageGeometry::a4(),
            banner_path: banner_path.into(),
        }
    }

    /// Phase 1 + 2: deterministic layout and footer stamping, no I/O.
    pub fn plan(
        &self,
        question: &str,
        answer: &str,
        banner: Option<&Banner>,
    ) -> Result<FinalDocument, ExportError> {
        let blocks = [
            TextBlock {
                title: None,
                body: question.to_string(),
            },
            TextBlock {
                title: Some(ANSWER_TITLE.to_string()),
                body: answer.to_string(),
            },
        ];
        let laid_out = layout(&self.geometry, banner, &blocks)?;
        Ok(stamp(laid_out, FOOTER_TEXT))
    }

    /// Full export: banner load, plan, serialize. Reads the banner file once.
    #[cfg(feature = "pdf-export")]
    pub fn export(&self, question: &str, answer: &str) -> Result<Vec<u8>, ExportError> {
        let (banner, image) = self.load_banner()?;
        let document = self.plan(question, answer, Some(&banner))?;
        super::render::render(DOC_TITLE, &document, &self.geometry, image.as_ref())
    }

    #[cfg(not(feature = "pdf-export"))]
    pub fn export(&self, _question: &str, _answer: &str) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::RenderUnavailable)
    }

    #[cfg(feature = "pdf-export")]
    fn load_banner(
        &self,
    ) -> Result<(Banner, Option<printpdf::image_crate::DynamicImage>), ExportError> {
        use super::layout::ImageMetrics;
        use printpdf::image_crate::GenericImageView;

        if !self.banner_path.exists() {
            return Ok((Banner::Missing(self.banner_path.display().to_string()), None));
        }

        let bytes = std::fs::read(&self.banner_path)
            .map_err(|e| ExportError::Render(format!("banner read failed: {e}")))?;
        let image = printpdf::image_crate::load_from_memory(&bytes)
            .map_err(|e| ExportError::Render(format!("banner decode failed: {e}")))?;
        let (width_px, height_px) = image.dimensions();

        Ok((
            Banner::Image {
                name: self.banner_path.display().to_string(),
                metrics: ImageMetrics {
                    width_px,
                    height_px,
                },
            },
            Some(image),
        ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
