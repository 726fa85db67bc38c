// PDF export pipeline.
// Phase 1 (layout) decides every page break; phase 2 (stamp) writes the
// "Página i de N" footers once the total is known; render serializes.
// Layout and stamping are pure CPU transforms — handlers run the whole
// pipeline inside tokio::task::spawn_blocking.

pub mod export;
pub mod font_metrics;
pub mod handlers;
pub mod layout;
#[cfg(feature = "pdf-export")]
mod render;
pub mod stamp;
pub mod wrap;

pub use export::{PdfExporter, EXPORT_FILENAME};
