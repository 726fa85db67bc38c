//! Deferred Footer Stamper — phase 2 of the two-phase PDF pipeline.
//!
//! A single-pass renderer cannot produce correct footers: the total page
//! count is unknowable until every page-break decision in `layout` has been
//! made. Stamping therefore consumes the finished `LayoutResult` and appends
//! the footer pair to every page, making the dependency on the final page
//! count an explicit data dependency. Stamp exactly once — re-stamping a
//! document whose pages changed would bake in a stale total.

use super::font_metrics::get_metrics;
use super::layout::{DrawInstruction, FontKind, LayoutResult, Page};

const FOOTER_SIZE_PT: f32 = 9.0;
/// Footer baseline, 1.2 cm above the page bottom.
const FOOTER_Y_MM: f32 = 12.0;

/// Phase-2 output: pages in their final, frozen form.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalDocument {
    pub pages: Vec<Page>,
    pub page_count: usize,
}

/// Appends to every page a left-aligned `footer_text` line and a
/// right-aligned `"Página {i} de {N}"` label (1-based `i`, total `N`).
///
/// Page count and order are preserved exactly.
pub fn stamp(layout: LayoutResult, footer_text: &str) -> FinalDocument {
    let LayoutResult {
        mut pages,
        geometry,
    } = layout;
    let total = pages.len();
    let metrics = get_metrics(FontKind::Regular);

    for (index, page) in pages.iter_mut().enumerate() {
        let label = format!("Página {} de {}", index + 1, total);
        let label_width = metrics.measure_mm(&label, FOOTER_SIZE_PT);

        page.instructions.push(DrawInstruction::Text {
            x: geometry.margin_left,
            y: FOOTER_Y_MM,
            text: footer_text.to_string(),
            font: FontKind::Regular,
            size_pt: FOOTER_SIZE_PT,
        });
        page.instructions.push(DrawInstruction::Text {
            x: geometry.page_width - geometry.margin_right - label_width,
            y: FOOTER_Y_MM,
            text: label,
            font: FontKind::Regular,
            size_pt: FOOTER_SIZE_PT,
        });
    }

    FinalDocument {
        pages,
        page_count: total,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::layout::{layout, PageGeometry, TextBlock};

    const FOOTER: &str = "PET G10 UFPel - Telemonitoramento de Feridas Crônicas";

    fn laid_out(pages_wanted: usize) -> LayoutResult {
        let geometry = PageGeometry::a4();
        let per_page =
            ((geometry.page_height - geometry.margin_top - geometry.content_floor())
                / geometry.line_height) as usize
                + 1;
        let body = "linha\n".repeat(per_page * pages_wanted - 1);
        let result = layout(
            &geometry,
            None,
            &[TextBlock {
                title: None,
                body,
            }],
        )
        .unwrap();
        assert_eq!(result.pages.len(), pages_wanted, "fixture page count");
        result
    }

    fn footer_labels(doc: &FinalDocument) -> Vec<String> {
        doc.pages
            .iter()
            .map(|p| match p.instructions.last().unwrap() {
                DrawInstruction::Text { text, .. } => text.clone(),
                other => panic!("expected footer label, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_single_page_footer() {
        let doc = stamp(laid_out(1), FOOTER);
        assert_eq!(doc.page_count, 1);
        assert_eq!(footer_labels(&doc), vec!["Página 1 de 1"]);
    }

    #[test]
    fn test_every_page_shows_same_total() {
        let doc = stamp(laid_out(3), FOOTER);
        assert_eq!(doc.page_count, 3);
        assert_eq!(
            footer_labels(&doc),
            vec!["Página 1 de 3", "Página 2 de 3", "Página 3 de 3"]
        );
    }

    #[test]
    fn test_stamping_preserves_page_count_and_order() {
        let before = laid_out(2);
        let content_before: Vec<Vec<DrawInstruction>> = before
            .pages
            .iter()
            .map(|p| p.instructions.clone())
            .collect();
        let doc = stamp(before, FOOTER);
        assert_eq!(doc.pages.len(), 2);
        for (page, original) in doc.pages.iter().zip(&content_before) {
            // Original instructions untouched, footer pair appended after them.
            assert_eq!(&page.instructions[..original.len()], &original[..]);
            assert_eq!(page.instructions.len(), original.len() + 2);
        }
    }

    #[test]
    fn test_left_footer_text_on_every_page() {
        let doc = stamp(laid_out(2), FOOTER);
        for page in &doc.pages {
            let found = page.instructions.iter().any(|i| {
                matches!(i, DrawInstruction::Text { text, x, .. }
                    if text == FOOTER && (x - 20.0).abs() < 1e-3)
            });
            assert!(found, "fixed footer text missing from a page");
        }
    }

    #[test]
    fn test_page_label_right_aligned_inside_margin() {
        let doc = stamp(laid_out(1), FOOTER);
        match doc.pages[0].instructions.last().unwrap() {
            DrawInstruction::Text { x, text, .. } => {
                let width =
                    get_metrics(FontKind::Regular).measure_mm(text, FOOTER_SIZE_PT);
                // Right edge of the label sits on the right margin line.
                assert!((x + width - 190.0).abs() < 1e-3);
                assert!(*x > 100.0, "label should hug the right side");
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn test_footer_sits_below_content_floor() {
        let geometry = PageGeometry::a4();
        assert!(FOOTER_Y_MM < geometry.content_floor());
        let doc = stamp(laid_out(1), FOOTER);
        let footer_pair = &doc.pages[0].instructions[doc.pages[0].instructions.len() - 2..];
        for instruction in footer_pair {
            match instruction {
                DrawInstruction::Text { y, .. } => assert!((y - FOOTER_Y_MM).abs() < 1e-3),
                other => panic!("expected text, got {other:?}"),
            }
        }
    }
}
