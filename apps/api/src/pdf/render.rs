//! printpdf serializer for a stamped `FinalDocument`.
//!
//! Text uses the builtin Helvetica fonts; the banner is embedded once from
//! the decoded image, scaled so its placed size matches the layout's
//! millimetre box regardless of the source pixel dimensions.

use printpdf::image_crate::{DynamicImage, GenericImageView};
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument};

use super::export::ExportError;
use super::layout::{DrawInstruction, FontKind, PageGeometry};
use super::stamp::FinalDocument;

const LAYER_NAME: &str = "conteúdo";
const IMAGE_DPI: f32 = 300.0;

pub(super) fn render(
    doc_title: &str,
    document: &FinalDocument,
    geometry: &PageGeometry,
    banner: Option<&DynamicImage>,
) -> Result<Vec<u8>, ExportError> {
    let (pdf, first_page, first_layer) = PdfDocument::new(
        doc_title,
        Mm(geometry.page_width),
        Mm(geometry.page_height),
        LAYER_NAME,
    );

    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Render(e.to_string()))?;

    let mut page_refs = vec![(first_page, first_layer)];
    for _ in 1..document.page_count {
        page_refs.push(pdf.add_page(
            Mm(geometry.page_width),
            Mm(geometry.page_height),
            LAYER_NAME,
        ));
    }

    for (page, (page_idx, layer_idx)) in document.pages.iter().zip(&page_refs) {
        let layer = pdf.get_page(*page_idx).get_layer(*layer_idx);
        for instruction in &page.instructions {
            match instruction {
                DrawInstruction::Text {
                    x,
                    y,
                    text,
                    font,
                    size_pt,
                } => {
                    let font_ref = match font {
                        FontKind::Regular => &regular,
                        FontKind::Bold => &bold,
                    };
                    layer.use_text(text.clone(), *size_pt, Mm(*x), Mm(*y), font_ref);
                }
                DrawInstruction::Image { x, y, w, h, .. } => {
                    let Some(source) = banner else {
                        // Layout only emits an Image instruction when the
                        // exporter decoded the banner, so this cannot happen
                        // on the export path; tolerate it instead of failing.
                        continue;
                    };
                    let (width_px, height_px) = source.dimensions();
                    let native_w_mm = width_px as f32 / IMAGE_DPI * 25.4;
                    let native_h_mm = height_px as f32 / IMAGE_DPI * 25.4;
                    Image::from_dynamic_image(source).add_to_layer(
                        layer.clone(),
                        ImageTransform {
                            translate_x: Some(Mm(*x)),
                            translate_y: Some(Mm(*y)),
                            scale_x: Some(w / native_w_mm),
                            scale_y: Some(h / native_h_mm),
                            dpi: Some(IMAGE_DPI),
                            ..Default::default()
                        },
                    );
                }
            }
        }
    }

    pdf.save_to_bytes()
        .map_err(|e| ExportError::Render(e.to_string()))
}
