//! Page Layout Engine — phase 1 of the two-phase PDF pipeline.
//!
//! Converts a banner plus an ordered list of text blocks into an ordered list
//! of pages holding positioned draw instructions. The result is an immutable
//! `LayoutResult`: page numbering lives in phase 2 (`stamp`), because the
//! footer needs the total page count and that is only known once every page
//! break here has been decided.
//!
//! All coordinates are millimetres with the origin at the bottom-left of the
//! page (PDF convention): `y` is the baseline of a text line or the bottom
//! edge of an image.

use thiserror::Error;

use super::wrap::wrap_text;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A titled paragraph of raw body text, before wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub title: Option<String>,
    pub body: String,
}

/// Pixel dimensions of a decoded banner image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageMetrics {
    pub width_px: u32,
    pub height_px: u32,
}

/// Banner state as resolved by the exporter.
#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    /// Banner decoded successfully; drawn on the first page only.
    Image { name: String, metrics: ImageMetrics },
    /// Banner file absent — replaced by a bold warning line naming the path.
    Missing(String),
}

/// The two builtin fonts the exporter draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Regular,
    Bold,
}

/// One positioned drawing operation on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    /// Banner image: `(x, y)` is the bottom-left corner, `w`/`h` in mm.
    Image {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        name: String,
    },
    /// A single text line at baseline `(x, y)`.
    Text {
        x: f32,
        y: f32,
        text: String,
        font: FontKind,
        size_pt: f32,
    },
}

/// An ordered list of draw instructions. Append-only during layout; the
/// stamper appends the footer pair afterwards, then the page is frozen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub instructions: Vec<DrawInstruction>,
}

/// Page dimensions and spacing constants, in millimetres.
///
/// Invariant: `margin_bottom + footer_reserved < page_height`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// Band above the bottom margin kept clear of body text for the footer.
    pub footer_reserved: f32,
    pub line_height: f32,
    pub title_advance: f32,
    pub block_gap: f32,
    pub banner_max_height: f32,
    /// Character width passed to the text wrapper.
    pub wrap_width: usize,
    pub body_size_pt: f32,
    pub title_size_pt: f32,
}

impl PageGeometry {
    /// A4 portrait with the spacing the original export used:
    /// 2 cm margins, 0.45 cm line height, 1.6 cm footer reserve,
    /// 3.2 cm banner cap, 110-character wrap width.
    pub fn a4() -> Self {
        PageGeometry {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 20.0,
            margin_right: 20.0,
            margin_top: 20.0,
            margin_bottom: 20.0,
            footer_reserved: 16.0,
            line_height: 4.5,
            title_advance: 6.0,
            block_gap: 8.0,
            banner_max_height: 32.0,
            wrap_width: 110,
            body_size_pt: 10.0,
            title_size_pt: 12.0,
        }
    }

    /// Lowest `y` a content line may be drawn at.
    pub fn content_floor(&self) -> f32 {
        self.margin_bottom + self.footer_reserved
    }

    fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    fn top_y(&self) -> f32 {
        self.page_height - self.margin_top
    }
}

/// Phase-1 output: pages laid out, footers not yet stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub pages: Vec<Page>,
    pub geometry: PageGeometry,
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

struct Cursor {
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl Cursor {
    fn new(top_y: f32) -> Self {
        Cursor {
            pages: Vec::new(),
            current: Page::default(),
            y: top_y,
        }
    }

    fn break_page(&mut self, top_y: f32) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = top_y;
    }

    fn push(&mut self, instruction: DrawInstruction) {
        self.current.instructions.push(instruction);
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Lays out `blocks` (in order) under an optional first-page banner.
///
/// Emits a page break whenever the next line would land below
/// `geometry.content_floor()`. Blocks after the first are separated by
/// `block_gap`; a gap that breaches the floor breaks the page before the next
/// block's title instead. Always produces at least one page.
pub fn layout(
    geometry: &PageGeometry,
    banner: Option<&Banner>,
    blocks: &[TextBlock],
) -> Result<LayoutResult, LayoutError> {
    if geometry.content_floor() >= geometry.page_height {
        return Err(LayoutError::InvalidGeometry(format!(
            "margin_bottom + footer_reserved ({:.1} mm) must be below page_height ({:.1} mm)",
            geometry.content_floor(),
            geometry.page_height
        )));
    }

    let mut cursor = Cursor::new(geometry.top_y());

    match banner {
        Some(Banner::Image { name, metrics }) => {
            // Zero-dimension metrics cannot be scaled; skip without reserving height.
            if metrics.width_px > 0 && metrics.height_px > 0 {
                let (x, w, h) = scale_banner(geometry, *metrics);
                cursor.push(DrawInstruction::Image {
                    x,
                    y: cursor.y - h,
                    w,
                    h,
                    name: name.clone(),
                });
                cursor.y -= h + geometry.block_gap;
            }
        }
        Some(Banner::Missing(path)) => {
            cursor.push(DrawInstruction::Text {
                x: geometry.margin_left,
                y: cursor.y,
                text: format!("Banner não encontrado: {path}"),
                font: FontKind::Bold,
                size_pt: geometry.body_size_pt,
            });
            cursor.y -= geometry.block_gap;
        }
        None => {}
    }

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            cursor.y -= geometry.block_gap;
            if cursor.y < geometry.content_floor() {
                cursor.break_page(geometry.top_y());
            }
        }

        if let Some(title) = &block.title {
            if cursor.y < geometry.content_floor() {
                cursor.break_page(geometry.top_y());
            }
            cursor.push(DrawInstruction::Text {
                x: geometry.margin_left,
                y: cursor.y,
                text: title.clone(),
                font: FontKind::Bold,
                size_pt: geometry.title_size_pt,
            });
            cursor.y -= geometry.title_advance;
        }

        for line in wrap_text(&block.body, geometry.wrap_width) {
            if cursor.y < geometry.content_floor() {
                cursor.break_page(geometry.top_y());
            }
            cursor.push(DrawInstruction::Text {
                x: geometry.margin_left,
                y: cursor.y,
                text: line,
                font: FontKind::Regular,
                size_pt: geometry.body_size_pt,
            });
            cursor.y -= geometry.line_height;
        }
    }

    Ok(LayoutResult {
        pages: cursor.finish(),
        geometry: geometry.clone(),
    })
}

/// Scales the banner to the content width, re-capping by `banner_max_height`
/// (preserving aspect ratio, horizontally centered) when the width-fit result
/// is too tall. Returns `(x, w, h)` in mm.
fn scale_banner(geometry: &PageGeometry, metrics: ImageMetrics) -> (f32, f32, f32) {
    let content_width = geometry.content_width();
    let mut w = content_width;
    let mut h = metrics.height_px as f32 * (content_width / metrics.width_px as f32);

    if h > geometry.banner_max_height {
        let scale = geometry.banner_max_height / metrics.height_px as f32;
        h = geometry.banner_max_height;
        w = metrics.width_px as f32 * scale;
    }

    let x = geometry.margin_left + (content_width - w) / 2.0;
    (x, w, h)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
