//! PDF assembly — one A4 page per roster entry.
//!
//! Export is split into a pure planning step ([`plan_pages`]) and drawing.
//! The exporter receives a fully resolved roster snapshot; any pending edit
//! merging is the caller's job, so rendering stays side-effect-free.

use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

use printpdf::{
    Color, Greyscale, IndirectFontRef, Line, PdfDocument, PdfLayerReference, Point,
};

use avoda_core::Roster;

use crate::error::ExportError;
use crate::layout::{
    mm, program_lines, BODY_SIZE, BODY_TOP_Y, CENTER_X, FOOTER, FOOTER_GRAY, FOOTER_SIZE,
    FOOTER_Y, LEFT_EDGE, LINE_HEIGHT, NAME_PREFIX, NAME_SIZE, NAME_Y, PAGE_HEIGHT, PAGE_WIDTH,
    RIGHT_EDGE, RULE_THICKNESS, RULE_Y, TITLE, TITLE_SIZE, TITLE_Y,
};
use crate::metrics::TextMeasure;
use crate::shape::reshape;

// ---------------------------------------------------------------------------
// Embedded default font — baked into the binary at compile time
// ---------------------------------------------------------------------------

/// DejaVu Sans (Bitstream Vera license). Covers Latin and Hebrew; pass a
/// custom TTF to [`Exporter::with_font_file`] for other scripts.
pub(crate) const DEFAULT_FONT: &[u8] = include_bytes!("fonts/DejaVuSans.ttf");

// ---------------------------------------------------------------------------
// Page planning
// ---------------------------------------------------------------------------

/// One planned output page: a worker and the program lines that will be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerPage {
    pub name: String,
    pub lines: Vec<String>,
}

/// Plan pages from a roster snapshot: one page per entry, in roster iteration
/// order, blank program lines already dropped.
pub fn plan_pages(roster: &Roster) -> Vec<WorkerPage> {
    roster
        .iter()
        .map(|(name, program)| WorkerPage {
            name: name.to_string(),
            lines: program_lines(program)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Exporter
// ---------------------------------------------------------------------------

/// PDF exporter with a registered body font.
///
/// Construction parses the font once and fails fatally if it is unusable —
/// no page can be drawn without it. Create once and reuse across exports.
#[derive(Debug)]
pub struct Exporter {
    font_data: Cow<'static, [u8]>,
}

impl Exporter {
    /// Exporter using the embedded default font.
    pub fn new() -> Result<Self, ExportError> {
        Self::from_font_bytes(Cow::Borrowed(DEFAULT_FONT))
    }

    /// Exporter using a caller-supplied TTF/OTF file.
    pub fn with_font_file(path: &Path) -> Result<Self, ExportError> {
        let data = std::fs::read(path).map_err(|source| ExportError::FontUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_font_bytes(Cow::Owned(data))
    }

    fn from_font_bytes(font_data: Cow<'static, [u8]>) -> Result<Self, ExportError> {
        // Registration check — fail here, before any export is attempted.
        TextMeasure::new(&font_data)?;
        Ok(Exporter { font_data })
    }

    /// Render the roster into a PDF byte stream: exactly one page per worker,
    /// in roster iteration order.
    ///
    /// Refuses an empty roster ([`ExportError::EmptyRoster`]); callers are
    /// expected to guard before calling.
    pub fn export(&self, roster: &Roster) -> Result<Vec<u8>, ExportError> {
        if roster.is_empty() {
            return Err(ExportError::EmptyRoster);
        }

        let pages = plan_pages(roster);
        let measure = TextMeasure::new(&self.font_data)?;

        let (doc, first_page, first_layer) =
            PdfDocument::new("programs", mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "page");
        let font = doc.add_external_font(Cursor::new(self.font_data.as_ref()))?;

        for (i, page) in pages.iter().enumerate() {
            let layer = if i == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_idx, layer_idx) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "page");
                doc.get_page(page_idx).get_layer(layer_idx)
            };
            draw_page(&layer, &font, &measure, page);
            tracing::debug!("drew page {} for '{}' ({} line(s))", i + 1, page.name, page.lines.len());
        }

        tracing::info!("exported {} page(s)", pages.len());
        doc.save_to_bytes().map_err(ExportError::from)
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw_page(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    measure: &TextMeasure<'_>,
    page: &WorkerPage,
) {
    // Title, centered near the top.
    let title = reshape(TITLE);
    let title_x = CENTER_X - measure.width_pt(&title, TITLE_SIZE) / 2.0;
    layer.use_text(title, TITLE_SIZE, mm(title_x), mm(TITLE_Y), font);

    // Worker name, right-aligned.
    let name_line = reshape(&format!("{NAME_PREFIX}: {}", page.name));
    draw_right(layer, font, measure, &name_line, NAME_SIZE, NAME_Y);

    // Program lines: each reshaped individually, one fixed step per drawn line.
    let mut y = BODY_TOP_Y;
    for line in &page.lines {
        let shaped = reshape(line);
        draw_right(layer, font, measure, &shaped, BODY_SIZE, y);
        y -= LINE_HEIGHT;
    }

    // Separator rule near the bottom.
    layer.set_outline_thickness(RULE_THICKNESS);
    layer.set_outline_color(Color::Greyscale(Greyscale::new(0.0, None)));
    layer.add_line(Line {
        points: vec![
            (Point::new(mm(LEFT_EDGE), mm(RULE_Y)), false),
            (Point::new(mm(RIGHT_EDGE), mm(RULE_Y)), false),
        ],
        is_closed: false,
    });

    // Footer attribution in a muted shade; restore black afterwards.
    layer.set_fill_color(Color::Greyscale(Greyscale::new(FOOTER_GRAY, None)));
    draw_right(layer, font, measure, FOOTER, FOOTER_SIZE, FOOTER_Y);
    layer.set_fill_color(Color::Greyscale(Greyscale::new(0.0, None)));
}

fn draw_right(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    measure: &TextMeasure<'_>,
    text: &str,
    size: f32,
    y: f32,
) {
    let x = RIGHT_EDGE - measure.width_pt(text, size);
    layer.use_text(text, size, mm(x), mm(y), font);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
