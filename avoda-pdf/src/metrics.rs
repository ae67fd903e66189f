//! Glyph advance measurement.
//!
//! The layout right-aligns and centers strings at fixed x coordinates, so we
//! need the width of each drawn string: advance widths from the font's
//! horizontal metrics, scaled by `size / units_per_em` and summed over the
//! (already reshaped) characters.

use ttf_parser::{Face, GlyphId};

use crate::error::ExportError;

/// Width calculator over a parsed font face. Borrows the font bytes.
#[derive(Debug)]
pub(crate) struct TextMeasure<'a> {
    face: Face<'a>,
    units_per_em: f32,
}

impl<'a> TextMeasure<'a> {
    /// Parse the font. This doubles as the registration check: a font that
    /// fails here can never be drawn with, so construction is where export
    /// setup fails fatally.
    pub(crate) fn new(font_data: &'a [u8]) -> Result<Self, ExportError> {
        let face = Face::parse(font_data, 0).map_err(|source| ExportError::FontParse { source })?;
        let units_per_em = f32::from(face.units_per_em());
        Ok(TextMeasure { face, units_per_em })
    }

    /// Width of `text` in points at `size`. Characters the font does not map
    /// fall back to the .notdef advance.
    pub(crate) fn width_pt(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|c| {
                let glyph = self.face.glyph_index(c).unwrap_or(GlyphId(0));
                u32::from(self.face.glyph_hor_advance(glyph).unwrap_or(0))
            })
            .sum();
        units as f32 * size / self.units_per_em
    }
}
