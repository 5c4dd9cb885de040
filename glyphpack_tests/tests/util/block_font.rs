// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A synthetic icon font whose glyphs are solid rectangles.
//!
//! Sizes are fractions of the em so bitmaps scale with the pixel size like
//! real outlines do.

use glyphpack::{GlyphBitmap, GlyphForm, GlyphIndex, GlyphLookup, GlyphRaster};

pub(crate) const HOUSE: &str = "\u{f015}";
pub(crate) const SPOTIFY: &str = "\u{f1bc}";
/// Has an `ss01` alternate drawn above the primary.
pub(crate) const BOLT: &str = "\u{f0e7}";
/// Mapped, but without ink.
pub(crate) const SPACE: &str = " ";
/// Not in the font.
pub(crate) const UNMAPPED: &str = "\u{f2ff}";

/// `(text, primary, alternate)`; the alternate equals the primary when the
/// glyph has no `ss01` form.
const CMAP: &[(&str, u32, u32)] = &[
    (HOUSE, 1, 1),
    (SPOTIFY, 2, 2),
    (BOLT, 3, 4),
    (SPACE, 5, 5),
];

/// `(glyph, width, height, left, top)` in em units.
const BOXES: &[(u32, f32, f32, f32, f32)] = &[
    (1, 0.8, 0.7, 0.1, 0.7),
    (2, 0.5, 0.5, 0.25, 0.5),
    (3, 0.6, 0.4, 0.2, 0.4),
    (4, 0.6, 0.4, 0.2, 0.8),
];

#[derive(Debug)]
pub(crate) struct BlockFont {
    pixel_size: f32,
}

impl BlockFont {
    pub(crate) fn new(pixel_size: f32) -> Self {
        Self { pixel_size }
    }
}

impl GlyphLookup for BlockFont {
    fn resolve(&self, text: &str, form: GlyphForm) -> Option<GlyphIndex> {
        let &(_, primary, alternate) = CMAP.iter().find(|(mapped, ..)| *mapped == text)?;
        match form {
            GlyphForm::Primary => GlyphIndex::new(primary),
            GlyphForm::Alternate => GlyphIndex::new(alternate),
        }
    }
}

impl GlyphRaster for BlockFont {
    fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    fn rasterize(&mut self, glyph: GlyphIndex) -> Option<GlyphBitmap> {
        let id = u32::from(glyph.to_u16());
        let &(_, width, height, left, top) = BOXES.iter().find(|(boxed, ..)| *boxed == id)?;
        let em = self.pixel_size;
        let width = (width * em).round() as u32;
        let height = (height * em).round() as u32;
        GlyphBitmap::new(
            width,
            height,
            (left * em).round() as i32,
            (top * em).round() as i32,
            vec![255; (width * height) as usize],
        )
    }
}
