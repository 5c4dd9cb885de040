// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A synthetic font for tests that do not need real outlines.

use hashbrown::HashMap;
use image::Rgba;

use crate::{GlyphBitmap, GlyphForm, GlyphIndex, GlyphLookup, GlyphRaster};

pub(crate) const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub(crate) const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// A fully covered rectangle.
pub(crate) fn solid(width: u32, height: u32, left: i32, top: i32) -> GlyphBitmap {
    let len = (width * height) as usize;
    GlyphBitmap::new(width, height, left, top, vec![255; len]).unwrap()
}

pub(crate) fn gid(id: u32) -> GlyphIndex {
    GlyphIndex::new(id).unwrap()
}

/// Maps glyph text to hand-picked glyph ids and glyph ids to bitmaps.
#[derive(Default)]
pub(crate) struct FakeFont {
    cmap: HashMap<String, (u32, u32)>,
    bitmaps: HashMap<u32, GlyphBitmap>,
    pixel_size: f32,
    /// Every glyph id passed to `rasterize`, in call order.
    pub(crate) rasterized: Vec<u32>,
}

impl FakeFont {
    pub(crate) fn new(pixel_size: f32) -> Self {
        Self {
            pixel_size,
            ..Self::default()
        }
    }

    /// Maps `text` to `primary` and, with `ss01` on, to `alternate`.
    ///
    /// Id 0 stands for `.notdef`, as a shaper would return it.
    pub(crate) fn map(mut self, text: &str, primary: u32, alternate: u32) -> Self {
        self.cmap.insert(text.to_owned(), (primary, alternate));
        self
    }

    /// Gives glyph `id` ink. Glyphs without a bitmap rasterize to nothing.
    pub(crate) fn ink(mut self, id: u32, bitmap: GlyphBitmap) -> Self {
        self.bitmaps.insert(id, bitmap);
        self
    }
}

impl GlyphLookup for FakeFont {
    fn resolve(&self, text: &str, form: GlyphForm) -> Option<GlyphIndex> {
        let &(primary, alternate) = self.cmap.get(text)?;
        match form {
            GlyphForm::Primary => GlyphIndex::new(primary),
            GlyphForm::Alternate => GlyphIndex::new(alternate),
        }
    }
}

impl GlyphRaster for FakeFont {
    fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    fn rasterize(&mut self, glyph: GlyphIndex) -> Option<GlyphBitmap> {
        let id = u32::from(glyph.to_u16());
        self.rasterized.push(id);
        self.bitmaps.get(&id).cloned()
    }
}
