// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph lookup through the font's shaping rules, using `harfrust`.

use std::fmt;

use harfrust::{Feature, FontRef, ShaperData, Tag, UnicodeBuffer};

use crate::font::FontData;
use crate::glyphs::GlyphIndex;
use crate::{Error, Result};

/// Stylistic set carrying the alternate (duotone secondary) artwork.
const ALTERNATE_FEATURE: Tag = Tag::new(b"ss01");

/// Which rendering of a glyph to look up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlyphForm {
    /// The default mapping.
    Primary,
    /// The `ss01` stylistic alternate.
    Alternate,
}

/// Maps glyph text to a glyph index.
pub trait GlyphLookup {
    /// Returns the first glyph `text` shapes to, or `None` when the font has
    /// no glyph for it. A missing glyph is an expected outcome, not an error.
    fn resolve(&self, text: &str, form: GlyphForm) -> Option<GlyphIndex>;
}

/// A [`GlyphLookup`] that runs the font's shaping rules.
pub struct FontResolver<'a> {
    font: FontRef<'a>,
    data: ShaperData,
}

impl<'a> FontResolver<'a> {
    /// Prepares shaping tables for `font`.
    pub fn new(font: &'a FontData) -> Result<Self> {
        let font = FontRef::from_index(font.data(), font.index())
            .map_err(|err| Error::font(format!("font cannot be shaped: {err}")))?;
        let data = ShaperData::new(&font);
        Ok(Self { font, data })
    }
}

impl GlyphLookup for FontResolver<'_> {
    fn resolve(&self, text: &str, form: GlyphForm) -> Option<GlyphIndex> {
        if text.is_empty() {
            return None;
        }
        let shaper = self.data.shaper(&self.font).build();
        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let features = [Feature::new(
            ALTERNATE_FEATURE,
            u32::from(form == GlyphForm::Alternate),
            ..,
        )];
        let glyphs = shaper.shape(buffer, &features);
        glyphs
            .glyph_infos()
            .first()
            .and_then(|info| GlyphIndex::new(info.glyph_id))
    }
}

impl fmt::Debug for FontResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResolver").finish_non_exhaustive()
    }
}
