// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font binaries.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use skrifa::raw::TableProvider;
use skrifa::string::StringId;
use skrifa::MetadataProvider;

use crate::raster::SizedFace;
use crate::resolve::FontResolver;
use crate::{Error, Result};

/// A validated font binary (TrueType or OpenType, optionally a collection
/// member).
///
/// Construction parses the font once with each backend that later reads it,
/// so any decoding problem surfaces here instead of mid-batch.
#[derive(Clone)]
pub struct FontData {
    data: Arc<[u8]>,
    index: u32,
    glyph_count: u16,
    family_name: Option<String>,
}

impl FontData {
    /// Parses the font at `index` inside `data`.
    pub fn new(data: impl Into<Arc<[u8]>>, index: u32) -> Result<Self> {
        let data = data.into();
        let font = skrifa::FontRef::from_index(&data, index)
            .map_err(|err| Error::font(format!("failed to parse font {index}: {err}")))?;
        let glyph_count = font
            .maxp()
            .map_err(|err| Error::font(format!("font {index} has no usable maxp table: {err}")))?
            .num_glyphs();
        let family_name = font
            .localized_strings(StringId::FAMILY_NAME)
            .english_or_first()
            .map(|name| name.chars().collect::<String>());

        // The shaper and the scaler each parse the tables on their own.
        harfrust::FontRef::from_index(&data, index)
            .map_err(|err| Error::font(format!("font {index} cannot be shaped: {err}")))?;
        let swash_index = usize::try_from(index)
            .map_err(|_| Error::font(format!("font index {index} is out of range")))?;
        if swash::FontRef::from_index(&data, swash_index).is_none() {
            return Err(Error::font(format!("font {index} cannot be scaled")));
        }

        log::debug!(
            "Loaded font {} with {glyph_count} glyphs",
            family_name.as_deref().unwrap_or("<unnamed>")
        );
        Ok(Self {
            data,
            index,
            glyph_count,
            family_name,
        })
    }

    /// Reads and parses the first font in the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|err| Error::font(format!("failed to read {}: {err}", path.display())))?;
        Self::new(data, 0)
    }

    /// The raw font binary.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Index of the font within a collection.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Number of glyphs in the font.
    pub fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    /// Family name from the `name` table.
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    /// Creates a shaper backed glyph resolver.
    pub fn resolver(&self) -> Result<FontResolver<'_>> {
        FontResolver::new(self)
    }

    /// Fixes a face at `pixel_size` for one rasterization batch.
    pub fn sized(&self, pixel_size: f32) -> Result<SizedFace<'_>> {
        SizedFace::new(self, pixel_size)
    }
}

impl fmt::Debug for FontData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontData")
            .field("len", &self.data.len())
            .field("index", &self.index)
            .field("glyph_count", &self.glyph_count)
            .field("family_name", &self.family_name)
            .finish()
    }
}
