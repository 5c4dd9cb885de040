// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rasterization using `swash`.

use std::fmt;

use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::FontRef;

use crate::font::FontData;
use crate::glyphs::GlyphIndex;
use crate::{Error, Result};

/// An 8-bit coverage mask of one glyph.
///
/// `left` and `top` are the offsets from the shaping origin (on the baseline)
/// to the top-left corner of the mask; `top` grows upwards. Width and height
/// are never zero: glyphs without ink have no bitmap at all.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// Wraps a row-major coverage buffer.
    ///
    /// Returns `None` for an empty mask or a buffer that is not exactly
    /// `width * height` bytes long.
    pub fn new(width: u32, height: u32, left: i32, top: i32, coverage: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let len = usize::try_from(u64::from(width) * u64::from(height)).ok()?;
        if coverage.len() != len {
            return None;
        }
        Some(Self {
            width,
            height,
            left,
            top,
            coverage,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal bearing.
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Vertical bearing, positive above the baseline.
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Row-major coverage values.
    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// Coverage at a pixel, or `None` outside the mask.
    pub fn coverage_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.coverage.get(index).copied()
    }
}

impl fmt::Debug for GlyphBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("top", &self.top)
            .finish_non_exhaustive()
    }
}

/// Renders glyphs at a pixel size chosen before the batch starts.
pub trait GlyphRaster {
    /// The em size every glyph is rendered at.
    fn pixel_size(&self) -> f32;

    /// Renders a glyph, or returns `None` when it has no ink.
    fn rasterize(&mut self, glyph: GlyphIndex) -> Option<GlyphBitmap>;
}

/// A font face bound to one pixel size.
///
/// The size is fixed on construction; rendering at another size needs another
/// face. The scale context is scratch space reused between glyphs.
pub struct SizedFace<'a> {
    font: FontRef<'a>,
    context: ScaleContext,
    pixel_size: f32,
}

impl<'a> SizedFace<'a> {
    /// Binds `font` to `pixel_size` pixels per em.
    pub fn new(font: &'a FontData, pixel_size: f32) -> Result<Self> {
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(Error::config(format!("invalid pixel size {pixel_size}")));
        }
        let index = usize::try_from(font.index())
            .map_err(|_| Error::font(format!("font index {} is out of range", font.index())))?;
        let font = FontRef::from_index(font.data(), index)
            .ok_or_else(|| Error::font("font cannot be scaled"))?;
        Ok(Self {
            font,
            context: ScaleContext::new(),
            pixel_size,
        })
    }
}

impl GlyphRaster for SizedFace<'_> {
    fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    fn rasterize(&mut self, glyph: GlyphIndex) -> Option<GlyphBitmap> {
        let mut scaler = self
            .context
            .builder(self.font)
            .size(self.pixel_size)
            .build();
        let image = Render::new(&[Source::Outline])
            .format(Format::Alpha)
            .render(&mut scaler, glyph.to_u16())?;
        GlyphBitmap::new(
            image.placement.width,
            image.placement.height,
            image.placement.left,
            image.placement.top,
            image.data,
        )
    }
}

impl fmt::Debug for SizedFace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedFace")
            .field("pixel_size", &self.pixel_size)
            .finish_non_exhaustive()
    }
}
