// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merging the primary and alternate glyph layers.
//!
//! Both bitmaps carry bearings relative to the same shaping origin, but their
//! masks usually differ in size. Before anything is pasted, an [`Anchor`] is
//! computed over the layers that are present and every layer is placed
//! relative to it, so that ink from both layers lines up the way the font
//! draws it.

use image::{imageops, Rgba, RgbaImage};

use crate::raster::GlyphBitmap;

/// The top-left corner shared by all layers, in bearing coordinates.
///
/// `x` is the leftmost `left` bearing and `y` the highest `top` bearing of the
/// layers that are present.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    /// Smallest left bearing.
    pub x: i32,
    /// Largest top bearing.
    pub y: i32,
}

impl Anchor {
    /// Computes the anchor of the given layers; `None` when there are none.
    pub fn of<'a>(bitmaps: impl IntoIterator<Item = &'a GlyphBitmap>) -> Option<Self> {
        bitmaps.into_iter().fold(None, |anchor, bitmap| {
            Some(match anchor {
                None => Self {
                    x: bitmap.left(),
                    y: bitmap.top(),
                },
                Some(Self { x, y }) => Self {
                    x: x.min(bitmap.left()),
                    y: y.max(bitmap.top()),
                },
            })
        })
    }

    /// Where `bitmap` goes in the merged layer.
    ///
    /// Never negative for a bitmap that took part in computing the anchor.
    pub fn offset(&self, bitmap: &GlyphBitmap) -> (u32, u32) {
        (
            bitmap.left().abs_diff(self.x),
            self.y.abs_diff(bitmap.top()),
        )
    }
}

/// Colors a coverage mask.
///
/// The mask replaces the color's alpha channel, so a translucent color draws
/// as opaque wherever the glyph has full coverage.
pub fn tint(bitmap: &GlyphBitmap, color: Rgba<u8>) -> RgbaImage {
    let [r, g, b, _] = color.0;
    RgbaImage::from_fn(bitmap.width(), bitmap.height(), |x, y| {
        Rgba([r, g, b, bitmap.coverage_at(x, y).unwrap_or(0)])
    })
}

/// Tints and merges up to two layers, the secondary one on top.
///
/// Returns `None` when neither layer is present; callers skip such icons.
pub fn composite(
    primary: Option<&GlyphBitmap>,
    secondary: Option<&GlyphBitmap>,
    primary_color: Rgba<u8>,
    secondary_color: Rgba<u8>,
) -> Option<RgbaImage> {
    let layers = [
        primary.map(|bitmap| (bitmap, primary_color)),
        secondary.map(|bitmap| (bitmap, secondary_color)),
    ];
    let anchor = Anchor::of(layers.iter().flatten().map(|&(bitmap, _)| bitmap))?;

    let (width, height) = layers
        .iter()
        .flatten()
        .fold((0, 0), |(width, height), &(bitmap, _)| {
            let (x, y) = anchor.offset(bitmap);
            (
                width.max(x + bitmap.width()),
                height.max(y + bitmap.height()),
            )
        });

    let mut merged = RgbaImage::new(width, height);
    for &(bitmap, color) in layers.iter().flatten() {
        let (x, y) = anchor.offset(bitmap);
        imageops::overlay(&mut merged, &tint(bitmap, color), i64::from(x), i64::from(y));
    }
    Some(merged)
}
