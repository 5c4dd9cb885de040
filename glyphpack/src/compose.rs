// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing a glyph layer on the icon canvas and downsampling it.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

use crate::color::TRANSPARENT;

/// Centers `layer` on a square canvas of `canvas_size` pixels.
///
/// The canvas is filled with `canvas_color`, or left transparent when there
/// is none. The paste offset is truncated toward zero and a layer larger than
/// the canvas is clipped evenly on both sides.
pub fn compose(layer: &RgbaImage, canvas_size: u32, canvas_color: Option<Rgba<u8>>) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        canvas_size,
        canvas_size,
        canvas_color.unwrap_or(TRANSPARENT),
    );
    let x = (i64::from(canvas_size) - i64::from(layer.width())) / 2;
    let y = (i64::from(canvas_size) - i64::from(layer.height())) / 2;
    imageops::overlay(&mut canvas, layer, x, y);
    canvas
}

/// Resamples a square working image down to `size` x `size` pixels.
///
/// Filtering happens on premultiplied colors so that fully transparent
/// canvas pixels do not darken anti-aliased glyph edges.
pub fn downsample(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        return image.clone();
    }
    let premultiplied = Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });
    let resized = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);
    RgbaImage::from_fn(size, size, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let alpha = to_u8(a);
        if alpha == 0 {
            return TRANSPARENT;
        }
        Rgba([
            to_u8(r / a),
            to_u8(g / a),
            to_u8(b / a),
            alpha,
        ])
    })
}

#[expect(clippy::cast_possible_truncation, reason = "the value is clamped to 0..=255")]
fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
