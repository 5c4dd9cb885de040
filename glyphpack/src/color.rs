// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color parsing for variant configuration.

use image::Rgba;
use peniko::color::{parse_color, Srgb};

use crate::{Error, Result};

/// Fully transparent black, the fill of canvases without a background.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parses a CSS color (typically `#RRGGBBAA`) into straight-alpha RGBA8.
pub fn parse_rgba(text: &str) -> Result<Rgba<u8>> {
    let color = parse_color(text.trim())
        .map_err(|err| Error::color(format!("invalid color {text:?}: {err}")))?;
    let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
    Ok(Rgba([rgba.r, rgba.g, rgba.b, rgba.a]))
}

/// Parses an optional color; `None` stays `None`.
pub fn parse_optional(text: Option<&str>) -> Result<Option<Rgba<u8>>> {
    text.map(parse_rgba).transpose()
}

/// Formats a color back into `#RRGGBBAA` form.
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
}
