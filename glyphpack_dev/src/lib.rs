// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Glyphpack Dev
//!
//! This crate provides utilities for developing Glyphpack.
//!
//! Icon fonts are not redistributable. Tests that need real outlines use the
//! small fixture font in `assets/fonts`, or a text font found on the machine
//! together with a glyph set mapping Latin letters to icon names.

use std::path::{Path, PathBuf};

/// The bundled fixture font.
///
/// It has five glyphs: `.notdef`, `A`, its `ss01` alternate `A.ss01`, `B`
/// and `space`. All inked glyphs are rectangles on a 1000 unit em:
///
/// | glyph    | x          | y          |
/// |----------|------------|------------|
/// | `A`      | 100 to 900 | 0 to 700   |
/// | `A.ss01` | 200 to 800 | 300 to 900 |
/// | `B`      | 250 to 750 | 0 to 500   |
pub fn fixture_font() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts/GlyphpackTest-Regular.ttf")
}

/// Family name of [`fixture_font`].
pub const FIXTURE_FAMILY: &str = "Glyphpack Test";

/// Glyph ids in [`fixture_font`].
pub mod fixture_glyphs {
    /// `A`, mapped from U+0041.
    pub const A: u16 = 1;
    /// The `ss01` alternate of `A`.
    pub const A_SS01: u16 = 2;
    /// `B`, mapped from U+0042. It has no alternate.
    pub const B: u16 = 3;
    /// `space`, mapped from U+0020. It has no outline.
    pub const SPACE: u16 = 4;
    /// Number of glyphs in the font.
    pub const COUNT: u16 = 5;
}

/// Environment variable naming a font to run the real-font tests with.
pub const TEST_FONT_ENV: &str = "GLYPHPACK_TEST_FONT";

/// Fonts commonly present on development machines and CI images.
pub const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A font to test against, or `None` when the machine has none of the
/// known fonts.
///
/// [`TEST_FONT_ENV`] takes precedence over [`SYSTEM_FONTS`]. Tests that need
/// a real font return early when this is `None`.
pub fn test_font() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(TEST_FONT_ENV) {
        let path = PathBuf::from(path);
        return path.is_file().then_some(path);
    }
    SYSTEM_FONTS
        .iter()
        .map(Path::new)
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}

/// Pack configuration with two color variants and one font entry, `regular`.
pub const SAMPLE_CONFIG: &str = include_str!("../assets/config.json");

/// A Stream Deck profile relying on the default scale factor.
pub const SAMPLE_DEVICE: &str = include_str!("../assets/device.json");

/// Glyph set over Latin text. `space` has no ink and `private` is not mapped
/// by ordinary text fonts.
pub const SAMPLE_GLYPHS: &str = include_str!("../assets/glyphs.json");
