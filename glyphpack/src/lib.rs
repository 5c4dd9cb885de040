// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Webfont glyphs to colored icon packs.
//!
//! Glyphpack turns every glyph of an icon font into a fixed-size RGBA icon for
//! stream controller devices. The pipeline runs in one direction:
//!
//! - [`resolve`] shapes the glyph text with `harfrust` and finds the primary and
//!   the stylistic-alternate (`ss01`) glyph index.
//! - [`raster`] renders glyph outlines with `swash` into coverage bitmaps at a
//!   supersampled size fixed once per batch.
//! - [`composite`] aligns up to two tinted bitmaps on a shared anchor and merges them.
//! - [`compose`] centers the merged layer on a square canvas and downsamples it.
//! - [`assemble`] fans the above out over a whole glyph set and color variant.
//! - [`output`] writes the finished pack, its manifest and contact sheets.
//!
//! See the `glyphpack_cli` crate for a complete front end.
//!
//! ## Example
//!
//! ```no_run
//! use glyphpack::{
//!     BitmapCache, ColorVariant, DeviceProfile, FontData, GlyphSet, PackAssembler,
//!     resolve_glyphs,
//! };
//!
//! # fn main() -> Result<(), glyphpack::Error> {
//! let font = FontData::from_path("fa-solid-900.ttf")?;
//! let mut glyphs = GlyphSet::new();
//! glyphs.insert("\u{f015}", vec!["house".into(), "home".into()])?;
//!
//! let device = DeviceProfile::new("Stream Deck", 52, 72, 28);
//! let variant = ColorVariant::parse("Red", "#FF0000FF", None, Some("#00000000"))?;
//!
//! let resolved = resolve_glyphs(&font.resolver()?, &glyphs);
//! let cache = BitmapCache::populate(&mut font.sized(device.raster_size())?, &resolved);
//! let pack = PackAssembler::new(&device).render(&resolved, &cache, &variant)?;
//! assert_eq!(pack.icons().len(), 1);
//! # Ok(())
//! # }
//! ```

pub use image;

pub mod assemble;
pub mod color;
pub mod compose;
pub mod composite;
pub mod config;
mod error;
pub mod font;
pub mod glyphs;
pub mod manifest;
pub mod output;
pub mod raster;
pub mod resolve;
pub mod sheet;

#[cfg(test)]
mod tests;

pub use assemble::{
    resolve_glyphs, BitmapCache, IconMetadata, IconPack, PackAssembler, RenderedIcon,
};
pub use config::{check_distinct_extensions, ColorVariant, DeviceProfile, FontEntry, PackConfig};
pub use error::{Error, ErrorKind, Result};
pub use font::FontData;
pub use glyphs::{GlyphIdentity, GlyphIndex, GlyphSet, ResolvedGlyph};
pub use manifest::Manifest;
pub use output::{write_pack, write_sheet, PackPaths};
pub use raster::{GlyphBitmap, GlyphRaster, SizedFace};
pub use resolve::{FontResolver, GlyphForm, GlyphLookup};
pub use sheet::SheetLayout;
