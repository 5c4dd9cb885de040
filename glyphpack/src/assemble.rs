// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering a whole glyph set into an icon pack.
//!
//! The work is split by how often it has to happen:
//!
//! - [`resolve_glyphs`] once per font,
//! - [`BitmapCache::populate`] once per font and device,
//! - [`PackAssembler::render`] once per device and color variant.
//!
//! Each step only reads the output of the previous one.

use hashbrown::HashMap;
use image::RgbaImage;
use serde::Serialize;

use crate::color::TRANSPARENT;
use crate::compose::{compose, downsample};
use crate::composite::composite;
use crate::config::{ColorVariant, DeviceProfile, DEFAULT_PACK_ICON_TAGS};
use crate::glyphs::{GlyphIndex, GlyphSet, ResolvedGlyph};
use crate::raster::{GlyphBitmap, GlyphRaster};
use crate::resolve::{GlyphForm, GlyphLookup};
use crate::{Error, Result};

/// Looks up the primary and alternate glyph of every identity in `set`.
///
/// Glyphs without a primary glyph are left out. An alternate that equals the
/// primary glyph is dropped so the same artwork isn't drawn twice.
pub fn resolve_glyphs(lookup: &impl GlyphLookup, set: &GlyphSet) -> Vec<ResolvedGlyph> {
    let mut resolved = Vec::with_capacity(set.len());
    for identity in set.iter() {
        let Some(primary) = lookup.resolve(identity.text(), GlyphForm::Primary) else {
            log::debug!("Skipping {}: not in font", identity.name());
            continue;
        };
        let alternate = lookup
            .resolve(identity.text(), GlyphForm::Alternate)
            .filter(|&alternate| alternate != primary);
        resolved.push(ResolvedGlyph {
            identity: identity.clone(),
            primary,
            alternate,
        });
    }
    log::info!("Resolved {} of {} glyphs", resolved.len(), set.len());
    resolved
}

/// Bitmaps of every glyph a pack needs, rendered at one size.
///
/// Filled once before any variant is rendered and only read afterwards.
#[derive(Clone, Debug)]
pub struct BitmapCache {
    pixel_size: f32,
    bitmaps: HashMap<GlyphIndex, Option<GlyphBitmap>>,
}

impl BitmapCache {
    /// Rasterizes every primary and alternate glyph of `glyphs` exactly once.
    pub fn populate(raster: &mut impl GlyphRaster, glyphs: &[ResolvedGlyph]) -> Self {
        let mut bitmaps = HashMap::with_capacity(glyphs.len() * 2);
        let indices = glyphs
            .iter()
            .flat_map(|glyph| core::iter::once(glyph.primary).chain(glyph.alternate));
        for glyph in indices {
            bitmaps
                .entry(glyph)
                .or_insert_with(|| raster.rasterize(glyph));
        }
        log::debug!(
            "Rasterized {} glyphs at {}px",
            bitmaps.len(),
            raster.pixel_size()
        );
        Self {
            pixel_size: raster.pixel_size(),
            bitmaps,
        }
    }

    /// The bitmap of `glyph`, or `None` when it has no ink or was not cached.
    pub fn get(&self, glyph: GlyphIndex) -> Option<&GlyphBitmap> {
        self.bitmaps.get(&glyph).and_then(Option::as_ref)
    }

    /// The em size the bitmaps were rendered at.
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    /// Number of cached glyphs, including those without ink.
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    /// Whether nothing was cached.
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }
}

/// Where an icon lives in the pack and how it can be found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IconMetadata {
    /// File name inside the pack's icon folder.
    pub path: String,
    /// Display name.
    pub name: String,
    /// Canonical name and aliases.
    pub tags: Vec<String>,
}

/// One finished icon at delivery resolution.
#[derive(Clone, Debug)]
pub struct RenderedIcon {
    /// The icon.
    pub image: RgbaImage,
    /// Its metadata record.
    pub metadata: IconMetadata,
}

/// The icons of one device and color variant.
#[derive(Clone, Debug, Default)]
pub struct IconPack {
    icons: Vec<RenderedIcon>,
    pack_icon: Option<RgbaImage>,
}

impl IconPack {
    /// Icons in processing order.
    pub fn icons(&self) -> &[RenderedIcon] {
        &self.icons
    }

    /// The icon with file name `path`.
    pub fn icon(&self, path: &str) -> Option<&RenderedIcon> {
        self.icons.iter().find(|icon| icon.metadata.path == path)
    }

    /// Metadata records in processing order.
    pub fn metadata(&self) -> Vec<IconMetadata> {
        self.icons.iter().map(|icon| icon.metadata.clone()).collect()
    }

    /// The pack's own icon, when a designated glyph was rendered.
    pub fn pack_icon(&self) -> Option<&RgbaImage> {
        self.pack_icon.as_ref()
    }

    /// Splits the pack into its icons and pack icon.
    pub fn into_parts(self) -> (Vec<RenderedIcon>, Option<RgbaImage>) {
        (self.icons, self.pack_icon)
    }
}

/// Renders icon packs for one device.
#[derive(Clone, Debug)]
pub struct PackAssembler<'a> {
    device: &'a DeviceProfile,
    pack_icon_tags: Vec<String>,
}

impl<'a> PackAssembler<'a> {
    /// Creates an assembler using the default pack icon tags.
    pub fn new(device: &'a DeviceProfile) -> Self {
        Self {
            device,
            pack_icon_tags: DEFAULT_PACK_ICON_TAGS
                .iter()
                .map(|&tag| tag.to_owned())
                .collect(),
        }
    }

    /// Replaces the tags that select the pack icon, highest priority first.
    pub fn with_pack_icon_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.pack_icon_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Renders every glyph of `glyphs` in `variant`.
    ///
    /// `cache` has to be rasterized at this device's working size. Glyphs
    /// whose layers are all missing from the cache produce no icon.
    pub fn render(
        &self,
        glyphs: &[ResolvedGlyph],
        cache: &BitmapCache,
        variant: &ColorVariant,
    ) -> Result<IconPack> {
        self.device.validate()?;
        if cache.pixel_size() != self.device.raster_size() {
            return Err(Error::config(format!(
                "bitmaps were rendered at {}px but {} needs {}px",
                cache.pixel_size(),
                self.device.device,
                self.device.raster_size()
            )));
        }

        let mut icons = Vec::with_capacity(glyphs.len());
        // Rank of the matched tag and the layer it belongs to.
        let mut pack_icon: Option<(usize, RgbaImage)> = None;
        for glyph in glyphs {
            let Some(layer) = self.layer(glyph, cache, variant) else {
                log::debug!("Skipping {}: no ink", glyph.identity.name());
                continue;
            };

            let working = compose(&layer, self.device.working_canvas(), variant.canvas);
            let name = glyph.identity.name().to_owned();
            icons.push(RenderedIcon {
                image: downsample(&working, self.device.canvas_size),
                metadata: IconMetadata {
                    path: format!("{name}.png"),
                    name,
                    tags: glyph.identity.tags().to_vec(),
                },
            });

            if let Some(rank) = self.pack_icon_rank(glyph) {
                if pack_icon.as_ref().is_none_or(|(best, _)| rank < *best) {
                    pack_icon = Some((rank, layer));
                }
            }
        }

        let pack_icon = pack_icon.map(|(_, layer)| {
            let working = compose(&layer, self.device.category_canvas(), Some(TRANSPARENT));
            downsample(&working, self.device.category_icon_size)
        });
        log::info!(
            "Rendered {} icons for {} in {}",
            icons.len(),
            self.device.device,
            variant.name
        );
        Ok(IconPack { icons, pack_icon })
    }

    /// Renders one glyph at delivery size, or `None` when it has no ink.
    pub fn render_icon(
        &self,
        glyph: &ResolvedGlyph,
        cache: &BitmapCache,
        variant: &ColorVariant,
    ) -> Option<RgbaImage> {
        let layer = self.layer(glyph, cache, variant)?;
        let working = compose(&layer, self.device.working_canvas(), variant.canvas);
        Some(downsample(&working, self.device.canvas_size))
    }

    fn layer(
        &self,
        glyph: &ResolvedGlyph,
        cache: &BitmapCache,
        variant: &ColorVariant,
    ) -> Option<RgbaImage> {
        let primary = cache.get(glyph.primary);
        let secondary = glyph.alternate.and_then(|alternate| cache.get(alternate));
        composite(
            primary,
            secondary,
            variant.primary,
            variant.secondary_or_primary(),
        )
    }

    fn pack_icon_rank(&self, glyph: &ResolvedGlyph) -> Option<usize> {
        self.pack_icon_tags
            .iter()
            .position(|tag| glyph.identity.tags().contains(tag))
    }
}
