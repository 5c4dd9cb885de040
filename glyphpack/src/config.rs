// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device profiles, color variants and pack level settings.
//!
//! All types deserialize from the JSON configuration files the command line
//! front end reads, and can also be built directly.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use image::Rgba;
use serde::Deserialize;

use crate::color::{parse_optional, parse_rgba};
use crate::{Error, Result};

/// Supersampling factor used when a device file does not set one.
pub const DEFAULT_SCALE_FACTOR: u32 = 5;

/// The pack icon canvas is this many quarters of the glyph em size.
pub const CATEGORY_CANVAS_QUARTERS: u32 = 5;

/// Largest side of any supersampled size, in pixels.
pub const MAX_WORKING_SIZE: u32 = 1 << 14;

/// Tags of the glyphs that double as the pack's own icon.
pub const DEFAULT_PACK_ICON_TAGS: &[&str] = &["house", "spotify"];

/// Sizes for one target device.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDeviceProfile")]
pub struct DeviceProfile {
    /// Display name of the device.
    pub device: String,
    /// Glyph em size at delivery resolution, in pixels.
    pub icon_size: u32,
    /// Side of the delivered square icon, in pixels.
    pub canvas_size: u32,
    /// Side of the delivered pack icon, in pixels.
    pub category_icon_size: u32,
    /// Every working size is this many times the delivery size.
    pub scale_factor: u32,
    /// File extension of the packaged icon pack.
    pub extension: String,
}

#[derive(Deserialize)]
struct RawDeviceProfile {
    device: String,
    icon_size: u32,
    canvas_size: u32,
    category_icon_size: u32,
    #[serde(default = "default_scale_factor")]
    scale_factor: u32,
    #[serde(default)]
    extension: String,
}

fn default_scale_factor() -> u32 {
    DEFAULT_SCALE_FACTOR
}

impl TryFrom<RawDeviceProfile> for DeviceProfile {
    type Error = Error;

    fn try_from(raw: RawDeviceProfile) -> Result<Self> {
        let profile = Self {
            device: raw.device,
            icon_size: raw.icon_size,
            canvas_size: raw.canvas_size,
            category_icon_size: raw.category_icon_size,
            scale_factor: raw.scale_factor,
            extension: raw.extension,
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl DeviceProfile {
    /// Creates a profile with the default scale factor and no extension.
    pub fn new(
        device: impl Into<String>,
        icon_size: u32,
        canvas_size: u32,
        category_icon_size: u32,
    ) -> Self {
        Self {
            device: device.into(),
            icon_size,
            canvas_size,
            category_icon_size,
            scale_factor: DEFAULT_SCALE_FACTOR,
            extension: String::new(),
        }
    }

    /// Checks that every size is usable.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("icon_size", self.icon_size),
            ("canvas_size", self.canvas_size),
            ("category_icon_size", self.category_icon_size),
            ("scale_factor", self.scale_factor),
        ];
        for (name, value) in sizes {
            if value == 0 {
                return Err(Error::config(format!(
                    "{name} of device {:?} must be positive",
                    self.device
                )));
            }
        }
        let working = [
            ("rasterization size", self.raster_size_px()),
            ("working canvas", self.working_canvas_size()),
            ("pack icon canvas", self.category_canvas_size()),
        ];
        for (name, size) in working {
            if size > u64::from(MAX_WORKING_SIZE) {
                return Err(Error::config(format!(
                    "{name} of device {:?} is {size}px, more than {MAX_WORKING_SIZE}px",
                    self.device
                )));
            }
        }
        Ok(())
    }

    /// Pixel size the face is set to for rasterization.
    pub fn raster_size(&self) -> f32 {
        self.raster_size_px() as f32
    }

    /// Side of the supersampled icon canvas.
    pub fn working_canvas(&self) -> u32 {
        u32::try_from(self.working_canvas_size()).unwrap_or(u32::MAX)
    }

    /// Side of the supersampled pack icon canvas, `1.25` times the
    /// rasterization size rounded to the nearest pixel.
    pub fn category_canvas(&self) -> u32 {
        u32::try_from(self.category_canvas_size()).unwrap_or(u32::MAX)
    }

    fn raster_size_px(&self) -> u64 {
        u64::from(self.icon_size) * u64::from(self.scale_factor)
    }

    fn working_canvas_size(&self) -> u64 {
        u64::from(self.canvas_size) * u64::from(self.scale_factor)
    }

    fn category_canvas_size(&self) -> u64 {
        (self.raster_size_px() * u64::from(CATEGORY_CANVAS_QUARTERS) + 2) / 4
    }
}

/// Checks that no two devices share a pack extension.
///
/// Packs and contact sheets are named after the extension, so devices sharing
/// one would overwrite each other's output.
pub fn check_distinct_extensions<'a>(
    devices: impl IntoIterator<Item = &'a DeviceProfile>,
) -> Result<()> {
    let mut seen = HashMap::new();
    for device in devices {
        if let Some(other) = seen.insert(device.extension.as_str(), device.device.as_str()) {
            return Err(Error::config(format!(
                "devices {other:?} and {:?} share the pack extension {:?}",
                device.device, device.extension
            )));
        }
    }
    Ok(())
}

/// A palette an icon pack is rendered in.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawColorVariant")]
pub struct ColorVariant {
    /// Display name of the variant.
    pub name: String,
    /// Color of the primary glyph layer.
    pub primary: Rgba<u8>,
    /// Color of the alternate glyph layer; the primary color when unset.
    pub secondary: Option<Rgba<u8>>,
    /// Canvas background; `None` leaves the canvas transparent.
    pub canvas: Option<Rgba<u8>>,
}

#[derive(Deserialize)]
struct RawColorVariant {
    name: String,
    primary_color: String,
    #[serde(default)]
    secondary_color: Option<String>,
    #[serde(default)]
    canvas_color: Option<String>,
}

impl TryFrom<RawColorVariant> for ColorVariant {
    type Error = Error;

    fn try_from(raw: RawColorVariant) -> Result<Self> {
        Self::parse(
            raw.name,
            &raw.primary_color,
            raw.secondary_color.as_deref(),
            raw.canvas_color.as_deref(),
        )
    }
}

impl ColorVariant {
    /// Builds a variant from color strings.
    pub fn parse(
        name: impl Into<String>,
        primary: &str,
        secondary: Option<&str>,
        canvas: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            primary: parse_rgba(primary)?,
            secondary: parse_optional(secondary)?,
            canvas: parse_optional(canvas)?,
        })
    }

    /// The color used for the alternate layer.
    pub fn secondary_or_primary(&self) -> Rgba<u8> {
        self.secondary.unwrap_or(self.primary)
    }

    /// Whether icons get an opaque or tinted background.
    pub fn has_background(&self) -> bool {
        self.canvas.is_some_and(|color| color.0[3] != 0)
    }
}

/// A font the packs are built from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FontEntry {
    /// Display name, e.g. `Solid`.
    pub name: String,
}

/// Pack wide settings shared by every device and variant.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PackConfig {
    /// Title prefix of every pack, e.g. `Font Awesome`.
    #[serde(default)]
    pub title: String,
    /// Version written to the manifest.
    pub version: String,
    /// Author written to the manifest.
    #[serde(default)]
    pub author: String,
    /// Home page written to the manifest.
    #[serde(default)]
    pub url: String,
    /// Glyph tags that select the pack icon, in priority order.
    #[serde(default = "default_pack_icon_tags")]
    pub pack_icon_tags: Vec<String>,
    /// Fonts by id.
    #[serde(default)]
    pub fonts: BTreeMap<String, FontEntry>,
    /// Color variants by id.
    pub variants: BTreeMap<String, ColorVariant>,
}

fn default_pack_icon_tags() -> Vec<String> {
    DEFAULT_PACK_ICON_TAGS.iter().map(|&tag| tag.to_owned()).collect()
}

impl PackConfig {
    /// Display name of the pack for a font and variant.
    pub fn pack_name(&self, font: &FontEntry, variant: &ColorVariant) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            format!("{} - {}", font.name, variant.name)
        } else {
            format!("{title} {} - {}", font.name, variant.name)
        }
    }
}
