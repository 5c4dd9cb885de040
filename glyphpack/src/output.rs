// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing rendered packs and their contact sheets to disk.
//!
//! A pack for font `solid` in variant `red` with extension
//! `streamDeckIconPack` is laid out as:
//!
//! ```text
//! <out>/solid-red.streamDeckIconPack/
//!     icons/<name>.png
//!     icons.json
//!     manifest.json
//!     icon.png
//! <out>/solid-red.streamDeckIconPack-thumb-16x9.jpg
//! <out>/solid-red.streamDeckIconPack.thumb_10x10.jpg
//! ```
//!
//! Devices without an extension drop the `.<extension>` part, so every device
//! needs a distinct extension, see [`check_distinct_extensions`].
//!
//! [`check_distinct_extensions`]: crate::config::check_distinct_extensions

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage, RgbaImage};
use serde::Serialize;

use crate::assemble::IconPack;
use crate::manifest::{Manifest, ICONS_FOLDER, PACK_ICON_FILE};
use crate::sheet::{contact_sheet, SheetLayout};
use crate::{Error, Result};

/// File name of the icon metadata list inside a pack.
pub const ICONS_FILE: &str = "icons.json";

/// File name of the manifest inside a pack.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Output locations of one font and variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackPaths {
    out: PathBuf,
    stem: String,
}

impl PackPaths {
    /// Paths below `out` for `font_id` rendered in `variant_id`.
    pub fn new(out: impl Into<PathBuf>, font_id: &str, variant_id: &str) -> Self {
        Self {
            out: out.into(),
            stem: format!("{font_id}-{variant_id}"),
        }
    }

    /// The pack directory, named after the device's pack extension.
    pub fn pack_dir(&self, extension: &str) -> PathBuf {
        self.out.join(self.device_stem(extension))
    }

    /// Where the device's contact sheet with `layout` goes.
    pub fn sheet(&self, extension: &str, layout: &SheetLayout) -> PathBuf {
        self.out
            .join(format!("{}{}", self.device_stem(extension), layout.suffix))
    }

    fn device_stem(&self, extension: &str) -> String {
        if extension.is_empty() {
            self.stem.clone()
        } else {
            format!("{}.{extension}", self.stem)
        }
    }
}

/// Writes `pack` and its `manifest` into `dir`.
///
/// An existing `dir` is replaced so that icons of earlier runs do not linger.
pub fn write_pack(dir: &Path, pack: &IconPack, manifest: &Manifest) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|err| io_error(dir, &err))?;
    }
    let icons_dir = dir.join(ICONS_FOLDER);
    fs::create_dir_all(&icons_dir).map_err(|err| io_error(&icons_dir, &err))?;

    for icon in pack.icons() {
        save_png(&icons_dir.join(&icon.metadata.path), &icon.image)?;
    }
    write_json(&dir.join(ICONS_FILE), &pack.metadata())?;
    write_json(&dir.join(MANIFEST_FILE), manifest)?;
    if let Some(pack_icon) = pack.pack_icon() {
        save_png(&dir.join(PACK_ICON_FILE), pack_icon)?;
    }

    log::info!("Wrote {} icons to {}", pack.icons().len(), dir.display());
    Ok(())
}

/// Renders the icons of `pack` onto a contact sheet and saves it as JPEG.
///
/// `cell` is the side of the pack's icons.
pub fn write_sheet(path: &Path, pack: &IconPack, cell: u32, layout: &SheetLayout) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| io_error(parent, &err))?;
    }
    let sheet: RgbImage = contact_sheet(pack.icons().iter().map(|icon| &icon.image), cell, layout);
    sheet
        .save_with_format(path, ImageFormat::Jpeg)
        .map_err(|err| image_error(path, &err))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

fn save_png(path: &Path, image: &RgbaImage) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| image_error(path, &err))
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|err| Error::io(format!("failed to serialize {}: {err}", path.display())))?;
    json.push('\n');
    fs::write(path, json).map_err(|err| io_error(path, &err))
}

fn io_error(path: &Path, err: &std::io::Error) -> Error {
    Error::io(format!("{}: {err}", path.display()))
}

fn image_error(path: &Path, err: &image::ImageError) -> Error {
    Error::image(format!("failed to save {}: {err}", path.display()))
}
