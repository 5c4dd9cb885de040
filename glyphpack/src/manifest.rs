// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `manifest.json` describing an icon pack to the device software.

use serde::Serialize;

use crate::config::{ColorVariant, FontEntry, PackConfig};

/// File name of the pack icon inside a pack.
pub const PACK_ICON_FILE: &str = "icon.png";

/// Folder holding the icons inside a pack.
pub const ICONS_FOLDER: &str = "icons";

/// Pack manifest, serialized with the field names the device software reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manifest {
    /// Display name of the pack.
    pub name: String,
    /// Pack version.
    pub version: String,
    /// One line description.
    pub description: String,
    /// Home page.
    #[serde(rename = "URL")]
    pub url: String,
    /// Pack author.
    pub author: String,
    /// Pack icon file.
    pub icon: String,
    /// Icon folder.
    pub images: String,
}

impl Manifest {
    /// Describes the pack of `font` in `variant` holding `icon_count` icons.
    pub fn new(
        config: &PackConfig,
        font: &FontEntry,
        variant: &ColorVariant,
        icon_count: usize,
    ) -> Self {
        let name = config.pack_name(font, variant);
        Self {
            description: format!("{name} Icon Pack consist of {icon_count} various icons."),
            name,
            version: config.version.clone(),
            url: config.url.clone(),
            author: config.author.clone(),
            icon: PACK_ICON_FILE.to_owned(),
            images: ICONS_FOLDER.to_owned(),
        }
    }
}
