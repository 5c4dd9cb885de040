// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared inputs and scratch directories.

use std::fs;
use std::path::{Path, PathBuf};

use glyphpack::{DeviceProfile, GlyphSet, PackConfig};

use super::{BOLT, HOUSE, SPACE, SPOTIFY, UNMAPPED};

/// A fresh, empty directory for the outputs of test `name`.
pub(crate) fn out_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR"))
        .join("glyphpack_tests")
        .join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub(crate) fn sample_config() -> PackConfig {
    serde_json::from_str(glyphpack_dev::SAMPLE_CONFIG).unwrap()
}

pub(crate) fn sample_device() -> DeviceProfile {
    serde_json::from_str(glyphpack_dev::SAMPLE_DEVICE).unwrap()
}

/// Every glyph of [`BlockFont`](super::BlockFont) plus one it lacks.
pub(crate) fn block_glyphs() -> GlyphSet {
    let mut set = GlyphSet::new();
    for (text, names) in [
        (HOUSE, &["house", "home"][..]),
        (UNMAPPED, &["ghost"][..]),
        (BOLT, &["bolt", "lightning"][..]),
        (SPACE, &["space"][..]),
        (SPOTIFY, &["spotify"][..]),
    ] {
        let names = names.iter().map(|&name| name.to_owned()).collect();
        set.insert(text, names).unwrap();
    }
    set
}
