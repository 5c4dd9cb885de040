// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph identities and the ordered set the pack is built from.

use std::fmt;

use hashbrown::HashMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::{Error, Result};

/// A glyph id inside a font that refers to real artwork.
///
/// Glyph id 0 is `.notdef`, which is what a shaper emits for characters the
/// font does not map, so it never forms a `GlyphIndex`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphIndex(u16);

impl GlyphIndex {
    /// Wraps a raw glyph id, returning `None` for `.notdef` or ids that do not
    /// fit in a 16-bit glyph table.
    pub fn new(id: u32) -> Option<Self> {
        match u16::try_from(id) {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(Self(id)),
        }
    }

    /// The raw glyph id.
    pub fn to_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for GlyphIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gid{}", self.0)
    }
}

/// An icon: the text that is shaped to find it and the names it goes by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphIdentity {
    text: String,
    /// Never empty. The first entry is the canonical name.
    names: Vec<String>,
}

impl GlyphIdentity {
    /// Creates an identity, failing when `names` is empty.
    pub fn new(text: impl Into<String>, names: Vec<String>) -> Result<Self> {
        let text = text.into();
        if names.is_empty() {
            return Err(Error::config(format!("glyph {text:?} has no names")));
        }
        Ok(Self { text, names })
    }

    /// The character (or ligature cluster) that is shaped to find the glyph.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The canonical name, used for the icon file name.
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    /// Alternative names sharing the same rendering.
    pub fn aliases(&self) -> &[String] {
        &self.names[1..]
    }

    /// Canonical name followed by all aliases.
    pub fn tags(&self) -> &[String] {
        &self.names
    }
}

/// An insertion-ordered collection of glyph identities keyed by glyph text.
///
/// Deserializes from a JSON object such as `{"\uf015": ["house", "home"]}`,
/// keeping document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphSet {
    glyphs: Vec<GlyphIdentity>,
    by_text: HashMap<String, usize>,
}

impl GlyphSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a glyph, or replaces the names of an existing glyph with the same
    /// text while keeping its position.
    pub fn insert(&mut self, text: impl Into<String>, names: Vec<String>) -> Result<()> {
        self.put(GlyphIdentity::new(text, names)?);
        Ok(())
    }

    /// Merges `other` into this set with [`GlyphSet::insert`] semantics.
    pub fn extend(&mut self, other: Self) {
        for identity in other.glyphs {
            self.put(identity);
        }
    }

    fn put(&mut self, identity: GlyphIdentity) {
        match self.by_text.get(identity.text()) {
            Some(&index) => self.glyphs[index] = identity,
            None => {
                self.by_text
                    .insert(identity.text().to_owned(), self.glyphs.len());
                self.glyphs.push(identity);
            }
        }
    }

    /// Looks up a glyph by its text.
    pub fn get(&self, text: &str) -> Option<&GlyphIdentity> {
        self.by_text.get(text).map(|&index| &self.glyphs[index])
    }

    /// Iterates glyphs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GlyphIdentity> {
        self.glyphs.iter()
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl<'de> Deserialize<'de> for GlyphSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GlyphSetVisitor;

        impl<'de> Visitor<'de> for GlyphSetVisitor {
            type Value = GlyphSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from glyph text to a list of names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<GlyphSet, A::Error> {
                let mut set = GlyphSet::new();
                while let Some((text, names)) = map.next_entry::<String, Vec<String>>()? {
                    set.insert(text, names).map_err(serde::de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(GlyphSetVisitor)
    }
}

/// A glyph whose primary index exists in the font.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedGlyph {
    /// The icon this glyph renders.
    pub identity: GlyphIdentity,
    /// The default rendering.
    pub primary: GlyphIndex,
    /// The stylistic alternate layer drawn over the primary one.
    ///
    /// `None` when the font has no alternate or the alternate is the
    /// primary glyph itself.
    pub alternate: Option<GlyphIndex>,
}
