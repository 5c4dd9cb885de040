// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests against real fonts.
//!
//! The fixture font is always available. Tests using a system font are
//! skipped when none is found, see [`glyphpack_dev::test_font`].

use glyphpack_dev::fixture_glyphs;

use crate::{ErrorKind, FontData, GlyphForm, GlyphIndex, GlyphLookup, GlyphRaster};

fn load() -> Option<FontData> {
    let path = glyphpack_dev::test_font()?;
    Some(FontData::from_path(path).unwrap())
}

fn fixture() -> FontData {
    FontData::from_path(glyphpack_dev::fixture_font()).unwrap()
}

fn glyph(id: u16) -> Option<GlyphIndex> {
    GlyphIndex::new(u32::from(id))
}

#[test]
fn font_rejects_garbage() {
    let err = FontData::new(b"definitely not a font".to_vec(), 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Font);

    let err = FontData::new(Vec::<u8>::new(), 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Font);
}

#[test]
fn font_from_missing_path() {
    let err = FontData::from_path("/nonexistent/glyphpack/font.ttf").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Font);
    assert!(err.to_string().starts_with("font error: "));
}

#[test]
fn font_fixture_metadata() {
    let font = fixture();
    assert_eq!(font.glyph_count(), fixture_glyphs::COUNT);
    assert_eq!(font.family_name(), Some(glyphpack_dev::FIXTURE_FAMILY));
}

#[test]
fn resolver_alternate_form_applies_ss01() {
    let font = fixture();
    let resolver = font.resolver().unwrap();

    assert_eq!(resolver.resolve("A", GlyphForm::Primary), glyph(fixture_glyphs::A));
    assert_eq!(
        resolver.resolve("A", GlyphForm::Alternate),
        glyph(fixture_glyphs::A_SS01)
    );
}

#[test]
fn resolver_alternate_form_without_substitution() {
    let font = fixture();
    let resolver = font.resolver().unwrap();

    for (text, id) in [("B", fixture_glyphs::B), (" ", fixture_glyphs::SPACE)] {
        assert_eq!(resolver.resolve(text, GlyphForm::Primary), glyph(id), "{text:?}");
        assert_eq!(resolver.resolve(text, GlyphForm::Alternate), glyph(id), "{text:?}");
    }
    for form in [GlyphForm::Primary, GlyphForm::Alternate] {
        assert_eq!(resolver.resolve("C", form), None);
    }
}

#[test]
fn raster_fixture_alternate_sits_above_primary() {
    let font = fixture();
    let mut face = font.sized(100.0).unwrap();

    let primary = face.rasterize(glyph(fixture_glyphs::A).unwrap()).unwrap();
    let alternate = face.rasterize(glyph(fixture_glyphs::A_SS01).unwrap()).unwrap();
    assert!(alternate.top() > primary.top());
    assert!(alternate.left() > primary.left());
    assert!(alternate.width() < primary.width());
    assert!(primary.coverage().contains(&255));
    assert!(alternate.coverage().contains(&255));

    assert_eq!(face.rasterize(glyph(fixture_glyphs::SPACE).unwrap()), None);
}

#[test]
fn font_metadata() {
    let Some(font) = load() else {
        return;
    };
    assert!(font.glyph_count() > 1);
    assert_eq!(font.index(), 0);
    assert!(!font.data().is_empty());
}

#[test]
fn resolver_finds_mapped_characters() {
    let Some(font) = load() else {
        return;
    };
    let resolver = font.resolver().unwrap();

    let a = resolver.resolve("A", GlyphForm::Primary).unwrap();
    assert!(a.to_u16() < font.glyph_count());
    assert_ne!(resolver.resolve("B", GlyphForm::Primary), Some(a));
    assert!(resolver.resolve("A", GlyphForm::Alternate).is_some());
}

#[test]
fn resolver_reports_missing_characters() {
    let Some(font) = load() else {
        return;
    };
    let resolver = font.resolver().unwrap();

    assert_eq!(resolver.resolve("\u{10FFFD}", GlyphForm::Primary), None);
    assert_eq!(resolver.resolve("", GlyphForm::Primary), None);
}

#[test]
fn raster_renders_ink_above_the_baseline() {
    let Some(font) = load() else {
        return;
    };
    let resolver = font.resolver().unwrap();
    let mut face = font.sized(100.0).unwrap();

    let a = resolver.resolve("A", GlyphForm::Primary).unwrap();
    let bitmap = face.rasterize(a).unwrap();
    assert!(bitmap.top() > 0);
    assert!(bitmap.width() > 10 && bitmap.width() < 200);
    assert!(bitmap.height() > 10 && bitmap.height() < 200);
    assert!(bitmap.coverage().contains(&255));
    assert_eq!(face.pixel_size(), 100.0);

    // Rendering is repeatable.
    assert_eq!(face.rasterize(a), Some(bitmap));
}

#[test]
fn raster_space_has_no_ink() {
    let Some(font) = load() else {
        return;
    };
    let resolver = font.resolver().unwrap();
    let mut face = font.sized(100.0).unwrap();

    let space = resolver.resolve(" ", GlyphForm::Primary).unwrap();
    assert_eq!(face.rasterize(space), None);
}

#[test]
fn raster_rejects_unusable_sizes() {
    let Some(font) = load() else {
        return;
    };
    for size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
        let err = font.sized(size).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
