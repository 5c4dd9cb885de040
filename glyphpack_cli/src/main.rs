// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders one icon font into an icon pack per device and color variant.
//!
//! ```text
//! glyphpack --config config/config.json \
//!           --device config/stream_deck.json --device config/stream_dock.json \
//!           --font assets/fa-solid-900.ttf --glyphs assets/solid.json \
//!           --font-id solid --out build
//! ```
//!
//! Set `RUST_LOG=debug` for per-glyph diagnostics.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use glyphpack::{
    check_distinct_extensions, resolve_glyphs, write_pack, write_sheet, BitmapCache,
    ColorVariant, DeviceProfile, FontData, FontEntry, GlyphSet, Manifest, PackAssembler,
    PackConfig, PackPaths, ResolvedGlyph, SheetLayout,
};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(version, about = "Renders webfont glyphs into colored icon packs")]
struct Args {
    /// Pack configuration with the fonts and color variants.
    #[arg(long)]
    config: PathBuf,

    /// Device profile; repeat for every target device.
    #[arg(long = "device", required = true)]
    devices: Vec<PathBuf>,

    /// TrueType or OpenType font to render.
    #[arg(long)]
    font: PathBuf,

    /// Index of the font inside a font collection.
    #[arg(long, default_value_t = 0)]
    font_index: u32,

    /// JSON object mapping glyph text to the icon's names.
    #[arg(long)]
    glyphs: PathBuf,

    /// Key of the font in the configuration's `fonts`.
    #[arg(long)]
    font_id: String,

    /// Only render these variants; all configured variants by default.
    #[arg(long = "variant")]
    variants: Vec<String>,

    /// Output directory.
    #[arg(long, default_value = "build")]
    out: PathBuf,

    /// Skip the contact sheet thumbnails.
    #[arg(long)]
    no_sheets: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config: PackConfig = read_json(&args.config)?;
    let devices = args
        .devices
        .iter()
        .map(|path| read_json::<DeviceProfile>(path))
        .collect::<Result<Vec<_>>>()?;
    check_distinct_extensions(&devices)?;
    let glyphs: GlyphSet = read_json(&args.glyphs)?;

    let data =
        fs::read(&args.font).with_context(|| format!("reading {}", args.font.display()))?;
    let font = FontData::new(data, args.font_index)
        .with_context(|| format!("loading {}", args.font.display()))?;
    let font_entry = font_entry(&config, &args.font_id, &font);
    let variants = select_variants(&config, &args.variants)?;

    let resolved = resolve_glyphs(&font.resolver()?, &glyphs);
    if resolved.is_empty() {
        log::warn!("None of the {} glyphs are in the font", glyphs.len());
    }

    for device in &devices {
        render_device(&args, &config, &font, &font_entry, device, &variants, &resolved)
            .with_context(|| format!("rendering packs for {}", device.device))?;
    }
    Ok(())
}

fn render_device(
    args: &Args,
    config: &PackConfig,
    font: &FontData,
    font_entry: &FontEntry,
    device: &DeviceProfile,
    variants: &[(&str, &ColorVariant)],
    resolved: &[ResolvedGlyph],
) -> Result<()> {
    device.validate()?;
    let mut face = font.sized(device.raster_size())?;
    let cache = BitmapCache::populate(&mut face, resolved);
    let assembler = PackAssembler::new(device).with_pack_icon_tags(&config.pack_icon_tags);

    for &(variant_id, variant) in variants {
        let pack = assembler.render(resolved, &cache, variant)?;
        if pack.pack_icon().is_none() {
            log::warn!(
                "No glyph tagged {:?} in {}, the pack has no icon",
                config.pack_icon_tags,
                variant.name
            );
        }
        let manifest = Manifest::new(config, font_entry, variant, pack.icons().len());
        let paths = PackPaths::new(&args.out, &args.font_id, variant_id);
        write_pack(&paths.pack_dir(&device.extension), &pack, &manifest)?;

        if !args.no_sheets {
            for layout in [SheetLayout::WIDE, SheetLayout::SQUARE] {
                if pack.icons().len() < layout.capacity() {
                    log::debug!(
                        "{} has {} icons, {} sheet cells stay empty",
                        manifest.name,
                        pack.icons().len(),
                        layout.capacity() - pack.icons().len()
                    );
                }
                write_sheet(
                    &paths.sheet(&device.extension, &layout),
                    &pack,
                    device.canvas_size,
                    &layout,
                )?;
            }
        }
    }
    Ok(())
}

/// The configured entry for `font_id`, or one named after the font itself.
fn font_entry(config: &PackConfig, font_id: &str, font: &FontData) -> FontEntry {
    if let Some(entry) = config.fonts.get(font_id) {
        return entry.clone();
    }
    let name = font.family_name().unwrap_or(font_id).to_owned();
    log::warn!("Font {font_id:?} is not configured, naming packs after {name:?}");
    FontEntry { name }
}

fn select_variants<'a>(
    config: &'a PackConfig,
    wanted: &[String],
) -> Result<Vec<(&'a str, &'a ColorVariant)>> {
    if wanted.is_empty() {
        return Ok(config
            .variants
            .iter()
            .map(|(id, variant)| (id.as_str(), variant))
            .collect());
    }
    wanted
        .iter()
        .map(|id| match config.variants.get_key_value(id) {
            Some((id, variant)) => Ok((id.as_str(), variant)),
            None => bail!("unknown variant {id:?}"),
        })
        .collect()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
