// Copyright 2026 the Glyphpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact sheets previewing a pack.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbImage, RgbaImage};

/// Gap around each icon on a sheet, in icon pixels.
pub const SHEET_MARGIN: u32 = 5;

/// Grid and output size of a contact sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    /// Icons per row.
    pub columns: u32,
    /// Rows of icons.
    pub rows: u32,
    /// Width of the final sheet.
    pub width: u32,
    /// Height of the final sheet.
    pub height: u32,
    /// Suffix of the sheet's file name.
    pub suffix: &'static str,
}

impl SheetLayout {
    /// 16 x 9 icons on a 1280 x 720 sheet.
    pub const WIDE: Self = Self {
        columns: 16,
        rows: 9,
        width: 1280,
        height: 720,
        suffix: "-thumb-16x9.jpg",
    };

    /// 10 x 10 icons on a 1000 x 1000 sheet.
    pub const SQUARE: Self = Self {
        columns: 10,
        rows: 10,
        width: 1000,
        height: 1000,
        suffix: ".thumb_10x10.jpg",
    };

    /// Number of icons that fit the grid.
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Lays the first icons out on a black grid and scales it to the sheet size.
///
/// `cell` is the side of one icon. Grid cells without an icon stay black.
pub fn contact_sheet<'a>(
    icons: impl IntoIterator<Item = &'a RgbaImage>,
    cell: u32,
    layout: &SheetLayout,
) -> RgbImage {
    let pitch = cell + 2 * SHEET_MARGIN;
    let mut grid = RgbaImage::from_pixel(
        pitch * layout.columns,
        pitch * layout.rows,
        Rgba([0, 0, 0, 255]),
    );
    for (index, icon) in icons.into_iter().take(layout.capacity()).enumerate() {
        let Ok(index) = u32::try_from(index) else {
            break;
        };
        let column = index % layout.columns;
        let row = index / layout.columns;
        imageops::overlay(
            &mut grid,
            icon,
            i64::from(column * pitch + SHEET_MARGIN),
            i64::from(row * pitch + SHEET_MARGIN),
        );
    }
    let grid = DynamicImage::ImageRgba8(grid).into_rgb8();
    imageops::resize(&grid, layout.width, layout.height, FilterType::Lanczos3)
}
