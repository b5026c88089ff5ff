//! CPU-side sprite sheets and their opacity masks.
//!
//! Textures live on the GPU in [`TextureStore`](super::texturestore::TextureStore);
//! gameplay never touches them. What gameplay needs from an image is its grid
//! layout and which pixels are opaque, so the loader keeps that here under the
//! same key as the texture. Everything in this module is plain data and works
//! without a window, which is what the tests rely on.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::facing::Facing;
use crate::error::AssetError;

/// Alpha values above this count as solid for collision purposes.
pub const ALPHA_THRESHOLD: u8 = 127;

/// Per-pixel opacity of a whole sheet image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl AlphaMask {
    /// Build a mask from row-major alpha values.
    ///
    /// Missing trailing values are treated as transparent.
    pub fn from_alpha(width: u32, height: u32, alpha: impl IntoIterator<Item = u8>) -> Self {
        let len = (width * height) as usize;
        let mut bits: Vec<bool> = alpha
            .into_iter()
            .take(len)
            .map(|a| a > ALPHA_THRESHOLD)
            .collect();
        bits.resize(len, false);
        Self {
            width,
            height,
            bits,
        }
    }

    /// Build a mask by evaluating `opaque(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, opaque: impl Fn(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(opaque(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// A fully opaque mask.
    pub fn solid(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Out-of-range coordinates are transparent.
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }
}

/// Pixel rectangle of one grid cell inside a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A sheet image sliced into an equal `columns x rows` grid.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    key: Arc<str>,
    columns: u32,
    rows: u32,
    facing: Facing,
    mask: Arc<AlphaMask>,
}

impl SpriteSheet {
    /// Wrap a loaded image mask with its grid.
    ///
    /// `facing` is the direction the artwork looks when drawn unflipped.
    pub fn new(
        key: impl Into<Arc<str>>,
        columns: u32,
        rows: u32,
        facing: Facing,
        mask: AlphaMask,
    ) -> Result<Self, AssetError> {
        let key = key.into();
        if columns == 0 || rows == 0 || mask.width() < columns || mask.height() < rows {
            return Err(AssetError::InvalidGrid {
                name: key.to_string(),
                width: mask.width(),
                height: mask.height(),
                columns,
                rows,
            });
        }
        Ok(Self {
            key,
            columns,
            rows,
            facing,
            mask: Arc::new(mask),
        })
    }

    pub fn key(&self) -> &Arc<str> {
        &self.key
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn mask(&self) -> &Arc<AlphaMask> {
        &self.mask
    }

    pub fn cell_width(&self) -> u32 {
        self.mask.width() / self.columns
    }

    pub fn cell_height(&self) -> u32 {
        self.mask.height() / self.rows
    }

    /// Source rectangle of the cell at `(column, row)`.
    pub fn cell(&self, column: u32, row: u32) -> CellRect {
        let w = self.cell_width();
        let h = self.cell_height();
        CellRect {
            x: column * w,
            y: row * h,
            w,
            h,
        }
    }
}

/// Loaded sprite sheets keyed by the same names as their textures.
#[derive(Resource, Debug, Default)]
pub struct SheetStore {
    sheets: FxHashMap<Arc<str>, SpriteSheet>,
}

impl SheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sheet: SpriteSheet) {
        self.sheets.insert(sheet.key().clone(), sheet);
    }

    pub fn get(&self, key: &str) -> Option<&SpriteSheet> {
        self.sheets.get(key)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_threshold() {
        let mask = AlphaMask::from_alpha(4, 1, [0, 127, 128, 255]);
        assert!(!mask.is_opaque(0, 0));
        assert!(!mask.is_opaque(1, 0));
        assert!(mask.is_opaque(2, 0));
        assert!(mask.is_opaque(3, 0));
    }

    #[test]
    fn test_short_alpha_is_padded_transparent() {
        let mask = AlphaMask::from_alpha(2, 2, [255]);
        assert!(mask.is_opaque(0, 0));
        assert!(!mask.is_opaque(1, 1));
    }

    #[test]
    fn test_out_of_range_is_transparent() {
        let mask = AlphaMask::solid(2, 2);
        assert!(!mask.is_opaque(2, 0));
        assert!(!mask.is_opaque(0, 5));
    }

    #[test]
    fn test_sheet_cells_are_row_major_slices() {
        let sheet = SpriteSheet::new("grid", 4, 2, Facing::Left, AlphaMask::solid(64, 32)).unwrap();
        assert_eq!(sheet.cell_width(), 16);
        assert_eq!(sheet.cell_height(), 16);
        assert_eq!(
            sheet.cell(3, 1),
            CellRect {
                x: 48,
                y: 16,
                w: 16,
                h: 16
            }
        );
    }

    #[test]
    fn test_sheet_rejects_empty_grid() {
        let err = SpriteSheet::new("bad", 0, 1, Facing::Left, AlphaMask::solid(8, 8));
        assert!(matches!(err, Err(AssetError::InvalidGrid { .. })));
        let err = SpriteSheet::new("tiny", 10, 1, Facing::Left, AlphaMask::solid(8, 8));
        assert!(matches!(err, Err(AssetError::InvalidGrid { .. })));
    }

    #[test]
    fn test_store_lookup() {
        let mut store = SheetStore::new();
        store.insert(
            SpriteSheet::new("slime", 4, 1, Facing::Left, AlphaMask::solid(8, 2)).unwrap(),
        );
        assert_eq!(store.len(), 1);
        assert!(store.get("slime").is_some());
        assert!(store.get("zombie").is_none());
    }
}
