use anyhow::{bail, ensure, Result};

use crate::math::Point;

/// Owned 1-bpp bitmap in the canvas blit packing: row-major, MSB-first,
/// rows padded to byte boundaries.
///
/// Sprites never own their pixel data; loaders produce `BitmapData` and the
/// caller keeps it alive while sprites borrow `bits()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapData {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl BitmapData {
    /// Wrap already-packed rows. `bits` must hold exactly
    /// `(width + 7) / 8 * height` bytes.
    pub fn new(width: u32, height: u32, bits: Vec<u8>) -> Result<Self> {
        let expected = (width as usize + 7) / 8 * height as usize;
        ensure!(
            bits.len() == expected,
            "bitmap {}x{} needs {} bytes, got {}",
            width,
            height,
            expected,
            bits.len()
        );

        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Pack `.`/`#` row art. All rows must have the same length; `.` is a
    /// dark pixel, `#` a lit one.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let Some(first) = rows.first() else {
            bail!("bitmap art has no rows");
        };

        let width = first.as_ref().chars().count();
        ensure!(width > 0, "bitmap art has empty rows");

        let stride = (width + 7) / 8;
        let mut bits = vec![0u8; stride * rows.len()];

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            ensure!(
                row.chars().count() == width,
                "bitmap art row {} is {} pixels wide, expected {}",
                y,
                row.chars().count(),
                width
            );

            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '.' => {}
                    '#' => bits[y * stride + x / 8] |= 0x80 >> (x % 8),
                    other => bail!("bitmap art row {} has invalid pixel {:?}", y, other),
                }
            }
        }

        Self::new(width as u32, rows.len() as u32, bits)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Extents as a sprite-sized point.
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    /// Packed pixel data in blit order.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_new_validates_length() {
        assert!(BitmapData::new(8, 2, vec![0xFF, 0x00]).is_ok());
        assert!(BitmapData::new(9, 2, vec![0xFF, 0x00]).is_err());
        assert!(BitmapData::new(9, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn bitmap_from_rows_packs_msb_first() {
        let bmp = BitmapData::from_rows(&["#.......", ".......#"]).unwrap();

        assert_eq!(bmp.width(), 8);
        assert_eq!(bmp.height(), 2);
        assert_eq!(bmp.bits(), &[0x80, 0x01]);
    }

    #[test]
    fn bitmap_from_rows_pads_rows_to_bytes() {
        let bmp = BitmapData::from_rows(&["##########", ".........#"]).unwrap();

        assert_eq!(bmp.width(), 10);
        assert_eq!(bmp.bits(), &[0xFF, 0xC0, 0x00, 0x40]);
        assert_eq!(bmp.size(), Point::new(10, 2));
    }

    #[test]
    fn bitmap_from_rows_rejects_ragged_art() {
        let err = BitmapData::from_rows(&["####", "##"]).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn bitmap_from_rows_rejects_unknown_pixels() {
        assert!(BitmapData::from_rows(&["#x#"]).is_err());
        let empty: [&str; 0] = [];
        assert!(BitmapData::from_rows(&empty).is_err());
    }
}
