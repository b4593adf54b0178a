//! Signed distance fields.
//!
//! A `DistanceField` stores, for every pixel of a binary image, the distance to the nearest
//! boundary between foreground and background. Pixels inside the foreground are negative,
//! pixels outside are positive. Distances are measured in pixels.
//!
//! The field is computed with two independent propagations (see `grid`), one seeded at the
//! foreground and one seeded at the background, and their difference is the signed value.
//!
//! ```rust,ignore
//! let df = DistanceField::from_fgbg_file("glyphs/a.png")?;
//! df.write_to_file("glyphs/a.df")?;
//! df.write_visualization(visual_path("glyphs/a.df"))?;
//! ```

pub mod grid;
pub mod mask;
pub mod minify;
pub mod serialization;
pub mod visual;

pub use self::mask::BinaryImage;
pub use self::visual::visual_path;

use std::path::Path;

use self::grid::Grid;
use crate::errors::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceField {
    pub w: i32,
    pub h: i32,
    pub v: Vec<f32>,
}

impl DistanceField {
    /// Creates a zero-filled field, usually as a blit target.
    pub fn new(w: i32, h: i32) -> Result<Self> {
        let len = check_dimensions(w, h)?;

        Ok(DistanceField {
            w: w,
            h: h,
            v: vec![0.0; len],
        })
    }

    pub fn from_vec(w: i32, h: i32, v: Vec<f32>) -> Result<Self> {
        if v.len() != check_dimensions(w, h)? {
            return Err(Error::InvalidDimensions { w: w, h: h });
        }

        Ok(DistanceField { w: w, h: h, v: v })
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> f32 {
        self.v[(y * self.w + x) as usize]
    }

    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.v
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.v
    }

    /// Computes the signed field of a binary image.
    pub fn from_binary_image(image: &BinaryImage) -> Self {
        let (w, h) = (image.width(), image.height());

        let mut inside = Grid::new(image, |fg| fg);
        let mut outside = Grid::new(image, |fg| !fg);

        inside.propagate();
        outside.propagate();

        let v = inside
            .points()
            .iter()
            .zip(outside.points())
            .map(|(p1, p2)| p1.dist() - p2.dist())
            .collect();

        DistanceField { w: w, h: h, v: v }
    }

    /// Computes the field of a raw mask, where a zero byte marks a foreground pixel.
    pub fn from_mask_bytes(bytes: &[u8], w: i32, h: i32) -> Result<Self> {
        let image = BinaryImage::from_mask_bytes(bytes, w, h)?;
        Ok(Self::from_binary_image(&image))
    }

    /// Computes the field of a 4-channel image. `channel_offset` selects the channel that
    /// decides the classification; only pixels where that channel is exactly 255 are
    /// foreground.
    pub fn from_fourchannel_image(
        rgba: &[u8],
        w: i32,
        h: i32,
        channel_offset: usize,
    ) -> Result<Self> {
        let image = BinaryImage::from_fourchannel(rgba, w, h, channel_offset)?;
        Ok(Self::from_binary_image(&image))
    }

    /// Computes the field of a 1 or 4 channel PNG. A 4-channel image is classified by its
    /// alpha channel alone.
    pub fn from_fgbg_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = BinaryImage::from_fgbg_file(path)?;
        Ok(Self::from_binary_image(&image))
    }

    /// Creates an 8-bit image for somewhat visualizing the field.
    pub fn clamped_image(&self) -> Vec<u8> {
        self.v
            .iter()
            .map(|&d| {
                let shifted = (d * 3.0 + 128.0) as i32;
                if shifted < 0 {
                    0
                } else if shifted > 255 {
                    255
                } else {
                    shifted as u8
                }
            })
            .collect()
    }
}

/// Returns the number of pixels of a `w`x`h` buffer. The count must fit an `i32`, so that
/// row-major indices like `y * w + x` never overflow.
pub(crate) fn check_dimensions(w: i32, h: i32) -> Result<usize> {
    if w < 0 || h < 0 {
        return Err(Error::InvalidDimensions { w: w, h: h });
    }

    w.checked_mul(h)
        .map(|v| v as usize)
        .ok_or_else(|| Error::InvalidDimensions { w: w, h: h })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec() {
        assert!(DistanceField::from_vec(2, 2, vec![0.0; 4]).is_ok());
        assert!(DistanceField::from_vec(2, 2, vec![0.0; 3]).is_err());
        assert!(DistanceField::from_vec(-1, 2, vec![]).is_err());

        let df = DistanceField::new(3, 2).unwrap();
        assert_eq!(df.v.len(), 6);
    }

    #[test]
    fn overflowing_dimensions() {
        match DistanceField::from_vec(65536, 65536, vec![]) {
            Err(Error::InvalidDimensions { w: 65536, h: 65536 }) => {}
            other => panic!("unexpected {:?}", other),
        }

        assert!(DistanceField::new(i32::MAX, 2).is_err());
        assert_eq!(check_dimensions(46340, 46340).unwrap(), 46340 * 46340);
        assert_eq!(check_dimensions(0, 7).unwrap(), 0);
    }

    #[test]
    fn clamped() {
        let df = DistanceField::from_vec(5, 1, vec![-100.0, -1.0, 0.0, 2.5, 100.0]).unwrap();
        assert_eq!(df.clamped_image(), vec![0, 125, 128, 135, 255]);
    }
}
