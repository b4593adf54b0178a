//! Conversions from source images into the binary foreground/background classification
//! consumed by `DistanceField::from_binary_image`.

use std::path::Path;

use image::{self, GenericImageView};

use super::check_dimensions;
use crate::errors::*;

/// A `w`x`h` row-major grid of foreground/background flags.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryImage {
    w: i32,
    h: i32,
    fg: Vec<bool>,
}

impl BinaryImage {
    pub fn from_fn<F>(w: i32, h: i32, func: F) -> Result<Self>
    where
        F: Fn(i32, i32) -> bool,
    {
        let len = check_dimensions(w, h)?;

        let mut fg = Vec::with_capacity(len);
        for y in 0..h {
            for x in 0..w {
                fg.push(func(x, y));
            }
        }

        Ok(BinaryImage { w: w, h: h, fg: fg })
    }

    /// A zero byte marks a foreground pixel, anything else is background.
    pub fn from_mask_bytes(bytes: &[u8], w: i32, h: i32) -> Result<Self> {
        check_len(bytes.len(), w, h, 1)?;

        Ok(BinaryImage {
            w: w,
            h: h,
            fg: bytes.iter().map(|&v| v == 0).collect(),
        })
    }

    /// Classifies a 4-channel image by the channel at `channel_offset`. The mask value is
    /// `255 - channel`, so only pixels where the channel is exactly 255 are foreground.
    pub fn from_fourchannel(rgba: &[u8], w: i32, h: i32, channel_offset: usize) -> Result<Self> {
        if channel_offset >= 4 {
            return Err(Error::InvalidChannelOffset(channel_offset));
        }

        check_len(rgba.len(), w, h, 4)?;

        Ok(BinaryImage {
            w: w,
            h: h,
            fg: rgba
                .chunks(4)
                .map(|p| 255 - p[channel_offset] == 0)
                .collect(),
        })
    }

    /// Loads a PNG with 1 or 4 channels. A single channel is used as the mask directly,
    /// a 4-channel image uses its alpha channel as the mask.
    pub fn from_fgbg_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_owned()));
        }

        let img = image::open(path)?;
        let (w, h) = img.dimensions();
        let (w, h) = (w as i32, h as i32);

        match img.color().channel_count() {
            4 => {
                info!(
                    "[DistanceField] {:?} is not a binary image, using alpha channel only.",
                    path
                );

                let alphas: Vec<u8> = img.to_rgba8().pixels().map(|p| p[3]).collect();
                Self::from_mask_bytes(&alphas, w, h)
            }
            1 => Self::from_mask_bytes(&img.to_luma8().into_raw(), w, h),
            channels => {
                error!(
                    "[DistanceField] {:?} must have 1 or 4 channels, but it has {} channels.",
                    path, channels
                );

                Err(Error::InvalidChannelCount {
                    path: path.to_owned(),
                    channels: channels,
                })
            }
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.w
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.h
    }

    /// The number of pixels, `w * h`.
    #[inline]
    pub fn len(&self) -> usize {
        self.fg.len()
    }

    #[inline]
    pub fn is_foreground(&self, x: i32, y: i32) -> bool {
        self.fg[(y * self.w + x) as usize]
    }

    #[inline]
    pub fn is_foreground_at(&self, index: usize) -> bool {
        self.fg[index]
    }

    /// Swaps foreground and background.
    pub fn complement(&self) -> Self {
        BinaryImage {
            w: self.w,
            h: self.h,
            fg: self.fg.iter().map(|&v| !v).collect(),
        }
    }
}

fn check_len(len: usize, w: i32, h: i32, channels: usize) -> Result<()> {
    let expected = check_dimensions(w, h)?.checked_mul(channels);

    if expected != Some(len) {
        return Err(Error::InvalidDimensions { w: w, h: h });
    }

    Ok(())
}
