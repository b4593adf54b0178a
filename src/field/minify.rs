use super::{check_dimensions, DistanceField};
use crate::errors::*;

impl DistanceField {
    /// Resamples the field to `w`x`h` with a bilinear filter, sampling at texel centers and
    /// clamping at the edges. Distances keep the units of the source field.
    pub fn minify(&self, w: i32, h: i32) -> Result<DistanceField> {
        if w <= 0 || h <= 0 {
            return Err(Error::InvalidDimensions { w: w, h: h });
        }

        let len = check_dimensions(w, h)?;

        if self.w <= 0 || self.h <= 0 {
            return Err(Error::InvalidDimensions {
                w: self.w,
                h: self.h,
            });
        }

        let scale_x = self.w as f32 / w as f32;
        let scale_y = self.h as f32 / h as f32;

        let mut v = Vec::with_capacity(len);
        for y in 0..h {
            let (y0, y1, fy) = sample_axis(y, scale_y, self.h);
            for x in 0..w {
                let (x0, x1, fx) = sample_axis(x, scale_x, self.w);

                let top = lerp(self.get(x0, y0), self.get(x1, y0), fx);
                let bottom = lerp(self.get(x0, y1), self.get(x1, y1), fx);
                v.push(lerp(top, bottom, fy));
            }
        }

        debug!(
            "[DistanceField] minifies {}x{} into {}x{}.",
            self.w, self.h, w, h
        );

        Ok(DistanceField { w: w, h: h, v: v })
    }
}

#[inline]
fn sample_axis(dst: i32, scale: f32, len: i32) -> (i32, i32, f32) {
    let max = (len - 1) as f32;
    let src = ((dst as f32 + 0.5) * scale - 0.5).max(0.0).min(max);
    let i0 = src.floor() as i32;
    let i1 = (i0 + 1).min(len - 1);
    (i0, i1, src - i0 as f32)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
