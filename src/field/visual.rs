use std::path::{Path, PathBuf};

use image::{self, ColorType};

use super::DistanceField;
use crate::errors::*;

impl DistanceField {
    /// Writes `clamped_image` as a single channel PNG, for inspection only.
    pub fn write_visualization<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let img = self.clamped_image();

        image::save_buffer(path, &img, self.w as u32, self.h as u32, ColorType::L8)?;
        info!("[DistanceField] writes visualization {:?}.", path);
        Ok(())
    }
}

/// `glyphs/a.df` => `glyphs/a_df_visual.png`.
pub fn visual_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_default();

    path.with_file_name(format!("{}_df_visual.png", stem))
}
