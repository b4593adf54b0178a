use std::fs;
use std::path::{Path, PathBuf};

use crate::atlas::BinChoice;
use crate::errors::*;
use crate::field::serialization::EXTENSION;

/// Settings shared by the glyph field generation and the atlas stitching steps, usually
/// loaded from a json file like this:
///
/// ```json
/// {
///     "glyph_png_dir": "assets/bmpfont",
///     "atlas_output_path": "assets/font_atlas.df",
///     "atlas_width": 256,
///     "atlas_height": 256,
///     "minified_width": 16,
///     "minified_height": 16
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// The directory holding one png per glyph. The generated `.df` files and the glyph
    /// records are written here as well.
    pub glyph_png_dir: PathBuf,
    /// Where the atlas `.df` file goes.
    pub atlas_output_path: PathBuf,
    pub atlas_width: i32,
    pub atlas_height: i32,
    /// The size of every glyph tile after minifying.
    #[serde(default = "default_minified")]
    pub minified_width: i32,
    #[serde(default = "default_minified")]
    pub minified_height: i32,
    #[serde(default)]
    pub bin_choice: BinChoice,
}

fn default_minified() -> i32 {
    16
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_owned()));
        }

        let data = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&data)?;
        settings.validate()?;

        info!("[Workflow] loads settings from {:?}.", path);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.atlas_width <= 0 || self.atlas_height <= 0 {
            return Err(Error::InvalidDimensions {
                w: self.atlas_width,
                h: self.atlas_height,
            });
        }

        if self.minified_width <= 0 || self.minified_height <= 0 {
            return Err(Error::InvalidDimensions {
                w: self.minified_width,
                h: self.minified_height,
            });
        }

        if self.atlas_output_path.extension().and_then(|v| v.to_str()) != Some(EXTENSION) {
            return Err(Error::FormatMismatch(format!(
                "Atlas output {:?} must be a .{} file.",
                self.atlas_output_path, EXTENSION
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "glyph_png_dir": "glyphs",
                "atlas_output_path": "atlas.df",
                "atlas_width": 128,
                "atlas_height": 64
            }"#,
        )
        .unwrap();

        assert_eq!(settings.minified_width, 16);
        assert_eq!(settings.minified_height, 16);
        assert_eq!(settings.bin_choice, BinChoice::Smallest);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn choice_and_validation() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "glyph_png_dir": "glyphs",
                "atlas_output_path": "atlas.df",
                "atlas_width": 0,
                "atlas_height": 64,
                "bin_choice": "largest"
            }"#,
        )
        .unwrap();

        assert_eq!(settings.bin_choice, BinChoice::Largest);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn atlas_extension() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "glyph_png_dir": "glyphs",
                "atlas_output_path": "atlas.png",
                "atlas_width": 64,
                "atlas_height": 64
            }"#,
        )
        .unwrap();

        match settings.validate() {
            Err(Error::FormatMismatch(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
