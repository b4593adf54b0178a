//! The offline font pipeline.
//!
//! 1. `generate_glyph_fields` turns a directory of glyph pngs (one per character, named
//!    after it) into minified `.df` tiles and a glyph records file.
//! 2. `stitch_atlas` packs the tiles into a single atlas `.df` and writes the texture
//!    coordinates of every glyph back into the records file.
//! 3. `visualize` writes any `.df` file as a png for inspection.

pub mod bounds;
pub mod settings;

pub use self::bounds::bounding_rect;
pub use self::settings::Settings;

use std::fs;
use std::path::{Path, PathBuf};

use crate::atlas::{self, blit::blit_rect, GlyphRecord, GLYPH_INFOS_FILE};
use crate::errors::*;
use crate::field::{self, serialization::EXTENSION, DistanceField};
use crate::math::{self, Point2, Rect2D, Vector2};

/// Visualizations are written next to their fields, and never count as glyph images.
const VISUAL_SUFFIX: &str = "_df_visual";

/// Generates one minified distance field per glyph png in `settings.glyph_png_dir`, and
/// writes the glyph records file next to them.
pub fn generate_glyph_fields(settings: &Settings) -> Result<Vec<GlyphRecord>> {
    settings.validate()?;

    let dir = &settings.glyph_png_dir;
    if !dir.is_dir() {
        return Err(Error::FileNotFound(dir.clone()));
    }

    let wh = Vector2::new(settings.minified_width, settings.minified_height);
    if !math::is_power_of_two(wh.x) || !math::is_power_of_two(wh.y) {
        info!(
            "[Workflow] glyph dimensions {}x{} are not power of two.",
            wh.x, wh.y
        );
    }

    let mut records = Vec::new();
    for path in glyph_pngs(dir)? {
        let c = glyph_char(&path)?;
        let df = glyph_field(&path)?.minify(wh.x, wh.y)?;

        let file_name = format!("{}.{}", c, EXTENSION);
        df.write_to_file(dir.join(&file_name))?;

        info!("[Workflow] generates '{}' from {:?}.", c, path);
        records.push(GlyphRecord::new(c, wh, file_name));
    }

    atlas::write_glyph_records(dir.join(GLYPH_INFOS_FILE), &records)?;
    Ok(records)
}

/// Packs the glyph fields listed in the glyph records file into the atlas, and writes
/// the records back with their texture coordinates.
pub fn stitch_atlas(settings: &Settings) -> Result<Vec<GlyphRecord>> {
    settings.validate()?;

    let dir = &settings.glyph_png_dir;
    let records_path = dir.join(GLYPH_INFOS_FILE);
    let records = atlas::read_glyph_records(&records_path)?;

    let mut glyphs = Vec::with_capacity(records.len());
    for record in records {
        let df = DistanceField::from_df_file(dir.join(&record.file_name))?;

        if df.w != record.wh.x || df.h != record.wh.y {
            return Err(Error::DimensionMismatch {
                c: record.c,
                expected_w: record.wh.x,
                expected_h: record.wh.y,
                w: df.w,
                h: df.h,
            });
        }

        glyphs.push((record, df));
    }

    let (atlas, records) = atlas::pack_fields(
        settings.atlas_width,
        settings.atlas_height,
        glyphs,
        settings.bin_choice,
    )?;

    atlas.write_to_file(&settings.atlas_output_path)?;
    atlas::write_glyph_records(&records_path, &records)?;
    Ok(records)
}

/// Writes the visualization of a `.df` file next to it, and returns its path.
pub fn visualize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let df = DistanceField::from_df_file(path)?;

    let output = field::visual_path(path);
    df.write_visualization(&output)?;
    Ok(output)
}

/// Computes the field of a 1 or 4 channel png and writes it as a `.df` file.
pub fn generate_field<P1, P2>(png: P1, output: P2) -> Result<DistanceField>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let df = DistanceField::from_fgbg_file(png)?;
    df.write_to_file(output)?;
    Ok(df)
}

fn glyph_pngs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().and_then(|v| v.to_str()) != Some("png") {
            continue;
        }

        let is_visual = path
            .file_stem()
            .and_then(|v| v.to_str())
            .map(|v| v.ends_with(VISUAL_SUFFIX))
            .unwrap_or(false);

        if is_visual {
            debug!("[Workflow] skips visualization {:?}.", path);
            continue;
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}

/// Glyph pngs are named after their character, everything after the first dot is ignored.
fn glyph_char(path: &Path) -> Result<char> {
    let name = path
        .file_name()
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = name.split('.').next().unwrap_or("");
    let mut chars = stem.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidGlyphName(name.clone())),
    }
}

/// Crops the glyph out of its png and computes the field of its alpha channel. Glyph
/// pngs must have 4 channels.
fn glyph_field(path: &Path) -> Result<DistanceField> {
    let img = image::open(path)?;

    let channels = img.color().channel_count();
    if channels != 4 {
        error!(
            "[Workflow] glyph {:?} must have 4 channels, but it has {} channels.",
            path, channels
        );

        return Err(Error::InvalidChannelCount {
            path: path.to_owned(),
            channels: channels,
        });
    }

    let img = img.to_rgba8();
    let (w, h) = (img.width() as i32, img.height() as i32);
    let rgba = img.into_raw();

    let rect = bounding_rect(&rgba, w, h);
    if rect.area() == 0 {
        return Err(Error::InvalidDimensions {
            w: rect.width(),
            h: rect.height(),
        });
    }

    let pixels: Vec<[u8; 4]> = rgba
        .chunks(4)
        .map(|p| [p[0], p[1], p[2], p[3]])
        .collect();

    let mut cutout = vec![[0u8; 4]; rect.area() as usize];
    blit_rect(
        Vector2::new(w, h),
        rect.wh(),
        rect,
        Rect2D::from_min_and_wh(Point2::new(0, 0), rect.wh()),
        Point2::new(0, 0),
        &pixels,
        &mut cutout,
    );

    let bytes: Vec<u8> = cutout.iter().flat_map(|p| p.iter().cloned()).collect();

    debug!(
        "[Workflow] {:?} bounding rect = {:?}.",
        path, rect
    );

    DistanceField::from_fourchannel_image(&bytes, rect.width(), rect.height(), 3)
}
