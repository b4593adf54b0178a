//! The glyph records file (`glyph_infos.data`), handed from the field generation step to
//! the atlas stitching step.

use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::errors::*;
use crate::math::Vector2;

pub const MAGIC: [u8; 8] = [
    'D' as u8, 'G' as u8, 'L' as u8, 'Y' as u8, ' ' as u8, 0, 0, 1,
];

/// The name of the records file inside the glyph directory.
pub const GLYPH_INFOS_FILE: &str = "glyph_infos.data";

/// File names are limited to what fits a 64 byte, nul-terminated field.
pub const MAX_FILE_NAME_LEN: usize = 63;

/// The description of one glyph tile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    /// The character.
    pub c: char,
    /// The tile width and height.
    pub wh: Vector2<i32>,
    /// The `.df` file of the tile, relative to the glyph directory.
    pub file_name: String,
    /// Texture coordinates of the glyph quad's corners, filled in while packing.
    pub tl: Vector2<f32>,
    pub bl: Vector2<f32>,
    pub tr: Vector2<f32>,
    pub br: Vector2<f32>,
}

impl GlyphRecord {
    pub fn new<T: Into<String>>(c: char, wh: Vector2<i32>, file_name: T) -> Self {
        GlyphRecord {
            c: c,
            wh: wh,
            file_name: file_name.into(),
            tl: Vector2::new(0.0, 0.0),
            bl: Vector2::new(0.0, 0.0),
            tr: Vector2::new(0.0, 0.0),
            br: Vector2::new(0.0, 0.0),
        }
    }

    #[inline]
    pub fn area(&self) -> i32 {
        self.wh.x.saturating_mul(self.wh.y)
    }
}

pub fn write_glyph_records<P: AsRef<Path>>(path: P, records: &[GlyphRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(fs::File::create(path)?);
    write_glyph_records_into(&mut file, records)?;
    file.flush()?;

    info!(
        "[GlyphRecords] writes {:?} ({} glyphs).",
        path,
        records.len()
    );

    Ok(())
}

pub fn read_glyph_records<P: AsRef<Path>>(path: P) -> Result<Vec<GlyphRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_owned()));
    }

    let mut file = BufReader::new(fs::File::open(path)?);
    read_glyph_records_from(&mut file)
}

pub fn write_glyph_records_into<W: Write>(mut file: W, records: &[GlyphRecord]) -> Result<()> {
    for v in records {
        check_file_name(&v.file_name)?;
    }

    file.write_all(&MAGIC)?;
    bincode::serialize_into(&mut file, records)?;
    Ok(())
}

pub fn read_glyph_records_from<R: Read>(mut file: R) -> Result<Vec<GlyphRecord>> {
    let mut buf = [0; 8];
    file.read_exact(&mut buf)?;

    // magic: [u8; 8]
    if buf != MAGIC {
        return Err(Error::FormatMismatch(
            "[GlyphRecords] MAGIC number not match.".to_owned(),
        ));
    }

    let records: Vec<GlyphRecord> = bincode::deserialize_from(&mut file)?;
    for v in &records {
        check_file_name(&v.file_name)?;
    }

    Ok(records)
}

fn check_file_name(name: &str) -> Result<()> {
    if name.len() > MAX_FILE_NAME_LEN {
        return Err(Error::FormatMismatch(format!(
            "File name {:?} is longer than {} bytes.",
            name, MAX_FILE_NAME_LEN
        )));
    }

    Ok(())
}
