//! The `.df` file format.
//!
//! ```sh
//! i32         width
//! i32         height
//! [f32; w*h]  row-major signed distances
//! ```
//!
//! All values are little-endian. There is no magic number and no version, files are
//! recognized by their `.df` extension only.

use std::fs;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};

use super::{check_dimensions, DistanceField};
use crate::errors::*;

pub const EXTENSION: &str = "df";

impl DistanceField {
    /// Writes a `.df` file.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = BufWriter::new(fs::File::create(path)?);
        self.write_into(&mut file)?;
        file.flush()?;

        info!(
            "[DistanceField] writes {:?} ({}x{}).",
            path, self.w, self.h
        );

        Ok(())
    }

    /// Reads a field that has been computed already.
    pub fn from_df_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.extension().and_then(|v| v.to_str()) != Some(EXTENSION) {
            return Err(Error::FormatMismatch(format!(
                "File name = {:?}, expected a .{} file.",
                path, EXTENSION
            )));
        }

        if !path.exists() {
            return Err(Error::FileNotFound(path.to_owned()));
        }

        let mut file = BufReader::new(fs::File::open(path)?);
        Self::read_from(&mut file)
    }

    pub fn write_into<W: Write>(&self, mut file: W) -> Result<()> {
        file.write_i32::<LittleEndian>(self.w)?;
        file.write_i32::<LittleEndian>(self.h)?;

        for &v in &self.v {
            file.write_f32::<LittleEndian>(v)?;
        }

        Ok(())
    }

    pub fn read_from<R: Read>(mut file: R) -> Result<Self> {
        let w = file.read_i32::<LittleEndian>().map_err(truncated)?;
        let h = file.read_i32::<LittleEndian>().map_err(truncated)?;

        if w < 0 || h < 0 {
            return Err(Error::FormatMismatch(format!(
                "Negative dimensions {}x{}.",
                w, h
            )));
        }

        let size = check_dimensions(w, h)
            .ok()
            .and_then(|len| len.checked_mul(4))
            .ok_or_else(|| Error::FormatMismatch(format!("Dimensions {}x{} overflow.", w, h)))?;

        // Only allocate what the payload actually holds.
        let mut payload = Vec::new();
        (&mut file).take(size as u64).read_to_end(&mut payload)?;

        if payload.len() != size {
            return Err(Error::FormatMismatch(format!(
                "Expected {} bytes of {}x{} distances, but got {}.",
                size,
                w,
                h,
                payload.len()
            )));
        }

        let mut v = vec![0.0; size / 4];
        LittleEndian::read_f32_into(&payload, &mut v);

        let mut rest = [0u8; 1];
        if file.read(&mut rest)? != 0 {
            return Err(Error::FormatMismatch(format!(
                "Trailing bytes after {}x{} distances.",
                w, h
            )));
        }

        Ok(DistanceField { w: w, h: h, v: v })
    }
}

fn truncated(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::FormatMismatch("Unexpected end of distance field.".to_owned())
    } else {
        Error::IO(err)
    }
}
