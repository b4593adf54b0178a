use std::path::PathBuf;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{}", _0)]
    IO(::std::io::Error),
    #[fail(display = "{}", _0)]
    Image(::image::ImageError),
    #[fail(display = "{}", _0)]
    Bincode(::bincode::Error),
    #[fail(display = "{}", _0)]
    Json(::serde_json::Error),
    #[fail(display = "Undefined Path {:?}.", _0)]
    FileNotFound(PathBuf),
    #[fail(
        display = "Image {:?} must have 1 or 4 channels, but it has {} channels.",
        path, channels
    )]
    InvalidChannelCount { path: PathBuf, channels: u8 },
    #[fail(display = "Channel offset {} is out of range [0, 4).", _0)]
    InvalidChannelOffset(usize),
    #[fail(display = "Invalid dimensions {}x{}.", w, h)]
    InvalidDimensions { w: i32, h: i32 },
    #[fail(display = "{}", _0)]
    FormatMismatch(String),
    #[fail(
        display = "Glyph '{}' expects {}x{}, but its field is {}x{}.",
        c, expected_w, expected_h, w, h
    )]
    DimensionMismatch {
        c: char,
        expected_w: i32,
        expected_h: i32,
        w: i32,
        h: i32,
    },
    #[fail(display = "File name {:?} must be a single character.", _0)]
    InvalidGlyphName(String),
    #[fail(display = "Failed to place glyph '{}' ({}x{}) in any partition.", c, w, h)]
    PackingOverflow { c: char, w: i32, h: i32 },
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<::std::io::Error> for Error {
    fn from(err: ::std::io::Error) -> Self {
        Error::IO(err)
    }
}

impl From<::image::ImageError> for Error {
    fn from(err: ::image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<::bincode::Error> for Error {
    fn from(err: ::bincode::Error) -> Self {
        Error::Bincode(err)
    }
}

impl From<::serde_json::Error> for Error {
    fn from(err: ::serde_json::Error) -> Self {
        Error::Json(err)
    }
}
