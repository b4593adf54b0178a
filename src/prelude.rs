pub use crate::errors::{Error, Result};
pub use crate::math::{Point2, Rect2D, Vector2};

pub use crate::field::{BinaryImage, DistanceField};

pub use crate::atlas::{pack_fields, pack_rects, BinChoice, GlyphInfo, GlyphRecord, Packer};

pub use crate::workflow::Settings;
