//! # What is This?
//!
//! _dfatlas_ builds signed distance fields out of binary images, and packs many small
//! fields into a single atlas. It is meant to run as part of an offline asset build, the
//! typical use being distance field fonts.
//!
//! The crate is organized as follows:
//!
//! - `field`, the distance field computation, its image adapters and the `.df` format.
//! - `atlas`, guillotine packing of glyph fields into an atlas, with texture coordinates.
//! - `workflow`, the glyph pipeline that drives both steps from a settings file.
//!
//! Every operation returns an explicit `Result`, so a build could skip a bad asset or
//! retry with a larger atlas instead of stopping the whole build.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod atlas;
pub mod errors;
pub mod field;
pub mod math;
pub mod workflow;

pub mod prelude;
