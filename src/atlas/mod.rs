//! Glyph atlases.
//!
//! Many small distance fields, one per glyph, are packed into a single atlas field. The
//! position of every glyph is recorded as the texture coordinates of its quad's corners,
//! with `v` flipped so that `v = 1` is the top row of the atlas.
//!
//! The glyph pixel data is only borrowed for the duration of `pack_rects`. `GlyphInfo`
//! pairs a record with a view into its field, so the views can never outlive the buffers
//! they point into.

pub mod blit;
pub mod glyphs;
pub mod packer;

pub use self::glyphs::{read_glyph_records, write_glyph_records, GlyphRecord, GLYPH_INFOS_FILE};
pub use self::packer::{BinChoice, Packer};

use crate::errors::*;
use crate::field::{check_dimensions, DistanceField};
use crate::math::{self, Point2, Rect2D, Vector2};

use self::blit::blit_rect;

/// A glyph record together with the tile it describes.
pub struct GlyphInfo<'a> {
    pub record: GlyphRecord,
    pub data: &'a [f32],
}

impl<'a> GlyphInfo<'a> {
    pub fn new(record: GlyphRecord, data: &'a [f32]) -> Self {
        GlyphInfo {
            record: record,
            data: data,
        }
    }
}

/// Packs the glyph tiles into `atlas`, biggest first. Glyphs are reordered by descending
/// area, and their texture coordinates are filled in. Fails with `PackingOverflow` if a
/// tile can not be placed, the atlas is not resized.
pub fn pack_rects(
    atlas: &mut DistanceField,
    glyphs: &mut [GlyphInfo],
    choice: BinChoice,
) -> Result<Vec<Rect2D>> {
    let root_wh = Vector2::new(atlas.w, atlas.h);

    if check_dimensions(atlas.w, atlas.h)? != atlas.v.len() {
        return Err(Error::InvalidDimensions {
            w: atlas.w,
            h: atlas.h,
        });
    }

    if !math::is_power_of_two(root_wh.x) || !math::is_power_of_two(root_wh.y) {
        info!(
            "[Packer] atlas dimensions {}x{} are not power of two.",
            root_wh.x, root_wh.y
        );
    }

    for v in glyphs.iter() {
        let wh = v.record.wh;
        if check_dimensions(wh.x, wh.y)? != v.data.len() {
            return Err(Error::InvalidDimensions { w: wh.x, h: wh.y });
        }
    }

    glyphs.sort_by(|lhs, rhs| rhs.record.area().cmp(&lhs.record.area()));

    info!("[Packer] packs {} glyphs.", glyphs.len());

    let mut packer = Packer::new(root_wh, choice);
    let mut placed = Vec::with_capacity(glyphs.len());

    for v in glyphs.iter_mut() {
        let wh = v.record.wh;

        let occupied = packer.insert(wh).ok_or_else(|| Error::PackingOverflow {
            c: v.record.c,
            w: wh.x,
            h: wh.y,
        })?;

        blit_rect(
            wh,
            root_wh,
            Rect2D::from_min_and_wh(Point2::new(0, 0), wh),
            occupied,
            occupied.min,
            v.data,
            &mut atlas.v,
        );

        assign_texcoords(&mut v.record, &occupied, root_wh);

        info!(
            "[Packer] glyph '{}' is at rect: {:?}, st coords: [({:.2}, {:.2}), ({:.2}, {:.2}), ({:.2}, {:.2}), ({:.2}, {:.2})].",
            v.record.c,
            occupied,
            v.record.tl.x,
            v.record.tl.y,
            v.record.bl.x,
            v.record.bl.y,
            v.record.tr.x,
            v.record.tr.y,
            v.record.br.x,
            v.record.br.y,
        );

        placed.push(occupied);
    }

    Ok(placed)
}

/// Packs owned glyph fields into a new `w`x`h` atlas.
pub fn pack_fields(
    w: i32,
    h: i32,
    glyphs: Vec<(GlyphRecord, DistanceField)>,
    choice: BinChoice,
) -> Result<(DistanceField, Vec<GlyphRecord>)> {
    let mut atlas = DistanceField::new(w, h)?;

    let mut infos: Vec<_> = glyphs
        .iter()
        .map(|(record, df)| GlyphInfo::new(record.clone(), df.data()))
        .collect();

    pack_rects(&mut atlas, &mut infos, choice)?;

    let records = infos.into_iter().map(|v| v.record).collect();
    Ok((atlas, records))
}

/// Texture coordinates of `rect` inside an atlas of `root_wh`, with `v` flipped.
pub fn assign_texcoords(record: &mut GlyphRecord, rect: &Rect2D, root_wh: Vector2<i32>) {
    let (w, h) = (root_wh.x as f32, root_wh.y as f32);

    let min_x = rect.min.x as f32 / w;
    let max_x = rect.max.x as f32 / w;
    let min_y = 1.0 - rect.min.y as f32 / h;
    let max_y = 1.0 - rect.max.y as f32 / h;

    record.tl = Vector2::new(min_x, min_y);
    record.bl = Vector2::new(min_x, max_y);
    record.tr = Vector2::new(max_x, min_y);
    record.br = Vector2::new(max_x, max_y);
}
