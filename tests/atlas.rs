extern crate dfatlas;
extern crate rand;

use dfatlas::errors::Error;
use dfatlas::prelude::*;
use rand::{Rng, SeedableRng, XorShiftRng};

fn tile(c: char, w: i32, h: i32, value: f32) -> (GlyphRecord, DistanceField) {
    let record = GlyphRecord::new(c, Vector2::new(w, h), format!("{}.df", c));
    let v = (0..w * h).map(|i| value + i as f32 * 0.001).collect();
    (record, DistanceField::from_vec(w, h, v).unwrap())
}

fn rect_of(record: &GlyphRecord, atlas_w: i32, atlas_h: i32) -> Rect2D {
    let min = Point2::new(
        (record.tl.x * atlas_w as f32).round() as i32,
        ((1.0 - record.tl.y) * atlas_h as f32).round() as i32,
    );
    let max = Point2::new(
        (record.br.x * atlas_w as f32).round() as i32,
        ((1.0 - record.br.y) * atlas_h as f32).round() as i32,
    );
    Rect2D::new(min, max)
}

fn check_packing(choice: BinChoice, seed: [u8; 16]) {
    let mut rng = XorShiftRng::from_seed(seed);
    let sides = [4, 8, 12, 16, 24, 32];

    let (w, h) = (256, 256);
    let mut tiles = Vec::new();
    let mut area = 0;
    let mut c = 'A' as u32;

    while area < w * h * 3 / 10 {
        let tw = *rng.choose(&sides).unwrap();
        let th = *rng.choose(&sides).unwrap();
        let ch = ::std::char::from_u32(c).unwrap();
        tiles.push(tile(ch, tw, th, c as f32));
        area += tw * th;
        c += 1;
    }

    let sources = tiles.clone();
    let (atlas, records) = pack_fields(w, h, tiles, choice).unwrap();
    assert_eq!(records.len(), sources.len());

    for pair in records.windows(2) {
        assert!(pair[0].area() >= pair[1].area());
    }

    let root = Rect2D::new(Point2::new(0, 0), Point2::new(w, h));
    let rects: Vec<_> = records.iter().map(|v| rect_of(v, w, h)).collect();

    for (i, (record, rect)) in records.iter().zip(&rects).enumerate() {
        assert_eq!(rect.wh(), record.wh, "{:?}", record);
        assert!(root.contains_rect(rect));

        assert_eq!(record.bl.x, record.tl.x);
        assert_eq!(record.tr.y, record.tl.y);
        assert_eq!(record.br.x, record.tr.x);
        assert_eq!(record.br.y, record.bl.y);

        for other in &rects[i + 1..] {
            assert!(!rect.overlaps(other), "{:?} overlaps {:?}", rect, other);
        }

        let (_, df) = sources.iter().find(|v| v.0.c == record.c).unwrap();
        for y in 0..df.h {
            for x in 0..df.w {
                assert_eq!(atlas.get(rect.min.x + x, rect.min.y + y), df.get(x, y));
            }
        }
    }
}

#[test]
fn random_smallest() {
    check_packing(
        BinChoice::Smallest,
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
    );
}

#[test]
fn random_largest() {
    check_packing(
        BinChoice::Largest,
        [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3],
    );
}

#[test]
fn exact_fill() {
    let tiles: Vec<_> = (0..16)
        .map(|i| tile(::std::char::from_u32('a' as u32 + i).unwrap(), 16, 16, i as f32))
        .collect();

    let (atlas, records) = pack_fields(64, 64, tiles, BinChoice::Smallest).unwrap();
    assert_eq!(records.len(), 16);

    // Every texel is covered by exactly one tile.
    let mut covered = vec![0; 64 * 64];
    for record in &records {
        let rect = rect_of(record, 64, 64);
        for y in rect.min.y..rect.max.y {
            for x in rect.min.x..rect.max.x {
                covered[(y * 64 + x) as usize] += 1;
            }
        }
    }

    assert!(covered.iter().all(|&v| v == 1));
    assert_eq!(atlas.v.len(), 64 * 64);
}

#[test]
fn single_tile() {
    let (_, records) = pack_fields(16, 8, vec![tile('a', 4, 2, 1.0)], BinChoice::Smallest).unwrap();

    let record = &records[0];
    assert_eq!(record.tl, Vector2::new(0.0, 1.0));
    assert_eq!(record.bl, Vector2::new(0.0, 0.75));
    assert_eq!(record.tr, Vector2::new(0.25, 1.0));
    assert_eq!(record.br, Vector2::new(0.25, 0.75));
}

#[test]
fn overflow() {
    let tiles = vec![tile('a', 8, 8, 1.0), tile('b', 8, 8, 2.0)];

    match pack_fields(8, 12, tiles, BinChoice::Smallest) {
        Err(Error::PackingOverflow { c: 'b', w: 8, h: 8 }) => {}
        other => panic!("unexpected {:?}", other.map(|v| v.1)),
    }
}

#[test]
fn borrowed_views() {
    let a = DistanceField::from_vec(2, 2, vec![-1.0, -2.0, -3.0, -4.0]).unwrap();
    let b = DistanceField::from_vec(4, 2, vec![1.0; 8]).unwrap();

    let mut atlas = DistanceField::new(4, 4).unwrap();
    let mut glyphs = vec![
        GlyphInfo::new(GlyphRecord::new('a', Vector2::new(2, 2), "a.df"), a.data()),
        GlyphInfo::new(GlyphRecord::new('b', Vector2::new(4, 2), "b.df"), b.data()),
    ];

    let rects = pack_rects(&mut atlas, &mut glyphs, BinChoice::Smallest).unwrap();

    // The bigger tile goes first.
    assert_eq!(glyphs[0].record.c, 'b');
    assert_eq!(rects[0], Rect2D::new(Point2::new(0, 0), Point2::new(4, 2)));
    assert_eq!(rects[1], Rect2D::new(Point2::new(0, 2), Point2::new(2, 4)));

    assert_eq!(
        atlas.v,
        vec![
            1.0, 1.0, 1.0, 1.0, //
            1.0, 1.0, 1.0, 1.0, //
            -1.0, -2.0, 0.0, 0.0, //
            -3.0, -4.0, 0.0, 0.0,
        ]
    );
}
