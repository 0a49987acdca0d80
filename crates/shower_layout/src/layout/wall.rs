//! Tile grid generation and boundary clipping for a single wall.
use std::ops::RangeInclusive;

use glam::DVec2;
use tracing::debug;

use crate::config::{TileSpec, WallSpec};
use crate::error::{Error, Result};
use crate::layout::{
    AlignmentReference, CutInfo, Tile, TileId, WallId, WallLayout, WrapDirection, CUT_EPSILON,
};
use crate::pattern::Pattern;

/// Extra rows and columns generated beyond the computed coverage on each side.
pub const GRID_MARGIN: i32 = 2;

/// Computes the tile grid for one wall from scalar parameters.
///
/// Without an alignment reference the grid is centered on the wall and the result is the
/// back wall. With one, the grid continues the reference wall's grid around a corner and
/// the result is the side wall named by the wrap direction.
pub fn compute_wall_layout(
    wall_width: f64,
    wall_height: f64,
    tile_width: f64,
    tile_height: f64,
    grout_spacing: f64,
    pattern: Pattern,
    alignment: Option<&AlignmentReference>,
) -> Result<WallLayout> {
    let wall = WallSpec::new(wall_width, wall_height);
    let tile = TileSpec::new(tile_width, tile_height)
        .with_grout_spacing(grout_spacing)
        .with_pattern(pattern);
    let wall_id = match alignment.map(|a| a.wrap_direction) {
        None => WallId::Back,
        Some(WrapDirection::Left) => WallId::Left,
        Some(WrapDirection::Right) => WallId::Right,
    };
    layout_wall(wall_id, &wall, &tile, alignment)
}

/// Computes the tile grid for `wall`, tagging every tile with `wall_id`.
pub fn layout_wall(
    wall_id: WallId,
    wall: &WallSpec,
    tile: &TileSpec,
    alignment: Option<&AlignmentReference>,
) -> Result<WallLayout> {
    wall.validate()?;
    tile.validate()?;
    if let Some(reference) = alignment {
        reference.validate()?;
    }

    let extent = wall.extent();
    let size = tile.size();
    let pitch = tile.pitch();
    let start = match alignment {
        Some(reference) => reference.start_for(wall.width),
        None => centered_start(extent, pitch),
    };

    let (rows, cols) = grid_range(extent, start, pitch, tile.pattern)?;
    let mut tiles = Vec::new();
    for row in rows {
        let shift = tile.pattern.row_offset(row, pitch.x);
        for col in cols.clone() {
            let grid = DVec2::new(f64::from(col) * pitch.x + shift, f64::from(row) * pitch.y);
            let origin = grid - start;
            let id = TileId {
                wall: wall_id,
                row,
                col,
            };
            if let Some(placed) = clip_tile(id, origin, size, extent) {
                tiles.push(placed);
            }
        }
    }

    let cut_tiles = tiles.iter().filter(|t| t.is_cut()).count();
    let total_tiles = tiles.len();
    let full_tiles = total_tiles - cut_tiles;

    debug!(
        "Wall {}: {}x{} in, start ({:.4}, {:.4}), {} tiles ({} full, {} cut).",
        wall_id, wall.width, wall.height, start.x, start.y, total_tiles, full_tiles, cut_tiles
    );

    Ok(WallLayout {
        wall: wall_id,
        wall_width: wall.width,
        wall_height: wall.height,
        start,
        tiles,
        total_tiles,
        full_tiles,
        cut_tiles,
    })
}

/// Grid offset that leaves equal overhang on opposite edges of the wall.
pub fn centered_start(extent: DVec2, pitch: DVec2) -> DVec2 {
    let steps = (extent / pitch).ceil();
    (steps * pitch - extent) / 2.0
}

/// Inclusive row and column ranges covering the wall.
///
/// A tile in column `c` spans `[c*p + shift - s, c*p + shift - s + tile]` with
/// `0 <= shift < p` and `tile <= p`, so every column below `floor(s/p) - 2` ends left of
/// `x = 0` and every column above `ceil((w + s)/p)` starts right of the wall. The margin
/// is widened by the pattern's maximum shift on top of that.
fn grid_range(
    extent: DVec2,
    start: DVec2,
    pitch: DVec2,
    pattern: Pattern,
) -> Result<(RangeInclusive<i32>, RangeInclusive<i32>)> {
    let first = (start / pitch).floor();
    let last = ((extent + start) / pitch).ceil();
    let col_margin = GRID_MARGIN + pattern.max_shift_pitches();

    let rows = padded(first.y, last.y, GRID_MARGIN)?;
    let cols = padded(first.x, last.x, col_margin)?;
    Ok((rows, cols))
}

/// `first - margin ..= last + margin` as grid indices, if representable.
fn padded(first: f64, last: f64, margin: i32) -> Result<RangeInclusive<i32>> {
    let lo = grid_index(first).and_then(|i| i.checked_sub(margin));
    let hi = grid_index(last).and_then(|i| i.checked_add(margin));
    match (lo, hi) {
        (Some(lo), Some(hi)) => Ok(lo..=hi),
        _ => Err(Error::InvalidConfig(format!(
            "grid offset spans pitches {first}..{last}, outside the supported index range"
        ))),
    }
}

fn grid_index(pitches: f64) -> Option<i32> {
    let in_range = pitches.is_finite()
        && pitches >= f64::from(i32::MIN)
        && pitches <= f64::from(i32::MAX);
    in_range.then_some(pitches as i32)
}

/// Clips an unbounded tile at `origin` to the wall, or `None` if nothing is visible.
fn clip_tile(id: TileId, origin: DVec2, size: DVec2, extent: DVec2) -> Option<Tile> {
    let far = origin + size;
    let lo = origin.max(DVec2::ZERO);
    let hi = far.min(extent);
    let visible = hi - lo;
    if visible.x <= CUT_EPSILON || visible.y <= CUT_EPSILON {
        return None;
    }

    let cut = CutInfo {
        top: snap(lo.y - origin.y),
        right: snap(far.x - hi.x),
        bottom: snap(far.y - hi.y),
        left: snap(lo.x - origin.x),
    };

    Some(Tile {
        id,
        x: lo.x,
        y: lo.y,
        width: visible.x,
        height: visible.y,
        full_width: size.x,
        full_height: size.y,
        cut,
    })
}

#[inline]
fn snap(amount: f64) -> f64 {
    if amount < CUT_EPSILON {
        0.0
    } else {
        amount
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::layout::GEOMETRY_TOLERANCE;

    fn uniform(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
        let t = f64::from(rng.next_u32()) / (f64::from(u32::MAX) + 1.0);
        lo + t * (hi - lo)
    }

    fn assert_invariants(layout: &WallLayout) {
        assert_eq!(layout.full_tiles + layout.cut_tiles, layout.total_tiles);
        assert_eq!(layout.tiles.len(), layout.total_tiles);
        for t in &layout.tiles {
            assert!(t.x >= -GEOMETRY_TOLERANCE && t.y >= -GEOMETRY_TOLERANCE, "{t:?}");
            assert!(t.x + t.width <= layout.wall_width + GEOMETRY_TOLERANCE, "{t:?}");
            assert!(t.y + t.height <= layout.wall_height + GEOMETRY_TOLERANCE, "{t:?}");
            assert!(
                (t.cut.left + t.width + t.cut.right - t.full_width).abs() < GEOMETRY_TOLERANCE,
                "{t:?}"
            );
            assert!(
                (t.cut.top + t.height + t.cut.bottom - t.full_height).abs() < GEOMETRY_TOLERANCE,
                "{t:?}"
            );
            assert_eq!(t.is_cut(), t.cut.is_cut());
        }
    }

    /// Visible tiles never overlap, so their area is bounded by the wall.
    fn assert_covers_wall(layout: &WallLayout) {
        let visible: f64 = layout.tiles.iter().map(Tile::visible_area).sum();
        assert!(visible > 0.0);
        assert!(visible <= layout.area() + GEOMETRY_TOLERANCE);
    }

    #[test]
    fn exact_fit_produces_only_full_tiles() {
        let layout = compute_wall_layout(12.0, 12.0, 3.0, 3.0, 0.0, Pattern::Straight, None)
            .expect("valid layout");
        assert_eq!(layout.total_tiles, 16);
        assert_eq!(layout.full_tiles, 16);
        assert_eq!(layout.cut_tiles, 0);
        assert_eq!(layout.start, DVec2::ZERO);
        assert_invariants(&layout);
    }

    #[test]
    fn wall_smaller_than_tile_yields_single_cut_tile() {
        for pattern in Pattern::ALL {
            let layout = compute_wall_layout(3.0, 3.0, 6.0, 6.0, 0.0, pattern, None)
                .expect("valid layout");
            assert_eq!(layout.total_tiles, 1, "{pattern}");
            assert_eq!(layout.full_tiles, 0);
            assert_eq!(layout.cut_tiles, 1);

            let tile = &layout.tiles[0];
            assert_eq!((tile.width, tile.height), (3.0, 3.0));
            assert_eq!(tile.cut.left, 1.5);
            assert_eq!(tile.cut.right, 1.5);
            assert_eq!(tile.cut.top, 1.5);
            assert_eq!(tile.cut.bottom, 1.5);
        }
    }

    #[test]
    fn centered_layout_splits_edge_cuts_evenly() {
        let layout = compute_wall_layout(40.0, 30.0, 12.0, 12.0, 0.0, Pattern::Straight, None)
            .expect("valid layout");
        // 4 columns of 12 cover 48, leaving 4 on each side.
        assert_eq!(layout.start, DVec2::new(4.0, 3.0));
        let left_cut = layout
            .tiles
            .iter()
            .filter(|t| t.cut.left > 0.0)
            .map(|t| t.cut.left)
            .fold(0.0, f64::max);
        let right_cut = layout
            .tiles
            .iter()
            .filter(|t| t.cut.right > 0.0)
            .map(|t| t.cut.right)
            .fold(0.0, f64::max);
        assert_eq!(left_cut, 4.0);
        assert_eq!(right_cut, 4.0);
        assert_invariants(&layout);
    }

    #[test]
    fn centered_edge_cuts_are_balanced_for_random_symmetric_walls() {
        let mut rng = StdRng::seed_from_u64(0x711E);
        for _ in 0..200 {
            let tile = uniform(&mut rng, 2.0, 16.0);
            let grout = uniform(&mut rng, 0.0, 0.25);
            let wall = uniform(&mut rng, tile + 1.0, 90.0);
            let layout = compute_wall_layout(wall, wall, tile, tile, grout, Pattern::Straight, None)
                .expect("valid layout");

            let avg = |f: fn(&Tile) -> f64| {
                let cuts: Vec<f64> = layout.tiles.iter().map(f).filter(|c| *c > 0.0).collect();
                if cuts.is_empty() {
                    0.0
                } else {
                    cuts.iter().sum::<f64>() / cuts.len() as f64
                }
            };
            let left = avg(|t| t.cut.left);
            let right = avg(|t| t.cut.right);
            assert!((left - right).abs() < 0.5, "wall {wall} tile {tile}: {left} vs {right}");
        }
    }

    #[test]
    fn left_wrap_offsets_by_side_wall_width() {
        let back = compute_wall_layout(36.0, 60.0, 4.0, 4.0, 0.125, Pattern::Brick50, None)
            .expect("back layout");
        let reference = back.alignment_reference(WrapDirection::Left);
        let left = compute_wall_layout(
            24.0,
            60.0,
            4.0,
            4.0,
            0.125,
            Pattern::Brick50,
            Some(&reference),
        )
        .expect("left layout");
        assert_eq!(left.wall, WallId::Left);
        assert_eq!(left.start_x(), back.start_x() - 24.0);
        assert_eq!(left.start_y(), back.start_y());
        assert_invariants(&left);
    }

    #[test]
    fn right_wrap_offsets_by_reference_width() {
        let back = compute_wall_layout(36.0, 60.0, 4.0, 4.0, 0.125, Pattern::Brick33, None)
            .expect("back layout");
        let reference = back.alignment_reference(WrapDirection::Right);
        let right = compute_wall_layout(
            24.0,
            60.0,
            4.0,
            4.0,
            0.125,
            Pattern::Brick33,
            Some(&reference),
        )
        .expect("right layout");
        assert_eq!(right.wall, WallId::Right);
        assert_eq!(right.start_x(), back.start_x() + 36.0);
        assert_invariants(&right);
    }

    #[test]
    fn large_alignment_shifts_still_cover_the_wall() {
        // Start offsets many pitches away from the origin, in both directions.
        for start_x in [-517.3, -48.0, 0.0, 311.9, 1024.25] {
            for pattern in Pattern::ALL {
                let reference =
                    AlignmentReference::new(DVec2::new(start_x, 2.7), WrapDirection::Right, 60.0);
                let layout = compute_wall_layout(
                    32.0,
                    48.0,
                    6.0,
                    3.0,
                    0.1875,
                    pattern,
                    Some(&reference),
                )
                .expect("valid layout");
                assert_invariants(&layout);

                // Every row must reach both wall edges.
                let mut rows: Vec<i32> = layout.tiles.iter().map(|t| t.row()).collect();
                rows.sort_unstable();
                rows.dedup();
                for row in rows {
                    let in_row: Vec<&Tile> =
                        layout.tiles.iter().filter(|t| t.row() == row).collect();
                    let min_x = in_row.iter().map(|t| t.x).fold(f64::INFINITY, f64::min);
                    let max_x = in_row
                        .iter()
                        .map(|t| t.x + t.width)
                        .fold(f64::NEG_INFINITY, f64::max);
                    assert!(min_x < 0.1875 + GEOMETRY_TOLERANCE, "{pattern} row {row}");
                    assert!(max_x > 32.0 - 0.1875 - GEOMETRY_TOLERANCE, "{pattern} row {row}");
                }
            }
        }
    }

    #[test]
    fn random_layouts_hold_geometric_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..300 {
            let pattern = Pattern::ALL[i % 3];
            let wall_w = uniform(&mut rng, 1.0, 120.0);
            let wall_h = uniform(&mut rng, 1.0, 120.0);
            let tile_w = uniform(&mut rng, 0.75, 36.0);
            let tile_h = uniform(&mut rng, 0.75, 36.0);
            let grout = uniform(&mut rng, 0.0, 0.5);
            let alignment = (i % 2 == 1).then(|| {
                AlignmentReference::new(
                    DVec2::new(uniform(&mut rng, -200.0, 200.0), uniform(&mut rng, 0.0, tile_h)),
                    WrapDirection::Left,
                    uniform(&mut rng, 1.0, 120.0),
                )
            });
            let layout = compute_wall_layout(
                wall_w,
                wall_h,
                tile_w,
                tile_h,
                grout,
                pattern,
                alignment.as_ref(),
            )
            .expect("valid layout");
            assert!(layout.total_tiles >= 1);
            assert_invariants(&layout);
            assert_covers_wall(&layout);
        }
    }

    #[test]
    fn brick_50_shifts_alternate_rows() {
        let layout = compute_wall_layout(48.0, 24.0, 12.0, 6.0, 0.0, Pattern::Brick50, None)
            .expect("valid layout");
        // Row 0 starts flush, row 1 starts with a half tile.
        let first_in_row = |row: i32| {
            layout
                .tiles
                .iter()
                .filter(|t| t.row() == row)
                .min_by(|a, b| a.x.total_cmp(&b.x))
                .cloned()
                .expect("row has tiles")
        };
        assert_eq!(first_in_row(0).width, 12.0);
        assert!(!first_in_row(0).is_cut());
        assert_eq!(first_in_row(1).width, 6.0);
        assert_eq!(first_in_row(1).cut.left, 6.0);
        assert_invariants(&layout);
    }

    #[test]
    fn tiles_are_generated_row_major() {
        let layout = compute_wall_layout(20.0, 20.0, 6.0, 6.0, 0.125, Pattern::Brick33, None)
            .expect("valid layout");
        let keys: Vec<(i32, i32)> = layout.tiles.iter().map(|t| (t.row(), t.col())).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let err = compute_wall_layout(0.0, 12.0, 3.0, 3.0, 0.0, Pattern::Straight, None)
            .expect_err("zero width must fail");
        assert!(matches!(
            err,
            Error::InvalidDimension {
                name: "wall_width",
                ..
            }
        ));

        let err = compute_wall_layout(12.0, 12.0, 3.0, -1.0, 0.0, Pattern::Straight, None)
            .expect_err("negative tile height must fail");
        assert!(matches!(
            err,
            Error::InvalidDimension {
                name: "tile_height",
                ..
            }
        ));
    }

    #[test]
    fn non_finite_alignment_is_rejected() {
        for start in [DVec2::new(f64::NAN, 0.0), DVec2::new(0.0, f64::INFINITY)] {
            let reference = AlignmentReference::new(start, WrapDirection::Left, 36.0);
            let err = compute_wall_layout(
                24.0,
                24.0,
                6.0,
                6.0,
                0.0,
                Pattern::Straight,
                Some(&reference),
            )
            .expect_err("non-finite start must fail");
            assert!(matches!(err, Error::InvalidConfig(_)), "{err}");
        }

        let reference = AlignmentReference::new(DVec2::ZERO, WrapDirection::Right, f64::NAN);
        let err = compute_wall_layout(
            24.0,
            24.0,
            6.0,
            6.0,
            0.0,
            Pattern::Straight,
            Some(&reference),
        )
        .expect_err("NaN reference width must fail");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn offsets_beyond_the_index_range_fail_instead_of_overflowing() {
        for start_x in [3e9, -3e9, f64::from(i32::MAX)] {
            let reference =
                AlignmentReference::new(DVec2::new(start_x, 0.0), WrapDirection::Right, 24.0);
            let err = compute_wall_layout(
                24.0,
                24.0,
                1.0,
                1.0,
                0.0,
                Pattern::Brick50,
                Some(&reference),
            )
            .expect_err("unrepresentable grid offset must fail");
            assert!(matches!(err, Error::InvalidConfig(_)), "{start_x}: {err}");
        }
    }

    #[test]
    fn large_representable_offsets_still_lay_out() {
        // Lands the grid origin on -1_000_002 = -6 * 166_667, an exact fit.
        let reference =
            AlignmentReference::new(DVec2::new(-1_000_038.0, 0.0), WrapDirection::Right, 36.0);
        let layout = compute_wall_layout(
            24.0,
            24.0,
            6.0,
            6.0,
            0.0,
            Pattern::Straight,
            Some(&reference),
        )
        .expect("offset fits in the grid index range");
        assert_eq!(layout.start_x(), -1_000_002.0);
        assert_eq!(layout.total_tiles, 16);
        assert_eq!(layout.cut_tiles, 0);
        assert_invariants(&layout);
    }
}
