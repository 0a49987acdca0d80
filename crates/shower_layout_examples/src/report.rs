use std::collections::BTreeMap;
use std::fmt::Write;

use shower_layout::prelude::*;

/// Plain-text summary of a layout: per-wall counts, grid offsets and distinct cut sizes.
pub fn format_report(result: &ShowerLayoutResult) -> String {
    let mut out = String::new();

    for wall in result.walls() {
        let _ = writeln!(
            out,
            "{} wall {} x {}: {} tiles ({} full, {} cut), grid start ({}, {})",
            wall.wall,
            to_fractional_inches(wall.wall_width),
            to_fractional_inches(wall.wall_height),
            wall.total_tiles,
            wall.full_tiles,
            wall.cut_tiles,
            to_fractional_inches(wall.start_x()),
            to_fractional_inches(wall.start_y()),
        );

        let mut cuts: BTreeMap<(String, String), usize> = BTreeMap::new();
        for tile in wall.cut_tiles_iter() {
            let key = (
                to_fractional_inches(tile.width),
                to_fractional_inches(tile.height),
            );
            *cuts.entry(key).or_default() += 1;
        }
        for ((w, h), count) in cuts {
            let _ = writeln!(out, "    cut {w} x {h}: {count}");
        }
    }

    let _ = writeln!(
        out,
        "Total: {} placements ({} full, {} cut), {} corner wraps",
        result.total_tiles,
        result.full_tiles,
        result.cut_tiles,
        result.corner_pairs.len()
    );
    let _ = writeln!(
        out,
        "Physical tiles: {}, recommended purchase: {} ({:.1} sq ft)",
        result.physical_tiles,
        result.recommended_purchase,
        result.coverage_sq_ft()
    );
    out
}
