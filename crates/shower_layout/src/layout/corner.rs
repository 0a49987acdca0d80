//! Detection of tiles that wrap around the back-wall corners.
//!
//! Side walls continue the back wall's grid, so the tile cut at a corner on one wall and
//! the tile cut at the same corner on the adjoining wall are two visible pieces of one
//! physical tile.
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::layout::{Tile, WallId, WallLayout};

/// Two fragments of one physical tile that wraps a corner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CornerPair {
    pub back_tile: Tile,
    pub side_tile: Tile,
}

impl CornerPair {
    /// The side wall this pair wraps onto.
    pub fn side_wall(&self) -> WallId {
        self.side_tile.wall()
    }

    /// `[back, side]`.
    pub fn walls(&self) -> [WallId; 2] {
        [WallId::Back, self.side_wall()]
    }

    /// Combined visible width of both fragments.
    pub fn combined_width(&self) -> f64 {
        self.back_tile.width + self.side_tile.width
    }
}

/// Finds tiles whose cut edges meet at the back-left and back-right corners.
///
/// Rows are matched by index; all three walls share one vertical grid. Left-corner pairs
/// come first, each group in the side wall's tile order.
pub fn identify_corner_pairs(
    back: &WallLayout,
    left: &WallLayout,
    right: &WallLayout,
) -> Vec<CornerPair> {
    let mut back_left_cuts: HashMap<i32, &Tile> = HashMap::new();
    let mut back_right_cuts: HashMap<i32, &Tile> = HashMap::new();
    for tile in &back.tiles {
        if tile.cut.left > 0.0 {
            back_left_cuts.insert(tile.row(), tile);
        }
        if tile.cut.right > 0.0 {
            back_right_cuts.insert(tile.row(), tile);
        }
    }

    let left_pairs = left
        .tiles
        .iter()
        .filter(|side| side.cut.right > 0.0)
        .filter_map(|side| pair_with(&back_left_cuts, side));
    let right_pairs = right
        .tiles
        .iter()
        .filter(|side| side.cut.left > 0.0)
        .filter_map(|side| pair_with(&back_right_cuts, side));
    let pairs: Vec<CornerPair> = left_pairs.chain(right_pairs).collect();

    for (row, tile) in &back_left_cuts {
        if back_right_cuts.get(row).is_some_and(|other| other.id == tile.id)
            && pairs.iter().filter(|p| p.back_tile.id == tile.id).count() > 1
        {
            warn!(
                "Back tile {} wraps both corners; both side fragments share its number.",
                tile.id
            );
        }
    }

    pairs
}

fn pair_with(back_cuts: &HashMap<i32, &Tile>, side: &Tile) -> Option<CornerPair> {
    back_cuts.get(&side.row()).map(|back_tile| CornerPair {
        back_tile: (*back_tile).clone(),
        side_tile: side.clone(),
    })
}
