//! Installation order across the three walls.
//!
//! Tiles are numbered bottom course first, left to right, back wall before left before
//! right. The result is an [`InstallPlan`] keyed by [`TileId`]; layouts are not modified.
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::corner::CornerPair;
use crate::layout::{Tile, TileId, WallId, WallLayout};

/// Two courses closer than this are the same course.
pub const LEDGER_ROW_TOLERANCE: f64 = 0.01;

/// Human-facing install number.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstallMark {
    /// Ordinary sequence, starting at 1.
    Sequence(u32),
    /// Bottom course set after the ledger board is removed, printed `L1`, `L2`, ...
    Ledger(u32),
}

impl InstallMark {
    pub fn is_ledger(self) -> bool {
        matches!(self, InstallMark::Ledger(_))
    }
}

impl fmt::Display for InstallMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMark::Sequence(n) => write!(f, "{n}"),
            InstallMark::Ledger(n) => write!(f, "L{n}"),
        }
    }
}

/// Install metadata for one tile.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstallInfo {
    pub tile: TileId,
    pub mark: InstallMark,
    /// For a corner-paired fragment, the wall holding the other fragment.
    pub corner_pair_wall: Option<WallId>,
}

/// Install metadata for every tile of a run, in install order.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<InstallInfo>", into = "Vec<InstallInfo>")
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstallPlan {
    entries: Vec<InstallInfo>,
    index: HashMap<TileId, usize>,
}

impl InstallPlan {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, info: InstallInfo) {
        self.index.insert(info.tile, self.entries.len());
        self.entries.push(info);
    }

    pub fn get(&self, id: &TileId) -> Option<&InstallInfo> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn mark_of(&self, tile: &Tile) -> Option<InstallMark> {
        self.get(&tile.id).map(|info| info.mark)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were assigned.
    pub fn iter(&self) -> impl Iterator<Item = &InstallInfo> {
        self.entries.iter()
    }

    /// Tiles of `layout` in install order, with their metadata.
    pub fn ordered<'a>(&'a self, layout: &'a WallLayout) -> Vec<(&'a Tile, &'a InstallInfo)> {
        install_order(layout)
            .into_iter()
            .filter_map(|tile| self.get(&tile.id).map(|info| (tile, info)))
            .collect()
    }

    /// Highest ordinary number handed out.
    pub fn sequence_count(&self) -> u32 {
        self.entries
            .iter()
            .filter_map(|e| match e.mark {
                InstallMark::Sequence(n) => Some(n),
                InstallMark::Ledger(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Highest ledger number handed out.
    pub fn ledger_count(&self) -> u32 {
        self.entries
            .iter()
            .filter_map(|e| match e.mark {
                InstallMark::Ledger(n) => Some(n),
                InstallMark::Sequence(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl From<Vec<InstallInfo>> for InstallPlan {
    fn from(entries: Vec<InstallInfo>) -> Self {
        let mut plan = InstallPlan::new();
        for info in entries {
            plan.push(info);
        }
        plan
    }
}

impl From<InstallPlan> for Vec<InstallInfo> {
    fn from(plan: InstallPlan) -> Self {
        plan.entries
    }
}

/// Tiles of one wall sorted bottom course first, then left to right.
pub fn install_order(layout: &WallLayout) -> Vec<&Tile> {
    let mut tiles: Vec<&Tile> = layout.tiles.iter().collect();
    tiles.sort_by(|a, b| {
        Reverse(a.row())
            .cmp(&Reverse(b.row()))
            .then(a.x.total_cmp(&b.x))
    });
    tiles
}

/// Running counters threaded through the numbering pass.
#[derive(Default)]
struct Numbering {
    next_number: u32,
    next_ledger: u32,
    plan: InstallPlan,
}

impl Numbering {
    fn sequence(&mut self) -> InstallMark {
        self.next_number += 1;
        InstallMark::Sequence(self.next_number)
    }

    fn ledger(&mut self) -> InstallMark {
        self.next_ledger += 1;
        InstallMark::Ledger(self.next_ledger)
    }
}

/// Assigns install numbers to every tile of the three walls.
///
/// The side fragment of a corner pair reuses the number of its back fragment. With
/// `use_ledger_board`, tiles on the back wall's bottom course (and the matching course on
/// the side walls) are numbered on a separate `L` track.
pub fn assign_install_numbers(
    back: &WallLayout,
    left: &WallLayout,
    right: &WallLayout,
    corner_pairs: &[CornerPair],
    use_ledger_board: bool,
) -> InstallPlan {
    let ledger_y = if use_ledger_board {
        back.bottom_row_y()
    } else {
        None
    };

    let side_to_back: HashMap<TileId, TileId> = corner_pairs
        .iter()
        .map(|p| (p.side_tile.id, p.back_tile.id))
        .collect();
    let mut back_to_side: HashMap<TileId, WallId> = HashMap::new();
    for pair in corner_pairs {
        back_to_side
            .entry(pair.back_tile.id)
            .or_insert(pair.side_wall());
    }

    let numbering = [back, left, right]
        .into_iter()
        .flat_map(install_order)
        .fold(Numbering::default(), |mut state, tile| {
            let inherited = side_to_back
                .get(&tile.id)
                .and_then(|back_id| state.plan.get(back_id))
                .map(|back_info| back_info.mark);

            let info = match inherited {
                Some(mark) => InstallInfo {
                    tile: tile.id,
                    mark,
                    corner_pair_wall: Some(WallId::Back),
                },
                None => {
                    let on_ledger_row =
                        ledger_y.is_some_and(|y| (tile.y - y).abs() < LEDGER_ROW_TOLERANCE);
                    let mark = if on_ledger_row {
                        state.ledger()
                    } else {
                        state.sequence()
                    };
                    InstallInfo {
                        tile: tile.id,
                        mark,
                        corner_pair_wall: back_to_side.get(&tile.id).copied(),
                    }
                }
            };
            state.plan.push(info);
            state
        });

    numbering.plan
}
