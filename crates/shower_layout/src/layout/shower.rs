//! Whole-enclosure layout: back wall, wrapped side walls, corner pairs, install numbers
//! and purchase totals.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ShowerParams;
use crate::error::{Error, Result};
use crate::layout::corner::{identify_corner_pairs, CornerPair};
use crate::layout::numbering::{assign_install_numbers, InstallPlan};
use crate::layout::wall::layout_wall;
use crate::layout::{WallId, WallLayout, WrapDirection};

const SQUARE_INCHES_PER_SQUARE_FOOT: f64 = 144.0;

/// Tile and box counts to order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialEstimate {
    pub tiles: usize,
    pub boxes: usize,
}

/// Layout of all three walls plus aggregate counts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ShowerLayoutResult {
    pub back: WallLayout,
    pub left: WallLayout,
    pub right: WallLayout,
    /// Visible placements over all walls.
    pub total_tiles: usize,
    pub full_tiles: usize,
    pub cut_tiles: usize,
    pub corner_pairs: Vec<CornerPair>,
    /// Placements minus corner pairs; each pair is one tile bought.
    pub physical_tiles: usize,
    /// Physical tiles plus the waste allowance, rounded up.
    pub recommended_purchase: usize,
    pub install_plan: InstallPlan,
}

impl ShowerLayoutResult {
    /// Walls in install order: back, left, right.
    pub fn walls(&self) -> impl Iterator<Item = &WallLayout> {
        [&self.back, &self.left, &self.right].into_iter()
    }

    pub fn wall(&self, id: WallId) -> &WallLayout {
        match id {
            WallId::Back => &self.back,
            WallId::Left => &self.left,
            WallId::Right => &self.right,
        }
    }

    /// Tiled area of all three walls in square feet.
    pub fn coverage_sq_ft(&self) -> f64 {
        self.walls().map(WallLayout::area).sum::<f64>() / SQUARE_INCHES_PER_SQUARE_FOOT
    }

    /// Boxes needed to cover the recommended purchase.
    pub fn boxes_needed(&self, tiles_per_box: usize) -> Result<MaterialEstimate> {
        if tiles_per_box == 0 {
            return Err(Error::InvalidConfig("tiles_per_box must be > 0".into()));
        }
        Ok(MaterialEstimate {
            tiles: self.recommended_purchase,
            boxes: self.recommended_purchase.div_ceil(tiles_per_box),
        })
    }
}

/// Lays out the back wall centered, wraps both side walls onto its grid, pairs the
/// corner fragments, numbers every tile and totals the purchase.
pub fn compute_shower_layout(params: &ShowerParams) -> Result<ShowerLayoutResult> {
    params.validate()?;

    let tile = params.tile();
    let side = params.side_wall();

    let back = layout_wall(WallId::Back, &params.back_wall(), &tile, None)?;
    let left = layout_wall(
        WallId::Left,
        &side,
        &tile,
        Some(&back.alignment_reference(WrapDirection::Left)),
    )?;
    let right = layout_wall(
        WallId::Right,
        &side,
        &tile,
        Some(&back.alignment_reference(WrapDirection::Right)),
    )?;

    let corner_pairs = identify_corner_pairs(&back, &left, &right);
    let install_plan =
        assign_install_numbers(&back, &left, &right, &corner_pairs, params.use_ledger_board);

    let walls = [&back, &left, &right];
    let total_tiles: usize = walls.iter().map(|w| w.total_tiles).sum();
    let full_tiles: usize = walls.iter().map(|w| w.full_tiles).sum();
    let cut_tiles: usize = walls.iter().map(|w| w.cut_tiles).sum();
    let physical_tiles = total_tiles.saturating_sub(corner_pairs.len());
    let recommended_purchase = with_waste(physical_tiles, params.waste_percent)?;

    info!(
        "Shower {}x{}x{} in, {} tile: {} placements ({} full, {} cut), {} corner pairs, buy {}.",
        params.shower_width,
        params.shower_height,
        params.shower_depth,
        params.pattern,
        total_tiles,
        full_tiles,
        cut_tiles,
        corner_pairs.len(),
        recommended_purchase
    );

    Ok(ShowerLayoutResult {
        back,
        left,
        right,
        total_tiles,
        full_tiles,
        cut_tiles,
        corner_pairs,
        physical_tiles,
        recommended_purchase,
        install_plan,
    })
}

/// `ceil(tiles * (100 + waste_percent) / 100)` in integer arithmetic.
pub fn with_waste(tiles: usize, waste_percent: u32) -> Result<usize> {
    let factor = 100usize
        .checked_add(waste_percent as usize)
        .ok_or_else(|| Error::InvalidConfig(format!("waste_percent {waste_percent} too large")))?;
    tiles
        .checked_mul(factor)
        .map(|scaled| scaled.div_ceil(100))
        .ok_or_else(|| Error::InvalidConfig(format!("waste_percent {waste_percent} too large")))
}
