//! Tile grids for the three walls of an alcove and the logic derived from them.
//!
//! Coordinates are wall-local inches with the origin at the top-left corner of the wall,
//! `x` growing to the right and `y` growing downward. Row and column indices address the
//! unbounded tile grid and may be negative for tiles that start above or left of the wall.
use std::fmt;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod corner;
pub mod numbering;
pub mod shower;
pub mod wall;

/// Tolerance used when comparing tile geometry against wall bounds.
pub const GEOMETRY_TOLERANCE: f64 = 1e-3;

/// Cuts and visible extents smaller than this are treated as zero.
pub(crate) const CUT_EPSILON: f64 = 1e-6;

/// One of the three walls of the enclosure.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WallId {
    Back,
    Left,
    Right,
}

impl WallId {
    /// Walls in installation order.
    pub const ALL: [WallId; 3] = [WallId::Back, WallId::Left, WallId::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            WallId::Back => "back",
            WallId::Left => "left",
            WallId::Right => "right",
        }
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which edge of the reference wall a side wall continues from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrapDirection {
    /// The side wall meets the reference wall's left edge.
    Left,
    /// The side wall meets the reference wall's right edge.
    Right,
}

impl WrapDirection {
    /// The side wall produced by wrapping in this direction.
    pub fn wall(self) -> WallId {
        match self {
            WrapDirection::Left => WallId::Left,
            WrapDirection::Right => WallId::Right,
        }
    }
}

/// Grid origin of a reference wall, consumed by a wall that wraps around its corner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignmentReference {
    /// Grid offset of the reference wall (`start.x`, `start.y`).
    pub start: DVec2,
    pub wrap_direction: WrapDirection,
    /// Width of the reference wall.
    pub reference_width: f64,
}

impl AlignmentReference {
    pub fn new(start: DVec2, wrap_direction: WrapDirection, reference_width: f64) -> Self {
        Self {
            start,
            wrap_direction,
            reference_width,
        }
    }

    /// Requires a finite grid offset and a finite, strictly positive reference width.
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "alignment start must be finite, got ({}, {})",
                self.start.x, self.start.y
            )));
        }
        if !(self.reference_width.is_finite() && self.reference_width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "alignment reference_width must be > 0, got {}",
                self.reference_width
            )));
        }
        Ok(())
    }

    /// Grid offset for a dependent wall of width `wall_width`.
    ///
    /// Rows are shared with the reference wall. Columns continue across the seam: a left
    /// wall ends where the reference wall begins, a right wall begins where it ends.
    pub fn start_for(&self, wall_width: f64) -> DVec2 {
        let x = match self.wrap_direction {
            WrapDirection::Left => self.start.x - wall_width,
            WrapDirection::Right => self.start.x + self.reference_width,
        };
        DVec2::new(x, self.start.y)
    }
}

/// Amount trimmed from each side of a tile, in inches. Zero means uncut.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CutInfo {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl CutInfo {
    pub fn is_cut(&self) -> bool {
        self.top > 0.0 || self.right > 0.0 || self.bottom > 0.0 || self.left > 0.0
    }

    /// Total trimmed along the x axis.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total trimmed along the y axis.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Stable identity of a tile within one run.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    pub wall: WallId,
    pub row: i32,
    pub col: i32,
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.wall, self.row, self.col)
    }
}

/// A placed tile, clipped to its wall.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub id: TileId,
    /// Visible left edge in wall coordinates.
    pub x: f64,
    /// Visible top edge in wall coordinates.
    pub y: f64,
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
    pub full_width: f64,
    pub full_height: f64,
    pub cut: CutInfo,
}

impl Tile {
    pub fn wall(&self) -> WallId {
        self.id.wall
    }

    pub fn row(&self) -> i32 {
        self.id.row
    }

    pub fn col(&self) -> i32 {
        self.id.col
    }

    pub fn is_cut(&self) -> bool {
        self.cut.is_cut()
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn visible_area(&self) -> f64 {
        self.width * self.height
    }
}

/// Tile grid computed for one wall.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WallLayout {
    pub wall: WallId,
    pub wall_width: f64,
    pub wall_height: f64,
    /// Offset of the grid origin from the wall's top-left corner.
    pub start: DVec2,
    /// Tiles in generation order (row-major over the padded grid).
    pub tiles: Vec<Tile>,
    pub total_tiles: usize,
    pub full_tiles: usize,
    pub cut_tiles: usize,
}

impl WallLayout {
    pub fn start_x(&self) -> f64 {
        self.start.x
    }

    pub fn start_y(&self) -> f64 {
        self.start.y
    }

    /// Reference that lets a side wall continue this wall's grid around a corner.
    pub fn alignment_reference(&self, wrap_direction: WrapDirection) -> AlignmentReference {
        AlignmentReference::new(self.start, wrap_direction, self.wall_width)
    }

    pub fn tile(&self, row: i32, col: i32) -> Option<&Tile> {
        self.tiles
            .iter()
            .find(|t| t.id.row == row && t.id.col == col)
    }

    pub fn cut_tiles_iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_cut())
    }

    /// `y` of the lowest course on this wall.
    pub fn bottom_row_y(&self) -> Option<f64> {
        self.tiles.iter().map(|t| t.y).reduce(f64::max)
    }

    pub fn area(&self) -> f64 {
        self.wall_width * self.wall_height
    }
}
