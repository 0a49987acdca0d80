//! Parameter objects describing walls, tiles and a whole shower enclosure.
//!
//! All measurements are decimal inches.
use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, Error, Result};
use crate::pattern::Pattern;

/// Default material overage applied to the purchase recommendation.
pub const DEFAULT_WASTE_PERCENT: u32 = 10;

/// Size of one rectangular wall.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSpec {
    pub width: f64,
    pub height: f64,
}

impl WallSpec {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Builds a wall from any mint-compatible 2D extent (x = width, y = height).
    pub fn from_extent(extent: impl Into<Vector2<f64>>) -> Self {
        let extent = extent.into();
        Self::new(extent.x, extent.y)
    }

    pub fn extent(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("wall_width", self.width)?;
        ensure_positive("wall_height", self.height)
    }
}

/// Tile size, grout joint and course pattern shared by every wall in a run.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSpec {
    pub width: f64,
    pub height: f64,
    pub grout_spacing: f64,
    pub pattern: Pattern,
}

impl TileSpec {
    /// Creates a straight-stacked tile spec with no grout joint.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            grout_spacing: 0.0,
            pattern: Pattern::Straight,
        }
    }

    pub fn with_grout_spacing(mut self, grout_spacing: f64) -> Self {
        self.grout_spacing = grout_spacing;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Tile size plus one grout joint on each axis.
    pub fn pitch(&self) -> DVec2 {
        self.size() + DVec2::splat(self.grout_spacing)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("tile_width", self.width)?;
        ensure_positive("tile_height", self.height)?;
        if !self.grout_spacing.is_finite() || self.grout_spacing < 0.0 {
            return Err(Error::InvalidGrout(self.grout_spacing));
        }
        Ok(())
    }
}

/// Everything needed to lay out a three-wall alcove.
///
/// The back wall is `shower_width` wide; the left and right walls are `shower_depth` wide.
/// All three walls are `shower_height` tall.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ShowerParams {
    pub shower_width: f64,
    pub shower_height: f64,
    pub shower_depth: f64,
    pub tile_width: f64,
    pub tile_height: f64,
    pub grout_spacing: f64,
    pub pattern: Pattern,
    /// Number the bottom course on its own `L` track, installed last.
    pub use_ledger_board: bool,
    /// Overage added to the physical tile count when recommending a purchase.
    pub waste_percent: u32,
}

impl Default for ShowerParams {
    fn default() -> Self {
        Self {
            shower_width: 60.0,
            shower_height: 72.0,
            shower_depth: 36.0,
            tile_width: 24.0,
            tile_height: 12.0,
            grout_spacing: 0.125,
            pattern: Pattern::Brick50,
            use_ledger_board: false,
            waste_percent: DEFAULT_WASTE_PERCENT,
        }
    }
}

impl ShowerParams {
    /// Creates parameters for the given enclosure, keeping default tile settings.
    pub fn new(shower_width: f64, shower_height: f64, shower_depth: f64) -> Self {
        Self {
            shower_width,
            shower_height,
            shower_depth,
            ..Default::default()
        }
    }

    /// Sets the nominal tile size.
    pub fn with_tile(mut self, tile_width: f64, tile_height: f64) -> Self {
        self.tile_width = tile_width;
        self.tile_height = tile_height;
        self
    }

    /// Sets the grout joint width.
    pub fn with_grout_spacing(mut self, grout_spacing: f64) -> Self {
        self.grout_spacing = grout_spacing;
        self
    }

    /// Sets the course pattern.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Enables or disables ledger board numbering of the bottom course.
    pub fn with_ledger_board(mut self, use_ledger_board: bool) -> Self {
        self.use_ledger_board = use_ledger_board;
        self
    }

    /// Sets the purchase overage percentage.
    pub fn with_waste_percent(mut self, waste_percent: u32) -> Self {
        self.waste_percent = waste_percent;
        self
    }

    pub fn back_wall(&self) -> WallSpec {
        WallSpec::new(self.shower_width, self.shower_height)
    }

    /// Left and right walls share the back wall height; the depth is their width.
    pub fn side_wall(&self) -> WallSpec {
        WallSpec::new(self.shower_depth, self.shower_height)
    }

    pub fn tile(&self) -> TileSpec {
        TileSpec::new(self.tile_width, self.tile_height)
            .with_grout_spacing(self.grout_spacing)
            .with_pattern(self.pattern)
    }

    /// Validates every dimension, returning the first failure.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("shower_width", self.shower_width)?;
        ensure_positive("shower_height", self.shower_height)?;
        ensure_positive("shower_depth", self.shower_depth)?;
        self.tile().validate()
    }
}
