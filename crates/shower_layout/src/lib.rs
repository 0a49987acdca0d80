#![forbid(unsafe_code)]
//! shower_layout: Tile layout for three-wall shower enclosures.
//!
//! Modules:
//! - config: wall, tile and shower parameter objects with validation
//! - pattern: course stagger patterns (straight, half and third offset brick)
//! - layout: per-wall tile grids, corner pairing, install numbering and the shower orchestrator
//! - format: contractor-friendly fractional inch strings
//!
//! For examples, see the `shower_layout_examples` crate.
pub mod config;
pub mod error;
pub mod format;
pub mod layout;
pub mod pattern;

/// Convenient re-exports for common types. Import with `use shower_layout::prelude::*;`.
pub mod prelude {
    pub use crate::config::{ShowerParams, TileSpec, WallSpec};
    pub use crate::error::{Error, Result};
    pub use crate::format::{to_fractional_inches, FractionalInches};
    pub use crate::layout::corner::{identify_corner_pairs, CornerPair};
    pub use crate::layout::numbering::{
        assign_install_numbers, install_order, InstallInfo, InstallMark, InstallPlan,
    };
    pub use crate::layout::shower::{compute_shower_layout, MaterialEstimate, ShowerLayoutResult};
    pub use crate::layout::wall::{compute_wall_layout, layout_wall};
    pub use crate::layout::{
        AlignmentReference, CutInfo, Tile, TileId, WallId, WallLayout, WrapDirection,
    };
    pub use crate::pattern::Pattern;
}
