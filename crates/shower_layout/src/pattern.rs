//! Course stagger patterns.
//!
//! A [`Pattern`] decides how far each row of tiles is shifted horizontally relative to
//! the grid origin. Unknown pattern names fall back to [`Pattern::Straight`].
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Horizontal stagger applied per tile course.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Running bond: odd rows shift by half a pitch.
    #[default]
    Brick50,
    /// Third offset: rows shift by `(row mod 3)` thirds of a pitch.
    Brick33,
    /// Stacked grid, no shift.
    Straight,
}

impl Pattern {
    /// All patterns, in UI order.
    pub const ALL: [Pattern; 3] = [Pattern::Brick50, Pattern::Brick33, Pattern::Straight];

    /// Wire name of the pattern.
    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::Brick50 => "brick-50",
            Pattern::Brick33 => "brick-33",
            Pattern::Straight => "straight",
        }
    }

    /// Parses a wire name, treating anything unrecognized as [`Pattern::Straight`].
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim() {
            "brick-50" => Pattern::Brick50,
            "brick-33" => Pattern::Brick33,
            "straight" => Pattern::Straight,
            other => {
                debug!("Unrecognized tile pattern '{other}'; using straight.");
                Pattern::Straight
            }
        }
    }

    /// Horizontal shift of `row` in inches for a grid with horizontal pitch `pitch_x`.
    ///
    /// The result is always in `[0, pitch_x)`. Rows above the wall (negative indices)
    /// continue the same period.
    pub fn row_offset(self, row: i32, pitch_x: f64) -> f64 {
        match self {
            Pattern::Brick50 => {
                if row.rem_euclid(2) == 1 {
                    pitch_x / 2.0
                } else {
                    0.0
                }
            }
            Pattern::Brick33 => f64::from(row.rem_euclid(3)) * pitch_x / 3.0,
            Pattern::Straight => 0.0,
        }
    }

    /// Largest row shift expressed in pitches, rounded up.
    pub fn max_shift_pitches(self) -> i32 {
        match self {
            Pattern::Straight => 0,
            Pattern::Brick50 | Pattern::Brick33 => 1,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pattern::parse_lossy(s))
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Pattern::parse_lossy(&value)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Pattern::parse_lossy(value)
    }
}

impl From<Pattern> for String {
    fn from(value: Pattern) -> Self {
        value.as_str().to_owned()
    }
}
