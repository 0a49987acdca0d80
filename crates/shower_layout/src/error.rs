//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover non-positive dimensions, invalid grout spacing and other rejected
//! configuration.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} must be a positive number of inches, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("grout spacing must be >= 0 inches, got {0}")]
    InvalidGrout(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("width", 1.5).is_ok());
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = ensure_positive("width", bad).expect_err("expected rejection");
            assert!(matches!(err, Error::InvalidDimension { name: "width", .. }));
        }
    }

    #[test]
    fn invalid_dimension_message_names_the_field() {
        let err = Error::InvalidDimension {
            name: "tile_height",
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "tile_height must be a positive number of inches, got 0"
        );
    }
}
