//! Decimal inches to tape-measure fractions.
use std::fmt;

/// Finest fraction printed: eighths of an inch.
pub const EIGHTHS_PER_INCH: f64 = 8.0;

/// Displays a decimal inch value rounded to the nearest 1/8", e.g. `3 1/2"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractionalInches(pub f64);

impl fmt::Display for FractionalInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return write!(f, "{value}\"");
        }

        let eighths = (value.abs() * EIGHTHS_PER_INCH).round() as u64;
        if eighths == 0 {
            return f.write_str("0\"");
        }

        let sign = if value < 0.0 { "-" } else { "" };
        let whole = eighths / 8;
        let remainder = eighths % 8;
        let (numerator, denominator) = reduce_eighths(remainder);

        match (whole, remainder) {
            (_, 0) => write!(f, "{sign}{whole}\""),
            (0, _) => write!(f, "{sign}{numerator}/{denominator}\""),
            _ => write!(f, "{sign}{whole} {numerator}/{denominator}\""),
        }
    }
}

fn reduce_eighths(eighths: u64) -> (u64, u64) {
    if eighths % 4 == 0 {
        (eighths / 4, 2)
    } else if eighths % 2 == 0 {
        (eighths / 2, 4)
    } else {
        (eighths, 8)
    }
}

/// Formats `value` inches as a mixed fraction rounded to the nearest eighth.
///
/// Negative values keep their `-` sign unless they round to zero, which prints `0"`.
pub fn to_fractional_inches(value: f64) -> String {
    FractionalInches(value).to_string()
}
