//! Parsing of raw text fields at the operation boundary.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Why a numeric text field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{input}' is not a whole number")]
    NotANumber { input: String },

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i32, min: i32, max: i32 },
}

/// Parse `input` as a 32-bit integer and check it against `range`.
///
/// The text is taken as-is: surrounding whitespace is a parse failure and a
/// leading sign is accepted.
pub fn parse_in_range(input: &str, range: RangeInclusive<i32>) -> Result<i32, InputError> {
    let value: i32 = input.parse().map_err(|_| InputError::NotANumber {
        input: input.to_string(),
    })?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
