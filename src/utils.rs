//! Small helpers shared across the crate: cache directory resolution and the
//! safe string to number conversions the forecast parser relies on.

use std::io;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CACHE_DIR_NAME: &str = "libweather";

/// Why a string could not be converted to a number.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The value is larger than the target type can hold.
    #[error("value is too large")]
    Overflow,
    /// The value is smaller than the target type can hold (or, for floats,
    /// too close to zero to be represented).
    #[error("value is too small")]
    Underflow,
    /// The string is empty, starts with whitespace or has trailing garbage.
    #[error("value is not a number")]
    Inconvertible,
}

/// Returns the process-wide cache root, `<tempdir>/libweather`.
pub fn get_cache_dir() -> PathBuf {
    std::env::temp_dir().join(CACHE_DIR_NAME)
}

pub fn ensure_cache_dir_exists(path: &Path) -> io::Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Cache path exists but is not a directory: {}", path.display()),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => std::fs::create_dir_all(path),
        Err(e) => Err(e),
    }
}

/// Converts a base-10 string to an `i32`.
///
/// Unlike a bare `str::parse`, leading whitespace is rejected and the failure
/// is classified so callers can tell an out-of-range value from garbage.
pub fn parse_int(s: &str) -> Result<i32, ConversionError> {
    if s.is_empty() || s.starts_with(char::is_whitespace) {
        return Err(ConversionError::Inconvertible);
    }
    s.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ConversionError::Overflow,
        IntErrorKind::NegOverflow => ConversionError::Underflow,
        _ => ConversionError::Inconvertible,
    })
}

/// Converts a string to an `f64`.
///
/// Literal infinities and NaN are accepted as written; a finite literal that
/// rounds to infinity is an overflow and a non-zero literal that rounds to
/// zero is an underflow.
pub fn parse_double(s: &str) -> Result<f64, ConversionError> {
    if s.is_empty() || s.starts_with(char::is_whitespace) {
        return Err(ConversionError::Inconvertible);
    }
    let value = s
        .parse::<f64>()
        .map_err(|_| ConversionError::Inconvertible)?;
    let is_literal_special = s
        .trim_start_matches(['+', '-'])
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    if value.is_infinite() && !is_literal_special {
        return Err(ConversionError::Overflow);
    }
    if value == 0.0 && has_non_zero_mantissa(s) {
        return Err(ConversionError::Underflow);
    }
    Ok(value)
}

fn has_non_zero_mantissa(s: &str) -> bool {
    s.chars()
        .take_while(|c| !matches!(c, 'e' | 'E'))
        .any(|c| matches!(c, '1'..='9'))
}

/// True if every character of `s` is an ASCII digit.
///
/// An empty string counts as a number, so an empty query is looked up as a
/// code rather than as a name.
pub fn is_number(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}
