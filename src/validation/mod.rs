//! # Validation Module
//!
//! Sanitization and validation of the request parameters that drive the typing SVG.
//!
//! Two policies live side by side:
//! 1. Permissive allow-set sanitization for `font`, `color` and `center`: disallowed
//!    input is deleted or replaced by a default, never rejected
//! 2. Strict validation for `lines` (required) and the numeric fields (must be positive)
//!
//! The allow-sets are precompiled once and shared by every request.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

pub mod parameters;

pub use parameters::*;

lazy_static! {
    /// Everything outside the font family allow-set
    static ref FONT_DISALLOWED_REGEX: Regex = Regex::new(r"[^0-9A-Za-z+'\-()!&*_ ]").unwrap();

    /// Everything that is not a hexadecimal digit
    static ref NON_HEX_REGEX: Regex = Regex::new(r"[^0-9A-Fa-f]").unwrap();

    /// Everything that is neither a decimal digit nor a minus sign
    static ref NON_NUMERIC_REGEX: Regex = Regex::new(r"[^0-9\-]").unwrap();

    /// Optional sign followed by digits at the start of the input
    static ref LEADING_INTEGER_REGEX: Regex = Regex::new(r"^-?[0-9]+").unwrap();

    /// A complete `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` color
    static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap();
}

/// Digit counts accepted for a color after sanitization
pub const HEX_COLOR_LENGTHS: [usize; 4] = [3, 4, 6, 8];

/// Parameter validation failures surfaced to the HTTP boundary
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A required parameter was not supplied
    #[error("{0}")]
    MissingParameter(String),

    /// A parameter was supplied but cannot be used
    #[error("{0}")]
    InvalidParameter(String),
}

impl ParameterError {
    pub fn missing<S: Into<String>>(message: S) -> Self {
        Self::MissingParameter(message.into())
    }

    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Machine-readable kind used in error response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            ParameterError::MissingParameter(_) => "missing_parameter",
            ParameterError::InvalidParameter(_) => "invalid_parameter",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ParameterError::MissingParameter(msg) | ParameterError::InvalidParameter(msg) => msg,
        }
    }
}

/// Delete every character outside the font family allow-set
pub fn sanitize_font(font: &str) -> String {
    FONT_DISALLOWED_REGEX.replace_all(font, "").into_owned()
}

/// Delete every character that is not a hexadecimal digit
pub fn sanitize_hex(color: &str) -> String {
    NON_HEX_REGEX.replace_all(color, "").into_owned()
}

/// Delete every character that is neither a digit nor a minus sign
pub fn sanitize_number(number: &str) -> String {
    NON_NUMERIC_REGEX.replace_all(number, "").into_owned()
}

/// Read the integer at the start of `input`.
///
/// Input without a leading integer reads as 0. Values outside the `i64` range
/// saturate at the nearest bound.
pub fn parse_leading_integer(input: &str) -> i64 {
    let Some(found) = LEADING_INTEGER_REGEX.find(input) else {
        return 0;
    };
    let digits = found.as_str();
    digits.parse::<i64>().unwrap_or(if digits.starts_with('-') { i64::MIN } else { i64::MAX })
}

/// Validate a complete hex color such as `#36BCF7`
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR_REGEX.is_match(color) {
        return Err(ValidationError::new("invalid_hex_color"));
    }
    Ok(())
}

/// Validate that a font family survives sanitization unchanged
pub fn validate_font_name(font: &str) -> Result<(), ValidationError> {
    if FONT_DISALLOWED_REGEX.is_match(font) {
        return Err(ValidationError::new("invalid_font_name"));
    }
    Ok(())
}
