//! # Render Parameters
//!
//! Turns the raw request parameters into the typed record consumed by the SVG
//! template. Each field has its own check; the first failing check aborts the
//! whole construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::Error;
use crate::validation::{
    parse_leading_integer, sanitize_font, sanitize_hex, sanitize_number, validate_font_name,
    validate_hex_color, ParameterError, HEX_COLOR_LENGTHS,
};

pub const LINES_PARAM: &str = "lines";
pub const FONT_PARAM: &str = "font";
pub const COLOR_PARAM: &str = "color";
pub const SIZE_PARAM: &str = "size";
pub const CENTER_PARAM: &str = "center";
pub const WIDTH_PARAM: &str = "width";
pub const HEIGHT_PARAM: &str = "height";

/// Separator between lines in the `lines` parameter
pub const LINE_SEPARATOR: char = ';';

/// Values used for every parameter the request leaves out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ParameterDefaults {
    #[validate(custom(function = "validate_font_name"))]
    pub font: String,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,

    #[validate(range(min = 1, message = "Font size must be a positive number."))]
    pub size: u64,

    pub center: bool,

    #[validate(range(min = 1, message = "Width must be a positive number."))]
    pub width: u64,

    #[validate(range(min = 1, message = "Height must be a positive number."))]
    pub height: u64,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            font: "JetBrains Mono".to_string(),
            color: "#36BCF7".to_string(),
            size: 20,
            center: false,
            width: 400,
            height: 50,
        }
    }
}

/// Raw request parameters, before any validation.
///
/// Keys other than the recognised parameter names are kept but never read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawInput(HashMap<String, String>);

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a parameter value; `None` when the key was not sent at all
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set a parameter, returning `self` for chaining
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Overlay `other` on top of these parameters; keys present in both take `other`'s value
    pub fn merge(&mut self, other: RawInput) {
        self.0.extend(other.0);
    }
}

impl From<HashMap<String, String>> for RawInput {
    fn from(params: HashMap<String, String>) -> Self {
        Self(params)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Validated, normalized parameters for one typing SVG
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParameters {
    /// Text lines in display order; never empty
    pub lines: Vec<String>,
    /// Font family restricted to the font allow-set
    pub font: String,
    /// `#` followed by 3, 4, 6 or 8 hex digits
    pub color: String,
    /// Font size in px
    pub size: u64,
    /// Whether text is horizontally centered
    pub center: bool,
    /// SVG width in px
    pub width: u64,
    /// SVG height in px
    pub height: u64,
}

impl RenderParameters {
    /// Validate `raw` against the stock defaults
    pub fn from_raw(raw: &RawInput) -> Result<Self, ParameterError> {
        Self::build(raw, &ParameterDefaults::default())
    }

    /// Validate `raw`, filling absent parameters from `defaults`.
    ///
    /// `defaults` are checked first: a default that could never pass its own
    /// field check is reported as [`Error::Config`], not blamed on the request.
    pub fn from_raw_with_defaults(
        raw: &RawInput,
        defaults: &ParameterDefaults,
    ) -> crate::Result<Self> {
        defaults.validate().map_err(Error::from)?;
        Ok(Self::build(raw, defaults)?)
    }

    fn build(raw: &RawInput, defaults: &ParameterDefaults) -> Result<Self, ParameterError> {
        Ok(Self {
            lines: validate_lines(raw.get(LINES_PARAM))?,
            font: validate_font(raw.get(FONT_PARAM), &defaults.font),
            color: validate_color(raw.get(COLOR_PARAM), &defaults.color),
            size: validate_number(raw.get(SIZE_PARAM), defaults.size, "Font size")?,
            center: validate_center(raw.get(CENTER_PARAM), defaults.center),
            width: validate_number(raw.get(WIDTH_PARAM), defaults.width, "Width")?,
            height: validate_number(raw.get(HEIGHT_PARAM), defaults.height, "Height")?,
        })
    }
}

impl TryFrom<&RawInput> for RenderParameters {
    type Error = ParameterError;

    fn try_from(raw: &RawInput) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

/// Split the required `lines` parameter on `;`.
///
/// Pieces are kept as sent: no trimming, and empty pieces stay in place.
pub fn validate_lines(lines: Option<&str>) -> Result<Vec<String>, ParameterError> {
    let lines = lines.ok_or_else(|| ParameterError::missing("Lines parameter must be set."))?;
    let split: Vec<String> = lines.split(LINE_SEPARATOR).map(str::to_string).collect();
    if split.is_empty() {
        return Err(ParameterError::invalid("Lines parameter is invalid."));
    }
    Ok(split)
}

/// Font family with every disallowed character deleted
pub fn validate_font(font: Option<&str>, default: &str) -> String {
    sanitize_font(font.unwrap_or(default))
}

/// `#` plus the hex digits of `color`, or `default` when the digit count is unusable
pub fn validate_color(color: Option<&str>, default: &str) -> String {
    let digits = sanitize_hex(color.unwrap_or(default));
    if !HEX_COLOR_LENGTHS.contains(&digits.len()) {
        return default.to_string();
    }
    format!("#{}", digits)
}

/// Strictly positive integer read from the digits and minus signs of `number`
pub fn validate_number(
    number: Option<&str>,
    default: u64,
    field: &str,
) -> Result<u64, ParameterError> {
    let value = match number {
        // negative input reads as 0 and is rejected below
        Some(number) => u64::try_from(parse_leading_integer(&sanitize_number(number))).unwrap_or(0),
        None => default,
    };
    if value == 0 {
        return Err(ParameterError::invalid(format!("{} must be a positive number.", field)));
    }
    Ok(value)
}

/// Only the exact string `true` enables centering
pub fn validate_center(center: Option<&str>, default: bool) -> bool {
    center.map_or(default, |center| center == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lines() {
        assert_eq!(validate_lines(Some("Hello;World")).unwrap(), vec!["Hello", "World"]);
        assert_eq!(validate_lines(Some(" a ; b ")).unwrap(), vec![" a ", " b "]);
        assert_eq!(validate_lines(Some("")).unwrap(), vec![""]);
        assert_eq!(validate_lines(Some(";;")).unwrap(), vec!["", "", ""]);
    }

    #[test]
    fn test_validate_lines_missing() {
        let err = validate_lines(None).unwrap_err();
        assert_eq!(err, ParameterError::missing("Lines parameter must be set."));
    }

    #[test]
    fn test_validate_font() {
        assert_eq!(validate_font(None, "JetBrains Mono"), "JetBrains Mono");
        assert_eq!(validate_font(Some("Fira Code"), "JetBrains Mono"), "Fira Code");
        assert_eq!(validate_font(Some("<b>Inter</b>"), "JetBrains Mono"), "bInterb");
        assert_eq!(validate_font(Some(""), "JetBrains Mono"), "");
    }

    #[test]
    fn test_validate_color() {
        assert_eq!(validate_color(Some("ff00ff"), "#36BCF7"), "#ff00ff");
        assert_eq!(validate_color(Some("#FFF"), "#36BCF7"), "#FFF");
        assert_eq!(validate_color(Some("f0f8"), "#36BCF7"), "#f0f8");
        assert_eq!(validate_color(Some("ff00ff80"), "#36BCF7"), "#ff00ff80");
        assert_eq!(validate_color(Some("zz"), "#36BCF7"), "#36BCF7");
        assert_eq!(validate_color(Some("12345"), "#36BCF7"), "#36BCF7");
        assert_eq!(validate_color(Some(""), "#36BCF7"), "#36BCF7");
        assert_eq!(validate_color(None, "#36BCF7"), "#36BCF7");
    }

    #[test]
    fn test_validate_number() {
        assert_eq!(validate_number(Some("24"), 20, "Font size").unwrap(), 24);
        assert_eq!(validate_number(Some("24px"), 20, "Font size").unwrap(), 24);
        assert_eq!(validate_number(None, 400, "Width").unwrap(), 400);

        let err = validate_number(Some("-5"), 20, "Font size").unwrap_err();
        assert_eq!(err, ParameterError::invalid("Font size must be a positive number."));

        assert!(validate_number(Some("0"), 50, "Height").is_err());
        assert!(validate_number(Some("abc"), 50, "Height").is_err());
        assert!(validate_number(Some(""), 50, "Height").is_err());
        assert!(validate_number(None, 0, "Height").is_err());
    }

    #[test]
    fn test_validate_number_keeps_large_defaults() {
        assert_eq!(validate_number(None, u64::MAX, "Width").unwrap(), u64::MAX);
        assert_eq!(validate_number(None, 1 << 63, "Height").unwrap(), 1 << 63);
    }

    #[test]
    fn test_validate_center() {
        assert!(validate_center(Some("true"), false));
        assert!(!validate_center(Some("false"), false));
        assert!(!validate_center(Some("True"), false));
        assert!(!validate_center(Some("TRUE"), false));
        assert!(!validate_center(Some("1"), true));
        assert!(!validate_center(None, false));
        assert!(validate_center(None, true));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ParameterDefaults::default().validate().is_ok());

        let defaults = ParameterDefaults { width: 0, ..Default::default() };
        assert!(defaults.validate().is_err());

        let defaults = ParameterDefaults { color: "blue".to_string(), ..Default::default() };
        assert!(defaults.validate().is_err());
    }

    #[test]
    fn test_from_raw_uses_defaults() {
        let raw = RawInput::new().with("lines", "Typing");
        let params = RenderParameters::from_raw(&raw).unwrap();
        assert_eq!(
            params,
            RenderParameters {
                lines: vec!["Typing".to_string()],
                font: "JetBrains Mono".to_string(),
                color: "#36BCF7".to_string(),
                size: 20,
                center: false,
                width: 400,
                height: 50,
            }
        );
    }

    #[test]
    fn test_from_raw_with_custom_defaults() {
        let defaults = ParameterDefaults {
            font: "Fira Code".to_string(),
            color: "#000".to_string(),
            size: 16,
            center: true,
            width: 600,
            height: 80,
        };
        let raw = RawInput::new().with("lines", "A").with("width", "300");
        let params = RenderParameters::from_raw_with_defaults(&raw, &defaults).unwrap();
        assert_eq!(params.font, "Fira Code");
        assert_eq!(params.color, "#000");
        assert_eq!(params.size, 16);
        assert!(params.center);
        assert_eq!(params.width, 300);
        assert_eq!(params.height, 80);
    }

    #[test]
    fn test_from_raw_rejects_invalid_defaults() {
        let raw = RawInput::new().with("lines", "A");

        let defaults = ParameterDefaults { color: "blue".to_string(), ..Default::default() };
        let err = RenderParameters::from_raw_with_defaults(&raw, &defaults).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("color"));

        let defaults = ParameterDefaults { width: 0, ..Default::default() };
        let err = RenderParameters::from_raw_with_defaults(&raw, &defaults).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Width must be a positive number."));
    }

    #[test]
    fn test_from_raw_with_defaults_reports_request_errors() {
        let raw = RawInput::new().with("lines", "A").with("size", "-3");
        let defaults = ParameterDefaults::default();

        let err = RenderParameters::from_raw_with_defaults(&raw, &defaults).unwrap_err();
        match err {
            Error::Validation(err) => {
                assert_eq!(err, ParameterError::invalid("Font size must be a positive number."))
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_raw_reports_first_failure() {
        let raw = RawInput::new().with("lines", "A").with("width", "0").with("height", "-1");
        let err = RenderParameters::try_from(&raw).unwrap_err();
        assert_eq!(err, ParameterError::invalid("Width must be a positive number."));

        let raw = RawInput::new().with("width", "0");
        let err = RenderParameters::try_from(&raw).unwrap_err();
        assert!(matches!(err, ParameterError::MissingParameter(_)));
    }

    #[test]
    fn test_raw_input_merge() {
        let mut query = RawInput::new().with("lines", "query").with("size", "10");
        query.merge(RawInput::new().with("lines", "form"));
        assert_eq!(query.get("lines"), Some("form"));
        assert_eq!(query.get("size"), Some("10"));
        assert_eq!(query.get("color"), None);
    }

    #[test]
    fn test_raw_input_from_iter() {
        let raw: RawInput = vec![("lines", "a;b"), ("unknown", "x")].into_iter().collect();
        assert_eq!(raw.get("lines"), Some("a;b"));
        assert_eq!(raw.get("unknown"), Some("x"));
        let params = RenderParameters::from_raw(&raw).unwrap();
        assert_eq!(params.lines, vec!["a", "b"]);
    }
}
