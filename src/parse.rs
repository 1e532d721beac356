//! Normalisation of raw form input.
//!
//! A form hands over text as typed. Only the terrace dimensions can make the
//! calculation fail; every other field falls back to a neutral value.

use serde::{Deserialize, Serialize};

use crate::calc::input::{QuantityInput, Support};
use crate::geom::non_negative;
use crate::geom::skylight::SkylightSpec;

/// Reads the leading decimal number of `text`, ignoring surrounding whitespace.
///
/// Trailing garbage is ignored (`"12.5m"` is 12.5). Returns `NaN` when no
/// number can be read.
pub fn parse_dimension(text: &str) -> f64 {
    let text = text.trim_start();
    let end = numeric_prefix_len(text);
    // The prefix is ASCII, so every index up to `end` is a char boundary
    (1..=end)
        .rev()
        .find_map(|n| text[..n].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Like [`parse_dimension`], but unreadable or negative values are zero.
pub fn parse_length_or_zero(text: &str) -> f64 {
    non_negative(parse_dimension(text))
}

/// Reads the leading integer of `text` (`"2.9"` is 2).
///
/// Empty, unreadable and negative values are zero. Values beyond `u32::MAX`
/// saturate.
pub fn parse_count(text: &str) -> u32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 || negative {
        return 0;
    }
    digits[..len]
        .bytes()
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(u32::from(d - b'0')))
}

/// Length of the longest prefix made of characters that can appear in a decimal number.
fn numeric_prefix_len(text: &str) -> usize {
    text.bytes()
        .take_while(|&b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count()
}

/// Form fields as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    pub length: String,
    pub width: String,
    pub skylight_count: String,
    pub skylight_length: String,
    pub skylight_width: String,
    pub isolated: bool,
}

impl RawInput {
    /// Converts the fields into calculation input.
    ///
    /// With `fixed_perimeter`, skylight sides are ignored and each skylight
    /// counts for the fixed perimeter.
    pub fn normalize(&self, fixed_perimeter: bool) -> QuantityInput {
        let count = parse_count(&self.skylight_count);
        let skylights = if fixed_perimeter {
            SkylightSpec::fixed_perimeter(count)
        } else {
            SkylightSpec::measured(
                count,
                parse_length_or_zero(&self.skylight_length),
                parse_length_or_zero(&self.skylight_width),
            )
        };
        QuantityInput {
            length: parse_dimension(&self.length),
            width: parse_dimension(&self.width),
            skylights,
            support: Support::from(self.isolated),
        }
    }
}

impl Default for RawInput {
    /// Empty dimensions, no skylights, 1 m skylight sides.
    fn default() -> Self {
        Self {
            length: String::new(),
            width: String::new(),
            skylight_count: "0".to_string(),
            skylight_length: "1".to_string(),
            skylight_width: "1".to_string(),
            isolated: false,
        }
    }
}
