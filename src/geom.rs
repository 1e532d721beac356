pub mod skylight;
pub mod terrace;

/// Clamps a secondary measure to a usable non-negative value.
///
/// NaN, infinite and negative values become zero.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
