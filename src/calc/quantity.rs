//! Roll quantities for a flat roof terrace.
//!
//! Every roll count is rounded up: a fraction of a roll cannot be bought.
//!
//! - running surface: `ceil(area / (surface_roll_area * coverage_factor))`
//! - upstands: `ceil(total_linear * upstand_strip_width / (alu_roll_area * coverage_factor))`
//! - corner strips: `ceil(total_linear * equerre_loss_factor / equerre_roll_length)`
//!
//! `total_linear` is the terrace perimeter plus the perimeter of every skylight.

use tracing::{debug, trace, warn};

use super::config::RollConfig;
use super::input::QuantityInput;
use super::result::QuantityResult;
use crate::geom::terrace::Terrace;

/// Computes roll quantities with the standard roll sizes and loss factors.
///
/// Returns `None` when the terrace length or width is not a finite positive number.
///
/// # Example
/// ```
/// use terrace_rolls::{QuantityInput, compute};
///
/// let result = compute(&QuantityInput::new(10.0, 5.0)).unwrap();
/// assert_eq!(result.surface_rolls, 12);
/// assert_eq!(result.upstand_alu_rolls, 2);
/// assert_eq!(result.equerre_rolls, 4);
///
/// assert!(compute(&QuantityInput::new(-5.0, 10.0)).is_none());
/// ```
pub fn compute(input: &QuantityInput) -> Option<QuantityResult> {
    quantities(&RollConfig::new(), input)
}

/// Computes roll quantities with the roll sizes and loss factors of `config`.
///
/// Returns `None` when the terrace dimensions are rejected or when `config`
/// does not pass [`RollConfig::validate`].
pub fn compute_with(config: &RollConfig, input: &QuantityInput) -> Option<QuantityResult> {
    if let Err(e) = config.validate() {
        warn!("Invalid roll configuration: {e}");
        return None;
    }
    quantities(config, input)
}

fn quantities(config: &RollConfig, input: &QuantityInput) -> Option<QuantityResult> {
    let Some(terrace) = Terrace::new(input.length, input.width) else {
        debug!(
            length = input.length,
            width = input.width,
            "Terrace dimensions rejected"
        );
        return None;
    };

    // Running surface
    let area = terrace.area();
    let surface_rolls = rolls_needed(area, config.effective_surface_roll_area());

    // Linear: terrace edges plus skylight edges
    let terrace_perimeter = terrace.perimeter();
    let skylight_perimeter_total = input
        .skylights
        .total_perimeter(config.fixed_skylight_perimeter);
    let total_linear = terrace_perimeter + skylight_perimeter_total;

    // Upstands (developed area)
    let upstand_area = total_linear * config.upstand_strip_width;
    let upstand_alu_rolls = rolls_needed(upstand_area, config.effective_alu_roll_area());

    // Corner strips
    let equerre_rolls = rolls_needed(
        total_linear * config.equerre_loss_factor,
        config.equerre_roll_length,
    );

    // Every measure feeds one of the quotients, so an overflow anywhere shows up here
    let (Some(surface_rolls), Some(upstand_alu_rolls), Some(equerre_rolls)) =
        (surface_rolls, upstand_alu_rolls, equerre_rolls)
    else {
        debug!(
            length = input.length,
            width = input.width,
            "Quantities overflow, no result"
        );
        return None;
    };

    let result = QuantityResult {
        area,
        terrace_perimeter,
        skylight_perimeter_total,
        total_linear,
        upstand_area,
        surface_rolls,
        upstand_alu_rolls,
        equerre_rolls,
        isolated: input.support.is_isolated(),
    };
    trace!(?result, "Computed quantities");

    Some(result)
}

/// Whole rolls needed to cover `quantity` with rolls of `per_roll` each.
///
/// `None` when the count is not finite or does not fit in a `u64`.
fn rolls_needed(quantity: f64, per_roll: f64) -> Option<u64> {
    let rolls = (quantity / per_roll).ceil();
    // `u64::MAX as f64` rounds up to 2^64, which is already out of range
    if rolls.is_finite() && rolls >= 0.0 && rolls < u64::MAX as f64 {
        Some(rolls as u64)
    } else {
        None
    }
}
