use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::constants::{
    COVERAGE_FACTOR, EQUERRE_LOSS_FACTOR, FIXED_SKYLIGHT_PERIMETER, ISOLATED_EQUERRE_WIDTHS,
    ROLL_ALU_AREA, ROLL_EQUERRE_LENGTH, ROLL_SURFACE_AREA, UPSTAND_STRIP_WIDTH,
};

/// Roll sizes and loss factors used by the quantity calculation.
///
/// `RollConfig::new()` carries the constants from [`crate::constants`].
/// Fields missing from a JSON file keep their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    /// Coverage of one membrane roll in m^2.
    pub surface_roll_area: f64,
    /// Coverage of one aluminium flashing roll in m^2.
    pub alu_roll_area: f64,
    /// Length of one corner-strip roll in m.
    pub equerre_roll_length: f64,
    /// Usable fraction of a membrane or flashing roll, in (0, 1].
    pub coverage_factor: f64,
    /// Loss multiplier applied to the linear total for corner strips (>= 1 in practice).
    pub equerre_loss_factor: f64,
    /// Developed width of the upstand strip in m.
    pub upstand_strip_width: f64,
    /// Perimeter of an unmeasured skylight in m.
    pub fixed_skylight_perimeter: f64,
    /// Corner-strip widths (layer 1, layer 2) on an insulated support, in m.
    pub isolated_equerre_widths: [f64; 2],
}

impl RollConfig {
    pub fn new() -> Self {
        Self {
            surface_roll_area: ROLL_SURFACE_AREA,
            alu_roll_area: ROLL_ALU_AREA,
            equerre_roll_length: ROLL_EQUERRE_LENGTH,
            coverage_factor: COVERAGE_FACTOR,
            equerre_loss_factor: EQUERRE_LOSS_FACTOR,
            upstand_strip_width: UPSTAND_STRIP_WIDTH,
            fixed_skylight_perimeter: FIXED_SKYLIGHT_PERIMETER,
            isolated_equerre_widths: ISOLATED_EQUERRE_WIDTHS,
        }
    }

    /// Usable membrane area per roll in m^2.
    pub fn effective_surface_roll_area(&self) -> f64 {
        self.surface_roll_area * self.coverage_factor
    }

    /// Usable flashing area per roll in m^2.
    pub fn effective_alu_roll_area(&self) -> f64 {
        self.alu_roll_area * self.coverage_factor
    }

    /// Checks that every divisor and factor is usable.
    ///
    /// All values must be finite and strictly positive, and the coverage
    /// factor cannot exceed 1.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("surface_roll_area", self.surface_roll_area),
            ("alu_roll_area", self.alu_roll_area),
            ("equerre_roll_length", self.equerre_roll_length),
            ("coverage_factor", self.coverage_factor),
            ("equerre_loss_factor", self.equerre_loss_factor),
            ("upstand_strip_width", self.upstand_strip_width),
            ("fixed_skylight_perimeter", self.fixed_skylight_perimeter),
            ("isolated_equerre_widths[0]", self.isolated_equerre_widths[0]),
            ("isolated_equerre_widths[1]", self.isolated_equerre_widths[1]),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be a finite positive number, got {value}");
            }
        }
        if self.coverage_factor > 1.0 {
            bail!("coverage_factor cannot exceed 1, got {}", self.coverage_factor);
        }
        Ok(())
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = RollConfig::new();
        assert_eq!(config.surface_roll_area, 5.0);
        assert_eq!(config.alu_roll_area, 6.0);
        assert_eq!(config.equerre_roll_length, 10.0);
        assert_eq!(config.coverage_factor, 0.9);
        assert_eq!(config.equerre_loss_factor, 1.1);
        assert_eq!(config.upstand_strip_width, 0.3);
        assert_eq!(config.fixed_skylight_perimeter, 4.0);
        assert_eq!(config.isolated_equerre_widths, [0.25, 0.33]);
        assert_eq!(config, RollConfig::default());
    }

    #[test]
    fn test_effective_areas() {
        let config = RollConfig::new();
        assert!((config.effective_surface_roll_area() - 4.5).abs() < 1e-10);
        assert!((config.effective_alu_roll_area() - 5.4).abs() < 1e-10);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(RollConfig::new().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_roll_size() {
        let mut config = RollConfig::new();
        config.surface_roll_area = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("surface_roll_area"));
    }

    #[test]
    fn test_rejects_nan_width() {
        let mut config = RollConfig::new();
        config.isolated_equerre_widths[1] = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_coverage_above_one() {
        let mut config = RollConfig::new();
        config.coverage_factor = 1.2;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("coverage_factor"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{"surface_roll_area": 10.0}"#;
        let config: RollConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.surface_roll_area, 10.0);
        assert_eq!(config.alu_roll_area, ROLL_ALU_AREA);
        assert_eq!(config.coverage_factor, COVERAGE_FACTOR);
    }
}
