use serde::{Deserialize, Serialize};

use super::config::RollConfig;
use super::input::Support;
use crate::constants::ISOLATED_EQUERRE_WIDTHS;

/// Quantities for one terrace.
///
/// Measures are in m or m^2, roll counts are whole rolls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityResult {
    /// Terrace plan area in m^2.
    pub area: f64,
    /// Terrace perimeter in m.
    pub terrace_perimeter: f64,
    /// Summed skylight perimeters in m.
    pub skylight_perimeter_total: f64,
    /// Terrace plus skylight perimeters in m.
    pub total_linear: f64,
    /// Developed upstand area in m^2.
    pub upstand_area: f64,
    /// Membrane rolls for the running surface.
    pub surface_rolls: u64,
    /// Aluminium-faced rolls for the upstands.
    pub upstand_alu_rolls: u64,
    /// Corner-strip rolls per layer.
    pub equerre_rolls: u64,
    pub isolated: bool,
}

/// One corner-strip line of an order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerStripLine {
    /// Layer number, starting at 1.
    pub layer: u8,
    /// Strip width in m, `None` for the standard single strip.
    pub width: Option<f64>,
    pub rolls: u64,
}

impl QuantityResult {
    pub fn support(&self) -> Support {
        Support::from(self.isolated)
    }

    /// Corner-strip lines with the default layer widths.
    pub fn corner_strip_lines(&self) -> Vec<CornerStripLine> {
        self.lines_for_widths(ISOLATED_EQUERRE_WIDTHS)
    }

    /// Corner-strip lines with the layer widths of `config`.
    pub fn corner_strip_lines_with(&self, config: &RollConfig) -> Vec<CornerStripLine> {
        self.lines_for_widths(config.isolated_equerre_widths)
    }

    /// Corner-strip rolls to order, all layers included.
    pub fn total_corner_strip_rolls(&self) -> u64 {
        self.corner_strip_lines().iter().map(|l| l.rolls).sum()
    }

    fn lines_for_widths(&self, widths: [f64; 2]) -> Vec<CornerStripLine> {
        if self.isolated {
            // Same count for both layers, they run along the same linear.
            widths
                .iter()
                .zip(1u8..)
                .map(|(&width, layer)| CornerStripLine {
                    layer,
                    width: Some(width),
                    rolls: self.equerre_rolls,
                })
                .collect()
        } else {
            vec![CornerStripLine {
                layer: 1,
                width: None,
                rolls: self.equerre_rolls,
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(isolated: bool) -> QuantityResult {
        QuantityResult {
            area: 50.0,
            terrace_perimeter: 30.0,
            skylight_perimeter_total: 0.0,
            total_linear: 30.0,
            upstand_area: 9.0,
            surface_rolls: 12,
            upstand_alu_rolls: 2,
            equerre_rolls: 4,
            isolated,
        }
    }

    #[test]
    fn test_single_line_when_not_isolated() {
        let lines = sample(false).corner_strip_lines();
        assert_eq!(
            lines,
            vec![CornerStripLine {
                layer: 1,
                width: None,
                rolls: 4
            }]
        );
        assert_eq!(sample(false).total_corner_strip_rolls(), 4);
    }

    #[test]
    fn test_two_width_classes_when_isolated() {
        let lines = sample(true).corner_strip_lines();
        assert_eq!(
            lines,
            vec![
                CornerStripLine {
                    layer: 1,
                    width: Some(0.25),
                    rolls: 4
                },
                CornerStripLine {
                    layer: 2,
                    width: Some(0.33),
                    rolls: 4
                },
            ]
        );
        assert_eq!(sample(true).total_corner_strip_rolls(), 8);
    }

    #[test]
    fn test_lines_with_custom_widths() {
        let mut config = RollConfig::new();
        config.isolated_equerre_widths = [0.2, 0.4];
        let lines = sample(true).corner_strip_lines_with(&config);
        assert_eq!(lines[0].width, Some(0.2));
        assert_eq!(lines[1].width, Some(0.4));
    }

    #[test]
    fn test_support() {
        assert_eq!(sample(true).support(), Support::Isolated);
        assert_eq!(sample(false).support(), Support::NonIsolated);
    }
}
