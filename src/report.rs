//! Human-readable bill of materials.
//!
//! Measures are printed with two decimals, roll counts as whole numbers.

use std::fmt;

use serde::Serialize;

use crate::calc::config::RollConfig;
use crate::calc::result::{CornerStripLine, QuantityResult};

/// One line of a material order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub label: String,
    pub rolls: u64,
    /// Measure the line was derived from, e.g. `("upstand area", 9.0, "m²")`.
    pub basis: Option<(String, f64, &'static str)>,
}

/// Material order for one terrace, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillOfMaterials {
    pub corner_strips: Vec<OrderLine>,
    pub upstand: OrderLine,
    pub surface: OrderLine,
    pub terrace_perimeter: f64,
    pub skylight_perimeter_total: f64,
    pub total_linear: f64,
    pub isolated: bool,
    /// Corner-strip layer widths in m, quoted in the note for an insulated support.
    pub equerre_widths: [f64; 2],
}

impl BillOfMaterials {
    /// Order lines with the standard roll sizes.
    pub fn new(result: &QuantityResult) -> Self {
        Self::with_config(result, &RollConfig::new())
    }

    /// Order lines labelled with the roll sizes of `config`.
    pub fn with_config(result: &QuantityResult, config: &RollConfig) -> Self {
        let corner_strips = result
            .corner_strip_lines_with(config)
            .iter()
            .map(|line| corner_strip_line(line, config))
            .collect();

        let upstand = OrderLine {
            label: format!("ALU upstand rolls ({} m²)", config.alu_roll_area),
            rolls: result.upstand_alu_rolls,
            basis: Some(("upstand area".to_string(), result.upstand_area, "m²")),
        };
        let surface = OrderLine {
            label: format!("Surface membrane rolls ({} m²)", config.surface_roll_area),
            rolls: result.surface_rolls,
            basis: Some(("terrace area".to_string(), result.area, "m²")),
        };

        Self {
            corner_strips,
            upstand,
            surface,
            terrace_perimeter: result.terrace_perimeter,
            skylight_perimeter_total: result.skylight_perimeter_total,
            total_linear: result.total_linear,
            isolated: result.isolated,
            equerre_widths: config.isolated_equerre_widths,
        }
    }

    /// Every order line, corner strips first.
    pub fn lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.corner_strips
            .iter()
            .chain([&self.upstand, &self.surface])
    }

    /// Technical note for the support type.
    pub fn support_note(&self) -> String {
        if self.isolated {
            let [first, second] = self.equerre_widths;
            format!(
                "Insulated support: double corner strip required ({first:.2} m and {second:.2} m), \
                 NF DTU 43.1."
            )
        } else {
            "Non-insulated support: single corner reinforcement strip.".to_string()
        }
    }
}

fn corner_strip_line(line: &CornerStripLine, config: &RollConfig) -> OrderLine {
    let label = match line.width {
        Some(width) => format!(
            "Corner strip rolls ({} m), layer {}, width {width:.2} m",
            config.equerre_roll_length, line.layer
        ),
        None => format!(
            "Corner strip rolls ({} m), standard",
            config.equerre_roll_length
        ),
    };
    OrderLine {
        label,
        rolls: line.rolls,
        basis: None,
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.rolls)?;
        if let Some((name, value, unit)) = &self.basis {
            write!(f, " ({name} {value:.2} {unit})")?;
        }
        Ok(())
    }
}

impl fmt::Display for BillOfMaterials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total linear (developed): {:.2} m", self.total_linear)?;
        writeln!(f)?;
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "Site summary")?;
        writeln!(f, "  Terrace perimeter: {:.2} m", self.terrace_perimeter)?;
        writeln!(
            f,
            "  Skylight perimeter: {:.2} m",
            self.skylight_perimeter_total
        )?;
        writeln!(f, "  Total linear: {:.2} m", self.total_linear)?;
        writeln!(f)?;
        writeln!(f, "Notes")?;
        writeln!(f, "  - {}", self.support_note())?;
        write!(f, "  - 10% losses included on every membrane and strip.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::input::QuantityInput;
    use crate::calc::quantity::compute;
    use crate::geom::skylight::SkylightSpec;

    #[test]
    fn test_plain_terrace_lines() {
        let result = compute(&QuantityInput::new(10.0, 5.0)).unwrap();
        let bill = BillOfMaterials::new(&result);
        assert_eq!(bill.corner_strips.len(), 1);
        assert_eq!(bill.corner_strips[0].rolls, 4);
        assert_eq!(bill.upstand.rolls, 2);
        assert_eq!(bill.surface.rolls, 12);
        assert_eq!(bill.lines().count(), 3);
    }

    #[test]
    fn test_isolated_terrace_lines() {
        let input = QuantityInput::new(10.0, 5.0).isolated(true);
        let result = compute(&input).unwrap();
        let bill = BillOfMaterials::new(&result);
        assert_eq!(bill.corner_strips.len(), 2);
        assert!(bill.corner_strips.iter().all(|l| l.rolls == 4));
        assert!(bill.corner_strips[0].label.contains("width 0.25 m"));
        assert!(bill.corner_strips[1].label.contains("width 0.33 m"));
        let note = bill.support_note();
        assert!(note.contains("(0.25 m and 0.33 m), NF DTU 43.1."));
    }

    #[test]
    fn test_support_note_follows_configured_widths() {
        let mut config = RollConfig::new();
        config.isolated_equerre_widths = [0.2, 0.4];
        let input = QuantityInput::new(10.0, 5.0).isolated(true);
        let result = compute(&input).unwrap();
        let bill = BillOfMaterials::with_config(&result, &config);
        assert!(bill.corner_strips[1].label.contains("width 0.40 m"));
        assert!(bill.support_note().contains("(0.20 m and 0.40 m)"));
        assert!(!bill.to_string().contains("0.33 m"));
    }

    #[test]
    fn test_display_formats_measures() {
        let skylights = SkylightSpec::measured(2, 1.0, 1.0);
        let input = QuantityInput::new(10.0, 5.0).with_skylights(skylights);
        let result = compute(&input).unwrap();
        let text = BillOfMaterials::new(&result).to_string();
        assert!(text.contains("Total linear (developed): 38.00 m"));
        assert!(text.contains("Corner strip rolls (10 m), standard: 5"));
        assert!(text.contains("ALU upstand rolls (6 m²): 3 (upstand area 11.40 m²)"));
        assert!(text.contains("Surface membrane rolls (5 m²): 12 (terrace area 50.00 m²)"));
        assert!(text.contains("Skylight perimeter: 8.00 m"));
        assert!(text.contains("single corner reinforcement strip"));
    }

    #[test]
    fn test_line_without_basis() {
        let line = OrderLine {
            label: "Corner strip rolls".to_string(),
            rolls: 3,
            basis: None,
        };
        assert_eq!(line.to_string(), "Corner strip rolls: 3");
    }
}
