//! Formula sheet for documentation tools.
//!
//! Lists every constant and formula used by the quantity calculation, either
//! as JSON or as Markdown.

use std::fmt;

use serde::Serialize;

use crate::calc::config::RollConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstantEntry {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaEntry {
    pub output: &'static str,
    pub expression: &'static str,
}

/// Constants and formulas of the quantity calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaSheet {
    pub constants: Vec<ConstantEntry>,
    pub formulas: Vec<FormulaEntry>,
    pub rules: Vec<&'static str>,
}

impl FormulaSheet {
    pub fn from_config(config: &RollConfig) -> Self {
        let constants = vec![
            constant(
                "ROLL_SURFACE_AREA",
                config.surface_roll_area,
                "m²",
                "coverage per membrane roll",
            ),
            constant(
                "ROLL_ALU_AREA",
                config.alu_roll_area,
                "m²",
                "coverage per aluminium flashing roll",
            ),
            constant(
                "ROLL_EQUERRE_LENGTH",
                config.equerre_roll_length,
                "m",
                "length per corner-strip roll",
            ),
            constant(
                "COVERAGE_FACTOR",
                config.coverage_factor,
                "",
                "usable fraction of a roll",
            ),
            constant(
                "EQUERRE_LOSS_FACTOR",
                config.equerre_loss_factor,
                "",
                "overlap and corner loss on corner strips",
            ),
            constant(
                "UPSTAND_STRIP_WIDTH",
                config.upstand_strip_width,
                "m",
                "developed width of the upstand strip",
            ),
            constant(
                "FIXED_SKYLIGHT_PERIMETER",
                config.fixed_skylight_perimeter,
                "m",
                "perimeter of an unmeasured skylight",
            ),
            constant(
                "EQUERRE_WIDTH_LAYER_1",
                config.isolated_equerre_widths[0],
                "m",
                "first corner-strip layer, insulated support",
            ),
            constant(
                "EQUERRE_WIDTH_LAYER_2",
                config.isolated_equerre_widths[1],
                "m",
                "second corner-strip layer, insulated support",
            ),
        ];

        let formulas = vec![
            formula("area", "length * width"),
            formula(
                "surface_rolls",
                "ceil(area / (ROLL_SURFACE_AREA * COVERAGE_FACTOR))",
            ),
            formula("terrace_perimeter", "2 * (length + width)"),
            formula(
                "skylight_perimeter_total",
                "count * 2 * (skylight_length + skylight_width)",
            ),
            formula(
                "total_linear",
                "terrace_perimeter + skylight_perimeter_total",
            ),
            formula("upstand_area", "total_linear * UPSTAND_STRIP_WIDTH"),
            formula(
                "upstand_alu_rolls",
                "ceil(upstand_area / (ROLL_ALU_AREA * COVERAGE_FACTOR))",
            ),
            formula(
                "equerre_rolls",
                "ceil(total_linear * EQUERRE_LOSS_FACTOR / ROLL_EQUERRE_LENGTH)",
            ),
        ];

        let rules = vec![
            "No result unless length and width are finite positive numbers.",
            "Unreadable or negative skylight inputs count as zero.",
            "Unmeasured skylights count FIXED_SKYLIGHT_PERIMETER each.",
            "Roll counts are rounded up to whole rolls.",
            "Insulated support: equerre_rolls is ordered once per corner-strip layer.",
        ];

        Self {
            constants,
            formulas,
            rules,
        }
    }
}

impl Default for FormulaSheet {
    fn default() -> Self {
        Self::from_config(&RollConfig::new())
    }
}

fn constant(
    name: &'static str,
    value: f64,
    unit: &'static str,
    meaning: &'static str,
) -> ConstantEntry {
    ConstantEntry {
        name,
        value,
        unit,
        meaning,
    }
}

fn formula(output: &'static str, expression: &'static str) -> FormulaEntry {
    FormulaEntry { output, expression }
}

impl fmt::Display for FormulaSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Constants")?;
        writeln!(f)?;
        writeln!(f, "| Name | Value | Meaning |")?;
        writeln!(f, "|---|---|---|")?;
        for c in &self.constants {
            let value = if c.unit.is_empty() {
                c.value.to_string()
            } else {
                format!("{} {}", c.value, c.unit)
            };
            writeln!(f, "| `{}` | {value} | {} |", c.name, c.meaning)?;
        }
        writeln!(f)?;
        writeln!(f, "## Formulas")?;
        writeln!(f)?;
        for e in &self.formulas {
            writeln!(f, "- `{} = {}`", e.output, e.expression)?;
        }
        writeln!(f)?;
        writeln!(f, "## Rules")?;
        writeln!(f)?;
        for rule in &self.rules {
            writeln!(f, "- {rule}")?;
        }
        Ok(())
    }
}
