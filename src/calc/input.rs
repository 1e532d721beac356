use serde::{Deserialize, Serialize};

use crate::geom::skylight::SkylightSpec;

/// Type of support under the waterproofing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Support {
    /// Bare deck, single corner strip.
    #[default]
    NonIsolated,
    /// Thermally insulated deck, double corner strip (two width classes).
    Isolated,
}

impl Support {
    pub fn is_isolated(self) -> bool {
        self == Self::Isolated
    }
}

impl From<bool> for Support {
    fn from(isolated: bool) -> Self {
        if isolated {
            Self::Isolated
        } else {
            Self::NonIsolated
        }
    }
}

/// Inputs of a quantity calculation.
///
/// `length` and `width` are taken as given; the calculation rejects them
/// when they are not finite positive numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityInput {
    /// Terrace length in m.
    pub length: f64,
    /// Terrace width in m.
    pub width: f64,
    pub skylights: SkylightSpec,
    pub support: Support,
}

impl QuantityInput {
    /// Terrace without skylights on a non-isolated support.
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            length,
            width,
            skylights: SkylightSpec::none(),
            support: Support::NonIsolated,
        }
    }

    pub fn with_skylights(mut self, skylights: SkylightSpec) -> Self {
        self.skylights = skylights;
        self
    }

    pub fn with_support(mut self, support: Support) -> Self {
        self.support = support;
        self
    }

    pub fn isolated(self, isolated: bool) -> Self {
        self.with_support(Support::from(isolated))
    }
}
