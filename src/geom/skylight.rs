use serde::{Deserialize, Serialize};

use super::non_negative;
use crate::constants::{DEFAULT_SKYLIGHT_SIDE, FIXED_SKYLIGHT_PERIMETER};

/// Skylights (lanterneaux) crossing the terrace.
///
/// Each skylight needs its own upstand and corner strip around its perimeter.
/// Two ways of describing them are supported:
/// - `Measured`: every skylight has the same measured plan dimensions,
/// - `FixedPerimeter`: only the count is known and each skylight is assumed
///   to have a perimeter of [`FIXED_SKYLIGHT_PERIMETER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkylightSpec {
    Measured {
        count: u32,
        length: f64,
        width: f64,
    },
    FixedPerimeter { count: u32 },
}

impl SkylightSpec {
    /// Measured skylights. NaN, infinite or negative sides are taken as zero.
    pub fn measured(count: u32, length: f64, width: f64) -> Self {
        Self::Measured {
            count,
            length: non_negative(length),
            width: non_negative(width),
        }
    }

    pub fn fixed_perimeter(count: u32) -> Self {
        Self::FixedPerimeter { count }
    }

    /// No skylights.
    pub fn none() -> Self {
        Self::measured(0, DEFAULT_SKYLIGHT_SIDE, DEFAULT_SKYLIGHT_SIDE)
    }

    pub fn count(&self) -> u32 {
        match *self {
            Self::Measured { count, .. } | Self::FixedPerimeter { count } => count,
        }
    }

    /// Perimeter of a single skylight in m, using `fixed_perimeter` for unmeasured skylights.
    pub fn perimeter_each(&self, fixed_perimeter: f64) -> f64 {
        match *self {
            Self::Measured { length, width, .. } => {
                2.0 * (non_negative(length) + non_negative(width))
            }
            Self::FixedPerimeter { .. } => non_negative(fixed_perimeter),
        }
    }

    /// Summed perimeter of all skylights in m.
    pub fn total_perimeter(&self, fixed_perimeter: f64) -> f64 {
        f64::from(self.count()) * self.perimeter_each(fixed_perimeter)
    }

    /// Summed perimeter of all skylights in m, with the default fixed perimeter.
    pub fn default_total_perimeter(&self) -> f64 {
        self.total_perimeter(FIXED_SKYLIGHT_PERIMETER)
    }
}

impl Default for SkylightSpec {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_perimeter() {
        let s = SkylightSpec::measured(2, 1.0, 1.0);
        assert_eq!(s.count(), 2);
        assert!((s.perimeter_each(FIXED_SKYLIGHT_PERIMETER) - 4.0).abs() < 1e-10);
        assert!((s.default_total_perimeter() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_measured_rectangular() {
        let s = SkylightSpec::measured(3, 1.2, 0.8);
        // 3 * 2 * (1.2 + 0.8) = 12
        assert!((s.default_total_perimeter() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_fixed_perimeter() {
        let s = SkylightSpec::fixed_perimeter(3);
        assert!((s.default_total_perimeter() - 12.0).abs() < 1e-10);
        assert!((s.total_perimeter(5.0) - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_count_contributes_nothing() {
        let s = SkylightSpec::measured(0, 3.0, 2.0);
        assert_eq!(s.default_total_perimeter(), 0.0);
        assert_eq!(SkylightSpec::fixed_perimeter(0).default_total_perimeter(), 0.0);
        assert_eq!(SkylightSpec::default().default_total_perimeter(), 0.0);
    }

    #[test]
    fn test_bad_sides_are_clamped() {
        let s = SkylightSpec::measured(2, f64::NAN, -1.0);
        let clamped = SkylightSpec::Measured {
            count: 2,
            length: 0.0,
            width: 0.0,
        };
        assert_eq!(s, clamped);
        assert_eq!(s.default_total_perimeter(), 0.0);

        // Built without the constructor, still never negative
        let raw = SkylightSpec::Measured {
            count: 1,
            length: -4.0,
            width: 1.0,
        };
        assert!((raw.default_total_perimeter() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_json_tagging() {
        let json = serde_json::to_string(&SkylightSpec::fixed_perimeter(2)).unwrap();
        assert_eq!(json, r#"{"kind":"fixed_perimeter","count":2}"#);
        let back: SkylightSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SkylightSpec::fixed_perimeter(2));
    }
}
