use serde::{Deserialize, Serialize};

/// Rectangular plan of a flat roof terrace.
///
/// `length` and `width` are in meters. A `Terrace` can only be built from
/// finite, strictly positive dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Terrace {
    length: f64,
    width: f64,
}

impl Terrace {
    /// Returns a terrace, or `None` if either dimension is not a finite positive number.
    pub fn new(length: f64, width: f64) -> Option<Self> {
        if is_valid_dimension(length) && is_valid_dimension(width) {
            Some(Self { length, width })
        } else {
            None
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Plan area in m^2.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Plan perimeter in m.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_and_perimeter() {
        let t = Terrace::new(10.0, 5.0).unwrap();
        assert!((t.area() - 50.0).abs() < 1e-10);
        assert!((t.perimeter() - 30.0).abs() < 1e-10);
        assert_eq!(t.length(), 10.0);
        assert_eq!(t.width(), 5.0);
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        assert!(Terrace::new(0.0, 5.0).is_none());
        assert!(Terrace::new(5.0, 0.0).is_none());
        assert!(Terrace::new(-5.0, 10.0).is_none());
        assert!(Terrace::new(f64::NAN, 10.0).is_none());
        assert!(Terrace::new(10.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_small_terrace() {
        let t = Terrace::new(0.5, 0.2).unwrap();
        assert!((t.area() - 0.1).abs() < 1e-10);
        assert!((t.perimeter() - 1.4).abs() < 1e-10);
    }
}
