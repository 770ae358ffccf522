//! Rotation angles with exact π forms.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A rotation angle.
///
/// Angles parsed from symbolic source text keep their exact π form so that
/// regenerated code prints the same expression it was read from; angles from
/// numeric literals stay numeric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Angle {
    /// A concrete radian value.
    Radians(f64),
    /// An exact multiple of π: `numer · π / denom`.
    PiRational(i32, u32),
}

impl Angle {
    /// The constant π.
    pub fn pi() -> Self {
        Angle::PiRational(1, 1)
    }

    /// π/2, the default rotation used when no angle is given.
    pub fn half_pi() -> Self {
        Angle::PiRational(1, 2)
    }

    /// Evaluate to radians.
    pub fn as_radians(&self) -> f64 {
        match self {
            Angle::Radians(v) => *v,
            Angle::PiRational(n, d) => f64::from(*n) * PI / f64::from(*d),
        }
    }

    /// Render for notation output.
    pub fn to_latex(&self) -> String {
        match self {
            Angle::Radians(v) => format!("{v}"),
            Angle::PiRational(1, 1) => "\\pi".to_string(),
            Angle::PiRational(n, 1) => format!("{n}\\pi"),
            Angle::PiRational(1, d) => format!("\\frac{{\\pi}}{{{d}}}"),
            Angle::PiRational(n, d) => format!("\\frac{{{n}\\pi}}{{{d}}}"),
        }
    }
}

impl fmt::Display for Angle {
    /// Prints a Python-evaluable expression: `pi`, `pi / 2`, `2 * pi / 3`,
    /// or the raw radian value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Radians(v) => write!(f, "{v}"),
            Angle::PiRational(1, 1) => write!(f, "pi"),
            Angle::PiRational(n, 1) => write!(f, "{n} * pi"),
            Angle::PiRational(1, d) => write!(f, "pi / {d}"),
            Angle::PiRational(n, d) => write!(f, "{n} * pi / {d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pi_forms() {
        assert_eq!(Angle::pi().to_string(), "pi");
        assert_eq!(Angle::half_pi().to_string(), "pi / 2");
        assert_eq!(Angle::PiRational(2, 3).to_string(), "2 * pi / 3");
        assert_eq!(Angle::PiRational(3, 1).to_string(), "3 * pi");
        assert_eq!(Angle::Radians(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_as_radians() {
        assert!((Angle::half_pi().as_radians() - PI / 2.0).abs() < 1e-12);
        assert!((Angle::PiRational(2, 3).as_radians() - 2.0 * PI / 3.0).abs() < 1e-12);
        assert!((Angle::Radians(1.5).as_radians() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_latex_forms() {
        assert_eq!(Angle::pi().to_latex(), "\\pi");
        assert_eq!(Angle::half_pi().to_latex(), "\\frac{\\pi}{2}");
        assert_eq!(Angle::PiRational(2, 3).to_latex(), "\\frac{2\\pi}{3}");
    }
}
