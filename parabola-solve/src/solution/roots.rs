use serde::{Deserialize, Serialize};

/// The roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nature", rename_all = "snake_case")]
pub enum Roots {
    /// Two distinct real roots, larger first.
    TwoReal { larger: f64, smaller: f64 },
    /// One real root of multiplicity two.
    Repeated { root: f64 },
    /// The conjugate pair `re ± im·i`, with `im > 0`.
    Complex { re: f64, im: f64 },
}

impl Roots {
    /// Returns the nature of these roots.
    #[must_use]
    pub fn nature(&self) -> RootNature {
        match self {
            Self::TwoReal { .. } => RootNature::TwoReal,
            Self::Repeated { .. } => RootNature::Repeated,
            Self::Complex { .. } => RootNature::Complex,
        }
    }

    /// Returns both roots as real numbers, or `None` if they are complex.
    ///
    /// A repeated root is returned twice.
    #[must_use]
    pub fn real(&self) -> Option<[f64; 2]> {
        match *self {
            Self::TwoReal { larger, smaller } => Some([larger, smaller]),
            Self::Repeated { root } => Some([root, root]),
            Self::Complex { .. } => None,
        }
    }

    /// Returns both roots as `(re, im)` pairs in a fixed order.
    ///
    /// Real roots have `im = 0`. Complex roots list the positive imaginary
    /// part first.
    #[must_use]
    pub fn as_complex(&self) -> [(f64, f64); 2] {
        match *self {
            Self::TwoReal { larger, smaller } => [(larger, 0.0), (smaller, 0.0)],
            Self::Repeated { root } => [(root, 0.0), (root, 0.0)],
            Self::Complex { re, im } => [(re, im), (re, -im)],
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.as_complex()
            .iter()
            .all(|(re, im)| re.is_finite() && im.is_finite())
    }
}

/// The three possible natures of a quadratic's roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootNature {
    TwoReal,
    Repeated,
    Complex,
}

impl RootNature {
    pub const ALL: [Self; 3] = [Self::TwoReal, Self::Repeated, Self::Complex];

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::TwoReal => "two distinct real roots",
            Self::Repeated => "one repeated real root",
            Self::Complex => "two complex conjugate roots",
        }
    }

    /// Describes what this nature means for the graph of the parabola.
    #[must_use]
    pub fn geometric_meaning(self) -> &'static str {
        match self {
            Self::TwoReal => "parabola crosses the x-axis at two points",
            Self::Repeated => "parabola is tangent to the x-axis",
            Self::Complex => "parabola does not meet the x-axis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_root_counts_twice() {
        let roots = Roots::Repeated { root: 2.0 };
        assert_eq!(roots.real(), Some([2.0, 2.0]));
        assert_eq!(roots.nature(), RootNature::Repeated);
    }

    #[test]
    fn complex_roots_have_no_real_form() {
        let roots = Roots::Complex { re: -1.0, im: 2.0 };
        assert_eq!(roots.real(), None);
        assert_eq!(roots.as_complex(), [(-1.0, 2.0), (-1.0, -2.0)]);
    }

    #[test]
    fn non_finite_roots_are_detected() {
        let roots = Roots::TwoReal {
            larger: f64::INFINITY,
            smaller: 0.0,
        };
        assert!(!roots.is_finite());
        assert!(Roots::Repeated { root: 1.0 }.is_finite());
    }
}
