use serde::{Deserialize, Serialize};

/// Magnitude above which values are rescaled before summing.
const RESCALE_ABOVE: f64 = 1e150;

/// Summary statistics of a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl Summary {
    /// Summarizes `values`, or returns `None` if there are none.
    ///
    /// The values are sorted before summing, so the result does not depend on
    /// their original order. Values near `f64::MAX` are scaled down by an exact
    /// power of two first, so the mean and deviation stay finite.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        values.sort_by(f64::total_cmp);

        let min = values[0];
        let max = values[values.len() - 1];
        let scale = if min.abs().max(max.abs()) > RESCALE_ABOVE {
            2.0_f64.powi(-600)
        } else {
            1.0
        };

        let n = values.len() as f64;
        let mean = values.iter().map(|v| v * scale).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|v| (v * scale - mean).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            min,
            max,
            mean: mean / scale,
            std_dev: variance.sqrt() / scale,
        })
    }
}

/// Distribution of each coefficient and of the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientStats {
    pub a: Summary,
    pub b: Summary,
    pub c: Summary,
    pub discriminant: Summary,
}

/// Collects values for [`CoefficientStats`] during aggregation.
#[derive(Debug, Default)]
pub(crate) struct Samples {
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    discriminant: Vec<f64>,
}

impl Samples {
    pub(crate) fn push(&mut self, coefficients: [f64; 3], discriminant: f64) {
        let [a, b, c] = coefficients;
        self.a.push(a);
        self.b.push(b);
        self.c.push(c);
        self.discriminant.push(discriminant);
    }

    pub(crate) fn summarize(self) -> Option<CoefficientStats> {
        Some(CoefficientStats {
            a: Summary::of(self.a)?,
            b: Summary::of(self.b)?,
            c: Summary::of(self.c)?,
            discriminant: Summary::of(self.discriminant)?,
        })
    }
}
