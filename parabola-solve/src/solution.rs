mod roots;

use serde::{Deserialize, Serialize};

use crate::Coefficients;

pub use roots::{RootNature, Roots};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which way a parabola opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Upward,
    Downward,
}

/// Everything derived from a quadratic's coefficients.
///
/// A solution is a pure function of its [`Coefficients`], so it can be
/// cached by value and shared freely once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// The coefficients this solution was computed from.
    pub coefficients: Coefficients,
    /// `b² - 4ac`.
    pub discriminant: f64,
    pub roots: Roots,
    /// The turning point `(-b/2a, c - b²/4a)`.
    pub vertex: Point,
    /// The vertical line `x = -b/2a`.
    pub axis_of_symmetry: f64,
    /// `true` when `a > 0`.
    pub opens_upward: bool,
}

impl Solution {
    /// Returns the nature of the roots.
    #[must_use]
    pub fn nature(&self) -> RootNature {
        self.roots.nature()
    }

    /// Returns the opening direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.opens_upward {
            Direction::Upward
        } else {
            Direction::Downward
        }
    }
}
