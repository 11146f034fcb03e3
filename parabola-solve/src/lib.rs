//! Root, vertex, and intersection solvers for quadratic equations.
//!
//! Every operation is a pure function of its coefficients. A [`Solution`] is
//! computed once by [`solve`] and passed around as an immutable value, and
//! [`intersect`] compares two parabolas through their difference equation.

mod cache;
mod coefficients;
mod error;
mod quadratic;
mod solution;
mod tolerance;

pub mod intersection;

pub use cache::SolutionCache;
pub use coefficients::Coefficients;
pub use error::SolveError;
pub use intersection::{
    Contact, Intersection, IntersectionKind, Separation, intersect, intersect_all,
    intersect_all_with, intersect_with,
};
pub use quadratic::{BatchOutcome, solve, solve_batch, solve_batch_with, solve_with};
pub use solution::{Direction, Point, RootNature, Roots, Solution};
pub use tolerance::Tolerance;
