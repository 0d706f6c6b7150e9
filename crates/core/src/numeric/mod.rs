//! Polynomial root finders.
//!
//! Unlike the single-shot exercises these are line-oriented sessions: invalid
//! entries are reported and asked for again instead of scanning as zero.

pub mod bisection;
pub mod newton;
pub mod polynomial;
mod prompt;

pub use bisection::{Bisection, BisectionOutcome, BisectionSolver, BisectionStep, Bracket};
pub use newton::{NewtonOutcome, NewtonRun, NewtonSolver, NewtonStep};
pub use polynomial::{Polynomial, Term};

/// `10^-digits`, the stopping tolerance for an accuracy of `digits` decimals.
pub fn tolerance(digits: u32) -> f64 {
    10f64.powi(-(digits.min(i32::MAX as u32) as i32))
}
