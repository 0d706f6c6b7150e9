//! sheetcalc - interactive scalar calculators from a programming exercise sheet
//!
//! This crate provides:
//! - A console that scans input the way C++ `std::cin` does and formats
//!   reals the way `std::cout` does
//! - Six single-shot calculators (triangle area, BMI, sphere volume, digit
//!   comparison, digit average, vowel check)
//! - Bisection and Newton root finders for user-entered polynomials
//!
//! Every calculator implements [`Exercise`] and runs against any
//! `BufRead`/`Write` pair, so the computations are testable without a terminal.
pub mod config;
pub mod console;
pub mod error;
pub mod exercises;
pub mod numeric;

// Re-export commonly used types and traits
pub use config::{Config, NewtonSettings};
pub use console::{Console, StreamFloat};
pub use error::{Error, Result};
pub use exercises::{
    BmiClassifier, DigitAverage, DigitComparator, Exercise, SphereVolume, TriangleArea,
    VowelClassifier,
};
pub use numeric::{BisectionSolver, NewtonSolver};
