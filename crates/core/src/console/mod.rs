//! Console plumbing shared by every exercise.
//!
//! [`Console`] pairs a C++-stream style token scanner with an output sink.
//! [`StreamFloat`] renders reals the way a default-configured `ostream` does,
//! and [`ReprFloat`] the way Python's `repr` does.

pub mod format;
pub mod scanner;

pub use format::{ReprFloat, StreamFloat};
pub use scanner::Console;
