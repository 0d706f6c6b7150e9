//! Configuration management for sheetcalc

mod settings;

// Re-export main types
pub use settings::{Config, NewtonSettings};
