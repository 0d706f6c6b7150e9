pub mod config;
pub mod exercise;

pub use config::{config_command, load_config};
pub use exercise::run_exercise;
