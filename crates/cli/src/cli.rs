use anyhow::Result;
use clap::{Parser, Subcommand};
use sheetcalc_core::{
    BisectionSolver, BmiClassifier, DigitAverage, DigitComparator, NewtonSolver, SphereVolume,
    TriangleArea, VowelClassifier,
};
use std::path::PathBuf;

use crate::commands::{config_command, load_config, run_exercise};

#[derive(Parser, Debug)]
#[command(name = "sheetcalc")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging (written to stderr)")]
pub struct Cli {
    /// Configuration file to use instead of the nearest .sheetcalc.json
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Area of a triangle from its three sides (Heron's formula)
    Triangle,
    /// Classify body mass index from height (cm) and weight (kg)
    Bmi,
    /// Volume of a sphere from its radius, with pi taken as 3.14
    Sphere,
    /// Print the larger of a number's first and last digits
    #[command(name = "digit-max")]
    DigitMax,
    /// Average of a number's first, last and middle digits
    #[command(name = "digit-average")]
    DigitAverage,
    /// Check whether a character is a vowel
    Vowel,
    /// Find a root of a polynomial with the bisection method
    #[command(visible_alias = "bisect")]
    Bisection,
    /// Find a root of a polynomial with Newton's method
    Newton,
    /// Show the effective configuration as JSON
    Config,
}

impl Cli {
    /// Execute the selected command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Triangle => run_exercise(&TriangleArea),
            Commands::Bmi => run_exercise(&BmiClassifier),
            Commands::Sphere => run_exercise(&SphereVolume),
            Commands::DigitMax => run_exercise(&DigitComparator),
            Commands::DigitAverage => run_exercise(&DigitAverage),
            Commands::Vowel => run_exercise(&VowelClassifier),
            Commands::Bisection => run_exercise(&BisectionSolver),
            Commands::Newton => {
                let config = load_config(self.config.as_deref())?;
                run_exercise(&NewtonSolver::new(config.newton))
            }
            Commands::Config => config_command(self.config.as_deref()),
        }
    }
}
