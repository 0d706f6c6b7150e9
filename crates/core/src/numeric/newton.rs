use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    config::NewtonSettings,
    console::Console,
    error::{Error, Result},
    exercises::Exercise,
    numeric::{
        Polynomial,
        prompt::{TermPrompts, ask, ask_precision, ask_term_count, ask_terms},
        tolerance,
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonStep {
    pub iteration: usize,
    /// The new estimate `p - f(p)/f'(p)`.
    pub estimate: f64,
    pub value: f64,
    pub slope: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NewtonOutcome {
    Converged { iterations: usize, root: f64 },
    /// `|f'(p)|` fell below the configured floor before a step could be taken.
    FlatDerivative { iteration: usize, at: f64, slope: f64 },
    IterationLimit { iterations: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewtonRun {
    pub initial: f64,
    pub steps: Vec<NewtonStep>,
    pub outcome: NewtonOutcome,
}

/// Newton iteration starting from the midpoint of `[start, end]`.
pub fn newton(
    polynomial: &Polynomial,
    start: f64,
    end: f64,
    tolerance: f64,
    settings: &NewtonSettings,
) -> Result<NewtonRun> {
    let initial = (start + end) / 2.0;
    let mut p = initial;
    let mut steps = Vec::new();

    for iteration in 1..=settings.max_iterations {
        let value = polynomial.evaluate(p)?;
        let slope = polynomial.derivative(p)?;

        if slope.abs() < settings.derivative_floor {
            debug!("Derivative {} at {} is below the floor", slope, p);
            return Ok(NewtonRun {
                initial,
                steps,
                outcome: NewtonOutcome::FlatDerivative {
                    iteration,
                    at: p,
                    slope,
                },
            });
        }

        let estimate = p - value / slope;
        steps.push(NewtonStep {
            iteration,
            estimate,
            value,
            slope,
        });

        if (estimate - p).abs() <= tolerance {
            return Ok(NewtonRun {
                initial,
                steps,
                outcome: NewtonOutcome::Converged {
                    iterations: iteration,
                    root: estimate,
                },
            });
        }

        p = estimate;
    }

    Ok(NewtonRun {
        initial,
        steps,
        outcome: NewtonOutcome::IterationLimit {
            iterations: settings.max_iterations,
        },
    })
}

/// Interactive Newton session over a user-entered polynomial.
pub struct NewtonSolver {
    settings: NewtonSettings,
}

impl NewtonSolver {
    pub fn new(settings: NewtonSettings) -> Self {
        Self { settings }
    }

    fn ask_bound<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> Result<f64> {
        ask::<f64, _, _>(console, prompt)?
            .ok_or_else(|| Error::InvalidInput("Please enter valid numeric bounds".to_string()))
    }

    fn print_run<R: BufRead, W: Write>(console: &mut Console<R, W>, run: &NewtonRun) -> Result<()> {
        console.say("\nStarting Newton Iterations")?;
        console.say(&"-".repeat(40))?;
        console.say(&format!("Iteration 0: P = {:.6}", run.initial))?;

        for step in &run.steps {
            console.say(&format!(
                "Iteration {}: P = {:.6} | f(P) = {:.6} | f'(P) = {:.6}",
                step.iteration, step.estimate, step.value, step.slope
            ))?;
        }

        match run.outcome {
            NewtonOutcome::Converged { iterations, root } => {
                console.say(&format!("\n=>after {iterations} iterations."))?;
                console.say(&format!("root: {root:.6}"))
            }
            NewtonOutcome::FlatDerivative {
                iteration,
                at,
                slope,
            } => {
                console.say(&format!(
                    "\n[Stopped] Iteration {iteration}: Derivative is too small (≈ 0)."
                ))?;
                console.say(&format!("P'({at:.6}) = {slope:.6}"))
            }
            NewtonOutcome::IterationLimit { iterations } => console.say(&format!(
                "\n[Info] Maximum number of iterations reached ({iterations})."
            )),
        }
    }
}

impl Default for NewtonSolver {
    fn default() -> Self {
        Self::new(NewtonSettings::default())
    }
}

impl Exercise for NewtonSolver {
    fn name(&self) -> &'static str {
        "newton"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let banner = "=".repeat(45);
        console.say(&banner)?;
        console.say("         Newton Root Finder")?;
        console.say(&banner)?;

        let count = ask_term_count(console, "Enter the number of terms in the polynomial: ")?;
        console.say("\nEnter each term as coefficient and power:")?;
        let polynomial = ask_terms(
            console,
            count,
            &TermPrompts {
                exponent_label: "Power      ",
                integer_exponents: false,
                warning: "[Error] Please enter numeric values only.",
                separator: Some("----------"),
            },
        )?;
        debug!("Polynomial: {}", polynomial);

        let start = Self::ask_bound(console, "Enter the start of the interval: ")?;
        let end = Self::ask_bound(console, "Enter the end of the interval: ")?;

        let precision_digits = ask_precision(console)?;

        let f_start = polynomial.evaluate(start)?;
        let f_end = polynomial.evaluate(end)?;
        console.say(&format!("\nP({start:.3}) = {f_start:.6}"))?;
        console.say(&format!("P({end:.3}) = {f_end:.6}"))?;

        if f_start * f_end >= 0.0 {
            console.say("\n[Warning] The function does not change sign on the interval.")?;
            return console.say("Newton method may not converge.");
        }

        console.say("\n[Info] A sign change is detected. A root likely exists in the interval.")?;

        let run = newton(
            &polynomial,
            start,
            end,
            tolerance(precision_digits),
            &self.settings,
        )?;
        info!("Newton finished with {:?}", run.outcome);

        Self::print_run(console, &run)
    }
}
