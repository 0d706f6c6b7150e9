use std::f64::consts::LN_2;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    console::{Console, ReprFloat, format::scientific},
    error::{Error, Result},
    exercises::Exercise,
    numeric::{
        Polynomial,
        prompt::{TermPrompts, ask, ask_precision, ask_term_count, ask_terms},
        tolerance,
    },
};

/// How the interval endpoints relate to a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    RootAtStart,
    RootAtEnd,
    SameSign,
    SignChange,
}

impl Bracket {
    pub fn classify(f_start: f64, f_end: f64) -> Self {
        if f_start == 0.0 {
            Bracket::RootAtStart
        } else if f_end == 0.0 {
            Bracket::RootAtEnd
        } else if f_start * f_end > 0.0 {
            Bracket::SameSign
        } else {
            Bracket::SignChange
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep {
    pub iteration: usize,
    pub start: f64,
    pub end: f64,
    pub midpoint: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BisectionOutcome {
    /// A midpoint evaluated to exactly zero.
    ExactRoot,
    /// The iteration budget ran out; the last midpoint is the estimate.
    BudgetExhausted { iterations: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bisection {
    pub steps: Vec<BisectionStep>,
    pub root: f64,
    pub outcome: BisectionOutcome,
}

/// Number of halvings needed to shrink `[start, end]` below `tolerance`,
/// at least one.
pub fn iteration_budget(start: f64, end: f64, tolerance: f64) -> usize {
    let estimate = (((end - start) / tolerance).ln() / LN_2).ceil();
    if estimate.is_finite() && estimate > 1.0 {
        estimate as usize
    } else {
        1
    }
}

/// Bisect `[start, end]` to `precision_digits` decimals.
///
/// The sign of `P(start)` is not checked here; see [`Bracket::classify`].
pub fn bisect(
    polynomial: &Polynomial,
    start: f64,
    end: f64,
    precision_digits: u32,
) -> Result<Bisection> {
    if end <= start {
        return Err(Error::InvalidInterval { start, end });
    }

    let tolerance = tolerance(precision_digits);
    if tolerance <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "an accuracy of {precision_digits} digits is beyond floating-point resolution"
        )));
    }

    let budget = iteration_budget(start, end, tolerance);
    debug!("Bisecting [{}, {}] with a budget of {} iterations", start, end, budget);

    let (mut a, mut b) = (start, end);
    let mut midpoint = a;
    let mut steps = Vec::with_capacity(budget);

    for i in 0..budget {
        midpoint = (a + b) / 2.0;
        let value = polynomial.evaluate(midpoint)?;
        steps.push(BisectionStep {
            iteration: i + 1,
            start: a,
            end: b,
            midpoint,
            value,
        });

        if value == 0.0 {
            return Ok(Bisection {
                steps,
                root: midpoint,
                outcome: BisectionOutcome::ExactRoot,
            });
        }

        if polynomial.evaluate(a)? * value < 0.0 {
            b = midpoint;
        } else {
            a = midpoint;
        }
    }

    Ok(Bisection {
        steps,
        root: midpoint,
        outcome: BisectionOutcome::BudgetExhausted { iterations: budget },
    })
}

const RULE_WIDTH: usize = 78;

/// Interactive bisection session over a user-entered polynomial.
pub struct BisectionSolver;

impl BisectionSolver {
    fn ask_interval<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(f64, f64)> {
        console.say("\nSpecify the interval to search for a root:")?;
        loop {
            let start = ask::<f64, _, _>(console, "  Start of interval (a): ")?;
            let end = ask::<f64, _, _>(console, "  End of interval   (b): ")?;
            match (start, end) {
                (Some(start), Some(end)) if start < end => return Ok((start, end)),
                (Some(_), Some(_)) => console.say("  [Error] 'Start' must be less than 'End'.")?,
                _ => console.say("  [Warning] Please enter valid numbers for the interval.")?,
            }
        }
    }

    fn print_run<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        polynomial: &Polynomial,
        run: &Bisection,
        precision_digits: u32,
    ) -> Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        console.say(&format!("\n{rule}"))?;
        console.say(&format!(
            "{:<10} | {:<15} | {:<15} | {:<15} | {:<15}",
            "Iteration", "Start (a)", "End (b)", "Midpoint (c)", "f(c)"
        ))?;
        console.say(&rule)?;

        for step in &run.steps {
            console.say(&format!(
                "{:<10} | {:<15.8} | {:<15.8} | {:<15.8} | {:<15.8}",
                step.iteration, step.start, step.end, step.midpoint, step.value
            ))?;
        }

        match run.outcome {
            BisectionOutcome::ExactRoot => {
                console.say("\n[Success] Exact root found: f(midpoint) = 0.")?
            }
            BisectionOutcome::BudgetExhausted { iterations } => console.say(&format!(
                "\n[Info] Maximum number of iterations reached ({iterations})."
            ))?,
        }
        console.say(&rule)?;

        let decimals = precision_digits as usize + 4;
        console.say(&format!(
            "\n[Result] Approximated root: x = {:.*}",
            decimals, run.root
        ))?;
        console.say(&format!(
            "         f(x) ≈ {}",
            scientific(polynomial.evaluate(run.root)?, 2)
        ))
    }
}

impl Exercise for BisectionSolver {
    fn name(&self) -> &'static str {
        "bisection"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say("=== Polynomial Root Finder using Bisection Method ===\n")?;

        let count = ask_term_count(console, "Enter the number of terms in the polynomial: ")?;
        console.say("\nProvide the terms as: coefficient and exponent (e.g., 2, 3 for 2x^3)")?;
        let polynomial = ask_terms(
            console,
            count,
            &TermPrompts {
                exponent_label: "Exponent   ",
                integer_exponents: true,
                warning: "  [Warning] Invalid input. Coefficient must be a number and exponent must be an integer.",
                separator: None,
            },
        )?;
        debug!("Polynomial: {}", polynomial);

        let (start, end) = Self::ask_interval(console)?;
        let precision_digits = ask_precision(console)?;

        let f_start = polynomial.evaluate(start)?;
        let f_end = polynomial.evaluate(end)?;
        console.say("\nInitial function evaluations:")?;
        console.say(&format!("  f({}) = {f_start:.6}", ReprFloat(start)))?;
        console.say(&format!("  f({}) = {f_end:.6}", ReprFloat(end)))?;

        match Bracket::classify(f_start, f_end) {
            Bracket::RootAtStart => console.say(&format!(
                "\n[Result] Root found at start of interval: x = {}",
                ReprFloat(start)
            )),
            Bracket::RootAtEnd => console.say(&format!(
                "\n[Result] Root found at end of interval: x = {}",
                ReprFloat(end)
            )),
            Bracket::SameSign => {
                console.say("\n[Error] f(a) and f(b) must have opposite signs.")?;
                console.say("        The function must cross the x-axis within the interval.")
            }
            Bracket::SignChange => {
                console.say("\n[Process] Initiating Bisection Method...\n")?;
                let run = bisect(&polynomial, start, end, precision_digits)?;
                info!(
                    "Bisection finished after {} iterations at x = {}",
                    run.steps.len(),
                    run.root
                );
                Self::print_run(console, &polynomial, &run, precision_digits)
            }
        }
    }
}
