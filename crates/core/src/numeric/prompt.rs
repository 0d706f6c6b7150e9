use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::{
    console::Console,
    error::{Error, Result},
    numeric::{Polynomial, Term},
};

/// Prompt for a line and parse it. A malformed entry yields `None`;
/// end of input is an error because the session cannot continue.
pub(crate) fn ask<T, R, W>(console: &mut Console<R, W>, prompt: &str) -> Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    console.prompt(prompt)?;
    let line = console.read_line()?.ok_or(Error::UnexpectedEof)?;
    Ok(line.trim().parse().ok())
}

pub(crate) fn ask_term_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<usize> {
    match ask::<i64, _, _>(console, prompt)? {
        Some(count) if count > 0 => Ok(count as usize),
        Some(_) => Err(Error::InvalidInput(
            "The number of terms must be a positive integer".to_string(),
        )),
        None => Err(Error::InvalidInput(
            "The number of terms must be an integer".to_string(),
        )),
    }
}

/// Wording and parsing rules for the per-term prompts.
pub(crate) struct TermPrompts {
    pub exponent_label: &'static str,
    pub integer_exponents: bool,
    pub warning: &'static str,
    pub separator: Option<&'static str>,
}

/// Read `count` terms, re-asking for a term until both of its parts parse.
pub(crate) fn ask_terms<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: usize,
    prompts: &TermPrompts,
) -> Result<Polynomial> {
    let mut terms = Vec::new();

    for i in 1..=count {
        loop {
            let coefficient =
                ask::<f64, _, _>(console, &format!("  Coefficient for term {i}: "))?;
            let Some(coefficient) = coefficient else {
                console.say(prompts.warning)?;
                continue;
            };

            let exponent_prompt = format!("  {} for term {i}: ", prompts.exponent_label);
            let exponent = if prompts.integer_exponents {
                ask::<i32, _, _>(console, &exponent_prompt)?.map(f64::from)
            } else {
                ask::<f64, _, _>(console, &exponent_prompt)?
            };
            let Some(exponent) = exponent else {
                console.say(prompts.warning)?;
                continue;
            };

            terms.push(Term::new(coefficient, exponent));
            break;
        }

        if let Some(separator) = prompts.separator {
            console.say(separator)?;
        }
    }

    Ok(Polynomial::new(terms))
}

/// Ask for a positive number of decimal digits until one is given.
pub(crate) fn ask_precision<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<u32> {
    loop {
        match ask::<i64, _, _>(
            console,
            "\nEnter desired accuracy (e.g., enter 6 for 10^-6): ",
        )? {
            Some(digits) if digits > 0 => return Ok(digits.min(i64::from(u32::MAX)) as u32),
            Some(_) => console.say("  [Error] Precision must be a positive integer.")?,
            None => console.say("  [Warning] Please enter a valid integer.")?,
        }
    }
}
