use std::fmt;

use crate::error::{Error, Result};

/// One `coefficient * x^exponent` term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponent: f64,
}

impl Term {
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let power = power(x, self.exponent, self.coefficient)?;
        Ok(self.coefficient * power)
    }

    /// Value of the term's derivative at `x`. Constant terms contribute 0.
    pub fn slope(&self, x: f64) -> Result<f64> {
        if self.exponent == 0.0 {
            return Ok(0.0);
        }
        let power = power(x, self.exponent - 1.0, self.coefficient)?;
        Ok(self.coefficient * self.exponent * power)
    }
}

/// `x^exponent`, rejecting results that leave the real numbers or overflow.
fn power(x: f64, exponent: f64, coefficient: f64) -> Result<f64> {
    let value = x.powf(exponent);
    if value.is_finite() || !x.is_finite() {
        Ok(value)
    } else {
        Err(Error::DomainError {
            coefficient,
            exponent,
            x,
        })
    }
}

/// A sum of terms with arbitrary real exponents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// P(x)
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.terms.iter().map(|term| term.evaluate(x)).sum()
    }

    /// P'(x)
    pub fn derivative(&self, x: f64) -> Result<f64> {
        self.terms.iter().map(|term| term.slope(x)).sum()
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}x^{}", term.coefficient, term.exponent)?;
        }
        Ok(())
    }
}
