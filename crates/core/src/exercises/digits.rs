//! Digit extraction from a number whose digit count is supplied by the user.
//!
//! The digit count is trusted. When it does not match the number, the
//! leading-digit extraction divides by the wrong power of ten and silently
//! produces a wrong value; callers rely on that behavior being reproducible.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    console::{Console, StreamFloat},
    error::Result,
    exercises::Exercise,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitQuery {
    pub number: i32,
    pub digit_count: i32,
}

impl DigitQuery {
    pub fn last_digit(&self) -> i32 {
        self.number % 10
    }

    /// `number / 10^(n-1)` divided in floating point, then truncated.
    pub fn leading_digit_real(&self) -> i32 {
        let scale = 10f64.powi(self.digit_count.saturating_sub(1));
        (f64::from(self.number) / scale) as i32
    }

    /// `number / 10^(n-1)` with the power of ten truncated to an integer first.
    pub fn leading_digit(&self) -> i32 {
        scaled_down(self.number, self.digit_count.saturating_sub(1))
    }

    /// Digit at `position`, counted from the right starting at zero.
    pub fn digit_at(&self, position: i32) -> i32 {
        scaled_down(self.number, position) % 10
    }

    /// The larger of the last and leading digits. Ties take the leading digit.
    pub fn larger_end_digit(&self) -> i32 {
        let last = self.last_digit();
        let first = self.leading_digit_real();
        if last > first { last } else { first }
    }

    /// Average of the leading, last and middle digit(s).
    ///
    /// An odd digit count has one middle digit at `n/2`; any other count
    /// averages the pair at `n/2 - 1` and `n/2`.
    pub fn end_and_middle_average(&self) -> f64 {
        let n = self.digit_count;
        let first = i64::from(self.leading_digit());
        let last = i64::from(self.last_digit());

        if n % 2 == 1 {
            let middle = i64::from(self.digit_at(n / 2));
            (first + middle + last) as f64 / 3.0
        } else {
            let middle_low = i64::from(self.digit_at(n / 2 - 1));
            let middle_high = i64::from(self.digit_at(n / 2));
            (first + last + middle_low + middle_high) as f64 / 4.0
        }
    }
}

/// `10^position` truncated to an `i32`; negative positions truncate to 0.
fn place_value(position: i32) -> i32 {
    10f64.powi(position) as i32
}

/// Integer division by `10^position`. A zero place value yields 0.
fn scaled_down(number: i32, position: i32) -> i32 {
    number.checked_div(place_value(position)).unwrap_or(0)
}

/// Prints the larger of the first and last digits.
pub struct DigitComparator;

impl Exercise for DigitComparator {
    fn name(&self) -> &'static str {
        "digit-max"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say("Enter a number")?;
        let number = console.read_i32()?;
        console.say("Enter the length")?;
        let digit_count = console.read_i32()?;

        let query = DigitQuery {
            number,
            digit_count,
        };
        debug!(
            "Comparing last digit {} with leading digit {}",
            query.last_digit(),
            query.leading_digit_real()
        );

        console.say(&query.larger_end_digit().to_string())
    }
}

/// Prints the average of the end digits and the middle digit(s).
pub struct DigitAverage;

impl Exercise for DigitAverage {
    fn name(&self) -> &'static str {
        "digit-average"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.prompt("Enter the number (x): ")?;
        let number = console.read_i32()?;
        console.prompt("Enter the number of digits (n): ")?;
        let digit_count = console.read_i32()?;

        let query = DigitQuery {
            number,
            digit_count,
        };
        let average = query.end_and_middle_average();
        debug!("Digit average for {:?} is {}", query, average);

        console.say(&format!(
            "The average of the specified digits is: {}",
            StreamFloat(average)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn query(number: i32, digit_count: i32) -> DigitQuery {
        DigitQuery {
            number,
            digit_count,
        }
    }

    #[test]
    fn test_end_digits() {
        let q = query(5672, 4);
        assert_eq!(q.last_digit(), 2);
        assert_eq!(q.leading_digit(), 5);
        assert_eq!(q.leading_digit_real(), 5);
    }

    #[test]
    fn test_larger_end_digit() {
        assert_eq!(query(5672, 4).larger_end_digit(), 5);
        assert_eq!(query(1239, 4).larger_end_digit(), 9);
        assert_eq!(query(5555, 4).larger_end_digit(), 5);
        assert_eq!(query(7, 1).larger_end_digit(), 7);
    }

    #[test]
    fn test_tie_takes_leading_digit_branch() {
        // Leading digit 3 via truncation, last digit 3: strict `>` fails
        let q = query(3003, 4);
        assert_eq!(q.last_digit(), q.leading_digit_real());
        assert_eq!(q.larger_end_digit(), 3);
    }

    #[test]
    fn test_mismatched_digit_count_is_not_corrected() {
        // Too few digits leaves a multi-digit "leading digit"
        assert_eq!(query(5672, 3).larger_end_digit(), 56);
        // Too many digits truncates the leading digit to zero
        assert_eq!(query(5672, 5).larger_end_digit(), 2);
    }

    #[test]
    fn test_average_odd_digit_count() {
        let q = query(12345, 5);
        assert_eq!(q.digit_at(2), 3);
        assert_eq!(q.end_and_middle_average(), 3.0);
    }

    #[test]
    fn test_average_even_digit_count() {
        let q = query(1234, 4);
        assert_eq!(q.digit_at(1), 3);
        assert_eq!(q.digit_at(2), 2);
        assert_eq!(q.end_and_middle_average(), 2.5);
    }

    #[test]
    fn test_average_single_digit() {
        // n = 1: leading, middle and last digit are all the same digit
        assert_eq!(query(7, 1).end_and_middle_average(), 7.0);
    }

    #[test]
    fn test_average_zero_digit_count_does_not_divide_by_zero() {
        // 10^-1 truncates to 0, so those extractions yield 0
        let q = query(1234, 0);
        assert_eq!(q.leading_digit(), 0);
        assert_eq!(q.end_and_middle_average(), 2.0);
    }

    #[test]
    fn test_negative_number_keeps_sign() {
        let q = query(-5672, 4);
        assert_eq!(q.last_digit(), -2);
        assert_eq!(q.leading_digit_real(), -5);
        assert_eq!(q.larger_end_digit(), -2);
    }

    #[test]
    fn test_comparator_run_output() -> Result<()> {
        let mut console = Console::new(Cursor::new("5672\n4\n"), Vec::new());
        DigitComparator.run(&mut console)?;

        let output = String::from_utf8_lossy(console.output()).to_string();
        assert_eq!(output, "Enter a number\nEnter the length\n5\n");
        Ok(())
    }

    #[test]
    fn test_average_run_output() -> Result<()> {
        let mut console = Console::new(Cursor::new("1234 4\n"), Vec::new());
        DigitAverage.run(&mut console)?;

        let output = String::from_utf8_lossy(console.output()).to_string();
        assert_eq!(
            output,
            "Enter the number (x): Enter the number of digits (n): \
             The average of the specified digits is: 2.5\n"
        );
        Ok(())
    }

    #[test]
    fn test_average_run_with_garbage_input() -> Result<()> {
        let mut console = Console::new(Cursor::new("abc\n5\n"), Vec::new());
        DigitAverage.run(&mut console)?;

        let output = String::from_utf8_lossy(console.output()).to_string();
        assert!(output.ends_with("The average of the specified digits is: 0\n"));
        Ok(())
    }
}
