use std::fmt;

/// Significant digits used by a default-configured C++ output stream.
const PRECISION: i32 = 6;

/// Displays an `f64` the way `std::cout << value` does with default flags
/// (`%g` with six significant digits): trailing zeros are dropped and
/// very large or small magnitudes switch to scientific notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamFloat(pub f64);

impl fmt::Display for StreamFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let sign = if value.is_sign_negative() { "-" } else { "" };

        if value.is_nan() {
            return write!(f, "{sign}nan");
        }
        if value.is_infinite() {
            return write!(f, "{sign}inf");
        }
        if value == 0.0 {
            return write!(f, "{sign}0");
        }

        // The exponent is taken after rounding to PRECISION digits
        let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return f.write_str(&scientific);
        };
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if exponent < -4 || exponent >= PRECISION {
            let exp_sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                exp_sign,
                exponent.abs()
            )
        } else {
            let fixed = format!("{:.*}", (PRECISION - 1 - exponent) as usize, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Displays an `f64` the way Python's `repr` does: the shortest digits that
/// round-trip, switching to a signed two-digit exponent outside `[1e-4, 1e16)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReprFloat(pub f64);

impl fmt::Display for ReprFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("nan");
        }
        f.write_str(&pad_exponent(&format!("{:?}", self.0)))
    }
}

/// `value` in scientific notation with `decimals` fraction digits, the
/// exponent signed and at least two digits wide (`1.23e-07`).
pub fn scientific(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    pad_exponent(&format!("{value:.decimals$e}"))
}

fn pad_exponent(text: &str) -> String {
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text.to_string();
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
