use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::Result;

/// Interactive console bound to an input reader and an output sink.
///
/// Numeric and character reads behave like `std::istream::operator>>`:
/// leading whitespace (including newlines) is skipped, the longest valid
/// prefix is consumed and the rest of the token stays buffered for the next
/// read. A read that cannot scan a value yields zero and leaves the console
/// in a failed state where every later read also yields zero.
///
/// Input is handled as raw bytes, so text that is not UTF-8 never aborts a
/// read.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
    cursor: usize,
    failed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
            cursor: 0,
            failed: false,
        }
    }

    /// Whether a previous read failed to scan a value.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a full line.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write a full line of raw bytes.
    pub fn say_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.output.write_all(bytes)?;
        self.output.write_all(b"\n")?;
        Ok(())
    }

    /// Write a prompt without a trailing newline and flush it.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        if self.failed || !self.skip_whitespace()? {
            return Ok(self.fail(0));
        }

        let len = integer_prefix(self.remaining());
        if len == 0 {
            return Ok(self.fail(0));
        }

        let token = &self.line[self.cursor..self.cursor + len];
        let negative = token.first() == Some(&b'-');
        let parsed = std::str::from_utf8(token)
            .ok()
            .and_then(|text| text.parse::<i32>().ok());
        self.cursor += len;

        match parsed {
            Some(value) => {
                trace!("Scanned integer {}", value);
                Ok(value)
            }
            // Out-of-range values saturate, like the C++ streams do
            None => Ok(self.fail(if negative { i32::MIN } else { i32::MAX })),
        }
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        if self.failed || !self.skip_whitespace()? {
            return Ok(self.fail(0.0));
        }

        let scan = real_prefix(self.remaining());
        if scan.len == 0 {
            return Ok(self.fail(0.0));
        }

        let token = &self.line[self.cursor..self.cursor + scan.len];
        let parsed = if scan.complete {
            std::str::from_utf8(token)
                .ok()
                .and_then(|text| text.parse::<f64>().ok())
        } else {
            None
        };
        self.cursor += scan.len;

        match parsed {
            Some(value) if value.is_infinite() => Ok(self.fail(f64::MAX.copysign(value))),
            Some(value) => {
                trace!("Scanned real {}", value);
                Ok(value)
            }
            // A mantissa followed by a dangling exponent marker
            None => Ok(self.fail(0.0)),
        }
    }

    /// Read the next non-whitespace byte, or `0` once input is exhausted.
    pub fn read_char(&mut self) -> Result<u8> {
        if self.failed || !self.skip_whitespace()? {
            return Ok(self.fail(0));
        }

        match self.remaining().first().copied() {
            Some(byte) => {
                self.cursor += 1;
                Ok(byte)
            }
            None => Ok(self.fail(0)),
        }
    }

    /// Read a whole line without its line terminator.
    ///
    /// Returns the unread remainder of the buffered line first, if any.
    /// Invalid UTF-8 is replaced rather than rejected. Yields `None` at end
    /// of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let rest = trim_terminator(self.remaining());
        if !rest.is_empty() {
            let rest = String::from_utf8_lossy(rest).into_owned();
            self.discard_line();
            return Ok(Some(rest));
        }

        self.discard_line();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(trim_terminator(&self.line)).into_owned();
        self.discard_line();
        Ok(Some(line))
    }

    fn remaining(&self) -> &[u8] {
        &self.line[self.cursor..]
    }

    fn discard_line(&mut self) {
        self.line.clear();
        self.cursor = 0;
    }

    fn fail<T>(&mut self, value: T) -> T {
        if !self.failed {
            debug!("Console input failed to scan, later reads yield zero");
        }
        self.failed = true;
        value
    }

    /// Advance past whitespace, pulling more lines as needed.
    /// Returns `false` at end of input.
    fn skip_whitespace(&mut self) -> Result<bool> {
        loop {
            let skipped = self
                .remaining()
                .iter()
                .take_while(|&&b| is_space(b))
                .count();
            self.cursor += skipped;
            if self.cursor < self.line.len() {
                return Ok(true);
            }

            self.discard_line();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(false);
            }
        }
    }
}

/// The C locale `isspace` set.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn trim_terminator(mut bytes: &[u8]) -> &[u8] {
    while let [rest @ .., b'\r' | b'\n'] = bytes {
        bytes = rest;
    }
    bytes
}

/// Length of the `[+-]?[0-9]+` prefix of `bytes`, or 0 if there is none.
fn integer_prefix(bytes: &[u8]) -> usize {
    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[start..]);
    if digits == 0 { 0 } else { start + digits }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RealScan {
    /// Bytes the stream consumes.
    len: usize,
    /// Whether the consumed bytes form a number. An exponent marker with no
    /// digits after it is consumed but spoils the read.
    complete: bool,
}

/// The longest decimal floating-point prefix of `bytes`.
fn real_prefix(bytes: &[u8]) -> RealScan {
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = count_digits(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = count_digits(&bytes[end + 1..]);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }

    if whole + fraction == 0 {
        return RealScan {
            len: 0,
            complete: false,
        };
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_digits = count_digits(&bytes[end..]);
        return RealScan {
            len: end + exp_digits,
            complete: exp_digits > 0,
        };
    }

    RealScan {
        len: end,
        complete: true,
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
