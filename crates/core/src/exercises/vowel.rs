use std::fmt;
use std::io::{BufRead, Write};

use crate::{console::Console, error::Result, exercises::Exercise};

const VOWELS: [u8; 5] = [b'a', b'e', b'i', b'o', b'u'];

/// A byte folded to ASCII lowercase, tagged with whether it is a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelCheck {
    pub letter: u8,
    pub is_vowel: bool,
}

impl VowelCheck {
    pub fn new(byte: u8) -> Self {
        let letter = byte.to_ascii_lowercase();
        Self {
            letter,
            is_vowel: VOWELS.contains(&letter),
        }
    }

    fn verdict(&self) -> &'static str {
        if self.is_vowel {
            " is a vowel."
        } else {
            " is not a vowel."
        }
    }

    /// The result line with the letter echoed as the raw byte that was read.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut line = vec![self.letter];
        line.extend_from_slice(self.verdict().as_bytes());
        line
    }
}

impl fmt::Display for VowelCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.escape_ascii(), self.verdict())
    }
}

pub struct VowelClassifier;

impl Exercise for VowelClassifier {
    fn name(&self) -> &'static str {
        "vowel"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.prompt("Enter a character: ")?;
        let check = VowelCheck::new(console.read_char()?);
        console.say_bytes(&check.to_bytes())
    }
}
