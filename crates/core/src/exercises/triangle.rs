use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    console::{Console, StreamFloat},
    error::Result,
    exercises::Exercise,
};

/// Side lengths of a triangle. No triangle inequality is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSides {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TriangleSides {
    pub fn semi_perimeter(&self) -> f64 {
        (self.a + self.b + self.c) / 2.0
    }

    /// Area by Heron's formula. Sides that cannot form a triangle give NaN.
    pub fn area(&self) -> f64 {
        let s = self.semi_perimeter();
        (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
    }
}

pub struct TriangleArea;

impl Exercise for TriangleArea {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say("Enter the a value")?;
        let a = console.read_f64()?;
        console.say("Enter the b value")?;
        let b = console.read_f64()?;
        console.say("Enter the c value")?;
        let c = console.read_f64()?;

        let sides = TriangleSides { a, b, c };
        let area = sides.area();
        debug!("Triangle {:?} has area {}", sides, area);

        console.say(&format!("The area is: {}", StreamFloat(area)))
    }
}
