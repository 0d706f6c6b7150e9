pub mod bmi;
pub mod digits;
pub mod sphere;
pub mod triangle;
pub mod vowel;

use std::io::{BufRead, Write};

use crate::{console::Console, error::Result};

pub use bmi::{BmiClass, BmiClassifier, BodyMeasurements};
pub use digits::{DigitAverage, DigitComparator, DigitQuery};
pub use sphere::SphereVolume;
pub use triangle::{TriangleArea, TriangleSides};
pub use vowel::{VowelCheck, VowelClassifier};

/// An interactive calculator: prompt for inputs, compute, print the result.
pub trait Exercise {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()>;
}
