use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::{console::Console, error::Result, exercises::Exercise};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMeasurements {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl BodyMeasurements {
    /// Body Mass Index: weight in kilograms over height in metres squared.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / height_m.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiClass {
    Underweight,
    Normal,
    PreObesity,
    ObesityI,
    ObesityII,
    ObesityIII,
}

/// Inclusive upper bounds, checked in ascending order.
const UPPER_BOUNDS: [(f64, BmiClass); 5] = [
    (18.5, BmiClass::Underweight),
    (24.9, BmiClass::Normal),
    (29.9, BmiClass::PreObesity),
    (34.9, BmiClass::ObesityI),
    (39.9, BmiClass::ObesityII),
];

impl BmiClass {
    /// Classify a BMI value. NaN matches no band and yields `None`.
    pub fn classify(bmi: f64) -> Option<Self> {
        for (bound, class) in UPPER_BOUNDS {
            if bmi <= bound {
                return Some(class);
            }
        }

        if bmi > 39.9 {
            Some(BmiClass::ObesityIII)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal weight",
            BmiClass::PreObesity => "Pre-obesity",
            BmiClass::ObesityI => "Obesity class I",
            BmiClass::ObesityII => "Obesity class II",
            BmiClass::ObesityIII => "Obesity class III",
        }
    }
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct BmiClassifier;

impl Exercise for BmiClassifier {
    fn name(&self) -> &'static str {
        "bmi"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say("Enter your height (in cm)")?;
        let height_cm = console.read_f64()?;
        console.say("Enter your weight (in kg)")?;
        let weight_kg = console.read_f64()?;

        let bmi = BodyMeasurements {
            height_cm,
            weight_kg,
        }
        .bmi();
        debug!("BMI computed as {}", bmi);

        match BmiClass::classify(bmi) {
            Some(class) => console.say(class.label()),
            None => Ok(()),
        }
    }
}
