use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    console::{Console, StreamFloat},
    error::Result,
    exercises::Exercise,
};

/// The two-decimal approximation of π the volume formula is defined with.
pub const PI_APPROX: f64 = 3.14;

/// `(4/3) * 3.14 * r^3`
pub fn sphere_volume(radius: f64) -> f64 {
    (4.0 / 3.0) * PI_APPROX * radius.powi(3)
}

pub struct SphereVolume;

impl Exercise for SphereVolume {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say("Enter the value of r ")?;
        let radius = console.read_f64()?;

        let volume = sphere_volume(radius);
        debug!("Sphere of radius {} has volume {}", radius, volume);

        console.say(&format!("the volume is: {}", StreamFloat(volume)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_volume_uses_fixed_pi() {
        assert!((sphere_volume(3.0) - 113.04).abs() < 1e-9);
        assert!((sphere_volume(1.0) - 4.186_666_666_666_667).abs() < 1e-12);
        assert_ne!(sphere_volume(3.0), (4.0 / 3.0) * std::f64::consts::PI * 27.0);
    }

    #[test]
    fn test_negative_radius_gives_negative_volume() {
        assert!(sphere_volume(-1.0) < 0.0);
    }

    #[test]
    fn test_run_output() -> Result<()> {
        let mut console = Console::new(Cursor::new("3\n"), Vec::new());
        SphereVolume.run(&mut console)?;

        let output = String::from_utf8_lossy(console.output()).to_string();
        assert_eq!(output, "Enter the value of r \nthe volume is: 113.04\n");
        Ok(())
    }
}
