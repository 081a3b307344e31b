use serde::Serialize;
use std::fmt;


/// Everything known about a ray at the interface for one set of inputs.
///
/// Angles are in degrees, measured from the surface normal. Reflectance and
/// transmittance are percentages of the incident intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Refraction {
    pub total_internal_reflection: bool,
    pub refracted_angle: Option<f64>, // none under total internal reflection
    pub reflection_angle: f64,
    pub critical_angle: Option<f64>, // only defined for n1 > n2
    pub reflectance: f64,
    pub transmittance: f64,
    pub speed_ratio: f64, // v2 / v1 = n1 / n2
    pub index_ratio: f64, // n2 / n1
}

impl Refraction {
    pub fn refracted_angle_text(&self) -> String {
        match self.refracted_angle {
            Some(angle) if !self.total_internal_reflection => format!("{:.2}°", angle),
            _ => "—".to_string(),
        }
    }

    pub fn critical_angle_text(&self) -> String {
        match self.critical_angle {
            Some(angle) => format!("{:.2}°", angle),
            None => "Not defined (n₁ ≤ n₂)".to_string(),
        }
    }
}

impl fmt::Display for Refraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(f, "  - Reflection angle: {:.2}°", self.reflection_angle)?;
        write!(f, "  - Refraction angle: {}", self.refracted_angle_text())?;
        if self.total_internal_reflection {
            write!(f, " (Total internal reflection)")?;
        }
        writeln!(f)?;
        writeln!(f, "  - Critical angle: {}", self.critical_angle_text())?;
        writeln!(f, "  - Speed ratio (v₂ / v₁): {:.3}", self.speed_ratio)?;
        writeln!(f, "  - Reflectance: {:.1} %", self.reflectance)?;
        write!(f, "  - Transmittance: {:.1} %", self.transmittance)?;
        if self.total_internal_reflection {
            write!(
                f,
                "\n\nThe incident angle exceeds the critical angle. Light is fully \
                 reflected back into medium 1 and no refraction occurs."
            )?;
        }
        Ok(())
    }
}
