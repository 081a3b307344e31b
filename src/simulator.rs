//! Interactive refraction simulator state.
//!
//! This module holds the three inputs the way an input form does and
//! recomputes results on demand. Each setter enforces the input constraints
//! (indices floored, angle clamped to `[0, 89.9]`) so that the solver and the
//! diagram only ever see values from their declared domain.
//!
//! The simulator provides:
//! - Constrained setters for both indices and the incidence angle
//! - Material presets for either medium
//! - Reset to the default air/water configuration
//! - Evaluation into results plus ray diagram geometry

use serde::Serialize;

use crate::diagram::{self, Diagram};
use crate::materials::Material;
use crate::result::Refraction;
use crate::settings::{
    Settings, DEFAULT_INCIDENT_ANGLE, DEFAULT_N1, DEFAULT_N2, MAX_INCIDENT_ANGLE,
};
use crate::snell;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MIN_REFR_INDEX;

    #[test]
    fn setters_enforce_constraints() {
        let mut sim = Simulator::new();
        sim.set_n1(-2.0);
        assert_eq!(sim.n1(), MIN_REFR_INDEX);
        sim.set_n2(f64::NAN);
        assert_eq!(sim.n2(), MIN_REFR_INDEX);
        sim.set_incident_angle(120.0);
        assert_eq!(sim.incident_angle(), MAX_INCIDENT_ANGLE);
        sim.set_incident_angle(-5.0);
        assert_eq!(sim.incident_angle(), 0.0);
        sim.set_incident_angle(f64::NAN);
        assert_eq!(sim.incident_angle(), 0.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut sim = Simulator::new();
        sim.set_medium1(Material::Diamond);
        sim.set_incident_angle(70.0);
        sim.reset();
        assert_eq!(sim, Simulator::default());
        assert_eq!(sim.medium1(), Some(Material::Air));
        assert_eq!(sim.medium2(), Some(Material::Water));
    }

    #[test]
    fn custom_index_has_no_preset() {
        let mut sim = Simulator::new();
        sim.set_n2(1.4);
        assert_eq!(sim.medium2(), None);
    }

    #[test]
    fn evaluate_feeds_results_into_diagram() {
        let mut sim = Simulator::new();
        sim.set_medium1(Material::CrownGlass);
        sim.set_medium2(Material::Air);
        sim.set_incident_angle(60.0);
        let evaluation = sim.evaluate();
        assert!(evaluation.refraction.total_internal_reflection);
        assert!(evaluation.diagram.refracted.is_none());

        sim.set_incident_angle(30.0);
        let evaluation = sim.evaluate();
        assert!(!evaluation.refraction.total_internal_reflection);
        assert!(evaluation.diagram.refracted.is_some());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let sim = Simulator::new();
        assert_eq!(sim.evaluate(), sim.evaluate());
    }
}

/// Result of one evaluation: physical results and the matching diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub n1: f64,
    pub n2: f64,
    pub incident_angle: f64,
    pub refraction: Refraction,
    pub diagram: Diagram,
}

/// Current inputs of the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    n1: f64,
    n2: f64,
    incident_angle: f64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            n1: DEFAULT_N1,
            n2: DEFAULT_N2,
            incident_angle: DEFAULT_INCIDENT_ANGLE,
        }
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator from validated settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut sim = Self::new();
        sim.set_n1(settings.n1);
        sim.set_n2(settings.n2);
        sim.set_incident_angle(settings.incident_angle);
        sim
    }

    pub fn n1(&self) -> f64 {
        self.n1
    }

    pub fn n2(&self) -> f64 {
        self.n2
    }

    pub fn incident_angle(&self) -> f64 {
        self.incident_angle
    }

    pub fn set_n1(&mut self, n1: f64) {
        self.n1 = constrain_index(n1);
    }

    pub fn set_n2(&mut self, n2: f64) {
        self.n2 = constrain_index(n2);
    }

    /// Sets the incidence angle in degrees, clamped to `[0, MAX_INCIDENT_ANGLE]`.
    pub fn set_incident_angle(&mut self, angle: f64) {
        let clamped = if angle.is_nan() {
            0.0
        } else {
            angle.clamp(0.0, MAX_INCIDENT_ANGLE)
        };
        if clamped != angle {
            log::warn!("Incident angle {} clamped to {}", angle, clamped);
        }
        self.incident_angle = clamped;
    }

    pub fn set_medium1(&mut self, material: Material) {
        self.n1 = material.index();
    }

    pub fn set_medium2(&mut self, material: Material) {
        self.n2 = material.index();
    }

    /// Preset matching the current incidence medium, if any.
    pub fn medium1(&self) -> Option<Material> {
        Material::matching(self.n1)
    }

    /// Preset matching the current transmission medium, if any.
    pub fn medium2(&self) -> Option<Material> {
        Material::matching(self.n2)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn solve(&self) -> Refraction {
        snell::solve(self.n1, self.n2, self.incident_angle)
    }

    /// Solves for the current inputs and lays out the ray diagram.
    pub fn evaluate(&self) -> Evaluation {
        let refraction = self.solve();
        log::debug!(
            "n1 = {}, n2 = {}, angle = {}: {:?}",
            self.n1,
            self.n2,
            self.incident_angle,
            refraction
        );
        let diagram = diagram::layout(
            self.incident_angle,
            refraction.refracted_angle,
            refraction.total_internal_reflection,
        );
        Evaluation {
            n1: self.n1,
            n2: self.n2,
            incident_angle: self.incident_angle,
            refraction,
            diagram,
        }
    }
}

fn constrain_index(n: f64) -> f64 {
    let floored = snell::floor_index(n);
    if floored != n {
        log::warn!("Refractive index {} floored to {}", n, floored);
    }
    floored
}
