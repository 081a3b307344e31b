//! Incidence angle sweeps over a fixed pair of media.
//!
//! A sweep evaluates the solver at evenly spaced incidence angles from
//! normal incidence up to [`MAX_INCIDENT_ANGLE`], which traces the
//! reflectance curve and shows where total internal reflection sets in.
//! Every angle is an independent problem, so the sweep is evaluated in
//! parallel with rayon.

use std::path::Path;

use anyhow::{ensure, Result};
use rayon::prelude::*;

use crate::output;
use crate::result::Refraction;
use crate::settings::MAX_INCIDENT_ANGLE;
use crate::snell;


/// A set of solver evaluations at evenly spaced incidence angles.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub n1: f64,
    pub n2: f64,
    pub angles: Vec<f64>,        // incidence angles in degrees
    pub results: Vec<Refraction>, // one per angle once solved
}

impl Sweep {
    /// Creates a sweep over `num_angles` angles from 0 to [`MAX_INCIDENT_ANGLE`].
    pub fn new(n1: f64, n2: f64, num_angles: usize) -> Result<Self> {
        ensure!(num_angles >= 2, "A sweep needs at least 2 angles, got {}", num_angles);

        let step = MAX_INCIDENT_ANGLE / (num_angles - 1) as f64;
        let angles = (0..num_angles)
            .map(|i| (i as f64 * step).min(MAX_INCIDENT_ANGLE))
            .collect();

        Ok(Self {
            n1,
            n2,
            angles,
            results: Vec::new(),
        })
    }

    /// Solves every angle in parallel.
    pub fn solve(&mut self) {
        let (n1, n2) = (self.n1, self.n2);
        self.results = self
            .angles
            .par_iter()
            .map(|angle| snell::solve(n1, n2, *angle))
            .collect();
        log::debug!("Solved sweep of {} angles", self.results.len());
    }

    /// First swept angle at which the ray is totally internally reflected.
    pub fn tir_onset(&self) -> Option<f64> {
        self.angles
            .iter()
            .zip(self.results.iter())
            .find(|(_, result)| result.total_internal_reflection)
            .map(|(angle, _)| *angle)
    }

    /// Table rows: angle, refracted angle (NaN under TIR), reflectance, transmittance, TIR flag.
    pub fn rows(&self) -> Vec<[f64; 5]> {
        self.angles
            .iter()
            .zip(self.results.iter())
            .map(|(angle, result)| {
                [
                    *angle,
                    result.refracted_angle.unwrap_or(f64::NAN),
                    result.reflectance,
                    result.transmittance,
                    if result.total_internal_reflection { 1.0 } else { 0.0 },
                ]
            })
            .collect()
    }

    /// Write the sweep table to a file
    pub fn writeup(&self, path: &Path) -> Result<()> {
        let rows = self.rows();
        output::writeup(
            path,
            "angle refracted reflectance transmittance tir",
            rows.iter().map(|row| row.as_slice()),
        )
    }
}
