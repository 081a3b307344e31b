//! Fresnel equations for unpolarized light at a planar interface.
//!
//! This module computes how the intensity of a ray splits between the
//! reflected and the refracted direction once the refraction angle is known.
//! Both media are treated as homogeneous and non-absorbing, so the
//! amplitude coefficients are real and can be written in terms of the
//! incidence and refraction angles alone.
//!
//! The Fresnel calculations provide:
//! - Amplitude reflection coefficients for s and p polarizations
//! - Unpolarized reflectance as the average of the two intensities
//! - A stable fallback where the sum angle makes the formulas singular
//!
//! # Physical Foundation
//!
//! With `θi` the incidence angle and `θt` the refraction angle:
//! - `rs = sin(θi − θt) / sin(θi + θt)`
//! - `rp = tan(θi − θt) / tan(θi + θt)`
//! - `R = (rs² + rp²) / 2`

use crate::settings::DEGENERATE_EPSILON;


/// Computes the amplitude reflection coefficients `(rs, rp)`.
///
/// Returns `None` when `sin(θi + θt)` or `tan(θi + θt)` is within
/// [`DEGENERATE_EPSILON`] of zero, which happens at normal incidence where
/// both coefficients become `0 / 0`.
pub fn refl_coefficients(theta_i: f64, theta_t: f64) -> Option<(f64, f64)> {
    let sum_sin = (theta_i + theta_t).sin();
    let sum_tan = (theta_i + theta_t).tan();

    if sum_sin.abs() <= DEGENERATE_EPSILON || sum_tan.abs() <= DEGENERATE_EPSILON {
        return None;
    }

    let rs = (theta_i - theta_t).sin() / sum_sin;
    let rp = (theta_i - theta_t).tan() / sum_tan;
    Some((rs, rp))
}

/// Computes the unpolarized reflectance in percent.
///
/// **Context**: Light crossing the interface is split into a reflected and a
/// transmitted part. For unpolarized light the reflected intensity is the
/// mean of the s and p intensities.
///
/// **How it Works**: Squares and averages the amplitude coefficients from
/// [`refl_coefficients`], scales to percent and clamps to `[0, 100]`. A
/// degenerate sum angle reports no reflection, and a non-finite result is
/// coerced to zero.
pub fn reflectance(theta_i: f64, theta_t: f64) -> f64 {
    match refl_coefficients(theta_i, theta_t) {
        Some((rs, rp)) => {
            let r = (rs * rs + rp * rp) / 2.0 * 100.0;
            if r.is_finite() {
                r.clamp(0.0, 100.0)
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

/// Transmittance in percent that complements a reflectance.
pub fn transmittance(reflectance: f64) -> f64 {
    (100.0 - reflectance).max(0.0)
}
