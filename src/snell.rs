//! Snell's law at a single planar interface.
//!
//! This module maps a pair of refractive indices and an incidence angle to
//! everything that can be said about the ray at the interface: whether it
//! refracts at all, the refraction angle, the critical angle and the split
//! of intensity between reflection and transmission.
//!
//! The solver provides:
//! - Refraction angle from `n1 sin θ1 = n2 sin θ2`
//! - Detection of total internal reflection
//! - Critical angle for incidence from the denser medium
//! - Fresnel reflectance and transmittance in percent
//! - Speed and index ratios between the two media
//!
//! # Numerical policy
//!
//! [`solve`] is total over finite input. Indices are floored at
//! [`MIN_REFR_INDEX`], the inverse sine is fed a clamped argument, and the
//! near-singular Fresnel case falls back to full transmission. No branch
//! produces `NaN`.

use crate::fresnel;
use crate::result::Refraction;
use crate::settings::MIN_REFR_INDEX;


/// Computes the transmitted angle in radians from Snell's law.
///
/// Returns `None` when `|(n1 / n2) sin θi| > 1`, i.e. when no real
/// refraction angle exists and the ray is totally internally reflected.
pub fn get_theta_t(theta_i: f64, n1: f64, n2: f64) -> Option<f64> {
    let sin_theta_t = (n1 / n2) * theta_i.sin();
    if sin_theta_t.abs() > 1.0 {
        return None;
    }
    // guard against overshoot right at the critical angle
    Some(sin_theta_t.clamp(-1.0, 1.0).asin())
}

/// Critical angle in degrees for incidence from medium 1.
///
/// Only defined when `n1 > n2`; the ratio `n2 / n1` is then below one so the
/// inverse sine always exists.
pub fn critical_angle(n1: f64, n2: f64) -> Option<f64> {
    if n1 > n2 {
        Some((n2 / n1).asin().to_degrees())
    } else {
        None
    }
}

/// Solves the refraction problem for one set of inputs.
///
/// **Context**: Every change of the indices or of the incidence angle needs
/// a full, internally consistent set of results for display and for the ray
/// diagram. The caller is expected to constrain the angle to `[0, 90)`.
///
/// **How it Works**: Floors both indices, converts the angle to radians and
/// applies Snell's law. If no real refraction angle exists the result is
/// total internal reflection with 100 % reflectance. Otherwise the Fresnel
/// equations split the intensity. The critical angle and the velocity
/// ratios only depend on the indices.
///
/// # Example
/// ```rust
/// let result = snell::snell::solve(1.0003, 1.333, 30.0);
/// assert!(!result.total_internal_reflection);
/// ```
pub fn solve(n1: f64, n2: f64, incident_angle: f64) -> Refraction {
    let n1 = floor_index(n1);
    let n2 = floor_index(n2);
    let theta_i = incident_angle.to_radians();

    let (refracted_angle, reflectance, transmittance) = match get_theta_t(theta_i, n1, n2) {
        Some(theta_t) => {
            let reflectance = fresnel::reflectance(theta_i, theta_t);
            (
                Some(theta_t.to_degrees().max(0.0)),
                reflectance,
                fresnel::transmittance(reflectance),
            )
        }
        None => (None, 100.0, 0.0),
    };

    Refraction {
        total_internal_reflection: refracted_angle.is_none(),
        refracted_angle,
        reflection_angle: incident_angle,
        critical_angle: critical_angle(n1, n2),
        reflectance,
        transmittance,
        speed_ratio: if n2 != 0.0 { n1 / n2 } else { 1.0 },
        index_ratio: if n1 != 0.0 { n2 / n1 } else { 1.0 },
    }
}

/// Floors a refractive index at [`MIN_REFR_INDEX`]. Non-finite indices are floored too.
pub fn floor_index(n: f64) -> f64 {
    if n.is_finite() {
        n.max(MIN_REFR_INDEX)
    } else {
        MIN_REFR_INDEX
    }
}
