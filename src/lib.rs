//! Refraction and reflection of light at a single planar interface.
//!
//! Given the refractive indices of two homogeneous, non-absorbing media and
//! an incidence angle, the crate computes the refraction angle, the critical
//! angle, whether the ray is totally internally reflected, and the Fresnel
//! reflectance and transmittance. The results then drive a deterministic ray
//! diagram that can be rendered as SVG.
//!
//! # Modules
//!
//! - [`snell`]: the solver, from indices and angle to [`result::Refraction`]
//! - [`fresnel`]: unpolarized reflectance from the incidence and refraction angles
//! - [`diagram`]: ray segments and angle arcs on a fixed canvas
//! - [`render`]: SVG output for a diagram
//! - [`simulator`]: constrained inputs with reset and evaluation
//! - [`sweep`]: parallel evaluation over a range of incidence angles
//! - [`materials`]: reference indices of common media
//! - [`settings`]: configuration files, environment and command line
//! - [`output`]: writing results to disk

pub mod diagram;
pub mod fresnel;
pub mod materials;
pub mod output;
pub mod render;
pub mod result;
pub mod settings;
pub mod simulator;
pub mod snell;
pub mod sweep;
