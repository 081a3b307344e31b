//! Reference refractive indices of common transparent media.
//!
//! The presets are the values offered next to the custom index inputs. The
//! solver itself only ever sees raw indices; a preset is a shortcut for
//! typing one, and [`Material::matching`] recognizes when a typed value is
//! close enough to a preset to be shown as one.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

use crate::settings::MATERIAL_MATCH_TOLERANCE;


/// A transparent medium with a tabulated refractive index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    Air,
    Ice,
    Water,
    Ethanol,
    Acrylic,
    CrownGlass,
    FlintGlass,
    Sapphire,
    Diamond,
}

impl Material {
    pub const ALL: [Material; 9] = [
        Material::Air,
        Material::Ice,
        Material::Water,
        Material::Ethanol,
        Material::Acrylic,
        Material::CrownGlass,
        Material::FlintGlass,
        Material::Sapphire,
        Material::Diamond,
    ];

    /// Refractive index of the medium.
    pub fn index(&self) -> f64 {
        match self {
            Material::Air => 1.0003,
            Material::Ice => 1.31,
            Material::Water => 1.333,
            Material::Ethanol => 1.361,
            Material::Acrylic => 1.49,
            Material::CrownGlass => 1.52,
            Material::FlintGlass => 1.62,
            Material::Sapphire => 1.77,
            Material::Diamond => 2.42,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Material::Air => "Air",
            Material::Ice => "Ice",
            Material::Water => "Water",
            Material::Ethanol => "Ethanol",
            Material::Acrylic => "Acrylic",
            Material::CrownGlass => "Crown Glass",
            Material::FlintGlass => "Flint Glass",
            Material::Sapphire => "Sapphire",
            Material::Diamond => "Diamond",
        }
    }

    /// Display label, name followed by the index.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.index())
    }

    /// First preset whose index lies within [`MATERIAL_MATCH_TOLERANCE`] of `value`.
    ///
    /// `None` means the value is a custom index.
    pub fn matching(value: f64) -> Option<Material> {
        Material::ALL
            .into_iter()
            .find(|m| (m.index() - value).abs() < MATERIAL_MATCH_TOLERANCE)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
