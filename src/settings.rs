use anyhow::{ensure, Context, Result};
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::materials::Material;

/// Smallest refractive index accepted; lower values are floored to it.
pub const MIN_REFR_INDEX: f64 = 1e-4;
/// Largest incidence angle in degrees. Grazing incidence is excluded.
pub const MAX_INCIDENT_ANGLE: f64 = 89.9;
/// Threshold below which `sin` or `tan` of the Fresnel sum angle is treated as zero.
pub const DEGENERATE_EPSILON: f64 = 1e-6;
/// Maximum distance between an index and a preset for the preset to match.
pub const MATERIAL_MATCH_TOLERANCE: f64 = 1e-3;
/// Default refractive index of the incidence medium (air).
pub const DEFAULT_N1: f64 = 1.0003;
/// Default refractive index of the transmission medium (water).
pub const DEFAULT_N2: f64 = 1.333;
/// Default incidence angle in degrees.
pub const DEFAULT_INCIDENT_ANGLE: f64 = 30.0;
/// Default file name for the angle sweep table.
pub const DEFAULT_SWEEP_FILE: &str = "sweep.dat";


/// Runtime configuration for the application.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub n1: f64,
    pub n2: f64,
    pub incident_angle: f64,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub sweep: Option<usize>,
    #[serde(default = "default_sweep_file")]
    pub sweep_file: String,
}

fn default_sweep_file() -> String {
    DEFAULT_SWEEP_FILE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            n1: DEFAULT_N1,
            n2: DEFAULT_N2,
            incident_angle: DEFAULT_INCIDENT_ANGLE,
            svg: None,
            json: None,
            sweep: None,
            sweep_file: default_sweep_file(),
        }
    }
}

impl Settings {
    /// Parses and validates settings from a TOML document.
    pub fn from_toml(s: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(s).context("Error deserializing settings")?;
        validate_config(&settings)?;
        Ok(settings)
    }
}

pub fn load_default_config() -> Result<Settings> {
    let snell_dir = retrieve_project_root()?;
    let default_config_file = snell_dir.join("config/default.toml");

    let settings = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .context("Error loading configuration")?;

    let config: Settings = settings
        .try_deserialize()
        .context("Error deserializing configuration")?;

    validate_config(&config)?;

    Ok(config)
}

/// Loads the configuration file, then environment variables, then command-line arguments.
pub fn load_config() -> Result<Settings> {
    let snell_dir = retrieve_project_root()?;

    let default_config_file = snell_dir.join("config/default.toml");
    let local_config = snell_dir.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        log::info!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        log::info!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("snell"))
        .build()
        .context("Error loading configuration")?;

    let mut config: Settings = settings
        .try_deserialize()
        .context("Error deserializing configuration")?;

    apply_cli_args(&mut config, CliArgs::parse());

    validate_config(&config)?;

    log::debug!("{:#?}", config);

    Ok(config)
}

fn apply_cli_args(config: &mut Settings, args: CliArgs) {
    if let Some(n1) = args.n1 {
        config.n1 = n1;
    } else if let Some(material) = args.m1 {
        config.n1 = material.index();
    }
    if let Some(n2) = args.n2 {
        config.n2 = n2;
    } else if let Some(material) = args.m2 {
        config.n2 = material.index();
    }
    if let Some(angle) = args.angle {
        config.incident_angle = angle;
    }
    if args.svg.is_some() {
        config.svg = args.svg;
    }
    if args.json.is_some() {
        config.json = args.json;
    }
    if args.sweep.is_some() {
        config.sweep = args.sweep;
    }
    if let Some(sweep_file) = args.sweep_file {
        config.sweep_file = sweep_file;
    }
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the SNELL_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
fn retrieve_project_root() -> Result<PathBuf> {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        return Ok(PathBuf::from(manifest_dir));
    }
    if let Ok(path) = env::var("SNELL_ROOT_DIR") {
        return Ok(PathBuf::from(path));
    }

    // Fallback: walk upward from the executable directory
    let exe_path = env::current_exe().context("Failed to get current executable path")?;
    exe_path
        .ancestors()
        .skip(1)
        .find(|dir| dir.join("config").is_dir())
        .map(|dir| dir.to_path_buf())
        .context("Could not find project root directory")
}

pub fn validate_config(config: &Settings) -> Result<()> {
    ensure!(
        config.n1.is_finite() && config.n1 >= MIN_REFR_INDEX,
        "Refractive index n1 must be finite and at least {}",
        MIN_REFR_INDEX
    );
    ensure!(
        config.n2.is_finite() && config.n2 >= MIN_REFR_INDEX,
        "Refractive index n2 must be finite and at least {}",
        MIN_REFR_INDEX
    );
    ensure!(
        (0.0..=MAX_INCIDENT_ANGLE).contains(&config.incident_angle),
        "Incident angle must be between 0 and {} degrees",
        MAX_INCIDENT_ANGLE
    );
    if let Some(num_angles) = config.sweep {
        ensure!(num_angles >= 2, "A sweep needs at least 2 angles");
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about = "Snell - refraction, reflection and total internal reflection at a planar interface")]
pub struct CliArgs {
    /// Refractive index of the incidence medium.
    #[arg(long, group = "medium1")]
    n1: Option<f64>,

    /// Preset material of the incidence medium.
    #[arg(long, value_enum, group = "medium1")]
    m1: Option<Material>,

    /// Refractive index of the transmission medium.
    #[arg(long, group = "medium2")]
    n2: Option<f64>,

    /// Preset material of the transmission medium.
    #[arg(long, value_enum, group = "medium2")]
    m2: Option<Material>,

    /// Incidence angle in degrees, measured from the surface normal.
    #[arg(short, long)]
    angle: Option<f64>,

    /// Write the ray diagram as SVG to this file.
    #[arg(long)]
    svg: Option<String>,

    /// Write the results and diagram geometry as JSON to this file.
    #[arg(long)]
    json: Option<String>,

    /// Evaluate this many evenly spaced incidence angles from 0 to the maximum.
    #[arg(long)]
    sweep: Option<usize>,

    /// Output file for the sweep table.
    #[arg(long, requires = "sweep")]
    sweep_file: Option<String>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let medium = |n: f64| match Material::matching(n) {
            Some(material) => material.name().to_string(),
            None => "Custom".to_string(),
        };
        write!(
            f,
            "Settings:
  - Medium 1 Refractive Index: {:.4} ({})
  - Medium 2 Refractive Index: {:.4} ({})
  - Incident Angle: {:.1}°
  ",
            self.n1,
            medium(self.n1),
            self.n2,
            medium(self.n2),
            self.incident_angle,
        )
    }
}
