//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and driver settings
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 1.0                  # gravitational constant, scaled units
//!   dt: 1.0                 # fixed time step
//!   t_end: 365.0            # simulated end time for the driver
//!
//! bodies:
//!   - role: star            # "star" or "planet"; planet if omitted
//!     m: 332940.0           # mass; the role default when omitted
//!     x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!   - role: planet
//!     m: 1.0
//!     x: [ 1.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0172, 0.0 ]
//!     color: [ 0.0, 0.7, 0.0 ]
//!
//! selected: 1               # body a display collaborator should follow
//! ```
//!
//! All quantities are expected in one mutually consistent scaled unit
//! system chosen by the scenario author; the engine maps this
//! configuration into its runtime representation without converting
//! units.

use serde::Deserialize;

/// Construction preset for a configured body
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleConfig {
    #[serde(rename = "star")] // large default mass, distinguishing red color
    Star,

    #[serde(rename = "planet")] // small default mass, green color
    Planet,
}

impl Default for RoleConfig {
    fn default() -> Self {
        RoleConfig::Planet
    }
}

/// Global physical constants and driver settings for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,     // gravitational constant, scaled units
    pub dt: f64,    // fixed time step size
    pub t_end: f64, // simulated end time for the driver loop
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub role: RoleConfig, // star or planet preset; planet when omitted
    #[serde(default)]
    pub m: Option<f64>, // mass; the role default when omitted
    pub x: [f64; 3], // initial position in simulation units
    pub v: [f64; 3], // initial velocity in simulation units per time unit
    #[serde(default)]
    pub color: Option<[f32; 3]>, // renderer color; the role default when omitted
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // constants and driver settings
    pub bodies: Vec<BodyConfig>, // initial state of the system
    #[serde(default)]
    pub selected: Option<usize>, // body the display should follow, if any
}
