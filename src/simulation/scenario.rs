//! Build fully-initialized simulation scenarios.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - driver options (`Engine`)
//! - assembled, validated system state (`System` with bodies at t = 0)
//!
//! Also provides the collection's classic Sun+Earth setup as a built-in
//! preset, pinning the scaled unit system it was calibrated in.

use crate::configuration::config::{BodyConfig, RoleConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::states::{Body, Role, System};
use crate::simulation::vector::NVec3;

/// A fully-initialized runtime scenario: driver options plus the system
/// state at t = 0.
pub struct Scenario {
    pub engine: Engine,
    pub system: System,
}

impl Scenario {
    /// Map a parsed configuration into runtime state.
    ///
    /// Role presets fill in omitted mass and color; the assembled system
    /// is validated (finite state, no coincident bodies) before it is
    /// returned.
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let mut system = System::new();
        system.set_constants(cfg.parameters.g, cfg.parameters.dt)?;

        for bc in &cfg.bodies {
            system.add_body(runtime_body(bc)?);
        }

        if let Some(idx) = cfg.selected {
            if idx >= system.bodies.len() {
                return Err(SimError::BadConfig {
                    reason: format!("selected index {idx} out of range"),
                });
            }
            system.selected = Some(idx);
        }

        system.validate()?;

        Ok(Self {
            engine: Engine::new(cfg.parameters.t_end),
            system,
        })
    }

    /// The Sun+Earth system in day / Earth-orbit-radius / Earth-mass
    /// units, one simulated year long.
    ///
    /// The scaled gravitational constant is `G_SI * M_m * T_m^2 / R_m^3`;
    /// in these units the Earth's circular orbital speed comes out as
    /// 0.0172 orbit radii per day.
    pub fn sun_earth() -> Result<Self, SimError> {
        // Unit scales: one day, one Earth-orbit radius, one Earth mass
        const T_M: f64 = 8.640e4; // seconds per time unit
        const R_M: f64 = 1.496e11; // meters per length unit
        const M_M: f64 = 5.973e24; // kilograms per mass unit
        const G_SI: f64 = 6.674e-11;

        let g = G_SI * M_M * T_M * T_M / (R_M * R_M * R_M);

        let mut system = System::new();
        system.set_constants(g, 1.0)?;

        // Sun at rest in the center, Earth on a circular orbit
        system.add_body(Body::star(332_940.0, NVec3::zeros(), NVec3::zeros())?);
        let earth = system.add_body(Body::planet(
            1.0,
            NVec3::new(1.0, 0.0, 0.0),
            NVec3::new(0.0, 0.0172, 0.0),
        )?);
        system.selected = Some(earth);

        system.validate()?;

        Ok(Self {
            engine: Engine::new(365.0),
            system,
        })
    }
}

/// Map a `BodyConfig` to a runtime `Body`, filling role defaults
fn runtime_body(bc: &BodyConfig) -> Result<Body, SimError> {
    let role = match bc.role {
        RoleConfig::Star => Role::Star,
        RoleConfig::Planet => Role::Planet,
    };
    let m = bc.m.unwrap_or_else(|| role.default_mass());
    let color = bc.color.unwrap_or_else(|| role.default_color());
    Body::new(
        role,
        m,
        NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
        NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
        color,
    )
}
