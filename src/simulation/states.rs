//! Core state types for the planetary simulation.
//!
//! Defines the point-mass [`Body`] (with its renderer-facing display
//! size) and the [`System`] that owns the body collection, the scaled
//! physical constants, and the simulation clock. The stepping algorithm
//! itself lives in `forces` (kick) and `integrator` (drift).

use crate::simulation::error::SimError;
use crate::simulation::vector::NVec3;

/// RGB color tag consumed by an external renderer; no physics meaning
pub type Color = [f32; 3];

/// Construction preset for a body. Stars and planets share one struct
/// and one code path; the role only selects default mass and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Star,
    Planet,
}

impl Role {
    /// Default mass in scaled units when a scenario omits one
    pub fn default_mass(self) -> f64 {
        match self {
            Role::Star => 10_000.0,
            Role::Planet => 10.0,
        }
    }

    /// Default display color
    pub fn default_color(self) -> Color {
        match self {
            Role::Star => [1.0, 0.0, 0.0],
            Role::Planet => [0.0, 1.0, 0.0],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub m: f64,       // mass, strictly positive
    pub x: NVec3,     // position
    pub v: NVec3,     // velocity, written only by the kick pass
    pub role: Role,   // preset tag, star-like or planet-like
    pub color: Color, // renderer hint
    display_size0: f64, // mass-derived base size
    display_size: f64,  // base size plus x offset, refreshed every drift
}

impl Body {
    /// Smallest rendered size, in display units
    pub const MIN_DISPLAY_SIZE: f64 = 50.0;
    /// Log base of the mass-to-size mapping
    pub const DISPLAY_LOG_BASE: f64 = 1.1;

    /// Build a body with an explicit role and color.
    ///
    /// Fails with [`SimError::InvalidMass`] unless `m` is finite and
    /// strictly positive. The invariant is checked here once and never
    /// re-checked at runtime.
    pub fn new(role: Role, m: f64, x: NVec3, v: NVec3, color: Color) -> Result<Self, SimError> {
        if !m.is_finite() || m <= 0.0 {
            return Err(SimError::InvalidMass { mass: m });
        }
        let display_size0 = (m.ln() / Self::DISPLAY_LOG_BASE.ln()).max(Self::MIN_DISPLAY_SIZE);
        let mut body = Self {
            m,
            x,
            v,
            role,
            color,
            display_size0,
            display_size: 0.0,
        };
        body.refresh_display_size();
        Ok(body)
    }

    /// Star-like preset with the distinguishing red color
    pub fn star(m: f64, x: NVec3, v: NVec3) -> Result<Self, SimError> {
        Self::new(Role::Star, m, x, v, Role::Star.default_color())
    }

    /// Planet-like preset
    pub fn planet(m: f64, x: NVec3, v: NVec3) -> Result<Self, SimError> {
        Self::new(Role::Planet, m, x, v, Role::Planet.default_color())
    }

    /// Drift: move the position along the current velocity for `dt`,
    /// then refresh the display size from the new position. The velocity
    /// itself is not touched here; only the kick pass writes it.
    pub fn advance(&mut self, dt: f64) {
        self.x += self.v * dt;
        self.refresh_display_size();
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    /// Rendered size hint: mass-derived base plus the x positional offset
    pub fn display_size(&self) -> f64 {
        self.display_size
    }

    fn refresh_display_size(&mut self) {
        self.display_size = self.display_size0 + self.x.x;
    }
}

/// The simulated system: bodies, scaled constants, clock.
///
/// Stepping is two-phase and the order is part of the public contract:
/// call [`System::calc_interactions`] (kick), then [`System::do_step`]
/// (drift), once per tick. A drift without the preceding kick leaves
/// velocities that do not reflect the tick's gravity.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // insertion-ordered, fixed after setup
    pub g: f64,  // gravitational constant in the scenario's scaled units
    pub dt: f64, // fixed time step, scaled units
    pub t: f64,  // elapsed simulated time
    pub selected: Option<usize>, // display collaborator's focus, unused by physics
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            g: 1.0,
            dt: 1.0,
            t: 0.0,
            selected: None,
        }
    }

    /// Set the scaled gravitational constant and the fixed time step.
    ///
    /// Both are expected in one mutually consistent unit system chosen by
    /// the scenario; no conversion happens here or anywhere else in the
    /// core.
    pub fn set_constants(&mut self, g: f64, dt: f64) -> Result<(), SimError> {
        if !g.is_finite() {
            return Err(SimError::InvalidConstant { name: "g", value: g });
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidConstant { name: "dt", value: dt });
        }
        self.g = g;
        self.dt = dt;
        Ok(())
    }

    /// Append a body during setup. Returns the body's index, which stays
    /// stable for the whole run: bodies are never removed or merged.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Total linear momentum of the system
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |acc, b| acc + b.momentum())
    }

    /// Opt-in validation pass over the assembled state: every position
    /// and velocity finite, no two bodies coincident.
    ///
    /// Meant to run once after assembly. Pathological-but-finite values
    /// appearing later in a run propagate as ordinary floats; detecting
    /// them is a diagnostic concern, not a stepping one.
    pub fn validate(&self) -> Result<(), SimError> {
        for (index, b) in self.bodies.iter().enumerate() {
            let finite = b.x.iter().all(|c| c.is_finite()) && b.v.iter().all(|c| c.is_finite());
            if !finite {
                return Err(SimError::NonFiniteState { index });
            }
        }
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if self.bodies[i].x == self.bodies[j].x {
                    return Err(SimError::Singularity { i, j });
                }
            }
        }
        Ok(())
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
