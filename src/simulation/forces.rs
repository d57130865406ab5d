//! The interaction (kick) phase of the stepping scheme.
//!
//! One call walks every unordered body pair exactly once, computes the
//! Newtonian attraction from the positions as they stand at the start of
//! the pass, and applies the resulting velocity impulses immediately,
//! scaled by the system's fixed time step. Positions are never touched
//! here; the drift phase in `integrator` does that.

use crate::simulation::error::SimError;
use crate::simulation::states::System;
use crate::simulation::vector;

impl System {
    /// Pairwise gravity pass (the "kick").
    ///
    /// Visits each unordered pair (i, j) with i < j exactly once; a pair
    /// visited twice would double the applied impulse. Forces depend only
    /// on positions, and positions stay frozen for the whole pass, so an
    /// earlier pair's velocity update cannot leak into a later pair's
    /// force.
    ///
    /// Fails with [`SimError::Singularity`] when two bodies coincide;
    /// the pair cannot be skipped silently without losing the momentum it
    /// carries.
    pub fn calc_interactions(&mut self) -> Result<(), SimError> {
        let n = self.bodies.len();
        if n == 0 {
            return Ok(());
        }

        let g = self.g;
        let dt = self.dt;

        for i in 0..n {
            for j in (i + 1)..n {
                // Displacement from body i toward body j and its length.
                // i is pulled along +r, j along -r.
                let r = self.bodies[j].x - self.bodies[i].x;
                let d = r.norm();

                if d == 0.0 {
                    return Err(SimError::Singularity { i, j });
                }

                let mi = self.bodies[i].m;
                let mj = self.bodies[j].m;

                // Inverse-square law: |F| = G m_i m_j / d^2
                let f_mag = g * mi * mj / (d * d);

                // Separation is non-zero here, so the unit vector exists
                let f = vector::unit(&r)? * f_mag;

                // Newton's third law, applied once per pair: the same
                // force vector with opposite signs, each side scaled by
                // the receiving body's mass and the step's dt. This is
                // the semi-implicit kick: velocities move now, against
                // pre-step positions.
                self.bodies[i].v += f / mi * dt;
                self.bodies[j].v -= f / mj * dt;
            }
        }

        Ok(())
    }
}
