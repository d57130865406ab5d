//! The drift phase and the combined kick-drift tick.
//!
//! The scheme is deliberately the semi-implicit one: the kick
//! ([`System::calc_interactions`]) folds the velocity update into the
//! pair pass using pre-step positions, and the drift below then moves
//! every position a full step along the freshly kicked velocity. Do not
//! reorder, and do not replace with velocity-Verlet: scenario
//! calibration (the Sun+Earth orbit in particular) depends on this exact
//! ordering.

use crate::simulation::error::SimError;
use crate::simulation::states::System;

impl System {
    /// Drift: advance every body a full step along its current velocity,
    /// then advance the clock. Velocities stay as the latest kick set
    /// them.
    pub fn do_step(&mut self) {
        let dt = self.dt;
        for body in self.bodies.iter_mut() {
            body.advance(dt);
        }
        self.t += dt;
    }
}

/// One full tick: kick, then drift, in that order.
///
/// This is the required calling order for every tick. A drift without
/// the preceding kick produces velocities that do not reflect the tick's
/// gravity; keeping the phases paired is the caller's obligation and is
/// not detected at runtime.
pub fn step(sys: &mut System) -> Result<(), SimError> {
    sys.calc_interactions()?;
    sys.do_step();
    Ok(())
}
