//! Headless driver for a simulation run.
//!
//! Owns the run-level options (how long to simulate) and the loop that
//! repeatedly applies the kick-drift tick until the clock reaches the
//! end time. Single-threaded and synchronous; stopping is just the loop
//! condition going false.

use log::{info, trace};

use crate::simulation::error::SimError;
use crate::simulation::integrator;
use crate::simulation::states::System;

#[derive(Debug, Clone)]
pub struct Engine {
    pub t_end: f64, // simulated end time in the scenario's units
}

impl Engine {
    pub fn new(t_end: f64) -> Self {
        Self { t_end }
    }

    /// Run the kick-drift loop until `sys.t` reaches `t_end`.
    pub fn run(&self, sys: &mut System) -> Result<(), SimError> {
        info!(
            "running {} bodies to t = {} with dt = {}",
            sys.bodies.len(),
            self.t_end,
            sys.dt
        );

        while sys.t < self.t_end {
            integrator::step(sys)?;
            trace!("t = {}", sys.t);
        }

        info!("finished at t = {}", sys.t);
        Ok(())
    }
}
