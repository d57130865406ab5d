//! Wall-clock timing for the kick pass and for full kick-drift steps.
//!
//! Builds deterministic body clouds over a range of system sizes, warms
//! up, and prints a timing table. Reached through the binary's `--bench`
//! flag.

use std::time::Instant;

use crate::simulation::error::SimError;
use crate::simulation::integrator;
use crate::simulation::states::{Body, System};
use crate::simulation::vector::NVec3;

/// Deterministic cloud of `n` unit-mass planets
fn cloud(n: usize) -> Result<System, SimError> {
    let mut system = System::new();
    system.set_constants(0.1, 0.001)?;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        system.add_body(Body::planet(1.0, x, NVec3::zeros())?);
    }

    Ok(system)
}

/// Time a single kick pass over a range of system sizes
pub fn bench_interactions() -> Result<(), SimError> {
    let ns = [200, 400, 800, 1600, 3200];

    for n in ns {
        let mut sys = cloud(n)?;

        // Warm up
        sys.calc_interactions()?;

        let t0 = Instant::now();
        sys.calc_interactions()?;
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, kick = {elapsed:8.6} s");
    }

    Ok(())
}

/// Time full kick-drift ticks
pub fn bench_steps() -> Result<(), SimError> {
    let ns = [200, 400, 800, 1600];
    let steps = 10;

    for n in ns {
        let mut sys = cloud(n)?;

        // Warm up one tick before timing
        integrator::step(&mut sys)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            integrator::step(&mut sys)?;
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {steps} steps = {elapsed:8.6} s ({:8.6} s/step)",
            elapsed / steps as f64
        );
    }

    Ok(())
}
