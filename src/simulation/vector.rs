//! Vector type used across the simulation.
//!
//! Positions, velocities and forces are all [`NVec3`], an alias for
//! `nalgebra::Vector3<f64>`. Addition, subtraction, scalar scaling and
//! `norm()` come straight from nalgebra; the only thing added here is a
//! fallible unit-vector helper.

use nalgebra::Vector3;

use crate::simulation::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Unit vector along `v`.
///
/// Fails with [`SimError::ZeroVector`] when `v` has zero magnitude. The
/// force pass checks separation before calling this, so hitting the error
/// means a contract violation higher up, not an expected condition.
pub fn unit(v: &NVec3) -> Result<NVec3, SimError> {
    v.try_normalize(0.0).ok_or(SimError::ZeroVector)
}
