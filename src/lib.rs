pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, Color, Role, System};
pub use simulation::vector::{unit, NVec3};
pub use simulation::error::SimError;
pub use simulation::integrator::step;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, RoleConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_interactions, bench_steps};
