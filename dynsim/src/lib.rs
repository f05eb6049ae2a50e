pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Particle, Pendulum, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Force, ForceSet, Gravity, Friction, Spring, G_EARTH};
pub use simulation::integrator::{euler_step, verlet_step, rk4_step, pendulum_rk4_step};
pub use simulation::solver::{BodyHandle, VerletSolver, EulerSolver};
pub use simulation::driver::{ParticleTrace, PendulumTrace};
pub use simulation::scenario::{Scenario, PendulumScenario};

pub use configuration::config::{
    IntegratorConfig, ModelConfig, EngineConfig, ParametersConfig, ParticleConfig,
    PendulumConfig, ForcesConfig, ScenarioConfig,
};

pub use benchmark::benchmark::{bench_forces, bench_integrators};
