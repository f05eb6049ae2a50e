//! Simulation loops and recorded time-series output
//!
//! The driver methods run a fixed number of steps (`t_end / h0`), recording
//! the current state and derived energies before every step, then advancing
//! the entity by one integrator step. For the particle model a ground bounce
//! is applied after the step as a discrete post-correction: the position is
//! clamped to y = 0 and the vertical velocity inverted and damped by the
//! restitution factor. It is not a continuous constraint force.
//!
//! The traces are plain parallel columns, which is the whole contract the
//! visualization and UI layers consume: ordered samples, no feedback into
//! the core.

use crate::configuration::config::IntegratorConfig;
use crate::simulation::integrator::{euler_step, pendulum_rk4_step, rk4_step};
use crate::simulation::scenario::{PendulumScenario, Scenario};
use crate::simulation::solver::VerletSolver;

/// Recorded particle time series, one entry per step across all columns
#[derive(Debug, Clone, Default)]
pub struct ParticleTrace {
    pub time: Vec<f64>,           // sample times
    pub x: Vec<f64>,              // position x
    pub y: Vec<f64>,              // position y
    pub vx: Vec<f64>,             // velocity x
    pub vy: Vec<f64>,             // velocity y
    pub kinetic_energy: Vec<f64>, // 0.5 m |v|^2
}

impl ParticleTrace {
    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Recorded pendulum time series, one entry per step across all columns
#[derive(Debug, Clone, Default)]
pub struct PendulumTrace {
    pub time: Vec<f64>,             // sample times
    pub angle: Vec<f64>,            // angle (rad)
    pub angular_velocity: Vec<f64>, // angular velocity (rad/s)
    pub kinetic_energy: Vec<f64>,
    pub potential_energy: Vec<f64>,
    pub total_energy: Vec<f64>,     // KE + PE
}

impl PendulumTrace {
    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

impl Scenario {
    /// Run the particle simulation to `t_end`, recording one sample per step.
    ///
    /// Each iteration records the current state, advances one step with the
    /// configured integrator, then applies the ground bounce. Euler and
    /// Verlet take the net force computed once at the start of the step;
    /// RK4 re-evaluates the force set at each of its four stages.
    pub fn run(&mut self) -> ParticleTrace {
        let dt = self.parameters.h0;
        let restitution = self.parameters.restitution;
        let steps = (self.parameters.t_end / dt) as usize;

        // Verlet keeps previous-position history per particle; one particle
        // here, registered once for the whole run
        let mut solver = VerletSolver::new(dt);
        let handle = solver.register();

        let mut trace = ParticleTrace::default();

        for i in 0..steps {
            // Record state before stepping
            trace.time.push(i as f64 * dt);
            trace.x.push(self.particle.x.x);
            trace.y.push(self.particle.x.y);
            trace.vx.push(self.particle.v.x);
            trace.vy.push(self.particle.v.y);
            trace.kinetic_energy.push(self.particle.kinetic_energy());

            // Advance one step
            match self.integrator {
                IntegratorConfig::Euler => {
                    let net = self.forces.net_force(&self.particle);
                    euler_step(&mut self.particle, net, dt);
                }
                IntegratorConfig::Verlet => {
                    let net = self.forces.net_force(&self.particle);
                    solver.step(handle, &mut self.particle, net);
                }
                IntegratorConfig::Rk4 => {
                    let forces = &self.forces;
                    rk4_step(&mut self.particle, |p| forces.net_force(p), dt);
                }
            }

            // Ground bounce: clamp to the floor and damp the vertical speed
            if self.particle.x.y < 0.0 {
                self.particle.x.y = 0.0;
                self.particle.v.y *= -restitution;
            }
        }

        solver.unregister(handle);
        trace
    }
}

impl PendulumScenario {
    /// Run the pendulum simulation to `t_end`, recording one sample per step.
    /// The pendulum always integrates with RK4.
    pub fn run(&mut self) -> PendulumTrace {
        let dt = self.parameters.h0;
        let steps = (self.parameters.t_end / dt) as usize;

        let mut trace = PendulumTrace::default();

        for i in 0..steps {
            // Record state before stepping
            trace.time.push(i as f64 * dt);
            trace.angle.push(self.pendulum.angle);
            trace.angular_velocity.push(self.pendulum.angular_velocity);
            trace.kinetic_energy.push(self.pendulum.kinetic_energy());
            trace.potential_energy.push(self.pendulum.potential_energy());
            trace.total_energy.push(self.pendulum.total_energy());

            // Advance one step
            pendulum_rk4_step(&mut self.pendulum, dt);
        }

        trace
    }
}
