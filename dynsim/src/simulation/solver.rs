//! Stateful solver wrappers around the step functions
//!
//! Verlet needs the position one step back for every particle it drives, so
//! [`VerletSolver`] owns that history. Particles are registered explicitly
//! and identified by an opaque [`BodyHandle`] issued from a monotonic
//! counter: handles are never reused, so a stale handle can never alias a
//! newer particle's history, and `unregister` releases the entry so nothing
//! accumulates across particle lifetimes.
//!
//! [`EulerSolver`] is the trivial stateless counterpart with the same
//! step-per-tick shape.

use std::collections::HashMap;

use crate::simulation::integrator::{euler_step, verlet_step};
use crate::simulation::states::{NVec2, Particle};

/// Opaque identity of a particle registered with a [`VerletSolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(u64);

/// Verlet integration solver.
/// Tracks, per registered particle, the position before the most recent
/// update, and supplies it as the previous position on the next step.
pub struct VerletSolver {
    pub dt: f64,                               // fixed step size
    next_id: u64,                              // monotonic handle counter, never reused
    previous_positions: HashMap<BodyHandle, NVec2>, // handle -> x_n-1
}

impl VerletSolver {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            next_id: 0,
            previous_positions: HashMap::new(),
        }
    }

    /// Register a particle and get its handle.
    /// The first `step` for a fresh handle has no history yet and takes the
    /// Euler fallback branch.
    pub fn register(&mut self) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        handle
    }

    /// Drop the stored history for `handle`.
    /// The handle stays dead: stepping it afterwards behaves like a first
    /// step again but stores fresh history, it can never see another
    /// particle's positions.
    pub fn unregister(&mut self, handle: BodyHandle) {
        self.previous_positions.remove(&handle);
    }

    /// Advance `particle` by one step under `force`.
    ///
    /// The position before the update is stored to serve as the previous
    /// position of the following step.
    pub fn step(&mut self, handle: BodyHandle, particle: &mut Particle, force: NVec2) {
        let prev = self.previous_positions.get(&handle).copied();

        // Current position becomes the next step's x_n-1
        let current = particle.x;

        verlet_step(particle, force, self.dt, prev);

        self.previous_positions.insert(handle, current);
    }
}

/// Euler integration solver. Holds no per-particle state.
pub struct EulerSolver {
    pub dt: f64, // fixed step size
}

impl EulerSolver {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }

    /// Advance `particle` by one step under `force`
    pub fn step(&self, particle: &mut Particle, force: NVec2) {
        euler_step(particle, force, self.dt);
    }
}
