//! Core state types for the dynamics simulation.
//!
//! Defines the two simulated entities:
//! - `Particle` - Cartesian 2D point mass using `NVec2`
//! - `Pendulum` - 1-DOF angular oscillator (angle, angular velocity)
//!
//! Both are mutated in place by the integrators; derived quantities
//! (energies, momentum) are computed from the current state on demand.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// A 2D point mass.
///
/// Preconditions (not validated): `m > 0`. A zero or negative mass makes
/// `apply_force` divide by zero and the resulting NaN/Inf propagates.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub a: NVec2, // acceleration (m/s^2), cached from the last apply_force
    pub m: f64,   // mass (kg)
}

impl Particle {
    /// Create a particle with the given initial state and zero acceleration
    pub fn new(m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            m,
        }
    }

    /// Set the cached acceleration from a net force: a = F / m
    ///
    /// The cached value is overwritten on every call; it is not an
    /// independent source of truth
    pub fn apply_force(&mut self, force: NVec2) {
        self.a = force / self.m;
    }

    /// Kinetic energy: KE = 0.5 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.dot(&self.v)
    }

    /// Linear momentum: p = m v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

// =========================================================================================
// Pendulum below
// =========================================================================================

/// A simple pendulum: point mass on a rigid massless rod.
///
/// Gravity and damping are parameters of the pendulum itself, not separable
/// force contributions. The angular model is self-contained, unlike
/// [`Particle`] which composes forces through a force set.
///
/// The angle is signed and unbounded (never wrapped into [-pi, pi]).
///
/// Preconditions (not validated): `length > 0`, `mass > 0`.
#[derive(Debug, Clone)]
pub struct Pendulum {
    pub length: f64,           // rod length (m)
    pub mass: f64,             // bob mass (kg)
    pub g: f64,                // gravitational acceleration (m/s^2)
    pub damping: f64,          // linear angular-velocity damping coefficient, >= 0
    pub angle: f64,            // angle from vertical (rad)
    pub angular_velocity: f64, // angular velocity (rad/s)
}

impl Pendulum {
    /// Angular acceleration from the equation of motion:
    /// theta'' = -(g/L) sin(theta) - damping * omega
    pub fn angular_acceleration(&self) -> f64 {
        let gravity_term = -(self.g / self.length) * self.angle.sin();
        let damping_term = -self.damping * self.angular_velocity;
        gravity_term + damping_term
    }

    /// Kinetic energy: KE = 0.5 I omega^2 with I = m L^2 for a point mass
    pub fn kinetic_energy(&self) -> f64 {
        let moment_of_inertia = self.mass * self.length * self.length;
        0.5 * moment_of_inertia * self.angular_velocity * self.angular_velocity
    }

    /// Potential energy above the rest point: PE = m g L (1 - cos(theta))
    pub fn potential_energy(&self) -> f64 {
        let height = self.length * (1.0 - self.angle.cos());
        self.mass * self.g * height
    }

    /// Total mechanical energy KE + PE
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Small-angle period T = 2 pi sqrt(L/g). Informational only, the
    /// integrators never use it
    pub fn period_small_angle(&self) -> f64 {
        2.0 * std::f64::consts::PI * (self.length / self.g).sqrt()
    }
}
