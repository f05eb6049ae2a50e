//! Force contributors for the particle model
//!
//! Defines the [`Force`] trait, the individual force laws (gravity,
//! kinetic friction, anchored spring) and [`ForceSet`], which sums an
//! arbitrary number of contributions into a single net force vector

use crate::simulation::states::{NVec2, Particle};

/// Standard gravitational acceleration at the surface (m/s^2)
pub const G_EARTH: f64 = 9.81;

/// Below this threshold a direction cannot be normalized reliably, so the
/// friction and spring laws return a zero force instead of dividing by a
/// vanishing norm
pub const SINGULAR_EPS: f64 = 1e-6;

/// Trait for force sources acting on a [`Particle`]
/// Implementations return their contribution for the particle's current state
pub trait Force {
    fn force(&self, particle: &Particle) -> NVec2;
}

/// Collection of force terms (gravity, friction, spring, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single net force vector
///
/// Summation is plain vector addition, so the order in which terms are
/// registered never affects the result
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Number of registered terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no terms are registered
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Net force on `particle` at its current state: the sum of all
    /// registered contributions
    pub fn net_force(&self, particle: &Particle) -> NVec2 {
        let mut total = NVec2::zeros();
        // Iterate over all force contributors
        for term in &self.terms {
            total += term.force(particle);
        }
        total
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================================
// Individual force laws below
// =========================================================================================

/// Uniform downward gravity: F = [0, -m g]
pub struct Gravity {
    pub g: f64, // gravitational acceleration
}

impl Default for Gravity {
    fn default() -> Self {
        Self { g: G_EARTH }
    }
}

impl Force for Gravity {
    fn force(&self, particle: &Particle) -> NVec2 {
        NVec2::new(0.0, -particle.m * self.g)
    }
}

/// Simplified kinetic friction.
///
/// The magnitude is speed-independent (Coulomb-like, `mu * m * g`), with the
/// direction always opposite the current velocity. This is deliberately NOT
/// quadratic aerodynamic drag, even though user-facing layers tend to label
/// it "air resistance".
pub struct Friction {
    pub coefficient: f64, // friction coefficient mu
}

impl Force for Friction {
    fn force(&self, particle: &Particle) -> NVec2 {
        let speed = particle.v.norm();
        // A resting particle has no motion to oppose, and the direction
        // would be a division by a vanishing norm
        if speed < SINGULAR_EPS {
            return NVec2::zeros();
        }

        let direction = particle.v / speed; // unit vector along the motion
        let magnitude = self.coefficient * particle.m * G_EARTH;
        -magnitude * direction
    }
}

/// Hooke's-law spring anchored at a fixed point.
///
/// The restoring force is `-k * (|d| - rest_length)` along the unit vector
/// from the anchor to the particle: attractive when stretched past the rest
/// length, repulsive when compressed below it, zero exactly at it.
pub struct Spring {
    pub anchor: NVec2,    // fixed anchor point
    pub k: f64,           // spring constant
    pub rest_length: f64, // natural length, restoring force is zero here
}

impl Force for Spring {
    fn force(&self, particle: &Particle) -> NVec2 {
        let displacement = particle.x - self.anchor;
        let distance = displacement.norm();

        // Particle sitting on the anchor: the direction is singular
        if distance < SINGULAR_EPS {
            return NVec2::zeros();
        }

        // F = -k (|d| - L0) d_hat
        let extension = distance - self.rest_length;
        let direction = displacement / distance;
        -self.k * extension * direction
    }
}
