//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – model and integrator selection
//! - [`ParametersConfig`] – step size, duration, bounce restitution
//! - [`ParticleConfig`] / [`PendulumConfig`] – initial state
//! - [`ForcesConfig`]     – which force terms act on the particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example particle scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   model: "particle"       # or "pendulum"
//!   integrator: "verlet"    # or "euler" / "rk4"
//!
//! parameters:
//!   t_end: 5.0              # total simulation time
//!   h0: 0.01                # fixed step size
//!   restitution: 0.8        # ground bounce damping
//!
//! particle:
//!   m: 1.0
//!   x: [ 0.0, 10.0 ]
//!   v: [ 5.0, 0.0 ]
//!
//! forces:
//!   gravity:
//!     g: 9.81
//!   friction:
//!     coefficient: 0.1
//!   # spring:
//!   #   anchor: [ 0.0, 0.0 ]
//!   #   k: 1.0
//!   #   rest_length: 0.0
//! ```
//!
//! A pendulum scenario replaces the `particle` and `forces` sections with:
//!
//! ```yaml
//! pendulum:
//!   length: 2.0
//!   mass: 1.0
//!   angle: 1.5707963
//!   angular_velocity: 0.0
//!   damping: 0.0
//!   gravity: 9.81
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation (nalgebra vectors, boxed force terms).

use serde::Deserialize;

/// Which integrator method the engine uses to advance the particle.
/// The pendulum model always integrates with rk4
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler. One force evaluation per step
    Euler,

    #[serde(rename = "verlet")] // Position Verlet. Needs previous-position history, falls back to Euler on the first step
    Verlet,

    #[serde(rename = "rk4")] // Classical 4th-order Runge-Kutta, four force evaluations per step
    Rk4,
}

/// Which physical model the scenario simulates
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelConfig {
    #[serde(rename = "particle")] // Cartesian 2D point mass with composable forces
    Particle,

    #[serde(rename = "pendulum")] // 1-DOF angular oscillator
    Pendulum,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub model: ModelConfig,           // particle or pendulum
    pub integrator: IntegratorConfig, // time integrator for the particle model
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,               // total simulation time
    pub h0: f64,                  // fixed step size
    pub restitution: Option<f64>, // ground bounce damping, defaults to 0.8
}

/// Initial state for the particle model
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub m: f64,      // mass
    pub x: Vec<f64>, // initial position [x, y]
    pub v: Vec<f64>, // initial velocity [vx, vy]
}

/// Initial state and parameters for the pendulum model
#[derive(Deserialize, Debug)]
pub struct PendulumConfig {
    pub length: f64,           // rod length
    pub mass: f64,             // bob mass
    pub angle: f64,            // initial angle from vertical (rad)
    pub angular_velocity: f64, // initial angular velocity (rad/s)
    pub damping: f64,          // damping coefficient
    pub gravity: f64,          // gravitational acceleration
}

/// Gravity force term
#[derive(Deserialize, Debug)]
pub struct GravityConfig {
    pub g: Option<f64>, // gravitational acceleration, defaults to 9.81
}

/// Kinetic friction force term
#[derive(Deserialize, Debug)]
pub struct FrictionConfig {
    pub coefficient: f64, // friction coefficient
}

/// Anchored spring force term
#[derive(Deserialize, Debug)]
pub struct SpringConfig {
    pub anchor: Vec<f64>, // fixed anchor point [x, y]
    pub k: f64,           // spring constant
    pub rest_length: f64, // natural length
}

/// Force terms acting on the particle. Each present section registers one
/// term; absent sections are simply not registered
#[derive(Deserialize, Debug, Default)]
pub struct ForcesConfig {
    pub gravity: Option<GravityConfig>,
    pub friction: Option<FrictionConfig>,
    pub spring: Option<SpringConfig>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,             // model and integrator selection
    pub parameters: ParametersConfig,     // numerical parameters
    pub particle: Option<ParticleConfig>, // initial particle state (particle model)
    pub pendulum: Option<PendulumConfig>, // initial pendulum state (pendulum model)
    #[serde(default)]
    pub forces: ForcesConfig,             // force terms for the particle model
}
