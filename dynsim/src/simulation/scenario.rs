//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces runtime bundles:
//! - `Scenario` for the particle model, containing numerical parameters,
//!   the integrator selection, the particle at t = 0, and the active
//!   force set (`ForceSet`)
//! - `PendulumScenario` for the pendulum model
//!
//! The driver methods on these bundles (see `driver.rs`) run the simulation
//! loop and record the time-series traces consumed by callers.

use anyhow::{anyhow, Result};

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::simulation::forces::{ForceSet, Friction, Gravity, Spring, G_EARTH};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, Pendulum};

/// Default restitution for the ground bounce when the scenario omits it
const DEFAULT_RESTITUTION: f64 = 0.8;

/// A fully-initialized particle simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the numerical parameters, the chosen integrator, the current
/// particle state, and the set of active force laws
pub struct Scenario {
    pub parameters: Parameters,
    pub integrator: IntegratorConfig,
    pub particle: Particle,
    pub forces: ForceSet,
}

impl Scenario {
    /// Build a runtime particle scenario from configuration.
    /// Fails when the config lacks a `particle` section.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let pc = cfg
            .particle
            .ok_or_else(|| anyhow!("particle scenario needs a `particle` section"))?;

        // Particle: map config vectors -> nalgebra vectors, at t = 0
        let particle = Particle::new(
            pc.m,
            NVec2::new(pc.x[0], pc.x[1]),
            NVec2::new(pc.v[0], pc.v[1]),
        );

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            restitution: p_cfg.restitution.unwrap_or(DEFAULT_RESTITUTION),
        };

        // Forces: construct a ForceSet and register each configured term
        let f_cfg = cfg.forces;
        let mut forces = ForceSet::new();
        if let Some(g_cfg) = f_cfg.gravity {
            forces = forces.with(Gravity {
                g: g_cfg.g.unwrap_or(G_EARTH),
            });
        }
        if let Some(fr_cfg) = f_cfg.friction {
            forces = forces.with(Friction {
                coefficient: fr_cfg.coefficient,
            });
        }
        if let Some(s_cfg) = f_cfg.spring {
            forces = forces.with(Spring {
                anchor: NVec2::new(s_cfg.anchor[0], s_cfg.anchor[1]),
                k: s_cfg.k,
                rest_length: s_cfg.rest_length,
            });
        }

        Ok(Self {
            parameters,
            integrator: cfg.engine.integrator,
            particle,
            forces,
        })
    }
}

// =========================================================================================
// Pendulum below
// =========================================================================================

/// A fully-initialized pendulum simulation scenario
///
/// The pendulum carries its own gravity and damping, so unlike [`Scenario`]
/// there is no force set to build; the bundle is just parameters plus state
pub struct PendulumScenario {
    pub parameters: Parameters,
    pub pendulum: Pendulum,
}

impl PendulumScenario {
    /// Build a runtime pendulum scenario from configuration.
    /// Fails when the config lacks a `pendulum` section.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let pc = cfg
            .pendulum
            .ok_or_else(|| anyhow!("pendulum scenario needs a `pendulum` section"))?;

        let pendulum = Pendulum {
            length: pc.length,
            mass: pc.mass,
            g: pc.gravity,
            damping: pc.damping,
            angle: pc.angle,
            angular_velocity: pc.angular_velocity,
        };

        let parameters = Parameters {
            t_end: cfg.parameters.t_end,
            h0: cfg.parameters.h0,
            restitution: cfg.parameters.restitution.unwrap_or(DEFAULT_RESTITUTION),
        };

        Ok(Self {
            parameters,
            pendulum,
        })
    }
}
