//! Fixed-step time integrators
//!
//! Provides the particle integrators (semi-implicit Euler, position Verlet,
//! classical RK4) and the pendulum RK4 step. All of them mutate the state
//! entity in place; the side effect is the only observable result.
//!
//! The two lower-order particle integrators take a precomputed net force,
//! treated as constant across the step. RK4 instead takes a force callback
//! and re-evaluates it at four perturbed states per step; the two contracts
//! are kept as distinct signatures so a stale fixed force can never be handed
//! to the algorithm that needs re-evaluation.

use crate::simulation::states::{NVec2, Particle, Pendulum};

/// Advance the particle by one semi-implicit (symplectic) Euler step.
///
/// The velocity is updated first and the position update then uses the
/// already-updated velocity:
///
/// - a     = F / m
/// - v_n+1 = v_n + a dt
/// - x_n+1 = x_n + v_n+1 dt
///
/// This ordering gives much better long-run energy behavior than textbook
/// explicit Euler and must not be swapped.
pub fn euler_step(particle: &mut Particle, force: NVec2, dt: f64) {
    // Cache a = F / m on the particle
    particle.apply_force(force);

    // Kick: v_n+1 = v_n + a dt
    particle.v += particle.a * dt;

    // Drift with the updated velocity: x_n+1 = x_n + v_n+1 dt
    particle.x += particle.v * dt;
}

/// Advance the particle by one position-Verlet step.
///
/// Verlet needs the position one step back. On the very first call there is
/// none, so `previous_position = None` falls back to a single Euler step; that
/// is the documented boundary condition, not an error. Afterwards:
///
/// - x_n+1 = 2 x_n - x_n-1 + a dt^2
/// - v_n+1 = (x_n+1 - x_n) / dt
///
/// The derived velocity is a central-difference estimate, one step stale
/// relative to the true instantaneous velocity. That is inherent to
/// velocity-free Verlet and acceptable here.
pub fn verlet_step(
    particle: &mut Particle,
    force: NVec2,
    dt: f64,
    previous_position: Option<NVec2>,
) {
    particle.apply_force(force);

    match previous_position {
        // First step: no history yet, take one Euler step instead
        None => euler_step(particle, force, dt),
        Some(prev) => {
            // x_n+1 = 2 x_n - x_n-1 + a dt^2
            let new_position = 2.0 * particle.x - prev + particle.a * (dt * dt);

            // v_n+1 = (x_n+1 - x_n) / dt
            particle.v = (new_position - particle.x) / dt;
            particle.x = new_position;
        }
    }
}

/// Advance the particle by one classical 4th-order Runge-Kutta step.
///
/// The force callback is evaluated four times, each time against the
/// particle's current (temporarily overwritten) fields. The callback must
/// read those live fields rather than a frozen snapshot: the 4th-order
/// accuracy comes precisely from evaluating the derivative at the perturbed
/// stage states. The final update combines the four stage derivatives with
/// weights (1, 2, 2, 1)/6 applied to the stage-0 state, not to the state
/// left behind by stage 3.
pub fn rk4_step<F>(particle: &mut Particle, force_fn: F, dt: f64)
where
    F: Fn(&Particle) -> NVec2,
{
    // Stage-0 state; the weighted combination at the end applies to this
    let x0 = particle.x;
    let v0 = particle.v;
    let m = particle.m;

    // k1: derivatives at the unperturbed state
    let f1 = force_fn(particle);
    let a1 = f1 / m;
    let v1 = v0;

    // k2: derivatives at the half-step state advanced with k1
    particle.x = x0 + 0.5 * v1 * dt;
    particle.v = v0 + 0.5 * a1 * dt;
    let f2 = force_fn(particle);
    let a2 = f2 / m;
    let v2 = v0 + 0.5 * a1 * dt;

    // k3: derivatives at the half-step state advanced with k2
    particle.x = x0 + 0.5 * v2 * dt;
    particle.v = v0 + 0.5 * a2 * dt;
    let f3 = force_fn(particle);
    let a3 = f3 / m;
    let v3 = v0 + 0.5 * a2 * dt;

    // k4: derivatives at the full-step state advanced with k3
    particle.x = x0 + v3 * dt;
    particle.v = v0 + a3 * dt;
    let f4 = force_fn(particle);
    let a4 = f4 / m;
    let v4 = v0 + a3 * dt;

    // Weighted combination, applied to the stage-0 state:
    // x_n+1 = x_n + dt/6 (v1 + 2 v2 + 2 v3 + v4)
    // v_n+1 = v_n + dt/6 (a1 + 2 a2 + 2 a3 + a4)
    particle.x = x0 + (dt / 6.0) * (v1 + 2.0 * v2 + 2.0 * v3 + v4);
    particle.v = v0 + (dt / 6.0) * (a1 + 2.0 * a2 + 2.0 * a3 + a4);
}

// =========================================================================================
// Pendulum below
// =========================================================================================

/// Advance the pendulum by one classical RK4 step over the state vector
/// (theta, omega), with derivatives
///
/// - d(theta)/dt = omega
/// - d(omega)/dt = -(g/L) sin(theta) - damping * omega
///
/// evaluated at each of the four stages.
pub fn pendulum_rk4_step(pendulum: &mut Pendulum, dt: f64) {
    let theta = pendulum.angle;
    let omega = pendulum.angular_velocity;

    // Derivatives of the (theta, omega) state vector
    let derivatives = |curr_theta: f64, curr_omega: f64| -> (f64, f64) {
        let d_theta = curr_omega;
        let gravity_term = -(pendulum.g / pendulum.length) * curr_theta.sin();
        let damping_term = -pendulum.damping * curr_omega;
        (d_theta, gravity_term + damping_term)
    };

    // k1 at the unperturbed state
    let (k1_theta, k1_omega) = derivatives(theta, omega);

    // k2 at the half step advanced with k1
    let (k2_theta, k2_omega) = derivatives(
        theta + 0.5 * dt * k1_theta,
        omega + 0.5 * dt * k1_omega,
    );

    // k3 at the half step advanced with k2
    let (k3_theta, k3_omega) = derivatives(
        theta + 0.5 * dt * k2_theta,
        omega + 0.5 * dt * k2_omega,
    );

    // k4 at the full step advanced with k3
    let (k4_theta, k4_omega) = derivatives(theta + dt * k3_theta, omega + dt * k3_omega);

    // Weighted combination with weights (1, 2, 2, 1)/6
    pendulum.angle += (dt / 6.0) * (k1_theta + 2.0 * k2_theta + 2.0 * k3_theta + k4_theta);
    pendulum.angular_velocity +=
        (dt / 6.0) * (k1_omega + 2.0 * k2_omega + 2.0 * k3_omega + k4_omega);
}
