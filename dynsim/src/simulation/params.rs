//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - restitution coefficient for the ground bounce

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64,       // time end
    pub h0: f64,          // step size, must be > 0 (caller precondition)
    pub restitution: f64, // ground bounce damping factor, 0.8 keeps 80% of vertical speed
}
