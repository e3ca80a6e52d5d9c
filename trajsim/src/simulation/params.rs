//! Physical parameters for the two systems
//!
//! `AtwoodParams` and `CylinderParams` are raw, unchecked records as read from a scenario.
//! They are validated when turned into a motion (`AtwoodMotion::new`, `CylinderMotion::new`).

use super::error::{Result, TrajectoryError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtwoodParams {
    pub mass_right: f64, // mass of the right block
    pub mass_left: f64, // mass of the left block
    pub gravity: f64, // gravitational acceleration
    pub y_right_initial: f64, // initial height of the right block
    pub y_left_initial: f64, // initial height of the left block
    pub initial_velocity: f64, // shared initial velocity, 0 = released from rest
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderParams {
    pub radius: f64, // cylinder radius
    pub axial_constant: f64, // restoring constant along z
    pub mass: f64, // particle mass
    pub angular_momentum: f64, // conserved angular momentum about the axis
    pub amplitude: f64, // amplitude of the z oscillation
    pub phase: f64, // phase offset of the z oscillation
    pub initial_angle: f64, // azimuth at t = 0
}

/// Fails with `InvalidParameter` unless `value` is strictly positive.
/// NaN is rejected as well.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TrajectoryError::InvalidParameter { name, value })
    }
}
