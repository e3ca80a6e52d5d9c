//! Atwood machine: two masses on an inextensible string over a frictionless, massless pulley
//!
//! Coordinates: pulley centre at the origin, up is positive. With constant system acceleration
//! `a = g (m_right - m_left) / (m_right + m_left)` every height is a closed-form quadratic:
//! - right mass: `y(t) = y0 + v0 t - a t^2 / 2`
//! - left mass:  `y(t) = y0 + v0 t + a t^2 / 2`
//!
//! A positive `a` means the right (heavier) mass falls and the left one rises.

use tracing::debug;

use super::error::Result;
use super::grid::TimeGrid;
use super::params::{require_positive, AtwoodParams};
use super::states::AtwoodSample;
use super::trajectory::Trajectory;

/// Validated Atwood machine, ready to be evaluated at any time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtwoodMotion {
    params: AtwoodParams,
    acceleration: f64, // system acceleration magnitude, signed by which side is heavier
}

impl AtwoodMotion {
    /// Check masses and gravity, then precompute the system acceleration
    pub fn new(params: AtwoodParams) -> Result<Self> {
        require_positive("mass_right", params.mass_right)?;
        require_positive("mass_left", params.mass_left)?;
        require_positive("gravity", params.gravity)?;

        let acceleration = params.gravity * (params.mass_right - params.mass_left)
            / (params.mass_right + params.mass_left);

        debug!(acceleration, "atwood machine validated");

        Ok(Self { params, acceleration })
    }

    pub fn params(&self) -> &AtwoodParams {
        &self.params
    }

    /// System acceleration `a`; positive when the right mass is heavier
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Acceleration of the right mass in the up-positive frame
    pub fn acceleration_right(&self) -> f64 {
        -self.acceleration
    }

    /// Acceleration of the left mass in the up-positive frame
    pub fn acceleration_left(&self) -> f64 {
        self.acceleration
    }

    pub fn y_right(&self, t: f64) -> f64 {
        let p = &self.params;
        p.y_right_initial + p.initial_velocity * t + 0.5 * self.acceleration_right() * t * t
    }

    pub fn y_left(&self, t: f64) -> f64 {
        let p = &self.params;
        p.y_left_initial + p.initial_velocity * t + 0.5 * self.acceleration_left() * t * t
    }

    /// Length of string hanging below the pulley, `-y_right - y_left`
    pub fn string_length(&self, t: f64) -> f64 {
        -self.y_right(t) - self.y_left(t)
    }
}

impl Trajectory for AtwoodMotion {
    type Sample = AtwoodSample;

    fn sample_at(&self, t: f64) -> AtwoodSample {
        AtwoodSample {
            t,
            y_right: self.y_right(t),
            y_left: self.y_left(t),
        }
    }
}

/// Heights of both masses at every instant of `grid`
///
/// Fails with `InvalidParameter` before any sample is computed when a mass or gravity
/// is not strictly positive. An empty grid gives an empty sequence.
pub fn compute(params: AtwoodParams, grid: &TimeGrid) -> Result<Vec<AtwoodSample>> {
    Ok(AtwoodMotion::new(params)?.compute(grid))
}
