//! Particle confined to the lateral surface of a cylinder
//!
//! The axial motion is simple harmonic and the azimuth turns at a constant rate fixed by the
//! conserved angular momentum (the radius never changes):
//! - `w_z = sqrt(k / m)`
//! - `phi_dot = L / (m R^2)`
//! - `z(t) = A cos(w_z t - delta)`
//! - `phi(t) = phi_0 + phi_dot t`
//! - `x = R cos phi`, `y = R sin phi`

use std::f64::consts::TAU;

use tracing::debug;

use super::error::Result;
use super::grid::TimeGrid;
use super::params::{require_positive, CylinderParams};
use super::states::{CylinderSample, NVec3};
use super::trajectory::Trajectory;

/// Validated cylinder motion with its two angular rates precomputed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderMotion {
    params: CylinderParams,
    omega_z: f64, // axial angular frequency
    phi_dot: f64, // azimuthal angular velocity
}

impl CylinderMotion {
    pub fn new(params: CylinderParams) -> Result<Self> {
        require_positive("radius", params.radius)?;
        require_positive("axial_constant", params.axial_constant)?;
        require_positive("mass", params.mass)?;

        let omega_z = (params.axial_constant / params.mass).sqrt();
        let phi_dot = params.angular_momentum / (params.mass * params.radius * params.radius);

        debug!(omega_z, phi_dot, "cylinder motion validated");

        Ok(Self {
            params,
            omega_z,
            phi_dot,
        })
    }

    pub fn params(&self) -> &CylinderParams {
        &self.params
    }

    pub fn omega_z(&self) -> f64 {
        self.omega_z
    }

    pub fn phi_dot(&self) -> f64 {
        self.phi_dot
    }

    /// Period of the axial oscillation, `2 pi / w_z`
    pub fn axial_period(&self) -> f64 {
        TAU / self.omega_z
    }

    /// Azimuth `phi(t)`, not wrapped
    pub fn angle_at(&self, t: f64) -> f64 {
        self.params.initial_angle + self.phi_dot * t
    }

    /// Axial coordinate `z(t)`
    pub fn height_at(&self, t: f64) -> f64 {
        self.params.amplitude * (self.omega_z * t - self.params.phase).cos()
    }

    pub fn position_at(&self, t: f64) -> NVec3 {
        let phi = self.angle_at(t);
        let r = self.params.radius;
        NVec3::new(r * phi.cos(), r * phi.sin(), self.height_at(t))
    }
}

impl Trajectory for CylinderMotion {
    type Sample = CylinderSample;

    fn sample_at(&self, t: f64) -> CylinderSample {
        CylinderSample {
            t,
            position: self.position_at(t),
        }
    }
}

/// Cartesian position of the particle at every instant of `grid`
///
/// Fails with `InvalidParameter` when the radius, axial constant or mass is not strictly
/// positive.
pub fn compute(params: CylinderParams, grid: &TimeGrid) -> Result<Vec<CylinderSample>> {
    Ok(CylinderMotion::new(params)?.compute(grid))
}
