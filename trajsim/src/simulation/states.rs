//! Sample types produced by the trajectory generators.
//!
//! - `AtwoodSample`   one time value with the height of each hanging mass
//! - `CylinderSample` one time value with the particle's Cartesian position (`NVec3`)
//!
//! Samples are plain values: computed once, never mutated, read in time order by the renderer.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtwoodSample {
    pub t: f64, // time
    pub y_right: f64, // height of the right mass (up is positive, pulley centre at 0)
    pub y_left: f64, // height of the left mass
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderSample {
    pub t: f64, // time
    pub position: NVec3, // cartesian position on the cylinder surface
}

impl CylinderSample {
    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Distance from the cylinder axis, should always equal the radius
    pub fn axial_distance(&self) -> f64 {
        self.position.x.hypot(self.position.y)
    }
}
