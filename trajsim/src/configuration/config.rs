//! Configuration types for loading trajectory scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]   – evaluation options (sequential or parallel)
//! - [`GridConfig`]     – the time grid the trajectory is sampled on
//! - [`SystemConfig`]   – which physical system, with its parameters
//! - [`RenderConfig`]   – drawing-only geometry for the viewer
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An Atwood machine scenario matching these types:
//!
//! ```yaml
//! engine:
//!   parallel: false         # true -> evaluate samples with rayon
//!
//! grid:
//!   start: 0.0              # first sample time
//!   stop: 5.0               # exclusive end time
//!   step: 0.05              # sample spacing, also the frame interval
//!
//! system:
//!   kind: atwood            # or "cylinder"
//!   mass_right: 15.0
//!   mass_left: 3.0
//!   gravity: 9.81
//!   y_right_initial: -500.0
//!   y_left_initial: -400.0
//!   initial_velocity: 0.0   # optional
//!
//! render:
//!   pulley_radius: 100.0
//! ```
//!
//! A cylinder scenario swaps the `system` block:
//!
//! ```yaml
//! system:
//!   kind: cylinder
//!   radius: 0.5
//!   axial_constant: 1.0
//!   mass: 1.0
//!   angular_momentum: 1.0
//!   amplitude: 1.0
//!   phase: 0.0              # optional
//!   initial_angle: 10.0     # optional
//! ```
//!
//! The scenario builder then maps this configuration into validated runtime motions.

use serde::Deserialize;

use crate::simulation::engine::RenderSettings;
use crate::simulation::grid::TimeGrid;
use crate::simulation::params::{AtwoodParams, CylinderParams};

/// Evaluation options
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub parallel: bool, // `true` - samples are evaluated on the rayon pool, `false` - in order
}

/// Time grid the trajectory is sampled on
#[derive(Deserialize, Debug, Clone)]
pub struct GridConfig {
    #[serde(default)]
    pub start: f64, // first sample time, defaults to 0
    pub stop: f64,  // exclusive end time
    pub step: f64,  // sample spacing
}

impl From<&GridConfig> for TimeGrid {
    fn from(cfg: &GridConfig) -> Self {
        TimeGrid::new(cfg.start, cfg.stop, cfg.step)
    }
}

/// Atwood machine parameters
#[derive(Deserialize, Debug, Clone)]
pub struct AtwoodConfig {
    pub mass_right: f64,
    pub mass_left: f64,
    pub gravity: f64,
    pub y_right_initial: f64,
    pub y_left_initial: f64,
    #[serde(default)]
    pub initial_velocity: f64, // released from rest unless given
}

impl From<&AtwoodConfig> for AtwoodParams {
    fn from(cfg: &AtwoodConfig) -> Self {
        AtwoodParams {
            mass_right: cfg.mass_right,
            mass_left: cfg.mass_left,
            gravity: cfg.gravity,
            y_right_initial: cfg.y_right_initial,
            y_left_initial: cfg.y_left_initial,
            initial_velocity: cfg.initial_velocity,
        }
    }
}

/// Particle-on-a-cylinder parameters
#[derive(Deserialize, Debug, Clone)]
pub struct CylinderConfig {
    pub radius: f64,
    pub axial_constant: f64,
    pub mass: f64,
    pub angular_momentum: f64,
    pub amplitude: f64,
    #[serde(default)]
    pub phase: f64,
    #[serde(default)]
    pub initial_angle: f64,
}

impl From<&CylinderConfig> for CylinderParams {
    fn from(cfg: &CylinderConfig) -> Self {
        CylinderParams {
            radius: cfg.radius,
            axial_constant: cfg.axial_constant,
            mass: cfg.mass,
            angular_momentum: cfg.angular_momentum,
            amplitude: cfg.amplitude,
            phase: cfg.phase,
            initial_angle: cfg.initial_angle,
        }
    }
}

/// Which physical system the scenario runs
/// `kind: "atwood"` or `kind: "cylinder"`
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SystemConfig {
    Atwood(AtwoodConfig),
    Cylinder(CylinderConfig),
}

/// Drawing-only geometry, every field optional
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub pulley_radius: f64,        // drawn pulley radius for the Atwood machine
    pub cylinder_half_height: f64, // drawn cylinder spans z in [-h, h]
}

impl Default for RenderConfig {
    fn default() -> Self {
        let defaults = RenderSettings::default();
        Self {
            pulley_radius: defaults.pulley_radius,
            cylinder_half_height: defaults.cylinder_half_height,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // evaluation options
    pub grid: GridConfig,     // sample instants
    pub system: SystemConfig, // physical system and its parameters
    #[serde(default)]
    pub render: RenderConfig, // viewer geometry
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
