//! Build fully-computed trajectory scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle containing:
//! - engine settings (`Engine`)
//! - the time grid (`TimeGrid`)
//! - the validated motion (`AtwoodMotion` / `CylinderMotion`)
//! - the full trajectory, computed once
//! - drawing options (`RenderSettings`)
//!
//! The bundle is handed to a renderer, which only reads the precomputed samples

use tracing::info;

use crate::configuration::config::{ScenarioConfig, SystemConfig};
use crate::simulation::atwood::AtwoodMotion;
use crate::simulation::cylinder::CylinderMotion;
use crate::simulation::engine::{Engine, RenderSettings};
use crate::simulation::error::Result;
use crate::simulation::grid::TimeGrid;
use crate::simulation::trajectory::Trajectory;

/// One system with its trajectory materialised over the grid
#[derive(Debug, Clone)]
pub struct SystemScenario<M: Trajectory> {
    pub engine: Engine,
    pub grid: TimeGrid,
    pub render: RenderSettings,
    pub motion: M,
    pub samples: Vec<M::Sample>,
}

impl<M> SystemScenario<M>
where
    M: Trajectory + Sync,
{
    /// Evaluate `motion` over `grid` once, in parallel if the engine asks for it
    pub fn new(engine: Engine, grid: TimeGrid, render: RenderSettings, motion: M) -> Self {
        let samples = if engine.parallel {
            motion.compute_par(&grid)
        } else {
            motion.compute(&grid)
        };

        Self {
            engine,
            grid,
            render,
            motion,
            samples,
        }
    }
}

pub type AtwoodScenario = SystemScenario<AtwoodMotion>;
pub type CylinderScenario = SystemScenario<CylinderMotion>;

/// A fully-computed scenario, one variant per system
#[derive(Debug, Clone)]
pub enum Scenario {
    Atwood(AtwoodScenario),
    Cylinder(CylinderScenario),
}

impl Scenario {
    /// Validate parameters and compute the whole trajectory
    /// Fails with `InvalidParameter` before any sample is evaluated
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let engine = Engine {
            parallel: cfg.engine.parallel,
        };

        let grid = TimeGrid::from(&cfg.grid);

        let render = RenderSettings {
            pulley_radius: cfg.render.pulley_radius,
            cylinder_half_height: cfg.render.cylinder_half_height,
        };

        let scenario = match &cfg.system {
            SystemConfig::Atwood(a_cfg) => {
                let motion = AtwoodMotion::new(a_cfg.into())?;
                Scenario::Atwood(SystemScenario::new(engine, grid, render, motion))
            }
            SystemConfig::Cylinder(c_cfg) => {
                let motion = CylinderMotion::new(c_cfg.into())?;
                Scenario::Cylinder(SystemScenario::new(engine, grid, render, motion))
            }
        };

        info!(
            system = scenario.name(),
            samples = scenario.len(),
            parallel = engine.parallel,
            "scenario built"
        );

        Ok(scenario)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Atwood(_) => "atwood",
            Scenario::Cylinder(_) => "cylinder",
        }
    }

    /// Number of samples (= frames)
    pub fn len(&self) -> usize {
        match self {
            Scenario::Atwood(s) => s.samples.len(),
            Scenario::Cylinder(s) => s.samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn grid(&self) -> &TimeGrid {
        match self {
            Scenario::Atwood(s) => &s.grid,
            Scenario::Cylinder(s) => &s.grid,
        }
    }
}
