pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{AtwoodSample, CylinderSample, NVec3};
pub use simulation::params::{AtwoodParams, CylinderParams};
pub use simulation::error::{Result, TrajectoryError};
pub use simulation::grid::TimeGrid;
pub use simulation::engine::{Engine, RenderSettings};
pub use simulation::trajectory::Trajectory;
pub use simulation::atwood::AtwoodMotion;
pub use simulation::cylinder::CylinderMotion;
pub use simulation::scenario::{Scenario, SystemScenario, AtwoodScenario, CylinderScenario};

pub use configuration::config::{EngineConfig, GridConfig, SystemConfig, AtwoodConfig, CylinderConfig, RenderConfig, ScenarioConfig};

pub use visualization::playback::Playback;
pub use visualization::table::{TableRow, render_table, print_table};
#[cfg(feature = "vis")]
pub use visualization::{traj_vis2d::run_2d, traj_vis3d::run_3d};

pub use benchmark::benchmark::bench_trajectories;
