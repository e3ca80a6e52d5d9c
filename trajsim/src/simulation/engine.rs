//! High-level runtime engine settings
//!
//! Selects sequential or parallel evaluation and carries the drawing options
//! the viewer needs alongside a `Scenario`

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Engine {
    pub parallel: bool, // false = evaluate samples in order, true = rayon over the grid
}

/// Geometry that only matters for drawing, never for the physics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub pulley_radius: f64, // drawn pulley radius, masses hang at x = +-pulley_radius
    pub cylinder_half_height: f64, // drawn cylinder spans z in [-h, h]
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pulley_radius: 100.0,
            cylinder_half_height: 2.0,
        }
    }
}
