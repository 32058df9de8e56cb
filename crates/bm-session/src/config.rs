use crate::viewport::DEFAULT_ZOOM_STEP;

/// Configuration for a map session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fog grid cell size in scene units. Zero is rejected when the
    /// session is created.
    pub cell_size: u32,
    /// Multiplier applied per zoom-in step; zoom-out uses its inverse.
    pub zoom_step: f64,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cell_size: 50,
            zoom_step: DEFAULT_ZOOM_STEP,
            max_events: 0,
        }
    }
}

impl SessionConfig {
    /// Set the fog grid cell size in scene units.
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the multiplier applied per zoom step.
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}
