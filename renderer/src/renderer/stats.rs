use std::time::Duration;

/// Counters for one render pass, printed by the frontend after the batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderStats {
    pub(super) faces_drawn: usize,
    pub(super) faces_degenerate: usize,
    pub(super) pixels_written: usize,
    pub(super) elapsed: Duration,
}

impl RenderStats {
    pub fn faces_drawn(&self) -> usize {
        self.faces_drawn
    }

    /// Faces dropped because their geometry has no area.
    pub fn faces_degenerate(&self) -> usize {
        self.faces_degenerate
    }

    pub fn pixels_written(&self) -> usize {
        self.pixels_written
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
