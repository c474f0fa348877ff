mod cull_and_project;
mod generate_points;

pub use cull_and_project::{cull_and_project, CullAndProject};
pub use generate_points::GeneratePoints;

use crate::math::Vector3;

/// Parameters controlling detectable-point generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationParams {
    /// Translation added to every generated marker position.
    ///
    /// Does not take part in deduplication: vertices are matched on their raw
    /// position.
    pub position_offset: Vector3,
}

impl GenerationParams {
    /// Parameters with the given marker offset.
    #[must_use]
    pub fn with_offset(position_offset: Vector3) -> Self {
        Self { position_offset }
    }
}
