use crate::error::Result;
use crate::mesh::MeshSource;
use crate::operations::GeneratePoints;

use super::PointGraph;

/// Long-lived holder for the most recent successful [`PointGraph`].
///
/// Regeneration replaces the stored graph wholesale. A failed regeneration
/// leaves the previous graph in place.
#[derive(Debug, Default)]
pub struct PointStore {
    graph: Option<PointGraph>,
}

impl PointStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `generator` over `mesh` and stores the result.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`GeneratePoints::execute_mesh`]; the stored
    /// graph is not modified in that case.
    pub fn regenerate<M: MeshSource>(
        &mut self,
        generator: &GeneratePoints,
        mesh: &M,
    ) -> Result<&PointGraph> {
        let graph = generator.execute_mesh(mesh)?;
        if let Some(old) = &self.graph {
            tracing::debug!(
                old_markers = old.markers().len(),
                new_markers = graph.markers().len(),
                "replacing detectable points"
            );
        }
        Ok(self.graph.insert(graph))
    }

    /// The stored graph, if any.
    #[must_use]
    pub fn graph(&self) -> Option<&PointGraph> {
        self.graph.as_ref()
    }

    /// Removes and returns the stored graph.
    pub fn take(&mut self) -> Option<PointGraph> {
        self.graph.take()
    }

    /// Discards the stored graph.
    pub fn clear(&mut self) {
        self.graph = None;
    }
}
