mod color;

pub use color::{normalize_alpha, Color, BASE_ALPHA};

use crate::error::{PointsError, Result};
use crate::math::Point3;

/// Provides the vertex data of a mesh to the point generator.
///
/// Index `i` in [`positions`](MeshSource::positions) is vertex `i`. When
/// [`colors`](MeshSource::colors) returns `Some`, it is expected to have one
/// entry per vertex.
pub trait MeshSource {
    /// Vertex positions in mesh local space.
    fn positions(&self) -> &[Point3];

    /// Per-vertex colors, if the mesh has any.
    fn colors(&self) -> Option<&[Color]>;
}

/// A plain vertex buffer: positions plus optional per-vertex colors.
#[derive(Debug, Clone, Default)]
pub struct VertexMesh {
    /// Vertex positions.
    pub positions: Vec<Point3>,
    /// Per-vertex colors. Empty when the mesh carries no color channel.
    pub colors: Vec<Color>,
}

impl VertexMesh {
    /// Creates a mesh without a color channel.
    #[must_use]
    pub fn new(positions: Vec<Point3>) -> Self {
        Self {
            positions,
            colors: Vec::new(),
        }
    }

    /// Creates a mesh with per-vertex colors.
    #[must_use]
    pub fn with_colors(positions: Vec<Point3>, colors: Vec<Color>) -> Self {
        Self { positions, colors }
    }

    /// Replaces the color channel, e.g. with the normalized colors of a
    /// generated point graph.
    ///
    /// # Errors
    ///
    /// Returns [`PointsError::InvalidInput`] if `colors` does not have one
    /// entry per vertex.
    pub fn apply_colors(&mut self, colors: &[Color]) -> Result<()> {
        if colors.len() != self.positions.len() {
            return Err(PointsError::InvalidInput(format!(
                "expected {} colors, got {}",
                self.positions.len(),
                colors.len()
            )));
        }
        self.colors.clear();
        self.colors.extend_from_slice(colors);
        Ok(())
    }
}

impl MeshSource for VertexMesh {
    fn positions(&self) -> &[Point3] {
        &self.positions
    }

    fn colors(&self) -> Option<&[Color]> {
        if self.colors.is_empty() {
            None
        } else {
            Some(&self.colors)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tri() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn mesh_without_colors_reports_none() {
        let mesh = VertexMesh::new(tri());
        assert_eq!(mesh.positions().len(), 3);
        assert!(mesh.colors().is_none());
    }

    #[test]
    fn mesh_with_colors_reports_some() {
        let mesh = VertexMesh::with_colors(tri(), vec![Color::CYAN; 3]);
        assert_eq!(mesh.colors().unwrap().len(), 3);
    }

    #[test]
    fn apply_colors_replaces_channel() {
        let mut mesh = VertexMesh::new(tri());
        let colors = vec![Color::WHITE.with_alpha(BASE_ALPHA); 3];
        mesh.apply_colors(&colors).unwrap();
        assert_eq!(mesh.colors().unwrap(), colors.as_slice());
    }

    #[test]
    fn apply_colors_length_mismatch_fails() {
        let mut mesh = VertexMesh::new(tri());
        let result = mesh.apply_colors(&[Color::WHITE; 2]);
        assert!(matches!(result, Err(PointsError::InvalidInput(_))));
        assert!(mesh.colors.is_empty());
    }
}
