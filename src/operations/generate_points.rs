use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{PointsError, Result};
use crate::math::{Point3, PositionKey};
use crate::mesh::{normalize_alpha, Color, MeshSource};
use crate::points::{Marker, MarkerId, PointGraph};

use super::GenerationParams;

/// Generates deduplicated detectable points from mesh vertices.
///
/// Each distinct vertex position yields one marker. The first vertex found at
/// a position creates the marker; later vertices at the exact same position
/// are linked to it. Positions are compared bit-for-bit, without tolerance, so
/// vertices that differ by rounding noise stay separate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratePoints {
    params: GenerationParams,
}

impl GeneratePoints {
    /// Creates a new `GeneratePoints` operation.
    #[must_use]
    pub fn new(params: GenerationParams) -> Self {
        Self { params }
    }

    /// Returns the generation parameters.
    #[must_use]
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Executes the generation over raw vertex data.
    ///
    /// `colors` of `None` or an empty slice means the mesh has no color
    /// channel; opaque white is used for every vertex. Either way the returned
    /// colors have their alpha forced to [`BASE_ALPHA`](crate::mesh::BASE_ALPHA).
    ///
    /// # Errors
    ///
    /// Returns [`PointsError::InvalidInput`] if `vertices` is empty, or if
    /// `colors` is non-empty and its length differs from `vertices`.
    pub fn execute(&self, vertices: &[Point3], colors: Option<&[Color]>) -> Result<PointGraph> {
        let colors = colors.filter(|c| !c.is_empty());
        validate(vertices, colors)?;

        let (markers, vertex_markers) = self.link_vertices(vertices);

        let allocated = colors.is_none();
        let mut colors = match colors {
            Some(existing) => existing.to_vec(),
            None => vec![Color::WHITE; vertices.len()],
        };
        normalize_alpha(&mut colors);

        tracing::debug!(
            vertices = vertices.len(),
            markers = markers.len(),
            allocated_colors = allocated,
            "generated detectable points"
        );

        Ok(PointGraph {
            markers,
            vertex_markers,
            colors,
        })
    }

    /// Executes the generation over a mesh source.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub fn execute_mesh<M: MeshSource>(&self, mesh: &M) -> Result<PointGraph> {
        self.execute(mesh.positions(), mesh.colors())
    }

    /// Single linear pass: first occurrence of a position creates its marker,
    /// duplicates append their index.
    fn link_vertices(&self, vertices: &[Point3]) -> (Vec<Marker>, Vec<MarkerId>) {
        let mut markers: Vec<Marker> = Vec::new();
        let mut vertex_markers = Vec::with_capacity(vertices.len());
        let mut lookup: HashMap<PositionKey, MarkerId> = HashMap::with_capacity(vertices.len());

        for (i, vertex) in vertices.iter().enumerate() {
            // Keyed on the raw position, not the offset one.
            let id = match lookup.entry(PositionKey::new(vertex)) {
                Entry::Occupied(entry) => {
                    let id = *entry.get();
                    markers[id.index()].link(i);
                    id
                }
                Entry::Vacant(entry) => {
                    let id = MarkerId(markers.len());
                    markers.push(Marker::new(vertex + self.params.position_offset, i));
                    entry.insert(id);
                    id
                }
            };
            vertex_markers.push(id);
        }

        (markers, vertex_markers)
    }
}

fn validate(vertices: &[Point3], colors: Option<&[Color]>) -> Result<()> {
    if vertices.is_empty() {
        tracing::warn!("cannot generate detectable points from an empty vertex array");
        return Err(PointsError::InvalidInput(
            "vertex array must not be empty".to_owned(),
        ));
    }
    if let Some(colors) = colors {
        if colors.len() != vertices.len() {
            tracing::warn!(
                vertices = vertices.len(),
                colors = colors.len(),
                "vertex color count does not match vertex count"
            );
            return Err(PointsError::InvalidInput(format!(
                "expected {} vertex colors, got {}",
                vertices.len(),
                colors.len()
            )));
        }
    }
    Ok(())
}
