mod store;

pub use store::PointStore;

use crate::math::Point3;
use crate::mesh::Color;

/// Index of a marker within a [`PointGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

impl MarkerId {
    /// Returns the position of the marker in [`PointGraph::markers`].
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A detectable point: one spatial location shared by one or more coincident
/// mesh vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: Point3,
    linked_vertices: Vec<usize>,
}

impl Marker {
    /// Creates a marker for its first-seen vertex.
    pub(crate) fn new(position: Point3, first_vertex: usize) -> Self {
        Self {
            position,
            linked_vertices: vec![first_vertex],
        }
    }

    pub(crate) fn link(&mut self, vertex: usize) {
        self.linked_vertices.push(vertex);
    }

    /// Marker position in mesh local space, including the generation offset.
    #[must_use]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Indices of the vertices that collapsed into this marker, ascending.
    ///
    /// Never empty; the first entry is the vertex that created the marker.
    #[must_use]
    pub fn linked_vertices(&self) -> &[usize] {
        &self.linked_vertices
    }

    /// The vertex that created this marker.
    #[must_use]
    pub fn representative_vertex(&self) -> usize {
        self.linked_vertices[0]
    }
}

/// Output of one generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGraph {
    pub(crate) markers: Vec<Marker>,
    pub(crate) vertex_markers: Vec<MarkerId>,
    pub(crate) colors: Vec<Color>,
}

impl PointGraph {
    /// Markers in order of first occurrence of their position.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns a marker by ID.
    #[must_use]
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.0)
    }

    /// Owning marker of each vertex, indexed by vertex.
    #[must_use]
    pub fn vertex_markers(&self) -> &[MarkerId] {
        &self.vertex_markers
    }

    /// Returns the marker that owns `vertex`.
    #[must_use]
    pub fn marker_of(&self, vertex: usize) -> Option<MarkerId> {
        self.vertex_markers.get(vertex).copied()
    }

    /// Per-vertex colors with normalized alpha.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of vertices the graph was generated from.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_markers.len()
    }

    /// Splits the graph into its marker and color sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Marker>, Vec<Color>) {
        (self.markers, self.colors)
    }
}
