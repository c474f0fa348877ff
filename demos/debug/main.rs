//! Generates detectable points for an unindexed cube and prints them.
//!
//! Usage:
//! ```text
//! cargo run --example debug
//! RUST_LOG=fog_points=debug cargo run --example debug
//! ```

use fog_points::gizmo::GizmoStyle;
use fog_points::math::{Isometry3, Point3, Vector3};
use fog_points::mesh::{MeshSource, VertexMesh};
use fog_points::operations::{GeneratePoints, GenerationParams};
use fog_points::points::PointStore;
use fog_points::PointsError;

/// Unit cube as a triangle soup: 12 triangles, 36 vertices, 8 distinct corners.
fn cube_soup() -> VertexMesh {
    const FACES: [[usize; 4]; 6] = [
        [0, 1, 3, 2],
        [4, 6, 7, 5],
        [0, 4, 5, 1],
        [2, 3, 7, 6],
        [0, 2, 6, 4],
        [1, 5, 7, 3],
    ];
    let corner = |i: usize| {
        let bit = |b: usize| if i & b == 0 { 0.0 } else { 1.0 };
        Point3::new(bit(4), bit(2), bit(1))
    };
    let positions = FACES
        .iter()
        .flat_map(|[a, b, c, d]| [*a, *b, *c, *a, *c, *d])
        .map(corner)
        .collect();
    VertexMesh::new(positions)
}

fn main() -> Result<(), PointsError> {
    // Default: WARN for everything, INFO for fog_points.
    // Override with RUST_LOG env var (e.g. RUST_LOG=fog_points=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("fog_points=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut mesh = cube_soup();
    let generator = GeneratePoints::new(GenerationParams::with_offset(Vector3::new(0.0, 0.05, 0.0)));

    let mut store = PointStore::new();
    let graph = store.regenerate(&generator, &mesh)?;

    println!(
        "{} vertices -> {} detectable points",
        mesh.positions().len(),
        graph.markers().len()
    );
    for (id, marker) in graph.markers().iter().enumerate() {
        let p = marker.position();
        println!(
            "  #{id}: ({:.2}, {:.2}, {:.2}) <- {:?}",
            p.x,
            p.y,
            p.z,
            marker.linked_vertices()
        );
    }

    let camera = Point3::new(3.0, 3.0, 3.0);
    let gizmos = GizmoStyle::container().instances(graph.markers(), Isometry3::identity(), camera);
    println!("{} gizmos visible from {camera}", gizmos.len());

    let colors = graph.colors().to_vec();
    mesh.apply_colors(&colors)?;
    Ok(())
}
