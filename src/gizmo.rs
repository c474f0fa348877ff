//! Plain-data description of debug gizmos for generated markers.
//!
//! Nothing here draws. A renderer calls [`GizmoStyle::instances`] each frame
//! and draws the returned records however it likes.

use crate::math::{Isometry3, Point3};
use crate::mesh::Color;
use crate::operations::CullAndProject;
use crate::points::Marker;

/// Shape drawn at each visible marker.
///
/// Wire shapes may be hard to see at larger distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoShape {
    Cube,
    #[default]
    Sphere,
    WireCube,
    WireSphere,
}

/// How marker gizmos are drawn and how far away they are culled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoStyle {
    pub shape: GizmoShape,
    /// Edge length for cubes, radius for spheres.
    pub size: f32,
    pub color: Color,
    /// Markers further than this from the camera are not drawn.
    pub draw_distance: f32,
}

impl Default for GizmoStyle {
    fn default() -> Self {
        Self {
            shape: GizmoShape::Sphere,
            size: 0.1,
            color: Color::CYAN,
            draw_distance: 25.0,
        }
    }
}

/// One gizmo to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoInstance {
    /// World-space center.
    pub center: Point3,
    pub shape: GizmoShape,
    pub size: f32,
    pub color: Color,
}

impl GizmoStyle {
    /// Style used for a freshly generated set of detectable points.
    #[must_use]
    pub fn container() -> Self {
        Self {
            size: 0.3,
            ..Self::default()
        }
    }

    /// Builds the gizmos visible from `camera` for markers placed by
    /// `transform` (local to world).
    #[must_use]
    pub fn instances(
        &self,
        markers: &[Marker],
        transform: Isometry3,
        camera: Point3,
    ) -> Vec<GizmoInstance> {
        CullAndProject::new(camera, self.draw_distance)
            .with_transform(transform)
            .execute_markers(markers)
            .into_iter()
            .map(|center| GizmoInstance {
                center,
                shape: self.shape,
                size: self.size,
                color: self.color,
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::{GeneratePoints, GenerationParams};
    use crate::math::Vector3;

    fn markers() -> Vec<Marker> {
        let vertices: Vec<Point3> = (0..5u8)
            .flat_map(|i| {
                let p = Point3::new(f32::from(i) * 10.0, 0.0, 0.0);
                [p, p]
            })
            .collect();
        GeneratePoints::new(GenerationParams::with_offset(Vector3::new(0.0, 1.0, 0.0)))
            .execute(&vertices, None)
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn default_style() {
        let style = GizmoStyle::default();
        assert_eq!(style.shape, GizmoShape::Sphere);
        assert_eq!(style.color, Color::CYAN);
        assert!((style.size - 0.1).abs() < f32::EPSILON);
        assert!((style.draw_distance - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn container_style_is_larger() {
        let style = GizmoStyle::container();
        assert!((style.size - 0.3).abs() < f32::EPSILON);
        assert_eq!(style.shape, GizmoShape::default());
    }

    #[test]
    fn instances_are_culled_by_draw_distance() {
        let style = GizmoStyle::default();
        let gizmos = style.instances(&markers(), Isometry3::identity(), Point3::new(0.0, 1.0, 0.0));
        let centers: Vec<Point3> = gizmos.iter().map(|g| g.center).collect();
        assert_eq!(
            centers,
            vec![
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(10.0, 1.0, 0.0),
                Point3::new(20.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn instances_carry_style() {
        let style = GizmoStyle {
            shape: GizmoShape::WireCube,
            size: 2.0,
            color: Color::WHITE,
            draw_distance: 1000.0,
        };
        let gizmos = style.instances(&markers(), Isometry3::identity(), Point3::origin());
        assert_eq!(gizmos.len(), 5);
        assert!(gizmos
            .iter()
            .all(|g| g.shape == GizmoShape::WireCube && g.color == Color::WHITE));
    }

    #[test]
    fn instances_use_world_transform() {
        let style = GizmoStyle::default();
        let far = Isometry3::translation(1000.0, 0.0, 0.0);
        assert!(style.instances(&markers(), far, Point3::origin()).is_empty());
    }
}
