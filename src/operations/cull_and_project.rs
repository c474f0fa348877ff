use crate::math::{Isometry3, Point3};
use crate::points::Marker;

/// Transforms points into world space and keeps those within `max_distance`
/// of the camera.
///
/// Points exactly `max_distance` away are kept. Output order follows input
/// order.
#[derive(Debug, Clone, Copy)]
pub struct CullAndProject {
    camera: Point3,
    max_distance: f32,
    transform: Isometry3,
}

impl CullAndProject {
    /// Creates a new query for a camera at `camera` (world space).
    #[must_use]
    pub fn new(camera: Point3, max_distance: f32) -> Self {
        Self {
            camera,
            max_distance,
            transform: Isometry3::identity(),
        }
    }

    /// Sets the local-to-world transform applied before the distance test.
    #[must_use]
    pub fn with_transform(mut self, transform: Isometry3) -> Self {
        self.transform = transform;
        self
    }

    /// Runs the query over raw local-space points.
    #[must_use]
    pub fn execute(&self, points: &[Point3]) -> Vec<Point3> {
        self.project(points.iter().copied())
    }

    /// Runs the query over marker positions.
    #[must_use]
    pub fn execute_markers(&self, markers: &[Marker]) -> Vec<Point3> {
        self.project(markers.iter().map(Marker::position))
    }

    fn project(&self, points: impl Iterator<Item = Point3>) -> Vec<Point3> {
        // Negative or NaN distances cull everything.
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Vec::new();
        }
        let max_sq = self.max_distance * self.max_distance;
        points
            .map(|p| self.transform * p)
            .filter(|p| (p - self.camera).norm_squared() <= max_sq)
            .collect()
    }
}

/// Returns the points within `max_distance` of `camera`, in input order.
///
/// Shorthand for [`CullAndProject`] with an identity transform.
#[must_use]
pub fn cull_and_project(points: &[Point3], camera: Point3, max_distance: f32) -> Vec<Point3> {
    CullAndProject::new(camera, max_distance).execute(points)
}
