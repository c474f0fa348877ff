pub mod error;
pub mod gizmo;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod points;

pub use error::{PointsError, Result};
