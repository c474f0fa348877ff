mod position_key;

pub use position_key::PositionKey;

/// 3D point type. Mesh data is single precision.
pub type Point3 = nalgebra::Point3<f32>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f32>;

/// Rigid transform used to place local marker positions in the world.
pub type Isometry3 = nalgebra::Isometry3<f32>;
