pub mod affine;
pub mod polygon_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Threshold for the strict convexity test: corners whose cross product
/// projects onto the plane normal by less than this count as degenerate.
pub const CONVEXITY_TOLERANCE: f64 = 1e-5;
