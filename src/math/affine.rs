use super::{Matrix4, Point3, Vector3};

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Transforms a direction vector by a 4x4 matrix (ignoring translation).
#[must_use]
pub fn transform_direction(matrix: &Matrix4, dir: &Vector3) -> Vector3 {
    let v = matrix * nalgebra::Vector4::new(dir.x, dir.y, dir.z, 0.0);
    Vector3::new(v.x, v.y, v.z)
}

/// Returns `true` if the matrix reverses orientation (a mirroring transform).
///
/// Determined by the sign of the determinant of the upper-left 3x3 block.
#[must_use]
pub fn is_mirroring(matrix: &Matrix4) -> bool {
    let linear = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    linear.determinant() < 0.0
}
