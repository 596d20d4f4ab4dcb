use crate::math::affine::{transform_direction, transform_point};
use crate::math::{Matrix4, Point3, Vector3};

/// A polygon corner: a 3D position and an optional surface normal.
///
/// Vertices are owned exclusively by the polygon that lists them; operations
/// return new values rather than mutating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// The 3D position of the vertex.
    pub position: Point3,
    /// The surface normal at the vertex, if the mesh carries one.
    pub normal: Option<Vector3>,
}

impl Vertex {
    /// Creates a new vertex at the given position, without a normal.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    /// Creates a new vertex with an explicit surface normal.
    #[must_use]
    pub fn with_normal(position: Point3, normal: Vector3) -> Self {
        Self {
            position,
            normal: Some(normal),
        }
    }

    /// Returns the vertex with its normal negated (if present).
    ///
    /// Used when a polygon inverts its solid-membership sense.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            position: self.position,
            normal: self.normal.map(|n| -n),
        }
    }

    /// Returns the vertex mapped through a 4x4 affine transform.
    ///
    /// The position is transformed in homogeneous coordinates; the normal,
    /// when present, is mapped as a direction (translation ignored).
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        Self {
            position: transform_point(matrix, &self.position),
            normal: self.normal.map(|n| transform_direction(matrix, &n)),
        }
    }

    /// Linearly interpolates between this vertex and `other` at parameter `t`.
    ///
    /// The normal is interpolated only when both endpoints carry one.
    #[must_use]
    pub fn interpolated(&self, other: &Vertex, t: f64) -> Self {
        let position = self.position + (other.position - self.position) * t;
        let normal = match (self.normal, other.normal) {
            (Some(a), Some(b)) => Some(a + (b - a) * t),
            _ => None,
        };
        Self { position, normal }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn flip_negates_normal() {
        let vertex = Vertex::with_normal(p(1.0, 2.0, 3.0), v(0.0, 0.0, 1.0));
        let flipped = vertex.flipped();
        assert_eq!(flipped.position, p(1.0, 2.0, 3.0));
        assert_eq!(flipped.normal, Some(v(0.0, 0.0, -1.0)));
    }

    #[test]
    fn flip_without_normal_is_identity() {
        let vertex = Vertex::new(p(1.0, 2.0, 3.0));
        assert_eq!(vertex.flipped(), vertex);
    }

    #[test]
    fn transform_moves_position_but_not_normal() {
        let vertex = Vertex::with_normal(p(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0));
        let matrix = Matrix4::new_translation(&v(1.0, 0.0, 0.0));
        let moved = vertex.transformed(&matrix);
        assert_eq!(moved.position, p(1.0, 0.0, 0.0));
        assert_eq!(moved.normal, Some(v(0.0, 0.0, 1.0)));
    }

    #[test]
    fn interpolation_at_midpoint() {
        let a = Vertex::with_normal(p(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
        let b = Vertex::with_normal(p(2.0, 2.0, 0.0), v(0.0, 1.0, 0.0));
        let mid = a.interpolated(&b, 0.5);
        assert_eq!(mid.position, p(1.0, 1.0, 0.0));
        assert_eq!(mid.normal, Some(v(0.5, 0.5, 0.0)));
    }

    #[test]
    fn interpolation_drops_one_sided_normal() {
        let a = Vertex::with_normal(p(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
        let b = Vertex::new(p(2.0, 0.0, 0.0));
        assert_eq!(a.interpolated(&b, 0.25).normal, None);
    }
}
