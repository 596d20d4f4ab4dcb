mod bounds;
mod measure;
mod transform;

pub use measure::Feature;

use std::sync::{Arc, OnceLock};

use crate::error::{PolygonError, Result};
use crate::geometry::bounds::{Aabb, BoundingSphere};
use crate::geometry::plane::Plane;
use crate::geometry::shared::Shared;
use crate::geometry::vertex::Vertex;
use crate::math::polygon_3d::first_concave_corner;
use crate::math::{Point3, CONVEXITY_TOLERANCE};

/// A planar convex polygon: an ordered vertex loop, its supporting plane, and
/// a provenance record aliased across derived polygons.
///
/// Vertex order is semantically significant: it defines the winding, and
/// with it which side of the plane faces out of the solid. The type is
/// immutable after construction: every geometric operation returns a new
/// polygon, and the only interior mutability is the one-time memoization of
/// the bounding volumes.
///
/// Coplanarity and convex winding are preconditions the constructors trust;
/// callers that need them enforced invoke [`Polygon::validate_convexity`] (or
/// [`Polygon::validated`]) deliberately.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    shared: Arc<Shared>,
    plane: Plane,
    bounding_box: OnceLock<Aabb>,
    bounding_sphere: OnceLock<BoundingSphere>,
}

impl Polygon {
    /// Creates a polygon from a vertex loop, deriving the plane from the
    /// first three vertices and attaching the default no-color provenance.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given or the first
    /// three are collinear.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self> {
        Self::with_shared(vertices, Shared::none())
    }

    /// Creates a polygon with an explicit provenance record, deriving the
    /// plane from the first three vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given or the first
    /// three are collinear.
    pub fn with_shared(vertices: Vec<Vertex>, shared: Arc<Shared>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }
        let plane = Plane::from_points(
            &vertices[0].position,
            &vertices[1].position,
            &vertices[2].position,
        )?;
        Ok(Self::with_plane(vertices, shared, plane))
    }

    /// Creates a polygon with an explicit plane, trusting the caller that
    /// the vertices lie on it.
    #[must_use]
    pub fn with_plane(vertices: Vec<Vertex>, shared: Arc<Shared>, plane: Plane) -> Self {
        Self {
            vertices,
            shared,
            plane,
            bounding_box: OnceLock::new(),
            bounding_sphere: OnceLock::new(),
        }
    }

    /// Creates a polygon from raw point coordinates, without vertex normals.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 points are given or the first three
    /// are collinear.
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        Self::new(points.iter().copied().map(Vertex::new).collect())
    }

    /// Returns the vertex loop.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the supporting plane.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Returns the provenance record aliased by this polygon.
    #[must_use]
    pub fn shared(&self) -> &Arc<Shared> {
        &self.shared
    }

    /// Returns `true` if every corner of the loop is convex relative to the
    /// plane normal. Collinear corners count as convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        first_concave_corner(&self.positions_vec(), &self.plane.normal(), 0.0).is_none()
    }

    /// Returns `true` if every corner is strictly convex; near-flat corners
    /// are rejected as degenerate.
    #[must_use]
    pub fn is_strictly_convex(&self) -> bool {
        first_concave_corner(
            &self.positions_vec(),
            &self.plane.normal(),
            CONVEXITY_TOLERANCE,
        )
        .is_none()
    }

    /// Checks the convex-winding invariant, reporting the first offending
    /// vertex.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::NotConvex`] naming the concave corner.
    pub fn validate_convexity(&self) -> Result<()> {
        match first_concave_corner(&self.positions_vec(), &self.plane.normal(), 0.0) {
            None => Ok(()),
            Some(index) => Err(PolygonError::NotConvex { index }.into()),
        }
    }

    /// Consumes the polygon, returning it unchanged if convex.
    ///
    /// Chains onto a constructor when the caller wants validated
    /// construction: `Polygon::new(vertices)?.validated()?`.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::NotConvex`] naming the concave corner.
    pub fn validated(self) -> Result<Self> {
        self.validate_convexity()?;
        Ok(self)
    }

    fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    fn positions_vec(&self) -> Vec<Point3> {
        self.positions().collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::LaminaError;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn square() -> Polygon {
        Polygon::from_points(&[
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn construction_derives_plane_from_first_three_vertices() {
        let polygon = square();
        assert_relative_eq!(polygon.plane().normal(), crate::math::Vector3::z());
        assert_relative_eq!(polygon.plane().offset(), 0.0);
    }

    #[test]
    fn too_few_vertices_is_rejected() {
        let result = Polygon::from_points(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]);
        assert!(matches!(
            result,
            Err(LaminaError::Polygon(PolygonError::TooFewVertices { count: 2 }))
        ));
    }

    #[test]
    fn collinear_first_vertices_are_rejected() {
        let result = Polygon::from_points(&[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn default_provenance_is_the_shared_no_color_instance() {
        let a = square();
        let b = square();
        assert!(Arc::ptr_eq(a.shared(), b.shared()));
        assert_eq!(a.shared().color(), None);
    }

    #[test]
    fn convex_loop_validates() {
        let polygon = square();
        assert!(polygon.is_convex());
        assert!(polygon.is_strictly_convex());
        assert!(polygon.validate_convexity().is_ok());
    }

    #[test]
    fn displaced_vertex_fails_validation_with_index() {
        let polygon = Polygon::from_points(&[
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(0.5, 0.5, 0.0),
            p(0.0, 2.0, 0.0),
        ])
        .unwrap();
        assert!(!polygon.is_convex());
        assert!(matches!(
            polygon.validate_convexity(),
            Err(LaminaError::Polygon(PolygonError::NotConvex { index: 2 }))
        ));
        assert!(polygon.validated().is_err());
    }

    #[test]
    fn validated_passes_through_convex_polygons() {
        let polygon = square().validated().unwrap();
        assert_eq!(polygon.vertices().len(), 4);
    }

    #[test]
    fn yz_triangle_has_unit_x_normal() {
        let polygon =
            Polygon::from_points(&[p(0.0, 0.0, 0.0), p(0.0, 10.0, 0.0), p(0.0, 10.0, 10.0)])
                .unwrap();
        assert!(polygon.is_convex());
        let normal = polygon.plane().normal();
        assert_relative_eq!(normal.norm(), 1.0);
        assert_relative_eq!(normal.x.abs(), 1.0);
        assert_relative_eq!(normal.y, 0.0);
        assert_relative_eq!(normal.z, 0.0);
    }
}
