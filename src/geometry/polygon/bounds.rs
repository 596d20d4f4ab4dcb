use super::Polygon;
use crate::geometry::bounds::{Aabb, BoundingSphere};

impl Polygon {
    /// Returns the axis-aligned bounding box of the vertex loop.
    ///
    /// Computed on first request and memoized for the instance's lifetime;
    /// never invalidated, since the vertex data cannot change.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        *self
            .bounding_box
            .get_or_init(|| Aabb::from_points(self.positions()))
    }

    /// Returns the sphere enclosing the bounding box: centered at the box
    /// midpoint, reaching the max corner. Memoized like the box.
    #[must_use]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        *self
            .bounding_sphere
            .get_or_init(|| BoundingSphere::from_aabb(&self.bounding_box()))
    }
}
