use crate::math::Point3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Computes the component-wise bounds of a set of points.
    ///
    /// An empty set yields a box with both corners at the origin.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point3>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self {
                min: Point3::origin(),
                max: Point3::origin(),
            };
        };

        let mut bounds = Self {
            min: first,
            max: first,
        };
        for point in iter {
            bounds.expand_to_include(&point);
        }
        bounds
    }

    /// Grows the box to contain `point`.
    pub fn expand_to_include(&mut self, point: &Point3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Returns the midpoint of the two corners.
    #[must_use]
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Returns the edge lengths of the box.
    #[must_use]
    pub fn size(&self) -> crate::math::Vector3 {
        self.max - self.min
    }
}

/// A sphere enclosing a bounding box: centered at the box midpoint, reaching
/// the max corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl BoundingSphere {
    /// Computes the sphere enclosing `bounds`.
    #[must_use]
    pub fn from_aabb(bounds: &Aabb) -> Self {
        let center = bounds.center();
        Self {
            center,
            radius: (bounds.max - center).norm(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn bounds_of_points() {
        let bounds = Aabb::from_points(vec![
            p(1.0, 2.0, 3.0),
            p(-1.0, -2.0, -3.0),
            p(0.5, 4.0, 0.0),
        ]);
        assert_eq!(bounds.min, p(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, p(1.0, 4.0, 3.0));
        assert_eq!(bounds.center(), p(0.0, 1.0, 0.0));
    }

    #[test]
    fn empty_bounds_default_to_origin() {
        let bounds = Aabb::from_points(Vec::new());
        assert_eq!(bounds.min, Point3::origin());
        assert_eq!(bounds.max, Point3::origin());
    }

    #[test]
    fn sphere_reaches_max_corner() {
        let bounds = Aabb::from_points(vec![p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0)]);
        let sphere = BoundingSphere::from_aabb(&bounds);
        assert_eq!(sphere.center, p(1.0, 1.0, 1.0));
        assert_relative_eq!(sphere.radius, 3.0_f64.sqrt());
    }
}
