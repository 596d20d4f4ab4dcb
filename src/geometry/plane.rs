use crate::error::{GeometryError, Result};
use crate::math::affine::{is_mirroring, transform_point};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

/// An infinite oriented plane in 3D space.
///
/// Defined by a unit normal and a scalar offset; a point `p` lies on the
/// plane when `normal . p = offset`. Points with `normal . p > offset` are in
/// front of the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    offset: f64,
}

impl Plane {
    /// Creates a new plane from a normal and an offset.
    ///
    /// The normal is normalized; the offset is taken as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length.
    pub fn new(normal: Vector3, offset: f64) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            normal: normal / len,
            offset,
        })
    }

    /// Creates a plane through three points, oriented by the right-hand rule
    /// `(b - a) x (c - a)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are collinear (degenerate plane).
    pub fn from_points(a: &Point3, b: &Point3, c: &Point3) -> Result<Self> {
        let cross = (b - a).cross(&(c - a));
        let len = cross.norm();
        if len < TOLERANCE {
            return Err(GeometryError::Degenerate("plane points are collinear".into()).into());
        }
        let normal = cross / len;
        Ok(Self {
            normal,
            offset: normal.dot(&a.coords),
        })
    }

    /// Rebuilds a plane from coefficients recorded by [`Self::normal`] and
    /// [`Self::offset`], without renormalizing.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorded normal is not unit-length.
    pub(crate) fn from_unit(normal: Vector3, offset: f64) -> Result<Self> {
        if (normal.norm() - 1.0).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate("plane normal is not unit-length".into()).into());
        }
        Ok(Self { normal, offset })
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Returns the scalar offset of the plane.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the signed distance from `point` to the plane.
    ///
    /// Positive in front of the plane, negative behind it.
    #[must_use]
    pub fn signed_distance_to(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Returns the plane with its orientation inverted.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Returns the plane shifted by a translation vector.
    ///
    /// The normal is unchanged; the offset moves by the translation's
    /// component along the normal.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            normal: self.normal,
            offset: self.offset + self.normal.dot(offset),
        }
    }

    /// Returns the plane mapped through a 4x4 affine transform.
    ///
    /// Three in-plane points are transformed and the plane re-derived from
    /// them; under a mirroring transform the derived orientation is inverted
    /// back so the front side follows the transformed geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix collapses the plane (singular linear
    /// part).
    pub fn transformed(&self, matrix: &Matrix4) -> Result<Self> {
        // Choose a reference vector not parallel to the normal
        let reference = if self.normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };
        let u_dir = self.normal.cross(&reference).normalize();
        let v_dir = self.normal.cross(&u_dir);

        let origin = Point3::from(self.normal * self.offset);
        let a = transform_point(matrix, &origin);
        let b = transform_point(matrix, &(origin + u_dir));
        let c = transform_point(matrix, &(origin + v_dir));

        let plane = Self::from_points(&a, &b, &c)?;
        if is_mirroring(matrix) {
            Ok(plane.flipped())
        } else {
            Ok(plane)
        }
    }
}
