use std::str::FromStr;

use super::Polygon;
use crate::error::{LaminaError, PolygonError, Result};

/// A scalar measure of a polygon, queryable in batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Signed volume of the fan of tetrahedra spanned with the origin.
    Volume,
    /// Surface area of the polygon.
    Area,
}

impl FromStr for Feature {
    type Err = LaminaError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "volume" => Ok(Self::Volume),
            "area" => Ok(Self::Area),
            other => Err(PolygonError::UnknownFeature(other.to_string()).into()),
        }
    }
}

impl Polygon {
    /// Computes the signed volume of the tetrahedra fanned out from vertex 0
    /// and the origin.
    ///
    /// For each interior triangle of the fan, adds the scalar triple product
    /// `v0 . (v[i+1] x v[i+2])`; the total is divided by 6. The sign follows
    /// the loop's orientation relative to the plane normal, so the volumes of
    /// a closed solid's faces sum to the solid's volume.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        let v0 = self.vertices[0].position.coords;
        let mut volume = 0.0;
        for pair in self.vertices[1..].windows(2) {
            let v1 = pair[0].position.coords;
            let v2 = pair[1].position.coords;
            volume += v0.dot(&v1.cross(&v2));
        }
        volume / 6.0
    }

    /// Computes the area by fan triangulation from vertex 0: the cross
    /// product magnitudes of the fan triangles, summed and halved.
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        let origin = self.vertices[0].position;
        let mut doubled = 0.0;
        for pair in self.vertices[1..].windows(2) {
            let a = pair[0].position - origin;
            let b = pair[1].position - pair[0].position;
            doubled += a.cross(&b).norm();
        }
        doubled / 2.0
    }

    /// Evaluates a batch of features, returning the results in input order.
    #[must_use]
    pub fn measure(&self, features: &[Feature]) -> Vec<f64> {
        features
            .iter()
            .map(|feature| match feature {
                Feature::Volume => self.signed_volume(),
                Feature::Area => self.area(),
            })
            .collect()
    }

    /// Evaluates a batch of features by name (`"volume"`, `"area"`),
    /// returning the results in input order.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::UnknownFeature`] for an unrecognized name;
    /// nothing is evaluated in that case.
    pub fn measure_named(&self, names: &[&str]) -> Result<Vec<f64>> {
        let features = names
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Feature>>>()?;
        Ok(self.measure(&features))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn yz_triangle() -> Polygon {
        Polygon::from_points(&[p(0.0, 0.0, 0.0), p(0.0, 10.0, 0.0), p(0.0, 10.0, 10.0)])
            .unwrap()
    }

    #[test]
    fn triangle_area() {
        assert_relative_eq!(yz_triangle().area(), 50.0);
    }

    #[test]
    fn quad_area_sums_fan_triangles() {
        let quad = Polygon::from_points(&[
            p(0.0, 0.0, 1.0),
            p(3.0, 0.0, 1.0),
            p(3.0, 2.0, 1.0),
            p(0.0, 2.0, 1.0),
        ])
        .unwrap();
        assert_relative_eq!(quad.area(), 6.0);
    }

    #[test]
    fn signed_volume_of_fan_through_origin_triangle_is_zero() {
        assert_relative_eq!(yz_triangle().signed_volume(), 0.0);
    }

    #[test]
    fn signed_volume_flips_sign_with_orientation() {
        let quad = Polygon::from_points(&[
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 1.0),
        ])
        .unwrap();
        // Each unit face of a cube spanned against the origin contributes
        // one sixth of the cube per fan triangle.
        assert_relative_eq!(quad.signed_volume(), 1.0 / 3.0);
        assert_relative_eq!(quad.flipped().signed_volume(), -1.0 / 3.0);
    }

    #[test]
    fn batched_measures_preserve_order() {
        let triangle = yz_triangle();
        let results = triangle.measure(&[Feature::Area, Feature::Volume, Feature::Area]);
        assert_eq!(results.len(), 3);
        assert_relative_eq!(results[0], 50.0);
        assert_relative_eq!(results[1], 0.0);
        assert_relative_eq!(results[2], 50.0);
    }

    #[test]
    fn named_measures_parse_and_evaluate() {
        let triangle = yz_triangle();
        let results = triangle.measure_named(&["volume", "area"]).unwrap();
        assert_relative_eq!(results[0], 0.0);
        assert_relative_eq!(results[1], 50.0);
    }

    #[test]
    fn unknown_feature_name_is_rejected() {
        let result = yz_triangle().measure_named(&["area", "centroid"]);
        assert!(matches!(
            result,
            Err(LaminaError::Polygon(PolygonError::UnknownFeature(name))) if name == "centroid"
        ));
    }
}
