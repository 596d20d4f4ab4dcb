//! Plain structural records for polygons.
//!
//! A [`PolygonRecord`] is the serialization surface of the kernel: a vertex
//! list, a provenance record, and plane coefficients, with no interior
//! caches or reference identity. Round-tripping a polygon through its record
//! preserves vertex positions, color values, and plane coefficients exactly.
//!
//! Identity tags are process-scoped and deliberately not recorded; a record
//! without color reconstructs onto the shared no-color instance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::plane::Plane;
use crate::geometry::polygon::Polygon;
use crate::geometry::shared::Shared;
use crate::geometry::vertex::Vertex;
use crate::math::{Point3, Vector3};

/// Structural form of a [`Vertex`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    /// Vertex position as `[x, y, z]`.
    pub position: [f64; 3],
    /// Optional surface normal as `[x, y, z]`.
    pub normal: Option<[f64; 3]>,
}

/// Structural form of a [`Shared`] provenance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedRecord {
    /// Optional RGBA color.
    pub color: Option<[f64; 4]>,
}

/// Structural form of a [`Plane`]: the unit normal and scalar offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneRecord {
    /// Plane normal as `[x, y, z]`.
    pub normal: [f64; 3],
    /// Plane offset.
    pub offset: f64,
}

/// Structural form of a [`Polygon`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonRecord {
    /// The vertex loop, in winding order.
    pub vertices: Vec<VertexRecord>,
    /// Provenance attached to the polygon.
    pub shared: SharedRecord,
    /// The supporting plane.
    pub plane: PlaneRecord,
}

impl Polygon {
    /// Captures the polygon as a plain structural record.
    #[must_use]
    pub fn to_record(&self) -> PolygonRecord {
        PolygonRecord {
            vertices: self
                .vertices()
                .iter()
                .map(|v| VertexRecord {
                    position: v.position.coords.into(),
                    normal: v.normal.map(Into::into),
                })
                .collect(),
            shared: SharedRecord {
                color: self.shared().color(),
            },
            plane: PlaneRecord {
                normal: self.plane().normal().into(),
                offset: self.plane().offset(),
            },
        }
    }

    /// Rebuilds a polygon from a structural record.
    ///
    /// The recorded plane coefficients are used as-is (not renormalized), so
    /// a capture/rebuild cycle reproduces them exactly. A record without
    /// color reconstructs onto the shared no-color instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorded plane normal is not unit-length.
    pub fn from_record(record: &PolygonRecord) -> Result<Self> {
        let vertices = record
            .vertices
            .iter()
            .map(|v| Vertex {
                position: Point3::from(v.position),
                normal: v.normal.map(Vector3::from),
            })
            .collect();
        let shared = match record.shared.color {
            Some(color) => Arc::new(Shared::new(Some(color))),
            None => Shared::none(),
        };
        let plane = Plane::from_unit(Vector3::from(record.plane.normal), record.plane.offset)?;
        Ok(Self::with_plane(vertices, shared, plane))
    }
}
