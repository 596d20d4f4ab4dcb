use std::sync::Arc;

use super::Polygon;
use crate::error::Result;
use crate::geometry::vertex::Vertex;
use crate::math::affine::is_mirroring;
use crate::math::{Matrix4, Vector3};

impl Polygon {
    /// Returns the polygon mapped through a 4x4 affine transform.
    ///
    /// Every vertex and the plane are transformed. A mirroring matrix
    /// reverses orientation, so the vertex order is reversed in the result
    /// to keep the winding consistent with the flipped plane normal and
    /// preserve the inside/outside sense of the solid.
    ///
    /// The provenance record is aliased, not copied.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix collapses the supporting plane.
    pub fn transformed(&self, matrix: &Matrix4) -> Result<Self> {
        let mut vertices: Vec<Vertex> = self
            .vertices
            .iter()
            .map(|v| v.transformed(matrix))
            .collect();
        if is_mirroring(matrix) {
            vertices.reverse();
        }
        let plane = self.plane.transformed(matrix)?;
        Ok(Self::with_plane(vertices, Arc::clone(&self.shared), plane))
    }

    /// Returns the polygon shifted by a translation vector.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| Vertex {
                position: v.position + offset,
                normal: v.normal,
            })
            .collect();
        Self::with_plane(
            vertices,
            Arc::clone(&self.shared),
            self.plane.translated(offset),
        )
    }

    /// Returns the polygon with its solid-membership sense inverted: every
    /// vertex flipped, the vertex order reversed, and the plane flipped.
    ///
    /// The provenance record is aliased, not copied.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let vertices = self.vertices.iter().rev().map(Vertex::flipped).collect();
        Self::with_plane(vertices, Arc::clone(&self.shared), self.plane.flipped())
    }
}
