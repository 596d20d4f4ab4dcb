use thiserror::Error;

/// Top-level error type for the Lamina polygon kernel.
#[derive(Debug, Error)]
pub enum LaminaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Provenance(#[from] ProvenanceError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to polygon construction and queries.
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("polygon is not convex at vertex {index}")]
    NotConvex { index: usize },

    #[error("polygon requires at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("unknown measure feature: {0}")]
    UnknownFeature(String),
}

/// Errors related to provenance records.
#[derive(Debug, Error)]
pub enum ProvenanceError {
    #[error("color requires 3 or 4 components, got {count}")]
    InvalidColor { count: usize },
}

/// Convenience type alias for results using [`LaminaError`].
pub type Result<T> = std::result::Result<T, LaminaError>;
