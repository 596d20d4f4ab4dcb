pub mod bounds;
pub mod plane;
pub mod polygon;
pub mod shared;
pub mod vertex;

pub use bounds::{Aabb, BoundingSphere};
pub use plane::Plane;
pub use polygon::{Feature, Polygon};
pub use shared::{Shared, TagAllocator};
pub use vertex::Vertex;
