use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use crate::error::{ProvenanceError, Result};

/// Allocates process-unique identity tags for [`Shared`] records.
///
/// The boolean-solid engine owns one allocator and threads it through face
/// grouping; ids are monotonically increasing and never reused.
#[derive(Debug)]
pub struct TagAllocator {
    next: AtomicU64,
}

impl TagAllocator {
    /// Creates an allocator whose first tag is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the next unused tag.
    pub fn next_tag(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for TagAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Provenance attached to a polygon: an optional RGBA color and a lazily
/// assigned identity tag.
///
/// A `Shared` is held by reference (`Arc`) and aliased, never copied, by
/// every polygon cloned or split from the same source face, so a downstream
/// merge step can regroup faces without comparing colors element-wise.
#[derive(Debug, Clone, Default)]
pub struct Shared {
    color: Option<[f64; 4]>,
    tag: OnceLock<u64>,
}

impl Shared {
    /// Creates a provenance record with an optional RGBA color.
    #[must_use]
    pub fn new(color: Option<[f64; 4]>) -> Self {
        Self {
            color,
            tag: OnceLock::new(),
        }
    }

    /// Creates a provenance record from raw color components.
    ///
    /// Accepts `[r, g, b]` (alpha defaults to fully opaque) or
    /// `[r, g, b, a]`.
    ///
    /// # Errors
    ///
    /// Returns an error for any other number of components.
    pub fn from_color(components: &[f64]) -> Result<Self> {
        let color = match *components {
            [r, g, b] => [r, g, b, 1.0],
            [r, g, b, a] => [r, g, b, a],
            _ => {
                return Err(ProvenanceError::InvalidColor {
                    count: components.len(),
                }
                .into())
            }
        };
        Ok(Self::new(Some(color)))
    }

    /// Returns the single no-color instance used as the default provenance
    /// for polygons that do not specify one.
    #[must_use]
    pub fn none() -> Arc<Self> {
        static NONE: OnceLock<Arc<Shared>> = OnceLock::new();
        Arc::clone(NONE.get_or_init(|| Arc::new(Shared::new(None))))
    }

    /// Returns the RGBA color, if any.
    #[must_use]
    pub fn color(&self) -> Option<[f64; 4]> {
        self.color
    }

    /// Returns this record's identity tag, allocating one on first access.
    ///
    /// The tag is cached on the instance, so every polygon aliasing this
    /// record observes the same id regardless of which allocator later calls
    /// pass.
    pub fn tag(&self, allocator: &TagAllocator) -> u64 {
        *self.tag.get_or_init(|| allocator.next_tag())
    }

    /// Returns a stable string fingerprint of the color, usable as a cheap
    /// grouping key.
    ///
    /// `"none"` when no color is set, otherwise the components joined with
    /// `/`.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        match &self.color {
            None => String::from("none"),
            Some(color) => color
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}
