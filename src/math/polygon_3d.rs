use super::{Point3, Vector3, CONVEXITY_TOLERANCE};

/// Walks a closed vertex loop and returns the index of the first corner that
/// turns the wrong way relative to `normal`, or `None` if every corner is
/// convex.
///
/// For every consecutive triple (prev, cur, next), wrapping around with the
/// last two vertices seeding the initial context, the corner at `cur` is
/// convex when `(cur - prev) x (next - cur) . normal >= threshold`.
///
/// Loops with fewer than 3 vertices have no triples to test and always pass.
#[must_use]
pub fn first_concave_corner(
    points: &[Point3],
    normal: &Vector3,
    threshold: f64,
) -> Option<usize> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let mut prevprev = points[n - 2];
    let mut prev = points[n - 1];
    for (i, &cur) in points.iter().enumerate() {
        let cross = (prev - prevprev).cross(&(cur - prev));
        if cross.dot(normal) < threshold {
            // The corner sits at the middle vertex of the triple.
            return Some((i + n - 1) % n);
        }
        prevprev = prev;
        prev = cur;
    }
    None
}

/// Returns `true` if the loop is convex relative to `normal`.
///
/// Degenerate corners (collinear edges) count as convex.
#[must_use]
pub fn loop_is_convex(points: &[Point3], normal: &Vector3) -> bool {
    first_concave_corner(points, normal, 0.0).is_none()
}

/// Returns `true` if the loop is strictly convex relative to `normal`.
///
/// Near-flat corners within [`CONVEXITY_TOLERANCE`] are rejected.
#[must_use]
pub fn loop_is_strictly_convex(points: &[Point3], normal: &Vector3) -> bool {
    first_concave_corner(points, normal, CONVEXITY_TOLERANCE).is_none()
}
