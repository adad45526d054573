use itertools::Itertools;

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Ring};

/// A label is only meaningful if it lies in the interior of the ring.
pub fn label_within_ring(ring: &Ring, label: &Point) -> bool {
    ring.collides_with(label)
}

/// Checks whether a closed ring is convex: every turn between consecutive edges has the same orientation.
/// Collinear vertices are ignored.
pub fn ring_is_convex(ring: &Ring) -> bool {
    if !ring.is_closed() || ring.n_vertices() < 4 {
        return false;
    }
    //drop the closing duplicate, then walk all corners cyclically
    let open = &ring.vertices()[..ring.n_vertices() - 1];
    let turns = open
        .iter()
        .circular_tuple_windows()
        .map(|(a, b, c)| a.vector_to(b).cross(&b.vector_to(c)))
        .filter(|turn| *turn != 0.0)
        .collect_vec();

    !turns.is_empty() && (turns.iter().all(|t| *t > 0.0) || turns.iter().all(|t| *t < 0.0))
}
