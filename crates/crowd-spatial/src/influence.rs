//! Crowd-repulsion ("crowd influence") computation.

use crowd_core::Point;

use crate::NeighborIndex;

/// Local crowding factor at `position`, in `[0, 1]`.
///
/// Each neighbor strictly within `radius` contributes
/// `(radius - d) / radius`; the sum is divided by `normalizer` and clamped
/// to 1.  Neighbors at distance exactly 0 are excluded, which is also how
/// an agent querying at its own position avoids counting itself.
///
/// Pure function of the indexed position set — the same snapshot yields the
/// same influence regardless of which index backs the query or the order
/// neighbors are visited in.
pub fn crowd_influence<I: NeighborIndex>(
    index: &I,
    position: Point,
    radius: f64,
    normalizer: f64,
) -> f64 {
    let mut influence = 0.0;
    index.for_each_within(position, radius, |_slot, d| {
        if d > 0.0 {
            influence += (radius - d) / radius;
        }
    });
    (influence / normalizer).min(1.0)
}
