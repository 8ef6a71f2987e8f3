//! Naive O(n) linear-scan index.
//!
//! The reference implementation of [`NeighborIndex`]: trivially correct,
//! zero build cost, O(n) per query.  Used as the oracle in equivalence
//! tests and entirely adequate for small worlds.

use crowd_core::Point;

use crate::NeighborIndex;

pub struct ScanIndex {
    points: Vec<Point>,
}

impl ScanIndex {
    pub fn build(points: &[Point]) -> Self {
        Self { points: points.to_vec() }
    }
}

impl NeighborIndex for ScanIndex {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn for_each_within<F: FnMut(usize, f64)>(&self, center: Point, radius: f64, mut visit: F) {
        let radius_sq = radius * radius;
        for (slot, &p) in self.points.iter().enumerate() {
            let d_sq = center.distance_sq(p);
            if d_sq < radius_sq {
                visit(slot, d_sq.sqrt());
            }
        }
    }
}
