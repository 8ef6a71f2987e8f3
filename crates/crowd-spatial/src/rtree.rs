//! R-tree backed neighbor index.
//!
//! Bulk-loads all positions into an `rstar::RTree` once per tick and
//! answers radius queries via `locate_within_distance`.  rstar's query is
//! inclusive of the boundary (d² ≤ r²), so results are re-filtered to the
//! strict `d < radius` contract of [`NeighborIndex`].

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crowd_core::Point;

use crate::NeighborIndex;

/// Entry stored in the R-tree: a 2-D `[lat, lng]` point plus the slot of
/// the agent it was built from.
#[derive(Clone)]
struct SlotEntry {
    point: [f64; 2],
    slot: u32,
}

impl RTreeObject for SlotEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SlotEntry {
    /// Squared Euclidean distance in coordinate space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlng = self.point[1] - point[1];
        dlat * dlat + dlng * dlng
    }
}

pub struct RTreeIndex {
    tree: RTree<SlotEntry>,
    count: usize,
}

impl RTreeIndex {
    /// Bulk-load a position snapshot.
    pub fn build(points: &[Point]) -> Self {
        let entries = points
            .iter()
            .enumerate()
            .map(|(slot, p)| SlotEntry {
                point: [p.lat, p.lng],
                slot: slot as u32,
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
            count: points.len(),
        }
    }
}

impl NeighborIndex for RTreeIndex {
    fn len(&self) -> usize {
        self.count
    }

    fn for_each_within<F: FnMut(usize, f64)>(&self, center: Point, radius: f64, mut visit: F) {
        let radius_sq = radius * radius;
        let q = [center.lat, center.lng];
        for entry in self.tree.locate_within_distance(q, radius_sq) {
            let d_sq = entry.distance_2(&q);
            if d_sq < radius_sq {
                visit(entry.slot as usize, d_sq.sqrt());
            }
        }
    }
}
