//! `crowd-spatial` — radius queries over agent positions.
//!
//! The movement model's crowd-repulsion term needs "every agent strictly
//! within radius `r` of point `p`" for every agent, every tick — the
//! dominant cost of the whole simulation.  Correctness depends only on the
//! set of neighbors returned, not on scan order, so the query sits behind
//! the [`NeighborIndex`] trait and the backing structure is swappable:
//!
//! | Type         | Structure                    | Build    | Query       |
//! |--------------|------------------------------|----------|-------------|
//! | [`RTreeIndex`] | R-tree (`rstar`, bulk load)  | O(n log n) | O(log n + k) |
//! | [`GridIndex`]  | uniform hash grid            | O(n)     | O(k)        |
//! | [`ScanIndex`]  | naive linear scan            | O(1)     | O(n)        |
//!
//! `ScanIndex` is the behavioral oracle: the tests assert the other two
//! return exactly the same neighbor sets.
//!
//! All indexes snapshot positions at build time.  Building once per tick and
//! querying against it gives every agent the same pre-tick view, which is
//! what keeps the movement phase order-independent (and parallelizable).

pub mod grid;
pub mod influence;
pub mod rtree;
pub mod scan;


use crowd_core::Point;

pub use grid::GridIndex;
pub use influence::crowd_influence;
pub use rtree::RTreeIndex;
pub use scan::ScanIndex;

/// A snapshot of agent positions answering strict radius queries.
///
/// `slot` is the index of the position in the slice the index was built
/// from (i.e. the agent's position in the world's agent vector at build
/// time), not a persistent agent identity.
pub trait NeighborIndex {
    /// Number of indexed positions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke `visit(slot, distance)` for every indexed position strictly
    /// within `radius` of `center` (distance < radius; a point at exactly
    /// `radius` is excluded).  Visit order is unspecified.
    fn for_each_within<F: FnMut(usize, f64)>(&self, center: Point, radius: f64, visit: F);
}
