//! Uniform hash-grid neighbor index.
//!
//! Positions are bucketed into square cells of side `cell_size`.  A radius
//! query visits the 3×3 cell neighborhood around the query point, so the
//! query radius must not exceed `cell_size` — build the grid with the same
//! radius the movement model scans with.

use rustc_hash::FxHashMap;

use crowd_core::Point;

use crate::NeighborIndex;

pub struct GridIndex {
    cell_size: f64,
    buckets: FxHashMap<(i64, i64), Vec<u32>>,
    points: Vec<Point>,
}

impl GridIndex {
    /// Bucket a position snapshot into cells of side `cell_size`.
    ///
    /// # Panics
    /// Panics if `cell_size` is not a positive finite number.
    pub fn build(points: &[Point], cell_size: f64) -> Self {
        assert!(cell_size.is_finite() && cell_size > 0.0, "invalid cell size");
        let mut buckets: FxHashMap<(i64, i64), Vec<u32>> = FxHashMap::default();
        for (slot, p) in points.iter().enumerate() {
            buckets
                .entry(Self::cell_of(*p, cell_size))
                .or_default()
                .push(slot as u32);
        }
        Self {
            cell_size,
            buckets,
            points: points.to_vec(),
        }
    }

    #[inline]
    fn cell_of(p: Point, cell_size: f64) -> (i64, i64) {
        ((p.lat / cell_size).floor() as i64, (p.lng / cell_size).floor() as i64)
    }
}

impl NeighborIndex for GridIndex {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn for_each_within<F: FnMut(usize, f64)>(&self, center: Point, radius: f64, mut visit: F) {
        debug_assert!(
            radius <= self.cell_size,
            "query radius {radius} exceeds cell size {}",
            self.cell_size
        );
        let radius_sq = radius * radius;
        let (cx, cy) = Self::cell_of(center, self.cell_size);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(bucket) = self.buckets.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &slot in bucket {
                    let d_sq = center.distance_sq(self.points[slot as usize]);
                    if d_sq < radius_sq {
                        visit(slot as usize, d_sq.sqrt());
                    }
                }
            }
        }
    }
}
