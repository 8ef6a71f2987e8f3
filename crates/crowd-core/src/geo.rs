//! 2-D coordinate type and axis-aligned bounding boxes.
//!
//! The engine is unit-agnostic: a `Point` may hold geographic (lat, lng)
//! degrees or plain Cartesian metres.  Distances are plain Euclidean in
//! coordinate space — the movement constants (speeds, radii, epsilons) are
//! tuned against raw coordinate deltas, so no great-circle correction is
//! applied.  `f64` keeps the arithmetic exact at the 1e-5-degree step sizes
//! the movement model uses.

/// A 2-D position (lat/lng or x/y — the engine does not care).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Euclidean distance in coordinate space.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dlat = other.lat - self.lat;
        let dlng = other.lng - self.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }

    /// Squared Euclidean distance — cheaper when only comparisons are needed.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dlat = other.lat - self.lat;
        let dlng = other.lng - self.lng;
        dlat * dlat + dlng * dlng
    }

    /// Both coordinates are finite (no NaN/∞).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// An axis-aligned rectangle given by its min and max corners.
///
/// Zone bounds are configured as `(south-west, north-east)` corner pairs.
/// Containment is inclusive of all four edges, so an agent sitting exactly
/// on a boundary counts as inside.  Overlapping boxes are a configuration
/// property, not prevented here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Edge-inclusive containment test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.lat >= self.min.lat
            && p.lat <= self.max.lat
            && p.lng >= self.min.lng
            && p.lng <= self.max.lng
    }

    /// Geometric center of the box.
    #[inline]
    pub fn centroid(&self) -> Point {
        Point {
            lat: (self.min.lat + self.max.lat) * 0.5,
            lng: (self.min.lng + self.max.lng) * 0.5,
        }
    }

    /// `true` when `min <= max` on both axes and all corners are finite.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.lat <= self.max.lat
            && self.min.lng <= self.max.lng
    }
}
