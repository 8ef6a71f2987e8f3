//! Zones: fixed rectangular regions whose occupancy drives a risk level.

use crowd_core::{BoundingBox, ZoneId};

/// Four-level ordinal risk classification.
///
/// A pure, monotone function of zone density — see [`RiskLevel::from_density`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify a density ratio.  Bands are half-open on the lower bound:
    /// d < 0.3 → Low, 0.3 ≤ d < 0.6 → Medium, 0.6 ≤ d < 0.85 → High,
    /// d ≥ 0.85 → Critical.
    #[inline]
    pub fn from_density(d: f64) -> RiskLevel {
        if d < 0.3 {
            RiskLevel::Low
        } else if d < 0.6 {
            RiskLevel::Medium
        } else if d < 0.85 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

/// Mean velocity of a zone's occupants plus its magnitude.
///
/// `speed` is the magnitude of the mean vector, not the mean of magnitudes —
/// opposing flows cancel, which is exactly the signal operators want.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowVector {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

impl FlowVector {
    pub const ZERO: FlowVector = FlowVector { x: 0.0, y: 0.0, speed: 0.0 };
}

/// Static zone configuration, set once at venue definition time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneConfig {
    pub name: String,
    /// Axis-aligned bounds; containment is edge-inclusive.  Overlap with
    /// other zones is allowed — an agent may count toward several zones.
    pub bounds: BoundingBox,
    pub capacity: u32,
}

/// A zone plus its per-tick derived fields.
///
/// The derived fields are recomputed from scratch by the aggregation pass
/// every tick; nothing here drifts incrementally.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub bounds: BoundingBox,
    pub capacity: u32,

    // ── Derived (recomputed every tick) ───────────────────────────────────
    pub current_count: u32,
    pub density: f64,
    pub flow: FlowVector,
    pub risk: RiskLevel,
}

impl Zone {
    pub fn new(id: ZoneId, config: ZoneConfig) -> Self {
        Self {
            id,
            name: config.name,
            bounds: config.bounds,
            capacity: config.capacity,
            current_count: 0,
            density: 0.0,
            flow: FlowVector::ZERO,
            risk: RiskLevel::Low,
        }
    }

    /// Zero all derived fields (reset baseline).
    pub fn clear_derived(&mut self) {
        self.current_count = 0;
        self.density = 0.0;
        self.flow = FlowVector::ZERO;
        self.risk = RiskLevel::Low;
    }
}
