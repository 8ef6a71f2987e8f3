//! Gates: fixed points of interest that agents target.

use crowd_core::{GateId, Point};

/// Operability status, set at configuration time and never changed by the
/// simulation itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GateStatus {
    Open,
    Closed,
    Restricted,
}

/// Static gate configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateConfig {
    pub name: String,
    pub position: Point,
    pub capacity: u32,
    pub status: GateStatus,
}

/// A gate plus its per-tick derived load.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gate {
    pub id: GateId,
    pub name: String,
    pub position: Point,
    pub capacity: u32,
    pub status: GateStatus,

    /// Count of agents strictly within the gate-load radius; recomputed
    /// every tick by the aggregation pass.
    pub current_load: u32,
}

impl Gate {
    pub fn new(id: GateId, config: GateConfig) -> Self {
        Self {
            id,
            name: config.name,
            position: config.position,
            capacity: config.capacity,
            status: config.status,
            current_load: 0,
        }
    }

    /// Load as a fraction of capacity.  A zero-capacity gate reports 0
    /// rather than propagating a division by zero.
    #[inline]
    pub fn load_ratio(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.current_load as f64 / self.capacity as f64
        }
    }
}
