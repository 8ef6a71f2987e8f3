//! Fluent builder for constructing a [`CrowdSim`].

use crowd_core::SimParams;
use crowd_world::{GateConfig, World, ZoneConfig};

use crate::{CrowdSim, EngineError, EngineResult};

/// Fluent builder for [`CrowdSim`].
///
/// # Required inputs
///
/// - at least one gate (`.gates(…)` or repeated `.gate(…)`)
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                |
/// |--------------|------------------------|
/// | `.zones(v)`  | no zones               |
/// | `.params(p)` | `SimParams::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new()
///     .zones(venue_zones())
///     .gates(venue_gates())
///     .params(SimParams { seed: 7, ..SimParams::default() })
///     .build()?;
/// ```
#[derive(Default)]
pub struct SimBuilder {
    zones: Vec<ZoneConfig>,
    gates: Vec<GateConfig>,
    params: Option<SimParams>,
}

impl SimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the zone configuration.  Overlapping bounds are allowed.
    pub fn zones(mut self, zones: Vec<ZoneConfig>) -> Self {
        self.zones = zones;
        self
    }

    /// Append a single zone.
    pub fn zone(mut self, zone: ZoneConfig) -> Self {
        self.zones.push(zone);
        self
    }

    /// Supply the gate configuration.
    pub fn gates(mut self, gates: Vec<GateConfig>) -> Self {
        self.gates = gates;
        self
    }

    /// Append a single gate.
    pub fn gate(mut self, gate: GateConfig) -> Self {
        self.gates.push(gate);
        self
    }

    /// Override the default simulation parameters.
    pub fn params(mut self, params: SimParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Validate the configuration, seed the initial crowd, and return a
    /// ready-to-drive simulation (stopped; call `start` first).
    pub fn build(self) -> EngineResult<CrowdSim> {
        if self.gates.is_empty() {
            return Err(EngineError::NoGates);
        }
        for zone in &self.zones {
            if !zone.bounds.is_valid() {
                return Err(EngineError::InvalidZoneBounds { name: zone.name.clone() });
            }
        }
        for gate in &self.gates {
            if !gate.position.is_finite() {
                return Err(EngineError::InvalidGatePosition { name: gate.name.clone() });
            }
        }

        let params = self.params.unwrap_or_default();
        params.validate()?;
        let world = World::new(self.zones, self.gates, params.seed);
        Ok(CrowdSim::new(world, params))
    }
}
