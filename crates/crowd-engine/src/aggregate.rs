//! Aggregation pass: recompute every derived field from the current agent
//! set.  Pure and idempotent — calling it twice with no agent changes
//! yields identical results, because nothing is carried over from the
//! previous tick.

use crowd_core::SimParams;
use crowd_world::{FlowVector, RiskLevel, World};

/// Recompute zone occupancy/density/flow/risk and gate load from scratch.
pub fn aggregation_phase(world: &mut World, params: &SimParams) {
    let agents = &world.agents;

    for zone in &mut world.zones {
        let mut count: u32 = 0;
        let mut sum_dlat = 0.0;
        let mut sum_dlng = 0.0;

        // Edge-inclusive bounds test; overlapping zones may both count the
        // same agent.
        for agent in agents {
            if zone.bounds.contains(agent.position) {
                count += 1;
                sum_dlat += agent.velocity.dlat;
                sum_dlng += agent.velocity.dlng;
            }
        }

        zone.current_count = count;
        zone.density = if zone.capacity == 0 {
            0.0
        } else {
            count as f64 / zone.capacity as f64
        };
        zone.flow = if count > 0 {
            let x = sum_dlat / count as f64;
            let y = sum_dlng / count as f64;
            // Speed is the magnitude of the mean vector, not the mean of
            // speeds: opposing streams cancel.
            FlowVector { x, y, speed: (x * x + y * y).sqrt() }
        } else {
            FlowVector::ZERO
        };
        zone.risk = RiskLevel::from_density(zone.density);
    }

    let radius_sq = params.gate_load_radius * params.gate_load_radius;
    for gate in &mut world.gates {
        gate.current_load = agents
            .iter()
            .filter(|a| a.position.distance_sq(gate.position) < radius_sq)
            .count() as u32;
    }
}
