//! Population churn: remove exited agents, spawn steady inflow, and seed
//! the initial crowd.

use std::f64::consts::TAU;

use crowd_core::{Point, SimParams};
use crowd_world::{AgentState, World};

/// What one churn pass did, for observers and logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChurnStats {
    pub removed: usize,
    pub spawned: usize,
}

/// Remove every agent that exited this tick, then — if the population is
/// below the ceiling — spawn one batch of `spawn_per_gate` agents around
/// every gate.  The ceiling check happens once per tick, so the population
/// can overshoot by at most one batch.
pub fn churn_phase(world: &mut World, params: &SimParams) -> ChurnStats {
    let removed = world.remove_exited();

    let mut spawned = 0;
    if world.population() < params.population_ceiling {
        for gate_idx in 0..world.gates.len() {
            let gate_pos = world.gates[gate_idx].position;
            for _ in 0..params.spawn_per_gate {
                let position = annulus_offset(world, params, gate_pos);
                let target = world.random_gate();
                world.spawn(position, target, AgentState::Moving);
                spawned += 1;
            }
        }
        tracing::debug!(removed, spawned, population = world.population(), "churn");
    }

    ChurnStats { removed, spawned }
}

/// Seed the initial crowd: half a gate's allotment placed around each gate,
/// a full allotment scattered uniformly inside each zone.  Each agent gets
/// a uniformly random target gate and starts Moving with probability
/// `initial_moving_prob`, Waiting otherwise.
pub fn seed_initial_crowd(world: &mut World, params: &SimParams) {
    for gate_idx in 0..world.gates.len() {
        let gate_pos = world.gates[gate_idx].position;
        for _ in 0..params.initial_per_gate / 2 {
            let position = annulus_offset(world, params, gate_pos);
            let (target, state) = initial_target_and_state(world, params);
            world.spawn(position, target, state);
        }
    }

    for zone_idx in 0..world.zones.len() {
        let bounds = world.zones[zone_idx].bounds;
        for _ in 0..params.initial_per_gate {
            let position = Point::new(
                bounds.min.lat + world.rng.unit() * (bounds.max.lat - bounds.min.lat),
                bounds.min.lng + world.rng.unit() * (bounds.max.lng - bounds.min.lng),
            );
            let (target, state) = initial_target_and_state(world, params);
            world.spawn(position, target, state);
        }
    }

    tracing::debug!(population = world.population(), "seeded initial crowd");
}

/// A random point in the spawn annulus around `center`.
fn annulus_offset(world: &mut World, params: &SimParams, center: Point) -> Point {
    let angle = world.rng.unit() * TAU;
    let radius = params.spawn_annulus_inner + world.rng.unit() * params.spawn_annulus_band;
    Point::new(
        center.lat + angle.cos() * radius,
        center.lng + angle.sin() * radius,
    )
}

fn initial_target_and_state(
    world: &mut World,
    params: &SimParams,
) -> (crowd_core::GateId, AgentState) {
    let target = world.random_gate();
    let state = if world.rng.gen_bool(params.initial_moving_prob) {
        AgentState::Moving
    } else {
        AgentState::Waiting
    };
    (target, state)
}
