//! Movement model: per-agent target seeking with local crowd repulsion.
//!
//! The phase is split into **decide** and **apply**.  Decisions are computed
//! for every agent against the same pre-tick position snapshot (captured by
//! the neighbor index built at phase start), then applied sequentially.
//! Updates are therefore conceptually simultaneous: no agent ever sees
//! another agent's already-updated position within the same tick.  That is
//! also what makes the decide loop safe to parallelize — with the
//! `parallel` feature it runs on Rayon's pool, and because every agent draws
//! only from its own RNG stream the results are bit-identical to the serial
//! path.

use crowd_core::{AgentRng, Point, SimParams};
use crowd_spatial::{crowd_influence, NeighborIndex, RTreeIndex};
use crowd_world::{Agent, AgentState, Gate, Velocity, World};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one agent's decision step.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MoveDecision {
    /// No change this tick.
    Hold,
    /// Waiting agent starts moving (movement begins next tick).
    StartMoving,
    /// Within arrival epsilon of the target gate: exit, terminal.
    Exit,
    /// Step by `velocity`.
    Advance { velocity: Velocity },
}

/// Advance every agent by exactly one tick.
pub fn movement_phase(world: &mut World, params: &SimParams) {
    let positions: Vec<Point> = world.agents.iter().map(|a| a.position).collect();
    let index = RTreeIndex::build(&positions);

    // Split borrow: agents/gates read-only, RNGs exclusively mutable.
    let agents = &world.agents;
    let gates = &world.gates;
    let rngs = &mut world.agent_rngs;

    #[cfg(feature = "parallel")]
    let decisions: Vec<MoveDecision> = agents
        .par_iter()
        .zip(rngs.par_iter_mut())
        .map(|(agent, rng)| decide(agent, gates, &index, params, rng))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let decisions: Vec<MoveDecision> = agents
        .iter()
        .zip(rngs.iter_mut())
        .map(|(agent, rng)| decide(agent, gates, &index, params, rng))
        .collect();

    for (agent, decision) in world.agents.iter_mut().zip(decisions) {
        apply(agent, decision);
    }
}

/// Pure decision step: reads the pre-tick snapshot, mutates only the
/// agent's own RNG stream.
fn decide<I: NeighborIndex>(
    agent: &Agent,
    gates: &[Gate],
    index: &I,
    params: &SimParams,
    rng: &mut AgentRng,
) -> MoveDecision {
    match agent.state {
        AgentState::Waiting => {
            if rng.gen_bool(params.waiting_move_prob) {
                MoveDecision::StartMoving
            } else {
                MoveDecision::Hold
            }
        }
        // Exiting is terminal; churn removes the agent at end of tick.
        AgentState::Exiting => MoveDecision::Hold,
        AgentState::Moving => {
            // A target gate that no longer resolves is a benign no-op.
            let Some(gate) = gates.get(agent.target_gate.index()) else {
                return MoveDecision::Hold;
            };

            let dlat = gate.position.lat - agent.position.lat;
            let dlng = gate.position.lng - agent.position.lng;
            let distance = (dlat * dlat + dlng * dlng).sqrt();

            if distance < params.arrival_epsilon {
                return MoveDecision::Exit;
            }

            let influence = crowd_influence(
                index,
                agent.position,
                params.repulsion_radius,
                params.repulsion_normalizer,
            );
            let speed = params.base_speed * (1.0 - influence * params.repulsion_slowdown);

            let velocity = Velocity {
                dlat: (dlat / distance) * speed + (rng.unit() - 0.5) * params.jitter,
                dlng: (dlng / distance) * speed + (rng.unit() - 0.5) * params.jitter,
            };
            MoveDecision::Advance { velocity }
        }
    }
}

fn apply(agent: &mut Agent, decision: MoveDecision) {
    match decision {
        MoveDecision::Hold => {}
        MoveDecision::StartMoving => agent.state = AgentState::Moving,
        MoveDecision::Exit => agent.state = AgentState::Exiting,
        MoveDecision::Advance { velocity } => {
            agent.velocity = velocity;
            agent.position.lat += velocity.dlat;
            agent.position.lng += velocity.dlng;
        }
    }
}
