//! A simulated person: position, velocity, target gate, movement state.

use crowd_core::{AgentId, GateId, Point};

/// Behavioral state of an agent.
///
/// `Exiting` is terminal: the agent is removed from the world at the end of
/// the tick in which it entered this state, and its ID is never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentState {
    /// Standing still; each tick has a small chance of starting to move.
    Waiting,
    /// Heading toward the target gate.
    Moving,
    /// Reached the target gate; removed at end of tick.
    Exiting,
}

/// A 2-D velocity in coordinate units per tick.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub dlat: f64,
    pub dlng: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dlat: 0.0, dlng: 0.0 };

    /// Magnitude in coordinate units per tick.
    #[inline]
    pub fn speed(self) -> f64 {
        (self.dlat * self.dlat + self.dlng * self.dlng).sqrt()
    }
}

/// One simulated person.
///
/// `target_gate` is a weak reference: it is resolved against the gate vector
/// by index every tick and implies no ownership.  An unresolvable target
/// simply means the agent does not move that tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    pub position: Point,
    /// Recomputed every tick; zero at spawn.
    pub velocity: Velocity,
    pub target_gate: GateId,
    pub state: AgentState,
}

impl Agent {
    /// Construct a freshly spawned agent (velocity zero).
    pub fn spawn(id: AgentId, position: Point, target_gate: GateId, state: AgentState) -> Self {
        Self {
            id,
            position,
            velocity: Velocity::ZERO,
            target_gate,
            state,
        }
    }
}
