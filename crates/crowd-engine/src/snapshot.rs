//! Read-only state snapshot handed to the presentation layer.

use crowd_core::Tick;
use crowd_world::{Agent, Alert, Gate, RedirectionSuggestion, Zone};

/// An owned, point-in-time copy of everything the presentation layer needs.
///
/// Snapshots are deep copies: the caller can hold one across ticks without
/// observing later mutations, and nothing here can reach back into the
/// engine.  The alert list is the active view — unacknowledged only, capped
/// to the most recent 50.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSnapshot {
    pub people: Vec<Agent>,
    pub zones: Vec<Zone>,
    pub gates: Vec<Gate>,
    pub alerts: Vec<Alert>,
    pub redirections: Vec<RedirectionSuggestion>,
    pub is_running: bool,
    pub total_people: usize,
    pub tick_count: Tick,
}
