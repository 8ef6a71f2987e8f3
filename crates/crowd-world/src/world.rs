//! The `World` — single owner of all mutable simulation state.
//!
//! # Why agents and their RNGs are separate vectors
//!
//! The movement decision phase needs `&mut [AgentRng]` (exclusive access to
//! each agent's RNG) and `&[Agent]` (shared read access to the pre-tick
//! positions) simultaneously.  Keeping the RNGs in a sibling `Vec` lets the
//! engine split-borrow the two fields; the vectors are kept in lockstep by
//! `spawn` and `remove_exited`.
//!
//! Agent IDs are monotonic and never reused while an agent is alive, so a
//! respawned population after `reset` draws fresh RNG streams only because
//! the master RNG itself is reseeded.

use crowd_core::{
    AgentId, AgentRng, AlertId, GateId, Point, SimRng, SuggestionId, Tick, ZoneId,
};

use crate::{
    Agent, AgentState, Alert, AlertKind, AlertSubject, Gate, GateConfig,
    RedirectionSuggestion, Severity, Zone, ZoneConfig,
};

/// All simulation state: agents, zones, gates, alerts, suggestions, and the
/// RNG streams.  Pipeline stages borrow this for their pass and never retain
/// state across ticks themselves.
#[derive(Debug)]
pub struct World {
    /// Live agents.  Exiting agents are filtered out at churn time.
    pub agents: Vec<Agent>,

    /// Per-agent RNG streams, index-aligned with `agents`.
    pub agent_rngs: Vec<AgentRng>,

    /// Configured zones with per-tick derived fields.
    pub zones: Vec<Zone>,

    /// Configured gates with per-tick derived load.
    pub gates: Vec<Gate>,

    /// Append-only alert store.  Capped on read, never pruned in place.
    pub alerts: Vec<Alert>,

    /// Current redirection advice; replaced wholesale every tick.
    pub suggestions: Vec<RedirectionSuggestion>,

    /// Global RNG for spawn placement, target selection and panic events.
    pub rng: SimRng,

    seed: u64,
    next_agent_id: u32,
    next_alert_id: u64,
    next_suggestion_id: u64,
}

impl World {
    /// Build a world from venue configuration with an empty population.
    pub fn new(zones: Vec<ZoneConfig>, gates: Vec<GateConfig>, seed: u64) -> Self {
        let zones = zones
            .into_iter()
            .enumerate()
            .map(|(i, c)| Zone::new(ZoneId(i as u16), c))
            .collect();
        let gates = gates
            .into_iter()
            .enumerate()
            .map(|(i, c)| Gate::new(GateId(i as u16), c))
            .collect();
        Self {
            agents: Vec::new(),
            agent_rngs: Vec::new(),
            zones,
            gates,
            alerts: Vec::new(),
            suggestions: Vec::new(),
            rng: SimRng::new(seed),
            seed,
            next_agent_id: 0,
            next_alert_id: 0,
            next_suggestion_id: 0,
        }
    }

    // ── Agents ────────────────────────────────────────────────────────────

    /// Number of live agents.
    #[inline]
    pub fn population(&self) -> usize {
        self.agents.len()
    }

    /// Spawn one agent with zero velocity and a fresh deterministic RNG
    /// stream.  Returns the new agent's ID.
    pub fn spawn(&mut self, position: Point, target_gate: GateId, state: AgentState) -> AgentId {
        let id = AgentId(self.next_agent_id);
        self.next_agent_id += 1;
        self.agents.push(Agent::spawn(id, position, target_gate, state));
        self.agent_rngs.push(AgentRng::new(self.seed, id));
        id
    }

    /// Remove every agent in `Exiting` state, keeping the RNG vector in
    /// lockstep and preserving the order of survivors.  Returns the number
    /// removed; each exiting agent is counted exactly once and never
    /// processed again.
    pub fn remove_exited(&mut self) -> usize {
        let before = self.agents.len();
        let mut kept = 0;
        for i in 0..self.agents.len() {
            if self.agents[i].state != AgentState::Exiting {
                self.agents.swap(kept, i);
                self.agent_rngs.swap(kept, i);
                kept += 1;
            }
        }
        self.agents.truncate(kept);
        self.agent_rngs.truncate(kept);
        before - kept
    }

    // ── Gates ─────────────────────────────────────────────────────────────

    /// Resolve a gate ID, or `None` if it does not name a live gate.
    #[inline]
    pub fn gate(&self, id: GateId) -> Option<&Gate> {
        self.gates.get(id.index())
    }

    /// A uniformly random gate ID.  Status is deliberately not consulted —
    /// Restricted and Closed gates may be chosen as targets.
    ///
    /// # Panics
    /// Panics if no gates are configured (the builder rejects that).
    pub fn random_gate(&mut self) -> GateId {
        let i = self.rng.gen_range(0..self.gates.len());
        GateId(i as u16)
    }

    // ── Alerts ────────────────────────────────────────────────────────────

    /// Append a new, unacknowledged alert and return its ID.
    pub fn emit_alert(
        &mut self,
        kind: AlertKind,
        severity: Severity,
        subject: AlertSubject,
        message: String,
        location: Point,
        created: Tick,
    ) -> AlertId {
        let id = AlertId(self.next_alert_id);
        self.next_alert_id += 1;
        self.alerts.push(Alert {
            id,
            kind,
            severity,
            subject,
            message,
            created,
            acknowledged: false,
            location,
        });
        id
    }

    /// Does an unacknowledged alert of this `(subject, kind)` pair already
    /// exist?  The synthesizer's dedup test.
    pub fn has_unacknowledged(&self, kind: AlertKind, subject: AlertSubject) -> bool {
        self.alerts
            .iter()
            .any(|a| !a.acknowledged && a.kind == kind && a.subject == subject)
    }

    /// Acknowledge an alert.  Idempotent: returns `true` only when the flag
    /// actually flipped; unknown or already-acknowledged IDs are a no-op.
    pub fn acknowledge(&mut self, id: AlertId) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(a) if !a.acknowledged => {
                a.acknowledged = true;
                true
            }
            _ => false,
        }
    }

    /// The externally visible alert view: unacknowledged alerts only, capped
    /// to the `cap` most recent (insertion order).
    pub fn active_alerts(&self, cap: usize) -> Vec<&Alert> {
        let active: Vec<&Alert> = self.alerts.iter().filter(|a| !a.acknowledged).collect();
        let skip = active.len().saturating_sub(cap);
        active.into_iter().skip(skip).collect()
    }

    // ── Suggestions ───────────────────────────────────────────────────────

    /// Next suggestion identity (monotonic across ticks).
    pub fn next_suggestion_id(&mut self) -> SuggestionId {
        let id = SuggestionId(self.next_suggestion_id);
        self.next_suggestion_id += 1;
        id
    }

    /// Replace the entire advice set for this tick.
    pub fn replace_suggestions(&mut self, suggestions: Vec<RedirectionSuggestion>) {
        self.suggestions = suggestions;
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Discard all agents, alerts and suggestions, zero every derived field,
    /// and reseed the master RNG so a reset run replays identically.  Gate
    /// statuses are static configuration and survive untouched.
    pub fn reset(&mut self) {
        self.agents.clear();
        self.agent_rngs.clear();
        self.alerts.clear();
        self.suggestions.clear();
        for zone in &mut self.zones {
            zone.clear_derived();
        }
        for gate in &mut self.gates {
            gate.current_load = 0;
        }
        self.rng = SimRng::new(self.seed);
        self.next_agent_id = 0;
        self.next_alert_id = 0;
        self.next_suggestion_id = 0;
    }
}
