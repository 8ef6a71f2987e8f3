//! The `CrowdSim` — simulation clock and tick orchestrator.

use crowd_core::{AlertId, SimParams, Tick};
use crowd_world::World;

use crate::advisor::advisory_phase;
use crate::aggregate::aggregation_phase;
use crate::alerts::alert_phase;
use crate::churn::{churn_phase, seed_initial_crowd};
use crate::movement::movement_phase;
use crate::observer::{NoopObserver, SimObserver};
use crate::snapshot::SimSnapshot;

/// One authoritative simulation instance.
///
/// Explicitly owned and explicitly constructed (via
/// [`SimBuilder`][crate::SimBuilder]) — there are no process-wide globals;
/// callers hold and pass it.  The engine performs no internal timing or
/// threading: `running` is purely a flag consulted by the external driver,
/// and `tick` runs unconditionally when called.  The driver is responsible
/// for serializing ticks.
#[derive(Debug)]
pub struct CrowdSim {
    pub(crate) world: World,
    pub(crate) params: SimParams,
    pub(crate) running: bool,
    pub(crate) tick_count: Tick,
}

impl CrowdSim {
    pub(crate) fn new(world: World, params: SimParams) -> Self {
        let mut sim = Self {
            world,
            params,
            running: false,
            tick_count: Tick::ZERO,
        };
        seed_initial_crowd(&mut sim.world, &sim.params);
        sim
    }

    // ── Driver controls ───────────────────────────────────────────────────

    /// Set the running flag.  Does not tick.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Clear the running flag.  Takes effect between ticks only — a tick in
    /// progress always runs to completion.
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn tick_count(&self) -> Tick {
        self.tick_count
    }

    /// Discard all agents, alerts and suggestions, restore every zone and
    /// gate to its configured baseline, reseed the initial population, and
    /// return the tick counter to zero.  The running flag is untouched.
    pub fn reset(&mut self) {
        self.world.reset();
        self.tick_count = Tick::ZERO;
        seed_initial_crowd(&mut self.world, &self.params);
        tracing::debug!(population = self.world.population(), "simulation reset");
    }

    // ── Tick pipeline ─────────────────────────────────────────────────────

    /// Run one tick: movement → churn → aggregation → alerting → advisory.
    ///
    /// Runs unconditionally — callers are responsible for only invoking
    /// `tick` while running.
    pub fn tick(&mut self) {
        self.tick_observed(&mut NoopObserver);
    }

    /// [`tick`][Self::tick] with observer hooks.
    pub fn tick_observed<O: SimObserver>(&mut self, observer: &mut O) {
        self.tick_count.advance();
        observer.on_tick_start(self.tick_count);

        movement_phase(&mut self.world, &self.params);
        churn_phase(&mut self.world, &self.params);
        aggregation_phase(&mut self.world, &self.params);

        let emitted = alert_phase(&mut self.world, &self.params, self.tick_count);
        for id in &emitted {
            if let Some(alert) = self.world.alerts.iter().find(|a| a.id == *id) {
                observer.on_alert(alert);
            }
        }

        advisory_phase(&mut self.world, &self.params);

        observer.on_tick_end(self.tick_count, self.world.population());
    }

    // ── External interface ────────────────────────────────────────────────

    /// Acknowledge an alert.  Idempotent; unknown IDs are a benign no-op.
    pub fn acknowledge_alert(&mut self, id: AlertId) {
        self.world.acknowledge(id);
    }

    /// Read-only snapshot of the full state for the presentation layer.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            people: self.world.agents.clone(),
            zones: self.world.zones.clone(),
            gates: self.world.gates.clone(),
            alerts: self
                .world
                .active_alerts(self.params.active_alert_cap)
                .into_iter()
                .cloned()
                .collect(),
            redirections: self.world.suggestions.clone(),
            is_running: self.running,
            total_people: self.world.population(),
            tick_count: self.tick_count,
        }
    }

    /// Direct read access for tests and embedding callers that do not need
    /// an owned copy.
    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn params(&self) -> &SimParams {
        &self.params
    }
}
