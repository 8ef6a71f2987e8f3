//! Alert synthesizer: deduplicated threshold alerts plus the stochastic
//! panic channel.
//!
//! Dedup rule: a threshold breach produces a new alert only when no
//! unacknowledged alert of the same `(subject, kind)` pair exists.
//! Acknowledging an alert re-arms its slot, so a persisting breach raises a
//! fresh alert on the next tick after acknowledgment.  Panic incidents
//! bypass dedup entirely — they are a distinct incident channel, not a
//! threshold monitor.

use crowd_core::{AlertId, SimParams, Tick};
use crowd_world::{AlertKind, AlertSubject, RiskLevel, Severity, World};

/// Scan aggregated state and emit new alerts.  Returns the IDs emitted this
/// tick so the clock can feed observer hooks.
pub fn alert_phase(world: &mut World, params: &SimParams, now: Tick) -> Vec<AlertId> {
    let mut emitted = Vec::new();

    // ── Congestion: zones at Critical risk ────────────────────────────────
    // Collect first: the dedup query borrows the alert store immutably.
    let congested: Vec<_> = world
        .zones
        .iter()
        .filter(|z| {
            z.risk == RiskLevel::Critical
                && !world.has_unacknowledged(AlertKind::Congestion, AlertSubject::Zone(z.id))
        })
        .map(|z| {
            (
                z.id,
                z.bounds.centroid(),
                format!(
                    "Critical congestion in {} - {}% capacity",
                    z.name,
                    (z.density * 100.0).round()
                ),
            )
        })
        .collect();
    for (zone_id, centroid, message) in congested {
        tracing::info!(%zone_id, "congestion alert");
        emitted.push(world.emit_alert(
            AlertKind::Congestion,
            Severity::Critical,
            AlertSubject::Zone(zone_id),
            message,
            centroid,
            now,
        ));
    }

    // ── GateFull: gates above the load-ratio threshold ────────────────────
    let full: Vec<_> = world
        .gates
        .iter()
        .filter(|g| {
            g.load_ratio() > params.gate_full_ratio
                && !world.has_unacknowledged(AlertKind::GateFull, AlertSubject::Gate(g.id))
        })
        .map(|g| {
            let ratio = g.load_ratio();
            let severity = if ratio > params.gate_critical_ratio {
                Severity::Critical
            } else {
                Severity::High
            };
            (
                g.id,
                g.position,
                severity,
                format!("{} at {}% capacity", g.name, (ratio * 100.0).round()),
            )
        })
        .collect();
    for (gate_id, position, severity, message) in full {
        tracing::info!(%gate_id, ?severity, "gate-full alert");
        emitted.push(world.emit_alert(
            AlertKind::GateFull,
            severity,
            AlertSubject::Gate(gate_id),
            message,
            position,
            now,
        ));
    }

    // ── Panic: rare stochastic incident in a random zone, never deduped ───
    if !world.zones.is_empty() && world.rng.gen_bool(params.panic_prob) {
        let i = world.rng.gen_range(0..world.zones.len());
        let zone = &world.zones[i];
        let (zone_id, centroid) = (zone.id, zone.bounds.centroid());
        let message = format!("Panic incident reported in {}", zone.name);
        tracing::info!(%zone_id, "panic incident");
        emitted.push(world.emit_alert(
            AlertKind::Panic,
            Severity::High,
            AlertSubject::Zone(zone_id),
            message,
            centroid,
            now,
        ));
    }

    emitted
}
