//! Unit tests for the data model and the `World` registry.

use crowd_core::{AlertId, BoundingBox, GateId, Point, Tick};

use crate::{
    AgentState, AlertKind, AlertSubject, GateConfig, GateStatus, RiskLevel, Severity, World,
    ZoneConfig,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_zone(name: &str) -> ZoneConfig {
    ZoneConfig {
        name: name.to_string(),
        bounds: BoundingBox::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        capacity: 100,
    }
}

fn test_gate(name: &str, status: GateStatus) -> GateConfig {
    GateConfig {
        name: name.to_string(),
        position: Point::new(0.5, 0.5),
        capacity: 1_000,
        status,
    }
}

fn small_world() -> World {
    World::new(
        vec![test_zone("Concourse")],
        vec![
            test_gate("Gate 1", GateStatus::Open),
            test_gate("Gate 2", GateStatus::Restricted),
        ],
        42,
    )
}

// ── Risk classification ───────────────────────────────────────────────────────

#[cfg(test)]
mod risk {
    use super::*;

    #[test]
    fn thresholds_are_half_open_on_the_lower_bound() {
        assert_eq!(RiskLevel::from_density(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_density(0.29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_density(0.3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_density(0.59), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_density(0.6), RiskLevel::High);
        assert_eq!(RiskLevel::from_density(0.84), RiskLevel::High);
        assert_eq!(RiskLevel::from_density(0.85), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_density(2.0), RiskLevel::Critical);
    }

    #[test]
    fn ordering_is_monotone() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }
}

// ── Gate load ratio ───────────────────────────────────────────────────────────

#[cfg(test)]
mod gates {
    use super::*;

    #[test]
    fn zero_capacity_gate_reports_zero_ratio() {
        let mut w = World::new(vec![], vec![test_gate("G", GateStatus::Open)], 1);
        w.gates[0].capacity = 0;
        w.gates[0].current_load = 50;
        assert_eq!(w.gates[0].load_ratio(), 0.0);
    }

    #[test]
    fn lookup_resolves_only_live_gates() {
        let w = small_world();
        assert!(w.gate(GateId(0)).is_some());
        assert!(w.gate(GateId(1)).is_some());
        assert!(w.gate(GateId(2)).is_none());
        assert!(w.gate(GateId::INVALID).is_none());
    }
}

// ── Agent lifecycle ───────────────────────────────────────────────────────────

#[cfg(test)]
mod agents {
    use super::*;

    #[test]
    fn spawn_assigns_monotonic_ids_and_zero_velocity() {
        let mut w = small_world();
        let a = w.spawn(Point::new(0.1, 0.1), GateId(0), AgentState::Moving);
        let b = w.spawn(Point::new(0.2, 0.2), GateId(1), AgentState::Waiting);
        assert!(a < b);
        assert_eq!(w.population(), 2);
        assert_eq!(w.agents[0].velocity.speed(), 0.0);
        assert_eq!(w.agent_rngs.len(), w.agents.len());
    }

    #[test]
    fn remove_exited_filters_exactly_the_exiting_agents() {
        let mut w = small_world();
        let a = w.spawn(Point::new(0.1, 0.1), GateId(0), AgentState::Moving);
        let b = w.spawn(Point::new(0.2, 0.2), GateId(0), AgentState::Exiting);
        let c = w.spawn(Point::new(0.3, 0.3), GateId(0), AgentState::Waiting);
        let removed = w.remove_exited();
        assert_eq!(removed, 1);
        let ids: Vec<_> = w.agents.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(!ids.contains(&b));
        assert_eq!(w.agent_rngs.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut w = small_world();
        let first = w.spawn(Point::new(0.1, 0.1), GateId(0), AgentState::Exiting);
        w.remove_exited();
        let second = w.spawn(Point::new(0.1, 0.1), GateId(0), AgentState::Moving);
        assert!(second > first);
    }
}

// ── Alert store ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod alerts {
    use super::*;
    use crowd_core::ZoneId;

    fn emit(w: &mut World, kind: AlertKind, subject: AlertSubject) -> AlertId {
        w.emit_alert(
            kind,
            Severity::High,
            subject,
            "test".to_string(),
            Point::new(0.5, 0.5),
            Tick(1),
        )
    }

    #[test]
    fn dedup_query_sees_only_unacknowledged() {
        let mut w = small_world();
        let subject = AlertSubject::Zone(ZoneId(0));
        assert!(!w.has_unacknowledged(AlertKind::Congestion, subject));
        let id = emit(&mut w, AlertKind::Congestion, subject);
        assert!(w.has_unacknowledged(AlertKind::Congestion, subject));
        assert!(!w.has_unacknowledged(AlertKind::Panic, subject));
        w.acknowledge(id);
        assert!(!w.has_unacknowledged(AlertKind::Congestion, subject));
    }

    #[test]
    fn acknowledge_is_idempotent_and_tolerates_unknown_ids() {
        let mut w = small_world();
        let id = emit(&mut w, AlertKind::Panic, AlertSubject::Zone(ZoneId(0)));
        assert!(w.acknowledge(id));
        assert!(!w.acknowledge(id), "second acknowledge is a no-op");
        assert!(!w.acknowledge(AlertId(999)), "unknown id is a no-op");
    }

    #[test]
    fn active_view_filters_and_caps_to_most_recent() {
        let mut w = small_world();
        for _ in 0..60 {
            emit(&mut w, AlertKind::Panic, AlertSubject::Zone(ZoneId(0)));
        }
        let acked = w.alerts[59].id;
        w.acknowledge(acked);

        let active = w.active_alerts(50);
        assert_eq!(active.len(), 50);
        assert!(active.iter().all(|a| !a.acknowledged));
        // Most recent unacknowledged survive; the earliest ones are dropped.
        assert_eq!(active.last().unwrap().id, w.alerts[58].id);
        assert_eq!(active[0].id, w.alerts[9].id);
    }

    #[test]
    fn alert_store_itself_is_append_only() {
        let mut w = small_world();
        for _ in 0..60 {
            emit(&mut w, AlertKind::Panic, AlertSubject::Zone(ZoneId(0)));
        }
        let _ = w.active_alerts(50);
        assert_eq!(w.alerts.len(), 60, "reading the view prunes nothing");
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset {
    use super::*;
    use crowd_core::ZoneId;

    #[test]
    fn reset_restores_configured_baseline() {
        let mut w = small_world();
        w.spawn(Point::new(0.1, 0.1), GateId(0), AgentState::Moving);
        w.emit_alert(
            AlertKind::Congestion,
            Severity::Critical,
            AlertSubject::Zone(ZoneId(0)),
            "x".to_string(),
            Point::new(0.5, 0.5),
            Tick(3),
        );
        w.zones[0].current_count = 90;
        w.zones[0].density = 0.9;
        w.zones[0].risk = RiskLevel::Critical;
        w.gates[0].current_load = 500;

        w.reset();

        assert_eq!(w.population(), 0);
        assert!(w.alerts.is_empty());
        assert!(w.suggestions.is_empty());
        assert_eq!(w.zones[0].current_count, 0);
        assert_eq!(w.zones[0].risk, RiskLevel::Low);
        assert_eq!(w.gates[0].current_load, 0);
        assert_eq!(w.gates[1].status, GateStatus::Restricted, "status is static config");
    }

    #[test]
    fn reset_replays_identically() {
        let mut a = small_world();
        let mut b = small_world();
        for _ in 0..5 {
            let g = a.random_gate();
            a.spawn(Point::new(0.1, 0.1), g, AgentState::Moving);
        }
        a.reset();
        let ga: Vec<GateId> = (0..5).map(|_| a.random_gate()).collect();
        let gb: Vec<GateId> = (0..5).map(|_| b.random_gate()).collect();
        assert_eq!(ga, gb, "reset reseeds the master RNG");
    }
}
