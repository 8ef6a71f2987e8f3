//! stadium — crowd-engine demo for a cricket-stadium venue.
//!
//! Drives the engine over the Chinnaswamy-style venue the system was
//! calibrated against: 6 gates and 6 zones in a ~400 m box around
//! (12.9716, 77.5946).  Runs a fixed number of ticks, prints alert and
//! redirection activity as it happens, and dumps the final snapshot as JSON
//! for a map frontend to render.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crowd_core::{BoundingBox, Point, SimParams, Tick};
use crowd_engine::{CrowdSim, SimBuilder, SimObserver};
use crowd_world::{Alert, GateConfig, GateStatus, ZoneConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const TOTAL_TICKS:       u64 = 600;  // ~10 min at the 1 tick/s animation rate
const PROGRESS_INTERVAL: u64 = 60;

// ── Venue fixture ─────────────────────────────────────────────────────────────

fn venue_gates() -> Vec<GateConfig> {
    let gate = |name: &str, lat, lng, capacity, status| GateConfig {
        name: name.to_string(),
        position: Point::new(lat, lng),
        capacity,
        status,
    };
    vec![
        gate("Gate 1 (Main Public)",    12.9720, 77.5940, 180 * 60, GateStatus::Open),
        gate("Gate 2 (Stand A)",        12.9722, 77.5946, 8_000,    GateStatus::Open),
        gate("Gate 3 (Stand B)",        12.9716, 77.5952, 10_000,   GateStatus::Open),
        gate("Gate 4 (Stand C)",        12.9710, 77.5946, 7_000,    GateStatus::Open),
        gate("Gate 5 (Stand D)",        12.9716, 77.5940, 5_000,    GateStatus::Open),
        gate("Gate 6 (VIP/Restricted)", 12.9718, 77.5944, 2_000,    GateStatus::Restricted),
    ]
}

fn venue_zones() -> Vec<ZoneConfig> {
    let zone = |name: &str, min: (f64, f64), max: (f64, f64), capacity| ZoneConfig {
        name: name.to_string(),
        bounds: BoundingBox::new(Point::new(min.0, min.1), Point::new(max.0, max.1)),
        capacity,
    };
    vec![
        zone("Upper Concourse A",   (12.9718, 77.5938), (12.9722, 77.5942), 5_000),
        zone("Lower Concourse B",   (12.9720, 77.5944), (12.9724, 77.5948), 8_000),
        zone("Food Court 1",        (12.9714, 77.5950), (12.9718, 77.5954), 1_500),
        zone("Merchandise Store",   (12.9708, 77.5944), (12.9712, 77.5948), 300),
        zone("Main Concourse Area", (12.9714, 77.5938), (12.9718, 77.5942), 7_000),
        zone("Central Arena",       (12.9714, 77.5944), (12.9718, 77.5948), 5_000),
    ]
}

// ── Progress observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct ProgressObserver {
    alerts_seen: usize,
}

impl SimObserver for ProgressObserver {
    fn on_alert(&mut self, alert: &Alert) {
        self.alerts_seen += 1;
        println!("  [{}] {:?}/{:?}: {}", alert.created, alert.kind, alert.severity, alert.message);
    }

    fn on_tick_end(&mut self, tick: Tick, population: usize) {
        if tick.0 % PROGRESS_INTERVAL == 0 {
            println!("{tick}: {population} people in venue");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("=== stadium — crowd-engine demo ===");
    println!("Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Build the simulation from the venue fixture.
    let mut sim: CrowdSim = SimBuilder::new()
        .zones(venue_zones())
        .gates(venue_gates())
        .params(SimParams { seed: SEED, ..SimParams::default() })
        .build()?;
    println!(
        "Venue: {} zones, {} gates, {} people seeded",
        sim.world().zones.len(),
        sim.world().gates.len(),
        sim.world().population(),
    );
    println!();

    // 2. Run.
    let mut obs = ProgressObserver::default();
    sim.start();
    let t0 = Instant::now();
    for _ in 0..TOTAL_TICKS {
        sim.tick_observed(&mut obs);
    }
    sim.stop();
    let elapsed = t0.elapsed();

    // 3. Summary.
    let snapshot = sim.snapshot();
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  population     : {}", snapshot.total_people);
    println!("  alerts emitted : {}", obs.alerts_seen);
    println!("  active alerts  : {}", snapshot.alerts.len());
    println!("  redirections   : {}", snapshot.redirections.len());
    println!();

    // 4. Zone risk table.
    println!("{:<22} {:>7} {:>9} {:>10}", "Zone", "Count", "Density", "Risk");
    println!("{}", "-".repeat(52));
    for zone in &snapshot.zones {
        println!(
            "{:<22} {:>7} {:>8.0}% {:>10?}",
            zone.name,
            zone.current_count,
            zone.density * 100.0,
            zone.risk,
        );
    }
    println!();

    // 5. Gate load table, with any active advice.
    println!("{:<24} {:>7} {:>9}", "Gate", "Load", "Ratio");
    println!("{}", "-".repeat(42));
    for gate in &snapshot.gates {
        println!(
            "{:<24} {:>7} {:>8.0}%",
            gate.name,
            gate.current_load,
            gate.load_ratio() * 100.0,
        );
    }
    for s in &snapshot.redirections {
        println!("  redirect {} -> {} ({}, ~{} min, {}% confidence)",
            s.from_gate, s.to_gate, s.path, s.estimated_time, s.confidence);
    }
    println!();

    // 6. Dump the final snapshot for the map frontend.
    std::fs::create_dir_all("output/stadium")?;
    let path = Path::new("output/stadium/snapshot.json");
    std::fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    println!("Snapshot written to {}", path.display());

    Ok(())
}
