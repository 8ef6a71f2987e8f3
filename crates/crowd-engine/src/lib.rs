//! `crowd-engine` — the discrete-tick crowd simulation pipeline.
//!
//! # Five-phase tick
//!
//! ```text
//! for each tick:
//!   ① Movement    — advance every agent one step (or transition its state)
//!                   against the same pre-tick position snapshot.
//!   ② Churn       — remove agents that exited; spawn inflow at the gates
//!                   while the population is below the ceiling.
//!   ③ Aggregation — recompute zone occupancy/density/flow/risk and gate
//!                   load from scratch.
//!   ④ Alerts      — emit deduplicated threshold alerts plus the stochastic
//!                   panic channel.
//!   ⑤ Advisory    — replace the redirection suggestion set with fresh
//!                   advice for every overloaded gate.
//! ```
//!
//! Each phase consumes the previous phase's output, so the order is fixed.
//! One tick is a synchronous pipeline with no suspension points; the
//! external driver is responsible for serializing ticks.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Movement decision phase runs on Rayon's thread pool.    |
//! | `serde`    | `SimSnapshot` and all state types become serializable.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use crowd_engine::{SimBuilder, NoopObserver};
//!
//! let mut sim = SimBuilder::new()
//!     .zones(zones)
//!     .gates(gates)
//!     .build()?;
//! sim.start();
//! while sim.is_running() {
//!     sim.tick();
//!     let snapshot = sim.snapshot();
//!     // hand snapshot to the renderer …
//! }
//! ```

pub mod advisor;
pub mod aggregate;
pub mod alerts;
pub mod builder;
pub mod churn;
pub mod error;
pub mod movement;
pub mod observer;
pub mod simulation;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{EngineError, EngineResult};
pub use observer::{NoopObserver, SimObserver};
pub use simulation::CrowdSim;
pub use snapshot::SimSnapshot;
