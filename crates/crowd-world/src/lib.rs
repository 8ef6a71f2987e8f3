//! `crowd-world` — the simulation data model and the `World` entity registry.
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`agent`]    | `Agent`, `AgentState`, `Velocity`                    |
//! | [`zone`]     | `Zone`, `ZoneConfig`, `RiskLevel`, `FlowVector`      |
//! | [`gate`]     | `Gate`, `GateConfig`, `GateStatus`                   |
//! | [`alert`]    | `Alert`, `AlertKind`, `Severity`, `AlertSubject`     |
//! | [`redirect`] | `RedirectionSuggestion`                              |
//! | [`world`]    | `World` — single owner of all mutable sim state      |
//!
//! Ownership model: the `World` exclusively owns every agent, zone, gate,
//! alert and suggestion.  The engine's pipeline stages borrow it for the
//! duration of their pass and retain nothing across ticks.

pub mod agent;
pub mod alert;
pub mod gate;
pub mod redirect;
pub mod world;
pub mod zone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, AgentState, Velocity};
pub use alert::{Alert, AlertKind, AlertSubject, Severity};
pub use gate::{Gate, GateConfig, GateStatus};
pub use redirect::RedirectionSuggestion;
pub use world::World;
pub use zone::{FlowVector, RiskLevel, Zone, ZoneConfig};
