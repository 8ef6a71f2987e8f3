//! `crowd-core` — foundational types for the crowd simulation engine.
//!
//! This crate is a dependency of every other `crowd-*` crate.  It
//! intentionally has no `crowd-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `AgentId`, `ZoneId`, `GateId`, `AlertId`, …       |
//! | [`geo`]     | `Point`, `BoundingBox`, Euclidean distance        |
//! | [`time`]    | `Tick`                                            |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)         |
//! | [`params`]  | `SimParams` — every tuned constant in one place   |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{BoundingBox, Point};
pub use ids::{AgentId, AlertId, GateId, SuggestionId, ZoneId};
pub use params::SimParams;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
